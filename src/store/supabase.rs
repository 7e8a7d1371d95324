//! Supabase REST Client
//!
//! HTTP client for the `facts` table exposed through Supabase's PostgREST API.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{FactStore, StoreError, StoreResult};
use crate::facts::{Fact, FactQuery, NewFact};

/// Supabase REST client
pub struct SupabaseClient {
    client: Client,
    config: SupabaseConfig,
}

/// Configuration for the Supabase client
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g., "https://xyzcompany.supabase.co")
    pub project_url: String,
    /// Anonymous API key
    pub api_key: String,
    /// Table holding the facts
    pub table: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            project_url: String::new(),
            api_key: String::new(),
            table: "facts".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl SupabaseClient {
    /// Create a new client with the given configuration
    pub fn new(config: SupabaseConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    /// REST endpoint of the facts table
    fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.project_url.trim_end_matches('/'),
            self.config.table
        )
    }

    /// Attach the project key the way Supabase expects it
    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// Turn a non-success response into an `ApiError`
    async fn check(response: Response) -> StoreResult<Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(StoreError::ApiError {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[async_trait]
impl FactStore for SupabaseClient {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn fetch_top_facts(&self, query: &FactQuery) -> StoreResult<Vec<Fact>> {
        tracing::debug!(
            table = %self.config.table,
            limit = query.limit,
            order_by = %query.order_by,
            category = ?query.category,
            "Fetching facts"
        );

        let response = self
            .authorized(self.client.get(self.table_url()))
            .query(&query.to_params())
            .send()
            .await
            .map_err(StoreError::from_transport)?;

        let body = Self::check(response)
            .await?
            .text()
            .await
            .map_err(StoreError::from_transport)?;
        let facts: Vec<Fact> = serde_json::from_str(&body)?;

        Ok(facts)
    }

    async fn insert_fact(&self, fact: &NewFact) -> StoreResult<Fact> {
        tracing::debug!(table = %self.config.table, category = %fact.category(), "Inserting fact");

        let response = self
            .authorized(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(&[fact.to_row()])
            .send()
            .await
            .map_err(StoreError::from_transport)?;

        let body = Self::check(response)
            .await?
            .text()
            .await
            .map_err(StoreError::from_transport)?;
        let rows: Vec<Fact> = serde_json::from_str(&body)?;

        rows.into_iter().next().ok_or(StoreError::EmptyInsert)
    }
}
