//! Supabase REST Client
//!
//! Functions for reading and writing the `facts` table from the browser.

use gloo_net::http::{Request, RequestBuilder, Response};
use til::{Fact, FactQuery, NewFact};

/// Project URL baked in at build time
const BUILD_URL: Option<&str> = option_env!("TIL_SUPABASE_URL");
/// Project API key baked in at build time
const BUILD_KEY: Option<&str> = option_env!("TIL_SUPABASE_KEY");

const URL_STORAGE_KEY: &str = "til_supabase_url";
const KEY_STORAGE_KEY: &str = "til_supabase_key";

/// Where the facts table lives and how to authenticate
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseSettings {
    pub url: String,
    pub key: String,
}

/// Build-time settings, overridable through local storage
pub fn settings() -> SupabaseSettings {
    let url = stored(URL_STORAGE_KEY).unwrap_or_else(|| BUILD_URL.unwrap_or_default().to_string());
    let key = stored(KEY_STORAGE_KEY).unwrap_or_else(|| BUILD_KEY.unwrap_or_default().to_string());
    SupabaseSettings {
        // Normalize: remove trailing slash
        url: url.trim_end_matches('/').to_string(),
        key,
    }
}

fn stored(name: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(name).ok()?.filter(|v| !v.is_empty())
}

/// Table endpoint, with the query string when given
fn facts_url(base: &str, query: Option<&FactQuery>) -> String {
    match query {
        Some(q) => format!("{}/rest/v1/facts?{}", base, q.to_query_string()),
        None => format!("{}/rest/v1/facts", base),
    }
}

fn authorized(request: RequestBuilder, settings: &SupabaseSettings) -> RequestBuilder {
    request
        .header("apikey", &settings.key)
        .header("Authorization", &format!("Bearer {}", settings.key))
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    format!("API error {}: {}", status, text)
}

/// Fetch the feed for `query`
pub async fn fetch_facts(query: &FactQuery) -> Result<Vec<Fact>, String> {
    let settings = settings();
    if settings.url.is_empty() || settings.key.is_empty() {
        return Err("Supabase URL and key are not configured".to_string());
    }

    let response = authorized(Request::get(&facts_url(&settings.url, Some(query))), &settings)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Store a new fact, returning the row with its assigned id
pub async fn insert_fact(fact: &NewFact) -> Result<Fact, String> {
    let settings = settings();

    let response = authorized(Request::post(&facts_url(&settings.url, None)), &settings)
        .header("Prefer", "return=representation")
        .json(&[fact.to_row()])
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let rows: Vec<Fact> = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    rows.into_iter()
        .next()
        .ok_or_else(|| "Insert returned no rows".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use til::{Category, CategorySelection};

    #[test]
    fn test_facts_url() {
        let base = "https://xyz.supabase.co";
        assert_eq!(facts_url(base, None), "https://xyz.supabase.co/rest/v1/facts");
        assert_eq!(
            facts_url(base, Some(&FactQuery::default())),
            "https://xyz.supabase.co/rest/v1/facts?select=*&order=votesInteresting.desc&limit=1000"
        );

        let science = FactQuery::default().selection(CategorySelection::Only(Category::Science));
        assert!(facts_url(base, Some(&science)).ends_with("&category=eq.science"));
    }
}
