//! Feed query description
//!
//! Shared by every HTTP client so they all ask the `facts` table the same thing.

use super::category::{Category, CategorySelection};

/// Upper bound on rows fetched in one load
pub const MAX_FACTS: usize = 1000;

/// Column the feed is ordered by unless configured otherwise
pub const DEFAULT_ORDER_BY: &str = "votesInteresting";

/// Which facts to load and in what order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactQuery {
    pub limit: usize,
    pub order_by: String,
    pub ascending: bool,
    pub category: Option<Category>,
}

impl Default for FactQuery {
    fn default() -> Self {
        Self::top(MAX_FACTS)
    }
}

impl FactQuery {
    /// Most interesting facts first, at most `limit` of them
    pub fn top(limit: usize) -> Self {
        Self {
            limit: limit.clamp(1, MAX_FACTS),
            order_by: DEFAULT_ORDER_BY.to_string(),
            ascending: false,
            category: None,
        }
    }

    /// Builder method: set ordering
    pub fn order_by(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order_by = column.into();
        self.ascending = ascending;
        self
    }

    /// Builder method: restrict to a category selection
    pub fn selection(mut self, selection: CategorySelection) -> Self {
        self.category = selection.category();
        self
    }

    /// PostgREST query parameters, in request order
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let direction = if self.ascending { "asc" } else { "desc" };
        let mut params = vec![
            ("select", "*".to_string()),
            ("order", format!("{}.{}", self.order_by, direction)),
            ("limit", self.limit.to_string()),
        ];
        if let Some(category) = self.category {
            params.push(("category", format!("eq.{}", category.name())));
        }
        params
    }

    /// `to_params` joined into a query string (no leading `?`)
    pub fn to_query_string(&self) -> String {
        self.to_params()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}
