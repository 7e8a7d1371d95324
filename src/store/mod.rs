//! Remote Fact Store
//!
//! Access to the hosted `facts` table.
//!
//! - **supabase**: PostgREST client over HTTPS
//! - **memory**: in-process store seeded with sample facts (demo mode, tests)
//! - **error**: error types

mod error;
mod memory;
mod supabase;

pub use error::{StoreError, StoreResult};
pub use memory::{sample_facts, MemoryFactStore};
pub use supabase::{SupabaseClient, SupabaseConfig};

use async_trait::async_trait;

use crate::facts::{Fact, FactQuery, NewFact};

/// A backend holding the `facts` table
#[async_trait]
pub trait FactStore: Send + Sync {
    /// Human-readable backend name for logs
    fn name(&self) -> &str;

    /// Fetch at most `query.limit` facts in the requested order.
    ///
    /// A single attempt; callers decide what a failure means.
    async fn fetch_top_facts(&self, query: &FactQuery) -> StoreResult<Vec<Fact>>;

    /// Store `fact`, returning the row with its assigned id
    async fn insert_fact(&self, fact: &NewFact) -> StoreResult<Fact>;
}
