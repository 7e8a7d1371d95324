//! # Today I Learned
//!
//! Browse, filter and share short facts. Facts live in a hosted Supabase
//! table; this crate holds the client-side model and the clients that talk
//! to it.
//!
//! ## Modules
//!
//! - [`facts`]: fact records, category registry, validation, feed queries
//! - [`feed`]: feed state (facts, loading flag, notices) and the new-fact form
//! - [`view`]: plain-text rendering of the feed
//! - [`store`]: Supabase REST client and in-memory store (`native` feature)
//! - [`app`]: application root driving load and submit (`native` feature)
//! - [`config`]: TOML + environment configuration (`native` feature)
//!
//! The browser front end (`til-ui`) builds this crate with
//! `default-features = false` and reuses `facts`, `feed` and `view`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use til::{FactApp, FactQuery, SupabaseClient, SupabaseConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SupabaseClient::new(SupabaseConfig {
//!         project_url: "https://xyzcompany.supabase.co".to_string(),
//!         api_key: "anon-key".to_string(),
//!         ..SupabaseConfig::default()
//!     })?;
//!
//!     let mut app = FactApp::new(store, FactQuery::default());
//!     app.load().await;
//!
//!     println!("{}", til::view::page(app.feed(), false));
//!
//!     app.form_mut().set_text("Water boils at 100C");
//!     app.form_mut().set_source("https://example.com");
//!     app.form_mut().set_category("science");
//!     app.submit().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod facts;
pub mod feed;
pub mod view;

#[cfg(feature = "native")]
pub mod app;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod store;

// Re-export top-level types for convenience
pub use facts::{
    is_valid_http_url, Category, CategorySelection, Fact, FactId, FactQuery, Field, NewFact,
    ValidationError, ValidationErrors,
};

pub use feed::{
    FactCollection, Feed, FormState, LoadTicket, NewFactForm, Notice, NoticeKind, SubmitOutcome,
};

#[cfg(feature = "native")]
pub use app::{FactApp, SubmitError};

#[cfg(feature = "native")]
pub use store::{FactStore, MemoryFactStore, StoreError, StoreResult, SupabaseClient, SupabaseConfig};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, FeedConfig, LoggingConfig};
