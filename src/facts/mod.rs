//! Fact domain model
//!
//! - **category**: the static category registry and filter selection
//! - **fact**: stored facts and validated submissions
//! - **validate**: URL and body rules, per-field errors
//! - **query**: what to ask the remote table for

pub mod category;
pub mod fact;
pub mod query;
pub mod validate;

pub use category::{Category, CategorySelection, UnknownCategory};
pub use fact::{current_year, Fact, FactId, NewFact, NewFactRow};
pub use query::{FactQuery, DEFAULT_ORDER_BY, MAX_FACTS};
pub use validate::{is_valid_http_url, Field, ValidationError, ValidationErrors, MAX_TEXT_CHARS};
