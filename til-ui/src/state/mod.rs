//! State Management
//!
//! Application state shared through Leptos context.

pub mod global;

pub use global::{provide_fact_state, use_fact_state, FactState};
