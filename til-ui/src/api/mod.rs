//! Supabase access from the browser

pub mod client;

pub use client::{fetch_facts, insert_fact};
