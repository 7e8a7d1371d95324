//! Today I Learned
//!
//! Single-page fact feed built with Leptos (WASM).
//!
//! # Features
//!
//! - Most interesting facts first, up to 1000
//! - Category filter
//! - "Share a fact" form with inline validation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Supabase REST API directly; feed and form
//! state come from the `til` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
