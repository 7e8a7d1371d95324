//! UI Components
//!
//! Leptos components for the fact feed.

pub mod category_filter;
pub mod fact_list;
pub mod header;
pub mod loading;
pub mod new_fact_form;
pub mod toast;

pub use category_filter::CategoryFilter;
pub use fact_list::FactList;
pub use header::Header;
pub use loading::Loader;
pub use new_fact_form::FactForm;
pub use toast::Toast;
