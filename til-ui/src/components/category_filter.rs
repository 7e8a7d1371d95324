//! Category Filter Component
//!
//! Sidebar with "All" followed by one colored button per category.

use leptos::*;
use til::{Category, CategorySelection};

use crate::state::use_fact_state;

/// Fill for the "All" button; no category owns it
const ALL_BACKGROUND: &str = "linear-gradient(135deg, #3b82f6, #ef4444, #16a34a, #eab308)";

/// Category sidebar
#[component]
pub fn CategoryFilter() -> impl IntoView {
    view! {
        <aside class="space-y-2">
            <FilterButton selection=CategorySelection::All background=ALL_BACKGROUND />
            {Category::all()
                .iter()
                .map(|&category| view! {
                    <FilterButton selection=category.into() background=category.color() />
                })
                .collect_view()}
        </aside>
    }
}

#[component]
fn FilterButton(selection: CategorySelection, background: &'static str) -> impl IntoView {
    let state = use_fact_state();
    let active = move || state.selection() == selection;

    view! {
        <button
            on:click=move |_| state.select(selection)
            style=format!("background: {}", background)
            class=move || {
                let base = "w-full px-4 py-2 rounded-lg text-sm font-semibold uppercase text-white transition-opacity";
                if active() {
                    format!("{} ring-2 ring-white", base)
                } else {
                    format!("{} opacity-80 hover:opacity-100", base)
                }
            }
        >
            {selection.label()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_button_is_not_a_category_color() {
        assert!(Category::all().iter().all(|c| c.color() != ALL_BACKGROUND));
    }
}
