//! Header Component
//!
//! Logo, title and the button that opens the "Share a fact" form.

use leptos::*;
use til::view::APP_TITLE;

use crate::state::use_fact_state;

/// Page header
#[component]
pub fn Header() -> impl IntoView {
    let state = use_fact_state();

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"💡"</span>
                        <h1 class="text-xl font-bold text-white">{APP_TITLE}</h1>
                    </div>

                    <button
                        on:click=move |_| state.toggle_form()
                        class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-semibold transition-colors"
                    >
                        {move || if state.show_form.get() { "Close" } else { "Share a fact" }}
                    </button>
                </div>
            </div>
        </header>
    }
}
