//! App Root Component
//!
//! Single page: header, optional form, category sidebar and the feed.

use leptos::*;

use crate::components::{CategoryFilter, FactForm, FactList, Header, Loader, Toast};
use crate::state::provide_fact_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide shared state to all components
    let state = provide_fact_state();

    // Initial feed, most interesting first
    state.load_facts();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            <div class="container mx-auto px-4 py-8 flex-1">
                <Show when=move || state.show_form.get()>
                    <FactForm />
                </Show>

                <div class="grid grid-cols-1 md:grid-cols-[14rem_1fr] gap-8">
                    <CategoryFilter />

                    <main>
                        {move || if state.is_loading() {
                            view! { <Loader /> }.into_view()
                        } else {
                            view! { <FactList /> }.into_view()
                        }}
                    </main>
                </div>
            </div>

            // Toast notifications
            <Toast />
        </div>
    }
}
