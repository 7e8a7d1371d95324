//! Loading Component

use leptos::*;
use til::view::loader;

/// Shown while the feed is fetched
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3 text-gray-400">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-lg">{loader()}</p>
        </div>
    }
}
