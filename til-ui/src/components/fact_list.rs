//! Fact List Component
//!
//! The feed itself: one row per fact plus a count footer.

use leptos::*;
use til::{Fact, FactId};

use crate::state::use_fact_state;

/// All facts in the current feed
#[component]
pub fn FactList() -> impl IntoView {
    let state = use_fact_state();
    let count = move || state.feed.with(|feed| feed.facts().len());

    view! {
        <section>
            <ul class="space-y-3">
                <For
                    each=move || state.facts()
                    key=|fact| fact_key(fact)
                    children=|fact| view! { <FactItem fact=fact /> }
                />
            </ul>
            <p class="mt-6 text-center text-gray-400 text-sm">
                {move || format!("There are {} facts in the database. Add your own!", count())}
            </p>
        </section>
    }
}

/// Rows are re-rendered when a pending fact is confirmed
fn fact_key(fact: &Fact) -> String {
    match fact.id {
        FactId::Persisted(id) => id.to_string(),
        FactId::Pending(uuid) => uuid.to_string(),
    }
}

/// A single fact
#[component]
pub fn FactItem(fact: Fact) -> impl IntoView {
    let category = fact.category;
    let pending = fact.is_pending();

    view! {
        <li class=move || {
            let base = "bg-gray-800 rounded-lg p-4 flex flex-wrap items-center gap-3";
            if pending { format!("{} opacity-60", base) } else { base.to_string() }
        }>
            <p class="flex-1 text-white">
                {fact.text.clone()}
                " "
                <a
                    class="text-gray-400 hover:text-white underline"
                    href=fact.source.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "(Source)"
                </a>
            </p>
            <span
                class="px-3 py-1 rounded-full text-xs font-semibold uppercase text-white"
                style=format!("background-color: {}", category.color())
            >
                {category.name()}
            </span>
            <div class="flex space-x-2 text-sm">
                <span class="bg-gray-700 rounded px-2 py-1">{format!("👍 {}", fact.votes_interesting)}</span>
                <span class="bg-gray-700 rounded px-2 py-1">{format!("🤯 {}", fact.votes_mindblowing)}</span>
                <span class="bg-gray-700 rounded px-2 py-1">{format!("⛔️ {}", fact.votes_false)}</span>
            </div>
        </li>
    }
}
