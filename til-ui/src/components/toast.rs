//! Toast Component
//!
//! Renders the feed's current notice until it expires.

use leptos::*;
use til::{Notice, NoticeKind};

use crate::state::use_fact_state;

/// Bottom-right toast for the pending notice, if any
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_fact_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50">
            {move || state.notice().map(|notice| view! { <NoticeToast notice=notice /> })}
        </div>
    }
}

#[component]
fn NoticeToast(notice: Notice) -> impl IntoView {
    let (icon, bg_class) = match notice.kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div
            role="status"
            class=format!("flex items-center gap-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in", bg_class)
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{notice.message}</span>
        </div>
    }
}
