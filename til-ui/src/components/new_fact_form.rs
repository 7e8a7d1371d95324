//! New Fact Form Component
//!
//! "Share a fact" form with a live character counter and inline errors.

use leptos::*;
use til::{Category, Field};

use crate::state::use_fact_state;

/// Form for sharing a new fact
#[component]
pub fn FactForm() -> impl IntoView {
    let state = use_fact_state();
    let form = state.form;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    let remaining = move || form.with(|f| f.remaining_chars());

    view! {
        <form
            on:submit=on_submit
            class="bg-gray-800 rounded-lg p-4 mb-8 flex flex-wrap items-start gap-4"
        >
            <div class="flex-1 min-w-[16rem]">
                <input
                    type="text"
                    placeholder="Share a fact with the world..."
                    prop:value=move || form.with(|f| f.text().to_string())
                    on:input=move |ev| form.update(|f| f.set_text(event_target_value(&ev)))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <FieldError field=Field::Text />
            </div>

            <span class=move || {
                if remaining() < 0 { "py-3 text-red-400 font-semibold" } else { "py-3 text-gray-400" }
            }>
                {remaining}
            </span>

            <div>
                <input
                    type="text"
                    placeholder="Trustworthy source..."
                    prop:value=move || form.with(|f| f.source().to_string())
                    on:input=move |ev| form.update(|f| f.set_source(event_target_value(&ev)))
                    class="bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <FieldError field=Field::Source />
            </div>

            <div>
                <select
                    prop:value=move || form.with(|f| f.category().to_string())
                    on:change=move |ev| form.update(|f| f.set_category(event_target_value(&ev)))
                    class="bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    // Selected after a successful post clears the category
                    <option value="">"Choose category:"</option>
                    {Category::all()
                        .iter()
                        .map(|category| view! {
                            <option value=category.name()>{category.name().to_uppercase()}</option>
                        })
                        .collect_view()}
                </select>
                <FieldError field=Field::Category />
            </div>

            <button
                type="submit"
                class="bg-primary-600 hover:bg-primary-700 rounded-lg px-6 py-3 font-semibold transition-colors"
            >
                "Post"
            </button>
        </form>
    }
}

/// Inline message for the first error on `field`
#[component]
fn FieldError(field: Field) -> impl IntoView {
    let state = use_fact_state();

    move || {
        state
            .form
            .with(|f| f.errors().for_field(field).map(|e| e.to_string()))
            .map(|message| view! { <p class="mt-1 text-sm text-red-400">{message}</p> })
    }
}
