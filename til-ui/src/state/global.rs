//! Global Application State
//!
//! Reactive state management using Leptos signals. The feed and the form are
//! the plain `til` state types wrapped in signals; every mutation goes
//! through their own operations.

use leptos::*;
use til::{CategorySelection, Fact, FactQuery, Feed, NewFactForm, Notice, NoticeKind, SubmitOutcome};

use crate::api;

/// State shared by every component
#[derive(Clone, Copy)]
pub struct FactState {
    /// Facts, loading flag, category selection and the notice shown as a toast
    pub feed: RwSignal<Feed>,
    /// "Share a fact" draft
    pub form: RwSignal<NewFactForm>,
    /// Whether the form is open
    pub show_form: RwSignal<bool>,
}

/// Provide fact state to the component tree
pub fn provide_fact_state() -> FactState {
    let state = FactState {
        feed: create_rw_signal(Feed::new()),
        form: create_rw_signal(NewFactForm::new()),
        show_form: create_rw_signal(false),
    };

    provide_context(state);
    state
}

/// Fetch the shared state from context
pub fn use_fact_state() -> FactState {
    use_context::<FactState>().expect("FactState not found")
}

impl FactState {
    pub fn is_loading(&self) -> bool {
        self.feed.with(Feed::is_loading)
    }

    pub fn facts(&self) -> Vec<Fact> {
        self.feed.with(|feed| feed.facts().as_slice().to_vec())
    }

    pub fn selection(&self) -> CategorySelection {
        self.feed.with(Feed::selection)
    }

    pub fn notice(&self) -> Option<Notice> {
        self.feed.with(|feed| feed.notice().cloned())
    }

    /// Load the feed for the current selection.
    ///
    /// A later call supersedes this one; its reply is then dropped.
    pub fn load_facts(&self) {
        let state = *self;
        let query = self.feed.with_untracked(|feed| feed.query(&FactQuery::default()));

        // Loading must be visible before the request goes out
        let Some(ticket) = state.feed.try_update(Feed::begin_load) else {
            return;
        };

        spawn_local(async move {
            let result = api::fetch_facts(&query).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to fetch facts: {}", e).into());
            }
            state.feed.update(|feed| {
                feed.complete_load(ticket, result);
            });
            state.expire_notice();
        });
    }

    /// Switch category, reloading when it changed
    pub fn select(&self, selection: CategorySelection) {
        if self.feed.try_update(|feed| feed.select(selection)) == Some(true) {
            self.load_facts();
        }
    }

    /// "Share a fact" / "Close"
    pub fn toggle_form(&self) {
        self.show_form.update(|show| *show = !*show);
    }

    /// Validate the draft; on success store it behind a pending row
    pub fn submit(&self) {
        let state = *self;
        let fact = match self.form.try_update(|form| form.submit()) {
            Some(SubmitOutcome::Accepted(fact)) => fact,
            // Errors are shown inline from the form state
            _ => return,
        };
        self.show_form.set(false);

        let Some(pending) = self.feed.try_update(|feed| feed.begin_submit(&fact)) else {
            return;
        };

        spawn_local(async move {
            let result = api::insert_fact(&fact).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Failed to store fact: {}", e).into());
            }
            state.feed.update(|feed| {
                feed.complete_submit(pending, result);
            });
            state.expire_notice();
        });
    }

    /// Clear the current notice after it has been on screen long enough.
    ///
    /// A newer notice raised in the meantime is left alone.
    fn expire_notice(&self) {
        let Some(notice) = self.feed.with_untracked(|feed| feed.notice().cloned()) else {
            return;
        };
        let millis = match notice.kind {
            NoticeKind::Success => 3000,
            NoticeKind::Error => 5000,
        };

        let feed = self.feed;
        gloo_timers::callback::Timeout::new(millis, move || {
            feed.update(|feed| {
                if feed.notice() == Some(&notice) {
                    feed.take_notice();
                }
            });
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use til::{Category, FactId, NewFact};

    #[test]
    fn test_feed_in_signal() {
        let runtime = create_runtime();
        let feed = create_rw_signal(Feed::new());

        let first = feed.try_update(Feed::begin_load).unwrap();
        let second = feed.try_update(Feed::begin_load).unwrap();
        assert!(feed.with(Feed::is_loading));

        let fact = NewFact::new("Water boils at 100C", "https://example.com", "science").unwrap();
        let rows = vec![fact.to_fact(FactId::Persisted(1))];
        let applied = feed.try_update(|f| f.complete_load::<String>(second, Ok(rows)));
        assert_eq!(applied, Some(true));
        let stale = feed.try_update(|f| f.complete_load::<String>(first, Ok(Vec::new())));
        assert_eq!(stale, Some(false));
        assert!(!feed.with(Feed::is_loading));
        assert_eq!(feed.with(|f| f.facts().len()), 1);

        let changed = feed.try_update(|f| f.select(CategorySelection::Only(Category::News)));
        assert_eq!(changed, Some(true));

        runtime.dispose();
    }
}
