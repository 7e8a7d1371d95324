//! Feed State
//!
//! Everything the fact feed renders from, owned by the application root and
//! mutated only through the operations below:
//!
//! - **collection**: ordered facts on screen
//! - **form**: the "Share a fact" draft
//!
//! # Load and submit cycles
//!
//! ```text
//! Load:    begin_load (loading = true, ticket) → fetch → complete_load(ticket)
//!          (loading = false once the latest ticket completes; older tickets are dropped)
//! Submit:  begin_submit (pending row on top) → insert → complete_submit
//!                                                       ├─ Ok: pending row becomes the stored row
//!                                                       └─ Err: pending row removed
//! ```

pub mod collection;
pub mod form;

pub use collection::FactCollection;
pub use form::{FormState, NewFactForm, SubmitOutcome, DEFAULT_CATEGORY};

use std::fmt::Display;

use crate::facts::{CategorySelection, Fact, FactId, FactQuery, NewFact};

pub const LOAD_FAILED: &str = "There was a problem getting data";
pub const SAVE_FAILED: &str = "There was a problem saving your fact";
pub const SAVED: &str = "Thanks for sharing!";

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message the front end should surface once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// Identifies one fetch started by [`Feed::begin_load`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

/// Rendering state of the fact feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    facts: FactCollection,
    loading: bool,
    selection: CategorySelection,
    notice: Option<Notice>,
    /// Ticket of the most recently started fetch
    latest_load: u64,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facts(&self) -> &FactCollection {
        &self.facts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selection(&self) -> CategorySelection {
        self.selection
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Hand the pending notice to the front end, clearing it
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Switch category filter. Returns true when the feed needs reloading.
    pub fn select(&mut self, selection: CategorySelection) -> bool {
        if self.selection == selection {
            return false;
        }
        tracing::debug!(category = selection.label(), "Category selected");
        self.selection = selection;
        true
    }

    /// Query for the current selection, based on the configured defaults
    pub fn query(&self, base: &FactQuery) -> FactQuery {
        base.clone().selection(self.selection)
    }

    /// Mark the start of a fetch. Must be called before the request is sent.
    ///
    /// Every call supersedes the fetches started before it.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_load += 1;
        self.loading = true;
        LoadTicket(self.latest_load)
    }

    /// Apply a fetch result and clear the loading flag.
    ///
    /// Results for a superseded ticket are dropped and leave the flag set,
    /// since a newer fetch is still outstanding. On failure the collection
    /// is left untouched and an error notice is raised. Returns true if the
    /// result was applied.
    pub fn complete_load<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Fact>, E>,
    ) -> bool {
        if ticket.0 != self.latest_load {
            tracing::debug!(ticket = ticket.0, latest = self.latest_load, "Dropping stale load");
            return false;
        }
        match result {
            Ok(facts) => {
                tracing::info!(count = facts.len(), "Facts loaded");
                self.facts.replace(facts);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load facts");
                self.notice = Some(Notice::error(LOAD_FAILED));
            }
        }
        self.loading = false;
        true
    }

    /// Show `fact` at the top while it is being stored.
    ///
    /// Returns the pending id to pass to [`Feed::complete_submit`].
    pub fn begin_submit(&mut self, fact: &NewFact) -> FactId {
        let pending = fact.to_pending();
        let id = pending.id;
        self.facts.prepend(pending);
        id
    }

    /// Reconcile a pending row with the store's answer.
    ///
    /// Returns true if the row was stored.
    pub fn complete_submit<E: Display>(&mut self, pending: FactId, result: Result<Fact, E>) -> bool {
        match result {
            Ok(stored) => {
                tracing::info!(id = %stored.id, "Fact stored");
                let stored_id = stored.id;
                let shown = self.selection.category().map_or(true, |c| c == stored.category);
                let missing = self.facts.position(stored_id).is_none();
                if !self.facts.confirm(pending, stored.clone()) && shown && missing {
                    // A reload replaced the feed while the insert was in flight
                    tracing::debug!(pending = %pending, stored = %stored_id, "Pending fact gone, prepending stored row");
                    self.facts.prepend(stored);
                }
                self.notice = Some(Notice::success(SAVED));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, pending = %pending, "Failed to store fact, rolling back");
                self.facts.rollback(pending);
                self.notice = Some(Notice::error(SAVE_FAILED));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{current_year, Category};

    fn stored(id: i64, text: &str) -> Fact {
        NewFact::new(text, "https://example.com", "society")
            .unwrap()
            .to_fact(FactId::Persisted(id))
    }

    fn load(feed: &mut Feed, rows: Vec<Fact>) {
        let ticket = feed.begin_load();
        assert!(feed.complete_load::<String>(ticket, Ok(rows)));
    }

    #[test]
    fn test_successful_load() {
        let mut feed = Feed::new();
        let ticket = feed.begin_load();
        assert!(feed.is_loading());

        let rows = vec![stored(2, "b"), stored(1, "a")];
        feed.complete_load::<String>(ticket, Ok(rows.clone()));

        assert!(!feed.is_loading());
        assert_eq!(feed.facts().as_slice(), rows.as_slice());
        assert!(feed.notice().is_none());
    }

    #[test]
    fn test_failed_load_keeps_facts() {
        let mut feed = Feed::new();
        load(&mut feed, vec![stored(1, "a")]);
        let before = feed.facts().clone();

        let ticket = feed.begin_load();
        feed.complete_load(ticket, Err::<Vec<Fact>, _>("connection refused"));

        assert!(!feed.is_loading());
        assert_eq!(feed.facts(), &before);
        assert_eq!(feed.take_notice(), Some(Notice::error(LOAD_FAILED)));
        assert!(feed.notice().is_none());
    }

    #[test]
    fn test_failed_first_load_stays_empty() {
        let mut feed = Feed::new();
        let ticket = feed.begin_load();
        feed.complete_load(ticket, Err::<Vec<Fact>, _>("timeout"));

        assert!(feed.facts().is_empty());
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_submit_confirmed() {
        let mut feed = Feed::new();
        load(&mut feed, vec![stored(1, "a")]);

        let fact = NewFact::new("Water boils at 100C", "https://example.com", "science").unwrap();
        let pending = feed.begin_submit(&fact);
        assert_eq!(feed.facts().len(), 2);
        assert!(feed.facts().first().unwrap().is_pending());

        let saved = fact.to_fact(FactId::Persisted(7));
        assert!(feed.complete_submit::<String>(pending, Ok(saved)));

        let first = feed.facts().first().unwrap();
        assert_eq!(feed.facts().len(), 2);
        assert_eq!(first.id, FactId::Persisted(7));
        assert_eq!(first.text, "Water boils at 100C");
        assert_eq!(first.category, Category::Science);
        assert_eq!(first.votes_interesting, 0);
        assert_eq!(first.votes_mindblowing, 0);
        assert_eq!(first.votes_false, 0);
        assert_eq!(first.created_in, current_year());
        assert_eq!(feed.take_notice(), Some(Notice::success(SAVED)));
    }

    #[test]
    fn test_submit_rolled_back() {
        let mut feed = Feed::new();
        load(&mut feed, vec![stored(1, "a")]);
        let before = feed.facts().clone();

        let fact = NewFact::new("Water boils at 100C", "https://example.com", "science").unwrap();
        let pending = feed.begin_submit(&fact);
        assert!(!feed.complete_submit::<&str>(pending, Err("500")));

        assert_eq!(feed.facts(), &before);
        assert_eq!(feed.take_notice(), Some(Notice::error(SAVE_FAILED)));
    }

    #[test]
    fn test_select_and_query() {
        let mut feed = Feed::new();
        let base = FactQuery::top(50);

        assert!(!feed.select(CategorySelection::All));
        assert!(feed.select(CategorySelection::Only(Category::News)));
        assert!(!feed.select(CategorySelection::Only(Category::News)));

        let query = feed.query(&base);
        assert_eq!(query.category, Some(Category::News));
        assert_eq!(query.limit, 50);
    }

    #[test]
    fn test_overlapping_loads_out_of_order() {
        let mut feed = Feed::new();
        let science = |id| {
            NewFact::new("s", "https://example.com", "science")
                .unwrap()
                .to_fact(FactId::Persisted(id))
        };
        let news = |id| {
            NewFact::new("n", "https://example.com", "news")
                .unwrap()
                .to_fact(FactId::Persisted(id))
        };

        feed.select(CategorySelection::Only(Category::Science));
        let first = feed.begin_load();
        feed.select(CategorySelection::Only(Category::News));
        let second = feed.begin_load();

        // Newest reply lands first and is applied
        assert!(feed.complete_load::<String>(second, Ok(vec![news(3)])));
        assert!(!feed.is_loading());

        // The superseded reply is dropped
        assert!(!feed.complete_load::<String>(first, Ok(vec![science(1), science(2)])));
        assert!(!feed.is_loading());
        assert_eq!(feed.facts().len(), 1);
        assert!(feed.facts().iter().all(|f| f.category == Category::News));
    }

    #[test]
    fn test_loading_until_latest_completes() {
        let mut feed = Feed::new();
        let first = feed.begin_load();
        let second = feed.begin_load();

        assert!(!feed.complete_load(first, Err::<Vec<Fact>, _>("timeout")));
        assert!(feed.is_loading());
        assert!(feed.notice().is_none());

        assert!(feed.complete_load::<String>(second, Ok(vec![stored(1, "a")])));
        assert!(!feed.is_loading());
        assert_eq!(feed.facts().len(), 1);
    }

    #[test]
    fn test_submit_survives_reload() {
        let mut feed = Feed::new();
        load(&mut feed, vec![stored(1, "a")]);

        let fact = NewFact::new("Water boils at 100C", "https://example.com", "science").unwrap();
        let pending = feed.begin_submit(&fact);

        // Reload lands before the insert answers and drops the pending row
        load(&mut feed, vec![stored(1, "a"), stored(2, "b")]);
        assert!(feed.facts().position(pending).is_none());

        assert!(feed.complete_submit::<String>(pending, Ok(fact.to_fact(FactId::Persisted(9)))));
        assert_eq!(feed.facts().len(), 3);
        assert_eq!(feed.facts().first().map(|f| f.id), Some(FactId::Persisted(9)));
        assert_eq!(feed.take_notice(), Some(Notice::success(SAVED)));
    }

    #[test]
    fn test_submit_after_reload_respects_filter() {
        let mut feed = Feed::new();
        let fact = NewFact::new("Water boils at 100C", "https://example.com", "science").unwrap();
        let pending = feed.begin_submit(&fact);

        feed.select(CategorySelection::Only(Category::History));
        load(&mut feed, Vec::new());

        assert!(feed.complete_submit::<String>(pending, Ok(fact.to_fact(FactId::Persisted(9)))));
        assert!(feed.facts().is_empty());
    }

    #[test]
    fn test_submit_after_reload_with_stored_row() {
        let mut feed = Feed::new();
        let fact = NewFact::new("Water boils at 100C", "https://example.com", "science").unwrap();
        let pending = feed.begin_submit(&fact);
        let saved = fact.to_fact(FactId::Persisted(9));

        // The reload already picked up the stored row
        load(&mut feed, vec![saved.clone()]);
        assert!(feed.complete_submit::<String>(pending, Ok(saved)));
        assert_eq!(feed.facts().len(), 1);
    }
}
