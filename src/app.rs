//! Application root
//!
//! Owns the feed, the form and the store, and runs the load and submit
//! cycles against the store. Front ends drive it and render from
//! [`FactApp::feed`].

use thiserror::Error;

use crate::facts::{CategorySelection, Fact, FactQuery, ValidationErrors};
use crate::feed::{Feed, NewFactForm, Notice, SubmitOutcome};
use crate::store::{FactStore, StoreError};

/// Why a submission did not end up in the store
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Invalid fact: {0}")]
    Invalid(ValidationErrors),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Root state of a fact feed session
pub struct FactApp<S> {
    store: S,
    feed: Feed,
    form: NewFactForm,
    show_form: bool,
    base_query: FactQuery,
}

impl<S: FactStore> FactApp<S> {
    pub fn new(store: S, base_query: FactQuery) -> Self {
        Self {
            store,
            feed: Feed::new(),
            form: NewFactForm::new(),
            show_form: false,
            base_query,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn form(&self) -> &NewFactForm {
        &self.form
    }

    /// Draft fields are edited in place
    pub fn form_mut(&mut self) -> &mut NewFactForm {
        &mut self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.show_form
    }

    /// "Share a fact" / "Close"
    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.feed.take_notice()
    }

    /// Fetch the feed for the current category selection.
    ///
    /// A failure leaves the previous facts in place and raises a notice.
    pub async fn load(&mut self) {
        let query = self.feed.query(&self.base_query);
        tracing::info!(store = self.store.name(), limit = query.limit, "Loading facts");

        let ticket = self.feed.begin_load();
        let result = self.store.fetch_top_facts(&query).await;
        self.feed.complete_load(ticket, result);
    }

    /// Change the category filter, reloading if it changed
    pub async fn select_category(&mut self, selection: CategorySelection) {
        if self.feed.select(selection) {
            self.load().await;
        }
    }

    /// Submit the current draft.
    ///
    /// Valid drafts are shown immediately as a pending row and stored; the
    /// row is then swapped for the stored one or removed if storing failed.
    pub async fn submit(&mut self) -> Result<Fact, SubmitError> {
        let fact = match self.form.submit() {
            SubmitOutcome::Accepted(fact) => fact,
            SubmitOutcome::Rejected(errors) => return Err(SubmitError::Invalid(errors)),
        };
        self.show_form = false;

        let pending = self.feed.begin_submit(&fact);
        match self.store.insert_fact(&fact).await {
            Ok(stored) => {
                self.feed.complete_submit::<StoreError>(pending, Ok(stored.clone()));
                Ok(stored)
            }
            Err(e) => {
                self.feed.complete_submit(pending, Err::<Fact, _>(&e));
                Err(SubmitError::Store(e))
            }
        }
    }
}
