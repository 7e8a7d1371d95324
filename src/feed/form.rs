//! New-fact form controller
//!
//! Holds the draft typed into the "Share a fact" form and turns it into a
//! [`NewFact`] on submit.
//!
//! A rejected submit keeps the draft and records one message per failing
//! field, so the form can show them inline.

use crate::facts::{Category, Field, NewFact, ValidationErrors, MAX_TEXT_CHARS};

/// Category preselected when the form is first opened
pub const DEFAULT_CATEGORY: Category = Category::Technology;

/// Lifecycle of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// Nothing typed since the form was opened or last submitted
    Empty,
    /// At least one field changed
    Editing,
}

/// Result of pressing "Post"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was valid; the form has been reset and should close
    Accepted(NewFact),
    /// Draft was kept; errors are available through [`NewFactForm::errors`]
    Rejected(ValidationErrors),
}

/// Draft state of the new-fact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFactForm {
    text: String,
    source: String,
    category: String,
    state: FormState,
    errors: ValidationErrors,
}

impl Default for NewFactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NewFactForm {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            source: String::new(),
            category: DEFAULT_CATEGORY.name().to_string(),
            state: FormState::Empty,
            errors: ValidationErrors::new(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touch(Field::Text);
    }

    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.touch(Field::Source);
    }

    /// Set the category by name; an empty string means "none chosen"
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.touch(Field::Category);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Characters left before the body limit; negative once exceeded
    pub fn remaining_chars(&self) -> i64 {
        MAX_TEXT_CHARS as i64 - self.text.chars().count() as i64
    }

    /// Validate the draft.
    ///
    /// On success the fields are cleared (category included) and the state
    /// returns to `Empty`.
    pub fn submit(&mut self) -> SubmitOutcome {
        match NewFact::new(self.text.clone(), self.source.clone(), &self.category) {
            Ok(fact) => {
                tracing::debug!(category = %fact.category(), "New fact accepted");
                self.reset();
                SubmitOutcome::Accepted(fact)
            }
            Err(errors) => {
                tracing::debug!(errors = %errors, "New fact rejected");
                self.errors = errors.clone();
                SubmitOutcome::Rejected(errors)
            }
        }
    }

    fn reset(&mut self) {
        self.text.clear();
        self.source.clear();
        self.category.clear();
        self.errors = ValidationErrors::new();
        self.state = FormState::Empty;
    }

    fn touch(&mut self, field: Field) {
        self.state = FormState::Editing;
        if self.errors.for_field(field).is_some() {
            let mut kept = ValidationErrors::new();
            for error in self.errors.iter().filter(|e| e.field() != field) {
                kept.push(error.clone());
            }
            self.errors = kept;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{current_year, ValidationError};

    fn filled(text: &str, source: &str, category: &str) -> NewFactForm {
        let mut form = NewFactForm::new();
        form.set_text(text);
        form.set_source(source);
        form.set_category(category);
        form
    }

    #[test]
    fn test_initial_state() {
        let form = NewFactForm::new();
        assert_eq!(form.state(), FormState::Empty);
        assert_eq!(form.category(), "technology");
        assert_eq!(form.remaining_chars(), 200);
    }

    #[test]
    fn test_editing_on_change() {
        let mut form = NewFactForm::new();
        form.set_text("Hello");
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.remaining_chars(), 195);
    }

    #[test]
    fn test_remaining_chars_goes_negative() {
        let mut form = NewFactForm::new();
        form.set_text("x".repeat(205));
        assert_eq!(form.remaining_chars(), -5);
    }

    #[test]
    fn test_accepted_resets_form() {
        let mut form = filled("Water boils at 100C", "https://example.com", "science");

        match form.submit() {
            SubmitOutcome::Accepted(fact) => {
                assert_eq!(fact.text(), "Water boils at 100C");
                assert_eq!(fact.category(), Category::Science);
                assert_eq!(fact.year(), current_year());
            }
            other => panic!("expected acceptance, got {:?}", other),
        }

        assert_eq!(form.state(), FormState::Empty);
        assert_eq!(form.text(), "");
        assert_eq!(form.source(), "");
        assert_eq!(form.category(), "");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_rejected_keeps_draft() {
        let mut form = filled("Water boils at 100C", "not a url", "science");

        match form.submit() {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.for_field(Field::Source), Some(&ValidationError::InvalidSource));
            }
            other => panic!("expected rejection, got {:?}", other),
        }

        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.text(), "Water boils at 100C");
        assert_eq!(form.source(), "not a url");
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_each_rule_rejects() {
        let long = "x".repeat(201);
        let cases = [
            ("", "https://example.com", "science"),
            (long.as_str(), "https://example.com", "science"),
            ("Fact", "ftp://example.com", "science"),
            ("Fact", "https://example.com", ""),
        ];

        for (text, source, category) in cases {
            let mut form = filled(text, source, category);
            assert!(
                matches!(form.submit(), SubmitOutcome::Rejected(_)),
                "expected rejection for ({:?}, {:?}, {:?})",
                text,
                source,
                category
            );
        }
    }

    #[test]
    fn test_second_submit_needs_category() {
        let mut form = filled("First", "https://example.com", "history");
        assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));

        form.set_text("Second");
        form.set_source("https://example.com");
        match form.submit() {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(
                    errors.for_field(Field::Category),
                    Some(&ValidationError::MissingCategory)
                );
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let mut form = filled("", "bad", "science");
        form.submit();
        assert_eq!(form.errors().len(), 2);

        form.set_source("https://example.com");
        assert_eq!(form.errors().len(), 1);
        assert!(form.errors().for_field(Field::Source).is_none());
        assert!(form.errors().for_field(Field::Text).is_some());
    }
}
