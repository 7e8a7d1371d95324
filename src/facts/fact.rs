//! Fact records
//!
//! - `Fact`: a row of the `facts` table, or a local row awaiting confirmation
//! - `NewFact`: a validated submission that has not been stored yet

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use super::validate::{check_source, check_text, ValidationError, ValidationErrors};

/// Identity of a fact in the feed
///
/// Stored rows carry the id the database assigned. Rows inserted locally
/// carry a random UUID until the store confirms them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum FactId {
    Persisted(i64),
    Pending(Uuid),
}

impl FactId {
    pub fn is_pending(&self) -> bool {
        matches!(self, FactId::Pending(_))
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactId::Persisted(id) => write!(f, "{}", id),
            FactId::Pending(uuid) => write!(f, "pending-{}", uuid),
        }
    }
}

/// A fact as displayed in the feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    pub id: FactId,
    pub text: String,
    pub source: String,
    pub category: Category,
    pub votes_interesting: u32,
    pub votes_mindblowing: u32,
    pub votes_false: u32,
    /// Year the fact was shared
    pub created_in: i32,
}

impl Fact {
    pub fn is_pending(&self) -> bool {
        self.id.is_pending()
    }
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFact {
    text: String,
    source: String,
    category: Category,
    created_in: i32,
}

impl NewFact {
    /// Validate raw form input.
    ///
    /// Every failing rule is reported, not just the first one.
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        category: &str,
    ) -> Result<Self, ValidationErrors> {
        let text = text.into();
        let source = source.into();
        let mut errors = ValidationErrors::new();

        if let Err(e) = check_text(&text) {
            errors.push(e);
        }
        if let Err(e) = check_source(&source) {
            errors.push(e);
        }

        let category = if category.trim().is_empty() {
            errors.push(ValidationError::MissingCategory);
            None
        } else {
            match category.parse::<Category>() {
                Ok(c) => Some(c),
                Err(e) => {
                    errors.push(ValidationError::UnknownCategory(e.0));
                    None
                }
            }
        };

        match category {
            Some(category) if errors.is_empty() => Ok(Self {
                text,
                source,
                category,
                created_in: current_year(),
            }),
            _ => Err(errors),
        }
    }

    /// Override the creation year (defaults to the current local year)
    pub fn created_in(mut self, year: i32) -> Self {
        self.created_in = year;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn year(&self) -> i32 {
        self.created_in
    }

    /// Local row shown while the insert is in flight
    pub fn to_pending(&self) -> Fact {
        self.to_fact(FactId::Pending(Uuid::new_v4()))
    }

    /// Row with the given id and zeroed votes
    pub fn to_fact(&self, id: FactId) -> Fact {
        Fact {
            id,
            text: self.text.clone(),
            source: self.source.clone(),
            category: self.category,
            votes_interesting: 0,
            votes_mindblowing: 0,
            votes_false: 0,
            created_in: self.created_in,
        }
    }

    /// Insert payload for the `facts` table
    pub fn to_row(&self) -> NewFactRow<'_> {
        NewFactRow {
            text: &self.text,
            source: &self.source,
            category: self.category,
            votes_interesting: 0,
            votes_mindblowing: 0,
            votes_false: 0,
            created_in: self.created_in,
        }
    }
}

/// Body of an insert request; the database assigns the id
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFactRow<'a> {
    pub text: &'a str,
    pub source: &'a str,
    pub category: Category,
    pub votes_interesting: u32,
    pub votes_mindblowing: u32,
    pub votes_false: u32,
    pub created_in: i32,
}

/// Current year on the local clock
pub fn current_year() -> i32 {
    Local::now().year()
}
