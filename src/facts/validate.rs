//! Submission validation
//!
//! Rules a draft must satisfy before it becomes a [`NewFact`](super::NewFact).

use std::fmt;

/// Longest accepted fact body, in characters
pub const MAX_TEXT_CHARS: usize = 200;

/// Check whether `candidate` is a well-formed http/https URL.
///
/// Anything the URL parser rejects is simply "not valid".
pub fn is_valid_http_url(candidate: &str) -> bool {
    match url::Url::parse(candidate) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

/// Form field a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Text,
    Source,
    Category,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text => write!(f, "text"),
            Field::Source => write!(f, "source"),
            Field::Category => write!(f, "category"),
        }
    }
}

/// A single failed rule
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Share a fact first")]
    EmptyText,

    #[error("Fact is {len} characters long, the limit is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("Source must be a valid http or https URL")]
    InvalidSource,

    #[error("Choose a category")]
    MissingCategory,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::EmptyText | ValidationError::TextTooLong { .. } => Field::Text,
            ValidationError::InvalidSource => Field::Source,
            ValidationError::MissingCategory | ValidationError::UnknownCategory(_) => {
                Field::Category
            }
        }
    }
}

/// Every rule a submission broke, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// First error reported for `field`, for inline display
    pub fn for_field(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| format!("{}: {}", e.field(), e)).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

/// Validate a fact body
pub(crate) fn check_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    let len = text.chars().count();
    if len > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong {
            len,
            max: MAX_TEXT_CHARS,
        });
    }
    Ok(())
}

/// Validate a source link
pub(crate) fn check_source(source: &str) -> Result<(), ValidationError> {
    if is_valid_http_url(source) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSource)
    }
}
