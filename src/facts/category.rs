//! Category registry
//!
//! The fixed, ordered set of topics a fact can be tagged with.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Topical tag attached to every fact
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Science,
    Finance,
    Society,
    Entertainment,
    Health,
    History,
    News,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Technology,
            Category::Science,
            Category::Finance,
            Category::Society,
            Category::Entertainment,
            Category::Health,
            Category::History,
            Category::News,
        ]
    }

    /// Unique key, as stored in the `category` column
    pub fn name(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Science => "science",
            Category::Finance => "finance",
            Category::Society => "society",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::History => "history",
            Category::News => "news",
        }
    }

    /// Color token used for tags and filter buttons
    pub fn color(&self) -> &'static str {
        match self {
            Category::Technology => "#3b82f6",
            Category::Science => "#16a34a",
            Category::Finance => "#ef4444",
            Category::Society => "#eab308",
            Category::Entertainment => "#db2777",
            Category::Health => "#14b8a6",
            Category::History => "#f97316",
            Category::News => "#8b5cf6",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no registered category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Which slice of the feed is being browsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    /// No filter
    #[default]
    All,
    /// Only facts tagged with this category
    Only(Category),
}

impl CategorySelection {
    /// Label shown on the filter button
    pub fn label(&self) -> &'static str {
        match self {
            CategorySelection::All => "All",
            CategorySelection::Only(category) => category.name(),
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Only(category) => Some(*category),
        }
    }
}

impl FromStr for CategorySelection {
    type Err = UnknownCategory;

    /// Accepts "all" (any case) or a category name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategorySelection::All)
        } else {
            s.parse().map(CategorySelection::Only)
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = Category::all().iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "technology",
                "science",
                "finance",
                "society",
                "entertainment",
                "health",
                "history",
                "news"
            ]
        );
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("science".parse::<Category>(), Ok(Category::Science));
        assert_eq!(" News ".parse::<Category>(), Ok(Category::News));
        assert_eq!(
            "sports".parse::<Category>(),
            Err(UnknownCategory("sports".to_string()))
        );
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_colors() {
        assert_eq!(Category::Technology.color(), "#3b82f6");
        assert_eq!(Category::News.color(), "#8b5cf6");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");

        let parsed: Category = serde_json::from_str("\"history\"").unwrap();
        assert_eq!(parsed, Category::History);
    }

    #[test]
    fn test_selection_parse() {
        assert_eq!("ALL".parse::<CategorySelection>(), Ok(CategorySelection::All));
        assert_eq!(
            "health".parse::<CategorySelection>(),
            Ok(CategorySelection::Only(Category::Health))
        );
        assert_eq!(CategorySelection::All.label(), "All");
        assert_eq!(CategorySelection::from(Category::Finance).category(), Some(Category::Finance));
    }
}
