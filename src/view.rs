//! Text views
//!
//! Plain-text rendering of the feed for terminal front ends. Each function
//! mirrors one browser component: header, category filter, loader, fact
//! list and fact item.

use crate::facts::{Category, CategorySelection, Fact, Field, ValidationErrors};
use crate::feed::Feed;

pub const APP_TITLE: &str = "Today I Learned";

/// Title bar with the form toggle label
pub fn header(show_form: bool) -> String {
    let button = if show_form { "Close" } else { "Share a fact" };
    format!("{}  [{}]", APP_TITLE, button)
}

/// "All" followed by every category; the active one is bracketed
pub fn category_filter(selection: CategorySelection) -> String {
    let mut items = Vec::with_capacity(Category::all().len() + 1);
    items.push(filter_item("All", selection == CategorySelection::All));
    for category in Category::all() {
        items.push(filter_item(
            category.name(),
            selection == CategorySelection::Only(*category),
        ));
    }
    items.join(" ")
}

fn filter_item(label: &str, active: bool) -> String {
    if active {
        format!("[{}]", label.to_uppercase())
    } else {
        label.to_string()
    }
}

pub fn loader() -> &'static str {
    "Loading..."
}

/// One fact: text, source, tag and vote counts
pub fn fact_item(fact: &Fact) -> String {
    let pending = if fact.is_pending() { " (saving...)" } else { "" };
    format!(
        "{} (Source: {})\n  #{} {}  👍 {}  🤯 {}  ⛔️ {}{}",
        fact.text,
        fact.source,
        fact.category,
        fact.category.color(),
        fact.votes_interesting,
        fact.votes_mindblowing,
        fact.votes_false,
        pending
    )
}

/// All facts followed by the count footer
pub fn fact_list(facts: &[Fact]) -> String {
    let mut out = String::new();
    for fact in facts {
        out.push_str("- ");
        out.push_str(&fact_item(fact));
        out.push('\n');
    }
    out.push_str(&format!(
        "There are {} facts in the database. Add your own!",
        facts.len()
    ));
    out
}

/// Whole page: header, filter, then loader or list
pub fn page(feed: &Feed, show_form: bool) -> String {
    let body = if feed.is_loading() {
        loader().to_string()
    } else {
        fact_list(feed.facts().as_slice())
    };
    format!(
        "{}\n\n{}\n\n{}",
        header(show_form),
        category_filter(feed.selection()),
        body
    )
}

/// Inline form messages, one line per failing field
pub fn form_errors(errors: &ValidationErrors) -> String {
    [Field::Text, Field::Source, Field::Category]
        .into_iter()
        .filter_map(|field| errors.for_field(field).map(|e| format!("  {}: {}", field, e)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::{FactId, NewFact, ValidationError};

    fn fact() -> Fact {
        NewFact::new("Lisbon is the capital of Portugal", "https://en.wikipedia.org/wiki/Lisbon", "society")
            .unwrap()
            .to_fact(FactId::Persisted(3))
    }

    #[test]
    fn test_header_toggle() {
        assert_eq!(header(false), "Today I Learned  [Share a fact]");
        assert_eq!(header(true), "Today I Learned  [Close]");
    }

    #[test]
    fn test_category_filter_marks_selection() {
        let all = category_filter(CategorySelection::All);
        assert!(all.starts_with("[ALL] technology science"));

        let science = category_filter(CategorySelection::Only(Category::Science));
        assert!(science.starts_with("All technology [SCIENCE] finance"));
        assert!(science.ends_with("news"));
    }

    #[test]
    fn test_fact_item() {
        let rendered = fact_item(&fact());
        assert!(rendered.contains("Lisbon is the capital of Portugal"));
        assert!(rendered.contains("#society #eab308"));
        assert!(rendered.contains("👍 0"));
        assert!(!rendered.contains("saving"));
    }

    #[test]
    fn test_fact_list_footer() {
        let rendered = fact_list(&[fact(), fact()]);
        assert!(rendered.ends_with("There are 2 facts in the database. Add your own!"));
        assert_eq!(fact_list(&[]), "There are 0 facts in the database. Add your own!");
    }

    #[test]
    fn test_page_shows_loader() {
        let mut feed = Feed::new();
        feed.begin_load();
        let rendered = page(&feed, false);
        assert!(rendered.ends_with("Loading..."));
        assert!(!rendered.contains("There are"));
    }

    #[test]
    fn test_form_errors() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::MissingCategory);
        errors.push(ValidationError::EmptyText);
        assert_eq!(
            form_errors(&errors),
            "  text: Share a fact first\n  category: Choose a category"
        );
    }
}
