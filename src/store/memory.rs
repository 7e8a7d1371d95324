//! In-memory fact store
//!
//! Used by `til --demo` and in tests. Honors ordering, limit and category
//! filter for the columns the feed sorts on.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{FactStore, StoreError, StoreResult};
use crate::facts::{Category, Fact, FactId, FactQuery, NewFact};

/// Facts held in process memory
pub struct MemoryFactStore {
    facts: Mutex<Vec<Fact>>,
    next_id: Mutex<i64>,
    /// When set, every call fails with this status
    failing: Option<u16>,
}

impl MemoryFactStore {
    pub fn new(facts: Vec<Fact>) -> Self {
        let next_id = facts
            .iter()
            .filter_map(|f| match f.id {
                FactId::Persisted(id) => Some(id),
                FactId::Pending(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            facts: Mutex::new(facts),
            next_id: Mutex::new(next_id),
            failing: None,
        }
    }

    /// Store seeded with [`sample_facts`]
    pub fn with_samples() -> Self {
        Self::new(sample_facts())
    }

    /// A store whose every call fails with HTTP `status`
    pub fn failing(status: u16) -> Self {
        Self {
            failing: Some(status),
            ..Self::new(Vec::new())
        }
    }

    pub fn len(&self) -> usize {
        self.facts.lock().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> StoreResult<()> {
        match self.failing {
            Some(status) => Err(StoreError::ApiError {
                status,
                message: "memory store set to fail".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FactStore for MemoryFactStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_top_facts(&self, query: &FactQuery) -> StoreResult<Vec<Fact>> {
        self.check_available()?;

        let facts = self
            .facts
            .lock()
            .map_err(|_| StoreError::Decode("memory store poisoned".to_string()))?;

        let mut selected: Vec<Fact> = facts
            .iter()
            .filter(|f| query.category.map_or(true, |c| f.category == c))
            .cloned()
            .collect();

        let key = |f: &Fact| -> i64 {
            match query.order_by.as_str() {
                "votesMindblowing" => f.votes_mindblowing as i64,
                "votesFalse" => f.votes_false as i64,
                "createdIn" => f.created_in as i64,
                _ => f.votes_interesting as i64,
            }
        };
        selected.sort_by_key(|f| key(f));
        if !query.ascending {
            selected.reverse();
        }
        selected.truncate(query.limit);

        Ok(selected)
    }

    async fn insert_fact(&self, fact: &NewFact) -> StoreResult<Fact> {
        self.check_available()?;

        let mut next_id = self
            .next_id
            .lock()
            .map_err(|_| StoreError::Decode("memory store poisoned".to_string()))?;
        let stored = fact.to_fact(FactId::Persisted(*next_id));
        *next_id += 1;

        self.facts
            .lock()
            .map_err(|_| StoreError::Decode("memory store poisoned".to_string()))?
            .push(stored.clone());

        Ok(stored)
    }
}

/// The three facts the feed ships with
pub fn sample_facts() -> Vec<Fact> {
    vec![
        Fact {
            id: FactId::Persisted(1),
            text: "React is being developed by Meta (formerly facebook)".to_string(),
            source: "https://opensource.fb.com/".to_string(),
            category: Category::Technology,
            votes_interesting: 24,
            votes_mindblowing: 9,
            votes_false: 4,
            created_in: 2021,
        },
        Fact {
            id: FactId::Persisted(2),
            text: "Millennial dads spend 3 times as much time with their kids than their fathers spent with them. In 1982, 43% of fathers had never changed a diaper. Today, that number is down to 3%".to_string(),
            source: "https://www.mother.ly/parenting/millennial-dads-spend-more-time-with-their-kids".to_string(),
            category: Category::Society,
            votes_interesting: 11,
            votes_mindblowing: 2,
            votes_false: 0,
            created_in: 2019,
        },
        Fact {
            id: FactId::Persisted(3),
            text: "Lisbon is the capital of Portugal".to_string(),
            source: "https://en.wikipedia.org/wiki/Lisbon".to_string(),
            category: Category::Society,
            votes_interesting: 8,
            votes_mindblowing: 3,
            votes_false: 1,
            created_in: 2015,
        },
    ]
}
