//! Fact collection
//!
//! The ordered list of facts currently on screen.

use crate::facts::{Fact, FactId};

/// Ordered facts, first entry rendered at the top
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactCollection {
    facts: Vec<Fact>,
}

impl FactCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched list, keeping its order
    pub fn replace(&mut self, facts: Vec<Fact>) {
        self.facts = facts;
    }

    /// Insert at the top
    pub fn prepend(&mut self, fact: Fact) {
        self.facts.insert(0, fact);
    }

    /// Replace the pending row `pending` with its stored version, in place.
    ///
    /// Returns false if the pending row is gone.
    pub fn confirm(&mut self, pending: FactId, stored: Fact) -> bool {
        match self.position(pending) {
            Some(idx) => {
                self.facts[idx] = stored;
                true
            }
            None => false,
        }
    }

    /// Drop the pending row `pending`
    pub fn rollback(&mut self, pending: FactId) -> Option<Fact> {
        self.position(pending).map(|idx| self.facts.remove(idx))
    }

    pub fn position(&self, id: FactId) -> Option<usize> {
        self.facts.iter().position(|f| f.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    pub fn first(&self) -> Option<&Fact> {
        self.facts.first()
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    pub fn as_slice(&self) -> &[Fact] {
        &self.facts
    }
}

impl From<Vec<Fact>> for FactCollection {
    fn from(facts: Vec<Fact>) -> Self {
        Self { facts }
    }
}
