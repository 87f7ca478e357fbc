//! Predicates over single cards.

use crate::search::{CardSearcher, CompositeSearcher};
use crate::Card;

/// Predicate deciding whether a card stays in a filtered view.
pub trait CardFilter {
    fn matches(&self, card: &Card) -> bool;
}

/// Filter cards carrying a given label.
pub struct LabelFilter {
    label_id: String,
}

impl LabelFilter {
    pub fn new(label_id: impl Into<String>) -> Self {
        Self {
            label_id: label_id.into(),
        }
    }
}

impl CardFilter for LabelFilter {
    fn matches(&self, card: &Card) -> bool {
        card.has_label(&self.label_id)
    }
}

/// Filter cards by free-text query over title, content and label names.
pub struct SearchFilter {
    searcher: CompositeSearcher,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            searcher: CompositeSearcher::all(query),
        }
    }
}

impl CardFilter for SearchFilter {
    fn matches(&self, card: &Card) -> bool {
        self.searcher.matches(card)
    }
}

/// Conjunction of card filters.
///
/// An empty conjunction admits every card.
pub struct CompositeFilter {
    filters: Vec<Box<dyn CardFilter>>,
}

impl CompositeFilter {
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn with_filter(mut self, filter: Box<dyn CardFilter>) -> Self {
        self.filters.push(filter);
        self
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFilter for CompositeFilter {
    fn matches(&self, card: &Card) -> bool {
        self.filters.iter().all(|f| f.matches(card))
    }
}
