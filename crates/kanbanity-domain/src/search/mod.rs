//! Free-text matching of cards.
//!
//! Provides traits and implementations for matching cards against a free-text
//! query. Matching is a case-insensitive substring test.

use crate::Card;

/// Case-insensitive substring match on some part of a card.
pub trait CardSearcher {
    fn matches(&self, card: &Card) -> bool;
}

fn normalize(query: impl Into<String>) -> String {
    query.into().trim().to_lowercase()
}

/// Search cards by title.
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: normalize(query),
        }
    }
}

impl CardSearcher for TitleSearcher {
    fn matches(&self, card: &Card) -> bool {
        if self.query.is_empty() {
            return true;
        }
        card.title.to_lowercase().contains(&self.query)
    }
}

/// Search cards by their description text. Cards without content never match
/// a non-empty query.
pub struct ContentSearcher {
    query: String,
}

impl ContentSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: normalize(query),
        }
    }
}

impl CardSearcher for ContentSearcher {
    fn matches(&self, card: &Card) -> bool {
        if self.query.is_empty() {
            return true;
        }
        card.content
            .as_deref()
            .is_some_and(|content| content.to_lowercase().contains(&self.query))
    }
}

/// Search cards by the names of their labels.
pub struct LabelNameSearcher {
    query: String,
}

impl LabelNameSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: normalize(query),
        }
    }
}

impl CardSearcher for LabelNameSearcher {
    fn matches(&self, card: &Card) -> bool {
        if self.query.is_empty() {
            return true;
        }
        card.labels
            .iter()
            .any(|label| label.name.to_lowercase().contains(&self.query))
    }
}

/// One searchable card field.
pub enum SearchBy {
    Title(TitleSearcher),
    Content(ContentSearcher),
    LabelName(LabelNameSearcher),
}

impl SearchBy {
    fn matches(&self, card: &Card) -> bool {
        match self {
            Self::Title(s) => s.matches(card),
            Self::Content(s) => s.matches(card),
            Self::LabelName(s) => s.matches(card),
        }
    }
}

/// Matches when at least one field matches.
pub struct CompositeSearcher {
    searchers: Vec<SearchBy>,
}

impl CompositeSearcher {
    /// No searchers: every card matches.
    pub fn new() -> Self {
        Self {
            searchers: Vec::new(),
        }
    }

    /// Title, content and label names.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: vec![
                SearchBy::Title(TitleSearcher::new(query.clone())),
                SearchBy::Content(ContentSearcher::new(query.clone())),
                SearchBy::LabelName(LabelNameSearcher::new(query)),
            ],
        }
    }

    pub fn with_search(mut self, searcher: SearchBy) -> Self {
        self.searchers.push(searcher);
        self
    }
}

impl Default for CompositeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSearcher for CompositeSearcher {
    fn matches(&self, card: &Card) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers.iter().any(|searcher| searcher.matches(card))
    }
}
