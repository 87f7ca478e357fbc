//! Board filter configuration and projection.

use super::card_filter::{CardFilter, CompositeFilter, LabelFilter, SearchFilter};
use crate::{Board, List};

/// Sentinel used by the rendering layer for "no restriction".
pub const ALL: &str = "all";

/// Either every entity, or only the one with the given id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterScope {
    #[default]
    All,
    Only(String),
}

impl FilterScope {
    /// `"all"` selects everything; any other value is an id.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn admits(&self, id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == id,
        }
    }
}

impl From<&str> for FilterScope {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// What the user is currently filtering the board by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoardFilters {
    /// Free-text query over card title, content and label names
    pub query: String,
    pub label: FilterScope,
    pub list: FilterScope,
}

impl BoardFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<FilterScope>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_list(mut self, list: impl Into<FilterScope>) -> Self {
        self.list = list.into();
        self
    }

    /// A whitespace-only query still counts as active.
    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || !self.label.is_all() || !self.list.is_all()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.label = FilterScope::All;
        self.list = FilterScope::All;
    }

    fn card_filter(&self) -> CompositeFilter {
        let mut filter =
            CompositeFilter::new().with_filter(Box::new(SearchFilter::new(self.query.as_str())));
        if let FilterScope::Only(label_id) = &self.label {
            filter = filter.with_filter(Box::new(LabelFilter::new(label_id.as_str())));
        }
        filter
    }
}

/// Derive the visible lists for `filters`.
///
/// With no active filter the lists come back as they are, empty ones
/// included. Otherwise lists are narrowed by the list scope, their cards by
/// the query and label scope, and lists left without cards are dropped.
pub fn filter_lists(board: &Board, filters: &BoardFilters) -> Vec<List> {
    if !filters.has_active_filters() {
        return board.lists.clone();
    }

    let card_filter = filters.card_filter();
    board
        .lists
        .iter()
        .filter(|list| filters.list.admits(&list.id))
        .map(|list| List {
            cards: list
                .cards
                .iter()
                .filter(|card| card_filter.matches(card))
                .cloned()
                .collect(),
            ..list.clone()
        })
        .filter(|list| !list.cards.is_empty())
        .collect()
}
