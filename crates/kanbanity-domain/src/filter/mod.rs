//! Filtered projection of a board.
//!
//! Provides the filter configuration ([`BoardFilters`]), card filter
//! predicates and [`filter_lists`], which derives the visible list sequence
//! without touching the board.

pub mod board_filters;
pub mod card_filter;

pub use board_filters::{filter_lists, BoardFilters, FilterScope};
pub use card_filter::{CardFilter, CompositeFilter, LabelFilter, SearchFilter};
