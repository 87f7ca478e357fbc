//! Summary counts derived from a board.
//!
//! Completion is positional: every card in the last list counts as completed.
//! Reordering lists therefore changes which cards are "done".

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use crate::Board;

const NO_LIST_TITLE: &str = "None";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusiestList {
    pub title: String,
    pub count: usize,
}

impl Default for BusiestList {
    fn default() -> Self {
        Self {
            title: NO_LIST_TITLE.to_string(),
            count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardStats {
    pub total_cards: usize,
    pub completed_cards: usize,
    /// Cards due strictly before today, outside the last list
    pub overdue_cards: usize,
    pub busiest_list: BusiestList,
}

impl BoardStats {
    pub fn compute(board: &Board, today: NaiveDate) -> Self {
        let mut stats = Self::default();
        let last_index = board.lists.len().checked_sub(1);

        for (index, list) in board.lists.iter().enumerate() {
            let count = list.cards.len();
            stats.total_cards += count;

            // Strictly greater: ties keep the first list encountered.
            if count > stats.busiest_list.count {
                stats.busiest_list = BusiestList {
                    title: list.title.clone(),
                    count,
                };
            }

            if Some(index) == last_index {
                stats.completed_cards += count;
                continue;
            }

            stats.overdue_cards += list
                .cards
                .iter()
                .filter_map(|card| card.due_date.as_deref().and_then(parse_due_date))
                .filter(|due| *due < today)
                .count();
        }

        stats
    }

    pub fn for_today(board: &Board) -> Self {
        Self::compute(board, Local::now().date_naive())
    }
}

pub fn compute_stats(board: &Board, today: NaiveDate) -> BoardStats {
    BoardStats::compute(board, today)
}

/// Parse a due date given as `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_due_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Local).date_naive())
        })
}
