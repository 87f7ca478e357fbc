use serde::{Deserialize, Deserializer, Serialize};

use crate::card::Card;
use crate::id::{create_id, BOARD_PREFIX};
use crate::label::Label;
use crate::list::List;

pub type BoardId = String;

/// Root aggregate: owns every list, and through them every card.
///
/// Collections default to empty when absent or `null` in a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lists: Vec<List>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub available_labels: Vec<Label>,
}

/// Read a collection that may be stored as `null`.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: create_id(BOARD_PREFIX),
            title: title.into(),
            lists: Vec::new(),
            available_labels: Vec::new(),
        }
    }

    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    pub fn list_index(&self, list_id: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.id == list_id)
    }

    /// Index of the list currently owning `card_id`.
    pub fn list_index_containing(&self, card_id: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.contains_card(card_id))
    }

    pub fn list_containing(&self, card_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.contains_card(card_id))
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.lists.iter().find_map(|list| list.card(card_id))
    }

    pub fn label(&self, label_id: &str) -> Option<&Label> {
        self.available_labels.iter().find(|label| label.id == label_id)
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|list| list.cards.len()).sum()
    }
}
