use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::id::{create_id, LIST_PREFIX};
use crate::label::Label;

pub type ListId = String;

/// Accent color of a list column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListTone {
    Blue,
    Orange,
    Green,
    Yellow,
    Teal,
    Purple,
    Pink,
    Red,
}

impl ListTone {
    pub const ROTATION: [ListTone; 8] = [
        ListTone::Blue,
        ListTone::Orange,
        ListTone::Green,
        ListTone::Yellow,
        ListTone::Teal,
        ListTone::Purple,
        ListTone::Pink,
        ListTone::Red,
    ];

    /// Tone assigned to a list at `position` when none is given.
    pub fn for_position(position: usize) -> Self {
        Self::ROTATION[position % Self::ROTATION.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<ListTone>,
    #[serde(default, deserialize_with = "crate::board::null_as_empty")]
    pub cards: Vec<Card>,
    #[serde(default, deserialize_with = "crate::board::null_as_empty")]
    pub labels: Vec<Label>,
}

impl List {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: create_id(LIST_PREFIX),
            title: title.into(),
            tone: None,
            cards: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == card_id)
    }

    pub fn card_index(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == card_id)
    }

    pub fn contains_card(&self, card_id: &str) -> bool {
        self.card_index(card_id).is_some()
    }

    /// Stored tone, or the rotation tone for this list's position.
    pub fn effective_tone(&self, position: usize) -> ListTone {
        self.tone.unwrap_or_else(|| ListTone::for_position(position))
    }
}

/// Input for creating a list, optionally seeded with a first card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDraft {
    pub title: String,
    pub first_card_title: Option<String>,
    pub tone: Option<ListTone>,
    pub labels: Vec<Label>,
}

impl ListDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_first_card(mut self, title: impl Into<String>) -> Self {
        self.first_card_title = Some(title.into());
        self
    }

    pub fn with_tone(mut self, tone: ListTone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }
}

/// Replacement values for a list's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUpdate {
    pub title: String,
    pub tone: Option<ListTone>,
    pub labels: Vec<Label>,
}
