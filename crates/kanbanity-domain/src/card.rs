use serde::{Deserialize, Serialize};

use crate::field_update::FieldUpdate;
use crate::id::{create_id, CARD_PREFIX};
use crate::label::Label;

pub type CardId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "crate::board::null_as_empty")]
    pub labels: Vec<Label>,
    /// ISO date (`YYYY-MM-DD`) or RFC 3339 timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<CardPriority>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: create_id(CARD_PREFIX),
            title: title.into(),
            content: None,
            labels: Vec::new(),
            due_date: None,
            priority: None,
        }
    }

    pub fn from_draft(title: String, draft: CardDraft) -> Self {
        Self {
            id: create_id(CARD_PREFIX),
            title,
            content: draft.content,
            labels: draft.labels,
            due_date: draft.due_date,
            priority: draft.priority,
        }
    }

    pub fn has_label(&self, label_id: &str) -> bool {
        self.labels.iter().any(|label| label.id == label_id)
    }

    /// Shallow merge: only fields carried by `updates` change.
    ///
    /// The title is expected to be validated by the caller.
    pub fn update(&mut self, updates: CardUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.content.apply_to(&mut self.content);
        if let Some(labels) = updates.labels {
            self.labels = labels;
        }
        updates.due_date.apply_to(&mut self.due_date);
        updates.priority.apply_to(&mut self.priority);
    }
}

/// Input for creating a card. The title is trimmed and must not be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    pub content: Option<String>,
    pub labels: Vec<Label>,
    pub due_date: Option<String>,
    pub priority: Option<CardPriority>,
}

impl CardDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_priority(mut self, priority: CardPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Partial card update. `None`/`NoChange` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub content: FieldUpdate<String>,
    pub labels: Option<Vec<Label>>,
    pub due_date: FieldUpdate<String>,
    pub priority: FieldUpdate<CardPriority>,
}

impl CardUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && !self.content.is_change()
            && self.labels.is_none()
            && !self.due_date.is_change()
            && !self.priority.is_change()
    }
}
