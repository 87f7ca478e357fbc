use super::Command;
use crate::drag::{self, DropTarget};
use crate::operations;
use crate::{Board, CardDraft, CardUpdate};

/// Append a new card to a list
pub struct AddCard {
    pub list_id: String,
    pub draft: CardDraft,
}

impl Command for AddCard {
    fn apply(&self, board: &Board) -> Board {
        operations::add_card(board, &self.list_id, self.draft.clone())
    }

    fn description(&self) -> String {
        format!("Add card: '{}' to {}", self.draft.title, self.list_id)
    }
}

/// Merge partial fields into a card
pub struct UpdateCard {
    pub list_id: String,
    pub card_id: String,
    pub updates: CardUpdate,
}

impl Command for UpdateCard {
    fn apply(&self, board: &Board) -> Board {
        operations::update_card(board, &self.list_id, &self.card_id, self.updates.clone())
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

pub struct DeleteCard {
    pub list_id: String,
    pub card_id: String,
}

impl Command for DeleteCard {
    fn apply(&self, board: &Board) -> Board {
        operations::delete_card(board, &self.list_id, &self.card_id)
    }

    fn description(&self) -> String {
        format!("Delete card {} from {}", self.card_id, self.list_id)
    }
}

/// Move a card next to another card or to the end of a list
pub struct MoveCard {
    pub card_id: String,
    pub target: DropTarget,
}

impl Command for MoveCard {
    fn apply(&self, board: &Board) -> Board {
        drag::move_card(board, &self.card_id, &self.target)
    }

    fn description(&self) -> String {
        match &self.target {
            DropTarget::Card(over_id) => format!("Move card {} onto card {}", self.card_id, over_id),
            DropTarget::List(list_id) => format!("Move card {} to list {}", self.card_id, list_id),
        }
    }
}
