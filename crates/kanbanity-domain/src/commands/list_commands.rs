use super::Command;
use crate::operations;
use crate::{Board, ListDraft, ListUpdate};

/// Append a new list
pub struct AddList {
    pub draft: ListDraft,
}

impl Command for AddList {
    fn apply(&self, board: &Board) -> Board {
        operations::add_list(board, self.draft.clone())
    }

    fn description(&self) -> String {
        format!("Add list: '{}'", self.draft.title)
    }
}

/// Replace a list's title, tone and labels
pub struct UpdateList {
    pub list_id: String,
    pub updates: ListUpdate,
}

impl Command for UpdateList {
    fn apply(&self, board: &Board) -> Board {
        operations::update_list(board, &self.list_id, self.updates.clone())
    }

    fn description(&self) -> String {
        format!("Update list {}", self.list_id)
    }
}

/// Delete a list and its cards
pub struct DeleteList {
    pub list_id: String,
}

impl Command for DeleteList {
    fn apply(&self, board: &Board) -> Board {
        operations::delete_list(board, &self.list_id)
    }

    fn description(&self) -> String {
        format!("Delete list {}", self.list_id)
    }
}

pub struct ReorderLists {
    pub old_index: usize,
    pub new_index: usize,
}

impl Command for ReorderLists {
    fn apply(&self, board: &Board) -> Board {
        operations::reorder_lists(board, self.old_index, self.new_index)
    }

    fn description(&self) -> String {
        format!("Move list {} to {}", self.old_index, self.new_index)
    }
}
