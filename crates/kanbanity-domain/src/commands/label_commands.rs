use super::Command;
use crate::operations;
use crate::Board;

/// Add a label to the board palette
pub struct AddLabel {
    pub name: String,
    pub color: String,
}

impl Command for AddLabel {
    fn apply(&self, board: &Board) -> Board {
        operations::add_label(board, self.name.clone(), self.color.clone())
    }

    fn description(&self) -> String {
        format!("Add label: '{}'", self.name)
    }
}

/// Remove a label from the palette and from every card and list
pub struct DeleteLabel {
    pub label_id: String,
}

impl Command for DeleteLabel {
    fn apply(&self, board: &Board) -> Board {
        operations::delete_label(board, &self.label_id)
    }

    fn description(&self) -> String {
        format!("Delete label {}", self.label_id)
    }
}
