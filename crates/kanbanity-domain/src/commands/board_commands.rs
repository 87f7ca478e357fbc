use super::Command;
use crate::drag::{self, DragItem};
use crate::Board;

/// Replace the whole board
pub struct ReplaceBoard {
    pub board: Board,
}

impl Command for ReplaceBoard {
    fn apply(&self, _board: &Board) -> Board {
        self.board.clone()
    }

    fn description(&self) -> String {
        format!("Replace board with '{}'", self.board.title)
    }
}

/// Apply the outcome of a finished drag gesture
pub struct ResolveDrop {
    pub active: DragItem,
    pub over: Option<DragItem>,
}

impl Command for ResolveDrop {
    fn apply(&self, board: &Board) -> Board {
        drag::resolve_drop(board, &self.active, self.over.as_ref())
    }

    fn description(&self) -> String {
        match &self.over {
            Some(over) => format!(
                "Drop {:?} {} over {:?} {}",
                self.active.kind, self.active.id, over.kind, over.id
            ),
            None => format!("Drop {:?} {} outside any target", self.active.kind, self.active.id),
        }
    }
}
