use crate::Board;

pub mod board_commands;
pub mod card_commands;
pub mod label_commands;
pub mod list_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use label_commands::*;
pub use list_commands::*;

/// Trait for domain commands that produce the next board state
/// Commands represent intent and can be executed, queued, and logged
pub trait Command: Send + Sync {
    /// Compute the next board from `board`, leaving `board` untouched
    fn apply(&self, board: &Board) -> Board;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
