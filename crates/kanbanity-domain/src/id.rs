//! Identifier generation for board entities.

use uuid::Uuid;

pub const BOARD_PREFIX: &str = "board";
pub const LIST_PREFIX: &str = "list";
pub const CARD_PREFIX: &str = "card";
pub const LABEL_PREFIX: &str = "label";

/// Hex characters of randomness appended after the prefix (48 bits).
const SUFFIX_LEN: usize = 12;

/// Create a new identifier of the form `{prefix}-{random-suffix}`.
///
/// Uniqueness is probabilistic; collisions within a session are not checked.
pub fn create_id(prefix: &str) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(SUFFIX_LEN)
        .collect();
    format!("{}-{}", prefix, suffix)
}
