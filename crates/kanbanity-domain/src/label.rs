use serde::{Deserialize, Serialize};

use crate::id::{create_id, LABEL_PREFIX};

pub type LabelId = String;

/// A named, colored tag. `color` is a semantic color token understood by the
/// rendering layer (e.g. `retro-red`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub name: String,
    pub color: String,
}

impl Label {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: create_id(LABEL_PREFIX),
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}
