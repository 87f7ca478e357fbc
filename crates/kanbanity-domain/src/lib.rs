pub mod board;
pub mod card;
pub mod commands;
pub mod drag;
pub mod field_update;
pub mod filter;
pub mod id;
pub mod label;
pub mod list;
pub mod operations;
pub mod search;
pub mod seed;
pub mod stats;

pub use board::{Board, BoardId};
pub use card::{Card, CardDraft, CardId, CardPriority, CardUpdate};
pub use drag::{resolve_drop, ActiveDragItem, DragItem, DragKind, DragSession, DropTarget};
pub use field_update::FieldUpdate;
pub use filter::{filter_lists, BoardFilters, FilterScope};
pub use id::create_id;
pub use label::{Label, LabelId};
pub use list::{List, ListDraft, ListId, ListTone, ListUpdate};
pub use stats::{compute_stats, BoardStats, BusiestList};
