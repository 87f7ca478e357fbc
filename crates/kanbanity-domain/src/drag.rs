//! Drag-and-drop resolution.
//!
//! The pointer layer reports which item is being dragged and which item it
//! was dropped over. [`DragSession`] tracks the in-flight gesture for preview
//! rendering only; [`resolve_drop`] computes the next board from the drop and
//! never looks at the session.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::card::{Card, CardId};
use crate::list::{List, ListId};
use crate::operations::{array_move, reorder_lists};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragKind {
    List,
    Card,
}

/// A draggable item as reported by the pointer layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DragKind,
    /// Owning list, for cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<ListId>,
}

impl DragItem {
    pub fn list(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: DragKind::List,
            list_id: None,
        }
    }

    pub fn card(id: impl Into<String>, list_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: DragKind::Card,
            list_id: Some(list_id.into()),
        }
    }
}

/// Where a dragged card was released.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Over another card: take that card's slot in its list
    Card(CardId),
    /// Over a list's empty space: go to the end of that list
    List(ListId),
}

impl From<&DragItem> for DropTarget {
    fn from(item: &DragItem) -> Self {
        match item.kind {
            DragKind::Card => DropTarget::Card(item.id.clone()),
            DragKind::List => DropTarget::List(item.id.clone()),
        }
    }
}

/// Snapshot of the dragged entity, for the floating preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveDragItem {
    List(List),
    Card { card: Card, list_id: ListId },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDragItem),
}

/// State of a single drag gesture: Idle → Dragging on start, back to Idle on
/// end regardless of the drop outcome.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn active_item(&self) -> Option<&ActiveDragItem> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(item) => Some(item),
        }
    }

    /// Capture the dragged entity. Items that are not on the board leave the
    /// session idle.
    pub fn start(&mut self, board: &Board, item: &DragItem) {
        let captured = match item.kind {
            DragKind::List => board.list(&item.id).cloned().map(ActiveDragItem::List),
            DragKind::Card => board.list_containing(&item.id).and_then(|list| {
                list.card(&item.id).map(|card| ActiveDragItem::Card {
                    card: card.clone(),
                    list_id: list.id.clone(),
                })
            }),
        };

        self.state = match captured {
            Some(active) => DragState::Dragging(active),
            None => {
                tracing::debug!("drag start ignored: {:?} {} not on board", item.kind, item.id);
                DragState::Idle
            }
        };
    }

    /// Return to idle, handing back whatever was being dragged.
    pub fn finish(&mut self) -> Option<ActiveDragItem> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(item) => Some(item),
        }
    }
}

/// Compute the board after `active` is dropped over `over`.
///
/// Without a drop target, or when any lookup fails, the board comes back
/// unchanged.
pub fn resolve_drop(board: &Board, active: &DragItem, over: Option<&DragItem>) -> Board {
    let Some(over) = over else {
        tracing::debug!("drop of {} without target", active.id);
        return board.clone();
    };

    match active.kind {
        DragKind::List => move_list(board, &active.id, over),
        DragKind::Card => move_card(board, &active.id, &DropTarget::from(over)),
    }
}

fn move_list(board: &Board, list_id: &str, over: &DragItem) -> Board {
    let over_list_id = match over.kind {
        DragKind::List => Some(over.id.as_str()),
        DragKind::Card => over
            .list_id
            .as_deref()
            .or_else(|| board.list_containing(&over.id).map(|list| list.id.as_str())),
    };
    let Some(over_list_id) = over_list_id else {
        return board.clone();
    };
    if over_list_id == list_id {
        return board.clone();
    }

    match (board.list_index(list_id), board.list_index(over_list_id)) {
        (Some(old_index), Some(new_index)) => reorder_lists(board, old_index, new_index),
        _ => {
            tracing::debug!("list drop aborted: {} or {} not found", list_id, over_list_id);
            board.clone()
        }
    }
}

/// Move a card within its list or into another list.
///
/// The card leaves its source list and enters its destination in the same
/// returned board, so it is never present in zero or two lists.
pub fn move_card(board: &Board, card_id: &str, target: &DropTarget) -> Board {
    let Some(source_index) = board.list_index_containing(card_id) else {
        tracing::debug!("card drop aborted: {} not on board", card_id);
        return board.clone();
    };
    let Some(active_index) = board.lists[source_index].card_index(card_id) else {
        return board.clone();
    };

    let destination_index = match target {
        DropTarget::Card(over_id) => board.list_index_containing(over_id),
        DropTarget::List(over_id) => board.list_index(over_id),
    };
    let Some(destination_index) = destination_index else {
        tracing::debug!("card drop aborted: target {:?} not on board", target);
        return board.clone();
    };

    if source_index == destination_index {
        let cards = &board.lists[source_index].cards;
        let target_index = match target {
            DropTarget::Card(over_id) => cards.iter().position(|card| &card.id == over_id),
            DropTarget::List(_) => cards.len().checked_sub(1),
        };
        let Some(target_index) = target_index else {
            return board.clone();
        };
        if target_index == active_index {
            return board.clone();
        }

        let mut next = board.clone();
        array_move(&mut next.lists[source_index].cards, active_index, target_index);
        return next;
    }

    let mut next = board.clone();
    let card = next.lists[source_index].cards.remove(active_index);
    let destination = &mut next.lists[destination_index].cards;
    let insert_at = match target {
        DropTarget::Card(over_id) => destination
            .iter()
            .position(|existing| &existing.id == over_id)
            .unwrap_or(destination.len()),
        DropTarget::List(_) => destination.len(),
    };
    destination.insert(insert_at, card);
    next
}
