//! Board mutations.
//!
//! Every operation takes the current board by reference and returns the next
//! board; the input is never modified. Invalid input (a blank title, an
//! unknown id, an out-of-range index) is not an error: the returned board is
//! an unchanged copy of the input.

use crate::board::Board;
use crate::card::{Card, CardDraft, CardUpdate};
use crate::label::Label;
use crate::list::{List, ListDraft, ListTone, ListUpdate};

/// Trimmed title, or `None` when the title is blank.
pub fn normalized_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Move the element at `from` so that it ends up at index `to`.
///
/// Remove-then-insert: every element between the two indices shifts by one.
/// Out-of-range indices leave the sequence untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

pub fn add_list(board: &Board, draft: ListDraft) -> Board {
    let Some(title) = normalized_title(&draft.title) else {
        tracing::debug!("add_list ignored: blank title");
        return board.clone();
    };

    let mut list = List::new(title);
    list.tone = Some(
        draft
            .tone
            .unwrap_or_else(|| ListTone::for_position(board.lists.len())),
    );
    list.labels = draft.labels;
    if let Some(card_title) = draft.first_card_title.as_deref().and_then(normalized_title) {
        list.cards.push(Card::new(card_title));
    }

    let mut next = board.clone();
    next.lists.push(list);
    next
}

pub fn update_list(board: &Board, list_id: &str, updates: ListUpdate) -> Board {
    let Some(title) = normalized_title(&updates.title) else {
        tracing::debug!("update_list ignored: blank title for {}", list_id);
        return board.clone();
    };
    let Some(index) = board.list_index(list_id) else {
        tracing::debug!("update_list ignored: list {} not found", list_id);
        return board.clone();
    };

    let mut next = board.clone();
    let list = &mut next.lists[index];
    list.title = title;
    list.tone = updates.tone;
    list.labels = updates.labels;
    next
}

/// Remove a list together with its cards. Unknown ids are ignored.
pub fn delete_list(board: &Board, list_id: &str) -> Board {
    let mut next = board.clone();
    next.lists.retain(|list| list.id != list_id);
    next
}

pub fn reorder_lists(board: &Board, old_index: usize, new_index: usize) -> Board {
    let mut next = board.clone();
    array_move(&mut next.lists, old_index, new_index);
    next
}

pub fn add_card(board: &Board, list_id: &str, draft: CardDraft) -> Board {
    let Some(title) = normalized_title(&draft.title) else {
        tracing::debug!("add_card ignored: blank title");
        return board.clone();
    };
    let Some(index) = board.list_index(list_id) else {
        tracing::debug!("add_card ignored: list {} not found", list_id);
        return board.clone();
    };

    let mut next = board.clone();
    next.lists[index].cards.push(Card::from_draft(title, draft));
    next
}

/// Merge `updates` into the card. A title present in `updates` must not be
/// blank, otherwise nothing changes.
pub fn update_card(board: &Board, list_id: &str, card_id: &str, mut updates: CardUpdate) -> Board {
    if updates.is_empty() {
        return board.clone();
    }
    if let Some(title) = updates.title.take() {
        match normalized_title(&title) {
            Some(trimmed) => updates.title = Some(trimmed),
            None => {
                tracing::debug!("update_card ignored: blank title for {}", card_id);
                return board.clone();
            }
        }
    }

    let Some(list_index) = board.list_index(list_id) else {
        tracing::debug!("update_card ignored: list {} not found", list_id);
        return board.clone();
    };
    let Some(card_index) = board.lists[list_index].card_index(card_id) else {
        tracing::debug!("update_card ignored: card {} not in {}", card_id, list_id);
        return board.clone();
    };

    let mut next = board.clone();
    next.lists[list_index].cards[card_index].update(updates);
    next
}

/// Remove a card from the given list. Unknown ids are ignored.
pub fn delete_card(board: &Board, list_id: &str, card_id: &str) -> Board {
    let mut next = board.clone();
    if let Some(list) = next.lists.iter_mut().find(|list| list.id == list_id) {
        list.cards.retain(|card| card.id != card_id);
    }
    next
}

/// Append a new label to the board's palette. Labels are not deduplicated by
/// name and are not attached to any card or list.
pub fn add_label(board: &Board, name: impl Into<String>, color: impl Into<String>) -> Board {
    let mut next = board.clone();
    next.available_labels.push(Label::new(name, color));
    next
}

/// Remove a label from the palette and from every card and list carrying a
/// copy of it.
pub fn delete_label(board: &Board, label_id: &str) -> Board {
    let mut next = board.clone();
    next.available_labels.retain(|label| label.id != label_id);
    for list in &mut next.lists {
        list.labels.retain(|label| label.id != label_id);
        for card in &mut list.cards {
            card.labels.retain(|label| label.id != label_id);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardPriority;
    use crate::field_update::FieldUpdate;

    fn board_with_list(title: &str) -> (Board, String) {
        let board = add_list(&Board::new("Test"), ListDraft::new(title));
        let list_id = board.lists[0].id.clone();
        (board, list_id)
    }

    #[test]
    fn test_array_move_forward_and_back() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        array_move(&mut items, 0, 2);
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
        array_move(&mut items, 2, 0);
        assert_eq!(items, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_array_move_out_of_range_is_noop() {
        let mut items = vec![1, 2, 3];
        array_move(&mut items, 0, 3);
        array_move(&mut items, 5, 0);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_list_appends_in_order() {
        let board = Board::new("Test");
        let board = add_list(&board, ListDraft::new("A"));
        let board = add_list(&board, ListDraft::new("B"));

        let titles: Vec<&str> = board.lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_add_list_trims_and_rejects_blank() {
        let board = Board::new("Test");
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(add_list(&board, ListDraft::new(blank)), board);
        }

        let board = add_list(&board, ListDraft::new("  Review  "));
        assert_eq!(board.lists[0].title, "Review");
    }

    #[test]
    fn test_add_list_seeds_first_card() {
        let board = add_list(
            &Board::new("Test"),
            ListDraft::new("Todo").with_first_card("  First  "),
        );
        assert_eq!(board.lists[0].cards.len(), 1);
        assert_eq!(board.lists[0].cards[0].title, "First");

        let board = add_list(&board, ListDraft::new("Empty").with_first_card("   "));
        assert!(board.lists[1].cards.is_empty());
    }

    #[test]
    fn test_add_list_tone_rotation() {
        let board = add_list(&Board::new("Test"), ListDraft::new("A"));
        let board = add_list(&board, ListDraft::new("B"));
        let board = add_list(&board, ListDraft::new("C").with_tone(ListTone::Red));

        assert_eq!(board.lists[0].tone, Some(ListTone::Blue));
        assert_eq!(board.lists[1].tone, Some(ListTone::Orange));
        assert_eq!(board.lists[2].tone, Some(ListTone::Red));
    }

    #[test]
    fn test_add_list_does_not_touch_input() {
        let board = Board::new("Test");
        let next = add_list(&board, ListDraft::new("A"));
        assert!(board.lists.is_empty());
        assert_eq!(next.lists.len(), 1);
    }

    #[test]
    fn test_update_list_replaces_fields() {
        let (board, list_id) = board_with_list("Todo");
        let label = Label::new("Team", "retro-blue");
        let board = update_list(
            &board,
            &list_id,
            ListUpdate {
                title: " Backlog ".to_string(),
                tone: Some(ListTone::Teal),
                labels: vec![label.clone()],
            },
        );

        let list = &board.lists[0];
        assert_eq!(list.title, "Backlog");
        assert_eq!(list.tone, Some(ListTone::Teal));
        assert_eq!(list.labels, vec![label]);
    }

    #[test]
    fn test_update_list_unknown_or_blank_is_noop() {
        let (board, list_id) = board_with_list("Todo");
        let updates = ListUpdate {
            title: "Renamed".to_string(),
            ..ListUpdate::default()
        };
        assert_eq!(update_list(&board, "list-missing", updates), board);

        let blank = ListUpdate {
            title: "  ".to_string(),
            ..ListUpdate::default()
        };
        assert_eq!(update_list(&board, &list_id, blank), board);
    }

    #[test]
    fn test_delete_list_is_idempotent() {
        let (board, list_id) = board_with_list("Todo");
        let board = add_card(&board, &list_id, CardDraft::new("A"));

        let deleted = delete_list(&board, &list_id);
        assert!(deleted.lists.is_empty());
        assert_eq!(delete_list(&deleted, &list_id), deleted);
        assert_eq!(delete_list(&board, "list-missing"), board);
    }

    #[test]
    fn test_reorder_lists() {
        let board = ["A", "B", "C"]
            .iter()
            .fold(Board::new("Test"), |b, t| add_list(&b, ListDraft::new(*t)));

        let board = reorder_lists(&board, 2, 0);
        let titles: Vec<&str> = board.lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);

        assert_eq!(reorder_lists(&board, 0, 7), board);
    }

    #[test]
    fn test_add_card_appends_with_fields() {
        let (board, list_id) = board_with_list("Todo");
        let label = Label::new("Bug", "retro-red");
        let board = add_card(&board, &list_id, CardDraft::new("First"));
        let board = add_card(
            &board,
            &list_id,
            CardDraft::new("  Second ")
                .with_content("details")
                .with_labels(vec![label.clone()])
                .with_due_date("2024-05-01")
                .with_priority(CardPriority::High),
        );

        let cards = &board.lists[0].cards;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].title, "Second");
        assert_eq!(cards[1].content.as_deref(), Some("details"));
        assert_eq!(cards[1].labels, vec![label]);
        assert_eq!(cards[1].due_date.as_deref(), Some("2024-05-01"));
        assert_eq!(cards[1].priority, Some(CardPriority::High));
        assert_ne!(cards[0].id, cards[1].id);
    }

    #[test]
    fn test_add_card_blank_title_or_unknown_list_is_noop() {
        let (board, list_id) = board_with_list("Todo");
        for blank in ["", " ", "\n\t "] {
            assert_eq!(add_card(&board, &list_id, CardDraft::new(blank)), board);
        }
        assert_eq!(add_card(&board, "list-missing", CardDraft::new("A")), board);
    }

    #[test]
    fn test_update_card_shallow_merge() {
        let (board, list_id) = board_with_list("Todo");
        let board = add_card(
            &board,
            &list_id,
            CardDraft::new("Task").with_content("keep me"),
        );
        let card_id = board.lists[0].cards[0].id.clone();

        let board = update_card(
            &board,
            &list_id,
            &card_id,
            CardUpdate {
                title: Some(" Renamed ".to_string()),
                priority: FieldUpdate::Set(CardPriority::Medium),
                ..CardUpdate::default()
            },
        );

        let card = &board.lists[0].cards[0];
        assert_eq!(card.id, card_id);
        assert_eq!(card.title, "Renamed");
        assert_eq!(card.content.as_deref(), Some("keep me"));
        assert_eq!(card.priority, Some(CardPriority::Medium));
    }

    #[test]
    fn test_update_card_noop_cases() {
        let (board, list_id) = board_with_list("Todo");
        let board = add_card(&board, &list_id, CardDraft::new("Task"));
        let card_id = board.lists[0].cards[0].id.clone();
        let rename = CardUpdate {
            title: Some("New".to_string()),
            ..CardUpdate::default()
        };

        assert_eq!(update_card(&board, "list-missing", &card_id, rename.clone()), board);
        assert_eq!(update_card(&board, &list_id, "card-missing", rename), board);

        let blank = CardUpdate {
            title: Some("   ".to_string()),
            content: FieldUpdate::Set("ignored".to_string()),
            ..CardUpdate::default()
        };
        assert_eq!(update_card(&board, &list_id, &card_id, blank), board);
    }

    #[test]
    fn test_delete_card_is_idempotent() {
        let (board, list_id) = board_with_list("Todo");
        let board = add_card(&board, &list_id, CardDraft::new("A"));
        let board = add_card(&board, &list_id, CardDraft::new("B"));
        let card_id = board.lists[0].cards[0].id.clone();

        let deleted = delete_card(&board, &list_id, &card_id);
        assert_eq!(deleted.lists[0].cards.len(), 1);
        assert_eq!(deleted.lists[0].cards[0].title, "B");
        assert_eq!(delete_card(&deleted, &list_id, &card_id), deleted);
        assert_eq!(delete_card(&board, "list-missing", &card_id), board);
    }

    #[test]
    fn test_add_label_does_not_deduplicate() {
        let board = Board::new("Test");
        let board = add_label(&board, "Bug", "red");
        let board = add_label(&board, "Bug", "red");

        assert_eq!(board.available_labels.len(), 2);
        assert_eq!(board.available_labels[0].name, board.available_labels[1].name);
        assert_ne!(board.available_labels[0].id, board.available_labels[1].id);
    }

    #[test]
    fn test_delete_label_cascades() {
        let board = add_label(&Board::new("Test"), "Bug", "retro-red");
        let board = add_label(&board, "Feature", "retro-blue");
        let bug = board.available_labels[0].clone();
        let feature = board.available_labels[1].clone();

        let board = add_list(
            &board,
            ListDraft::new("Todo").with_labels(vec![bug.clone()]),
        );
        let list_id = board.lists[0].id.clone();
        let board = add_card(
            &board,
            &list_id,
            CardDraft::new("A").with_labels(vec![bug.clone(), feature.clone()]),
        );

        let board = delete_label(&board, &bug.id);
        assert_eq!(board.available_labels, vec![feature.clone()]);
        assert!(board.lists[0].labels.is_empty());
        assert_eq!(board.lists[0].cards[0].labels, vec![feature]);
        assert_eq!(delete_label(&board, &bug.id), board);
    }
}
