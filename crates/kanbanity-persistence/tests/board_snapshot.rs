use kanbanity_core::{KanbanError, KanbanResult};
use kanbanity_domain::seed::initial_board;
use kanbanity_domain::{Board, CardPriority, ListTone};
use kanbanity_persistence::{load, save, JsonFileStore, KeyValueStore, MemoryStore};
use mockall::mock;
use serde_json::json;
use tempfile::tempdir;

mock! {
    pub Storage {}

    impl KeyValueStore for Storage {
        fn get(&self, key: &str) -> KanbanResult<Option<Vec<u8>>>;
        fn set(&self, key: &str, value: &[u8]) -> KanbanResult<()>;
        fn remove(&self, key: &str) -> KanbanResult<()>;
        fn contains(&self, key: &str) -> KanbanResult<bool>;
    }
}

fn decorated_board() -> Board {
    let mut board = initial_board();
    let card = &mut board.lists[0].cards[0];
    card.due_date = Some("2024-03-01".to_string());
    card.priority = Some(CardPriority::High);
    board.lists[1].tone = Some(ListTone::Teal);
    board
}

#[test]
fn test_round_trip_through_json_file_store() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let board = decorated_board();

    assert!(save(&store, "kanbanity-board", &board));
    let loaded = load(&store, "kanbanity-board", Board::new("fallback"));

    assert_eq!(loaded, board);
}

#[test]
fn test_round_trip_through_memory_store() {
    let store = MemoryStore::new();
    let board = decorated_board();

    assert!(save(&store, "board", &board));

    assert_eq!(load(&store, "board", Board::new("fallback")), board);
}

#[test]
fn test_snapshot_uses_camel_case_keys() {
    let store = MemoryStore::new();
    save(&store, "board", &decorated_board());

    let bytes = store.get("board").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert!(value.get("availableLabels").is_some());
    assert_eq!(value["lists"][0]["cards"][0]["dueDate"], json!("2024-03-01"));
    assert_eq!(value["lists"][0]["cards"][0]["priority"], json!("high"));
    assert!(value["lists"][2]["cards"][0].get("dueDate").is_none());
}

#[test]
fn test_partial_snapshot_defaults_missing_collections() {
    let store = MemoryStore::new();
    let legacy = json!({
        "id": "board-1",
        "title": "Legacy",
        "lists": [
            { "id": "list-1", "title": "Todo", "cards": [ { "id": "card-1", "title": "Only" } ] },
            { "id": "list-2", "title": "Done" }
        ]
    });
    store
        .set("board", &serde_json::to_vec(&legacy).unwrap())
        .unwrap();

    let board = load(&store, "board", initial_board());

    assert_eq!(board.title, "Legacy");
    assert!(board.available_labels.is_empty());
    assert!(board.lists[1].cards.is_empty());
    assert!(board.lists[0].cards[0].labels.is_empty());
}

#[test]
fn test_null_collections_keep_stored_board() {
    let store = MemoryStore::new();
    let stored = json!({
        "id": "board-7",
        "title": "Mine",
        "availableLabels": null,
        "lists": [
            { "id": "list-1", "title": "Todo", "labels": null, "cards": [
                { "id": "card-1", "title": "Write report", "labels": null }
            ]}
        ]
    });
    store
        .set("board", &serde_json::to_vec(&stored).unwrap())
        .unwrap();

    let board = load(&store, "board", initial_board());

    assert_eq!(board.title, "Mine");
    assert!(board.available_labels.is_empty());
    assert!(board.lists[0].labels.is_empty());
    assert_eq!(board.lists[0].cards[0].title, "Write report");
    assert!(board.lists[0].cards[0].labels.is_empty());
}

#[test]
fn test_corrupt_file_yields_fallback() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("board.json"), "{\"lists\": [").unwrap();
    let store = JsonFileStore::new(dir.path());

    let board = load(&store, "board", initial_board());

    assert_eq!(board, initial_board());
}

#[test]
fn test_read_failure_yields_fallback() {
    let mut storage = MockStorage::new();
    storage
        .expect_get()
        .returning(|_| Err(KanbanError::Storage("storage is disabled".to_string())));

    let board = load(&storage, "board", initial_board());

    assert_eq!(board, initial_board());
}

#[test]
fn test_write_failure_is_absorbed() {
    let mut storage = MockStorage::new();
    storage.expect_set().times(1).returning(|key, value| {
        Err(KanbanError::QuotaExceeded {
            key: key.to_string(),
            needed: value.len(),
            limit: 0,
        })
    });

    assert!(!save(&storage, "board", &initial_board()));
}
