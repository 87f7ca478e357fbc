use crate::projection::ProjectionCache;
use chrono::NaiveDate;
use kanbanity_core::{AppConfig, KanbanError, KanbanResult};
use kanbanity_domain::commands::{
    AddCard, AddLabel, AddList, Command, DeleteCard, DeleteLabel, DeleteList, MoveCard,
    ReorderLists, ReplaceBoard, ResolveDrop, UpdateCard, UpdateList,
};
use kanbanity_domain::{
    ActiveDragItem, Board, BoardFilters, BoardStats, CardDraft, CardUpdate, DragItem, DragSession,
    DropTarget, List, ListDraft, ListUpdate,
};
use kanbanity_persistence::{load, save, JsonFileStore, KeyValueStore};

/// Owns the current board and everything derived from it.
///
/// Every change goes through [`BoardStore::execute`]: the command computes
/// the next board from the current one, the store swaps it in, bumps the
/// revision and saves a snapshot. Commands that leave the board unchanged
/// are not committed and trigger no save.
///
/// # Example
/// ```
/// use kanbanity_domain::{seed, ListDraft};
/// use kanbanity_persistence::MemoryStore;
/// use kanbanity_state::BoardStore;
///
/// let mut store = BoardStore::open(MemoryStore::new(), "board", seed::initial_board());
/// assert!(store.add_list(ListDraft::new("Review")));
/// assert_eq!(store.board().lists.len(), 4);
/// ```
pub struct BoardStore<S: KeyValueStore> {
    storage: S,
    key: String,
    board: Board,
    revision: u64,
    drag: DragSession,
    projection: ProjectionCache,
    last_save_ok: bool,
}

impl<S: KeyValueStore> BoardStore<S> {
    /// Rehydrate from `storage`, using `fallback` when nothing usable is
    /// stored. Opening never writes.
    pub fn open(storage: S, key: impl Into<String>, fallback: Board) -> Self {
        let key = key.into();
        let board = load(&storage, &key, fallback);
        tracing::info!(
            "Opened board '{}' with {} lists from '{}'",
            board.title,
            board.lists.len(),
            key
        );

        Self {
            storage,
            key,
            board,
            revision: 0,
            drag: DragSession::new(),
            projection: ProjectionCache::new(),
            last_save_ok: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Advances by one on every committed change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Whether the most recent snapshot write went through
    pub fn last_save_succeeded(&self) -> bool {
        self.last_save_ok
    }

    /// Apply `command` to the current board. Returns whether the board
    /// changed; only changes are committed and saved.
    pub fn execute(&mut self, command: &dyn Command) -> bool {
        tracing::debug!("Executing: {}", command.description());

        let next = command.apply(&self.board);
        if next == self.board {
            tracing::debug!("No change, nothing to commit");
            return false;
        }

        self.commit(next);
        true
    }

    fn commit(&mut self, next: Board) {
        self.board = next;
        self.revision += 1;
        self.last_save_ok = save(&self.storage, &self.key, &self.board);
        if !self.last_save_ok {
            tracing::warn!(
                "Snapshot for revision {} not persisted, keeping it in memory",
                self.revision
            );
        }
    }

    pub fn add_list(&mut self, draft: ListDraft) -> bool {
        self.execute(&AddList { draft })
    }

    pub fn update_list(&mut self, list_id: &str, updates: ListUpdate) -> bool {
        self.execute(&UpdateList {
            list_id: list_id.to_string(),
            updates,
        })
    }

    pub fn delete_list(&mut self, list_id: &str) -> bool {
        self.execute(&DeleteList {
            list_id: list_id.to_string(),
        })
    }

    pub fn reorder_lists(&mut self, old_index: usize, new_index: usize) -> bool {
        self.execute(&ReorderLists {
            old_index,
            new_index,
        })
    }

    pub fn add_card(&mut self, list_id: &str, draft: CardDraft) -> bool {
        self.execute(&AddCard {
            list_id: list_id.to_string(),
            draft,
        })
    }

    pub fn update_card(&mut self, list_id: &str, card_id: &str, updates: CardUpdate) -> bool {
        self.execute(&UpdateCard {
            list_id: list_id.to_string(),
            card_id: card_id.to_string(),
            updates,
        })
    }

    pub fn delete_card(&mut self, list_id: &str, card_id: &str) -> bool {
        self.execute(&DeleteCard {
            list_id: list_id.to_string(),
            card_id: card_id.to_string(),
        })
    }

    pub fn move_card(&mut self, card_id: &str, target: DropTarget) -> bool {
        self.execute(&MoveCard {
            card_id: card_id.to_string(),
            target,
        })
    }

    pub fn add_label(&mut self, name: &str, color: &str) -> bool {
        self.execute(&AddLabel {
            name: name.to_string(),
            color: color.to_string(),
        })
    }

    /// Remove a label from the palette and from every card and list
    pub fn delete_label(&mut self, label_id: &str) -> bool {
        self.execute(&DeleteLabel {
            label_id: label_id.to_string(),
        })
    }

    pub fn replace_board(&mut self, board: Board) -> bool {
        self.execute(&ReplaceBoard { board })
    }

    /// Capture the dragged item for preview rendering. Does not touch the
    /// board.
    pub fn drag_start(&mut self, item: &DragItem) {
        self.drag.start(&self.board, item);
    }

    /// End the gesture and apply the drop. The session always returns to
    /// idle, whether or not the drop changed anything.
    pub fn drag_end(&mut self, active: &DragItem, over: Option<&DragItem>) -> bool {
        self.drag.finish();
        self.execute(&ResolveDrop {
            active: active.clone(),
            over: over.cloned(),
        })
    }

    pub fn active_drag_item(&self) -> Option<&ActiveDragItem> {
        self.drag.active_item()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Lists visible under `filters`, memoised until the board or the
    /// filters change.
    pub fn filtered_lists(&mut self, filters: &BoardFilters) -> &[List] {
        self.projection
            .get_or_compute(self.revision, &self.board, filters)
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats::for_today(&self.board)
    }

    pub fn stats_on(&self, today: NaiveDate) -> BoardStats {
        BoardStats::compute(&self.board, today)
    }

    pub fn into_board(self) -> Board {
        self.board
    }
}

impl BoardStore<JsonFileStore> {
    /// Open the board under the configured key in the configured storage
    /// directory.
    pub fn open_with_config(config: &AppConfig, fallback: Board) -> KanbanResult<Self> {
        let dir = config.effective_storage_dir().ok_or_else(|| {
            KanbanError::Storage("no storage directory configured or available".to_string())
        })?;
        tracing::debug!("Using storage directory {}", dir.display());

        Ok(Self::open(
            JsonFileStore::new(dir),
            config.effective_board_key(),
            fallback,
        ))
    }
}
