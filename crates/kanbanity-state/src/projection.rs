use kanbanity_domain::{filter_lists, Board, BoardFilters, List};

/// Filtered list sequence memoised on (board revision, filters).
#[derive(Debug, Clone, Default)]
pub struct ProjectionCache {
    key: Option<(u64, BoardFilters)>,
    lists: Vec<List>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the projection for `filters`, recomputing only when the
    /// revision or the filters differ from the cached ones.
    pub fn get_or_compute(&mut self, revision: u64, board: &Board, filters: &BoardFilters) -> &[List] {
        let fresh = matches!(&self.key, Some((rev, cached)) if *rev == revision && cached == filters);
        if !fresh {
            tracing::debug!("Recomputing projection at revision {}", revision);
            self.lists = filter_lists(board, filters);
            self.key = Some((revision, filters.clone()));
        }
        &self.lists
    }

    pub fn is_cached(&self, revision: u64, filters: &BoardFilters) -> bool {
        matches!(&self.key, Some((rev, cached)) if *rev == revision && cached == filters)
    }
}
