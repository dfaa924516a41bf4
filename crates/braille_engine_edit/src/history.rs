//! Linear undo/redo history
//!
//! Grids share unchanged rows between clones, so keeping one snapshot per
//! edit costs roughly the rows that edit touched.

use braille_engine::Grid;

/// Trait for types that support undo/redo operations
pub trait UndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation, `false` if there was nothing to undo
    fn undo(&mut self) -> bool;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation, `false` if there was nothing to redo
    fn redo(&mut self) -> bool;
}

#[derive(Clone, Debug)]
struct Snapshot {
    grid: Grid,
    description: String,
}

/// Snapshots plus the index of the current one.
///
/// Pushing after an undo drops the redo tail.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
    index: usize,
    limit: Option<usize>,
}

impl History {
    pub fn new(initial: Grid) -> Self {
        Self {
            snapshots: vec![Snapshot {
                grid: initial,
                description: String::new(),
            }],
            index: 0,
            limit: None,
        }
    }

    /// Keeps at most `limit` undo steps; older snapshots are dropped.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn current(&self) -> &Grid {
        &self.snapshots[self.index].grid
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn push(&mut self, grid: Grid, description: impl Into<String>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(Snapshot {
            grid,
            description: description.into(),
        });
        if let Some(limit) = self.limit {
            let excess = self.snapshots.len().saturating_sub(limit + 1);
            self.snapshots.drain(..excess);
        }
        self.index = self.snapshots.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn undo(&mut self) -> Option<&Grid> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    pub fn redo(&mut self) -> Option<&Grid> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    pub fn undo_description(&self) -> Option<String> {
        self.can_undo().then(|| self.snapshots[self.index].description.clone())
    }

    pub fn redo_description(&self) -> Option<String> {
        self.can_redo().then(|| self.snapshots[self.index + 1].description.clone())
    }

    /// Starts over with `grid` as the only snapshot.
    pub fn reset(&mut self, grid: Grid) {
        self.snapshots.clear();
        self.snapshots.push(Snapshot {
            grid,
            description: String::new(),
        });
        self.index = 0;
    }
}
