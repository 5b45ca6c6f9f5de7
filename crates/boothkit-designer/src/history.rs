//! Snapshot-based undo/redo history.
//!
//! Each entry is the full serialized document. The cursor points at the
//! entry matching the live document; undo and redo move it and hand the
//! target snapshot back to the caller for restoring.

use boothkit_core::constants::HISTORY_CAPACITY;

/// Linear, bounded snapshot history.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    entries: Vec<String>,
    cursor: usize,
    capacity: usize,
    replay_depth: usize,
}

impl HistoryManager {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity: capacity.max(1),
            replay_depth: 0,
        }
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Commit a snapshot at the cursor.
    ///
    /// Entries after the cursor are discarded. A snapshot identical to the
    /// one at the cursor is not recorded again. Returns true when an entry
    /// was added.
    pub fn record(&mut self, snapshot: String) -> bool {
        if self.is_replaying() {
            tracing::debug!("Checkpoint suppressed during history replay");
            return false;
        }
        if self.entries.get(self.cursor) == Some(&snapshot) {
            return false;
        }

        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
            self.cursor = self.cursor.saturating_sub(1);
            tracing::debug!("History full, evicted oldest snapshot");
        }
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Snapshot an undo would restore.
    pub fn previous(&self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.entries.get(self.cursor - 1).map(String::as_str)
    }

    /// Snapshot a redo would restore.
    pub fn next(&self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.entries.get(self.cursor + 1).map(String::as_str)
    }

    /// Move the cursor back after the previous snapshot was restored.
    pub fn step_back(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor forward after the next snapshot was restored.
    pub fn step_forward(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Enter snapshot replay; checkpoints are refused until the matching
    /// [`end_replay`](Self::end_replay). Nests.
    pub fn begin_replay(&mut self) {
        self.replay_depth += 1;
    }

    pub fn end_replay(&mut self) {
        self.replay_depth = self.replay_depth.saturating_sub(1);
    }

    pub fn is_replaying(&self) -> bool {
        self.replay_depth > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// All snapshots, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}
