// SPDX-License-Identifier: MPL-2.0
//! Bounded, linear undo/redo history.
//!
//! The history keeps at most [`MAX_HISTORY`] snapshots. Recording a new
//! snapshot after an undo drops the abandoned redo branch, and recording at
//! capacity evicts the oldest snapshot.
//!
//! # Example
//!
//! ```
//! use filter_lens::domain::editing::History;
//!
//! let mut history = History::new();
//! history.record("a");
//! history.record("b");
//!
//! assert_eq!(history.undo(), Some(&"a"));
//! assert_eq!(history.undo(), None); // nothing to undo
//! assert_eq!(history.redo(), Some(&"b"));
//! ```

use std::collections::VecDeque;

/// Maximum number of snapshots retained by a [`History`].
pub const MAX_HISTORY: usize = 5;

/// Linear snapshot history with a cursor on the currently displayed entry.
///
/// Each slot owns its snapshot. Callers hand over a value with [`History::record`]
/// and only ever receive shared references back, so a stored snapshot can never be
/// mutated through the working copy it was taken from.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    /// `None` iff `entries` is empty.
    cursor: Option<usize>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> History<T> {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_HISTORY + 1),
            cursor: None,
        }
    }

    /// Records a new snapshot and moves the cursor onto it.
    ///
    /// Entries after the current cursor are discarded first. If the history then
    /// exceeds [`MAX_HISTORY`], the oldest entry is evicted.
    pub fn record(&mut self, snapshot: T) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.entries.truncate(keep);
        self.entries.push_back(snapshot);

        while self.entries.len() > MAX_HISTORY {
            self.entries.pop_front();
        }

        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps back one entry and returns it.
    ///
    /// Returns `None` without touching the history when already at the oldest
    /// entry or when the history is empty.
    pub fn undo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.entries.get(cursor - 1)
            }
            _ => None,
        }
    }

    /// Steps forward one entry and returns it.
    ///
    /// Returns `None` without touching the history when already at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                self.entries.get(cursor + 1)
            }
            _ => None,
        }
    }

    /// Returns the snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    /// Discards every entry and starts over from `seed`.
    pub fn reset(&mut self, seed: T) {
        self.entries.clear();
        self.entries.push_back(seed);
        self.cursor = Some(0);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry, `None` when empty.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.entries.len())
    }

    /// Iterates over the retained snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(items: &[char]) -> History<char> {
        let mut history = History::new();
        for item in items {
            history.record(*item);
        }
        history
    }

    fn contents(history: &History<char>) -> Vec<char> {
        history.iter().copied().collect()
    }

    #[test]
    fn new_history_is_empty_without_cursor() {
        let history: History<char> = History::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
        assert_eq!(history.current(), None);
    }

    #[test]
    fn record_moves_cursor_to_new_entry() {
        let history = history_of(&['A', 'B']);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(history.current(), Some(&'B'));
    }

    #[test]
    fn six_records_evict_the_oldest() {
        let history = history_of(&['A', 'B', 'C', 'D', 'E', 'F']);
        assert_eq!(contents(&history), vec!['B', 'C', 'D', 'E', 'F']);
        assert_eq!(history.cursor(), Some(4));
        assert_eq!(history.current(), Some(&'F'));
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut history = History::new();
        for value in 0..50 {
            history.record(value);
            assert!(history.len() <= MAX_HISTORY);
            if value % 3 == 0 {
                history.undo();
            }
        }
    }

    #[test]
    fn record_after_undo_discards_redo_branch() {
        let mut history = history_of(&['A', 'B', 'C']);

        assert_eq!(history.undo(), Some(&'B'));
        assert_eq!(history.cursor(), Some(1));

        history.record('D');
        assert_eq!(contents(&history), vec!['A', 'B', 'D']);
        assert_eq!(history.cursor(), Some(2));

        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), Some(&'D'));
    }

    #[test]
    fn record_after_full_undo_keeps_only_first_entry() {
        let mut history = history_of(&['A', 'B', 'C']);
        history.undo();
        history.undo();

        history.record('X');
        assert_eq!(contents(&history), vec!['A', 'X']);
    }

    #[test]
    fn undo_then_redo_restores_current() {
        let mut history = history_of(&['A', 'B', 'C']);
        history.undo();
        let before = history.current().copied();

        history.undo();
        history.redo();
        assert_eq!(history.current().copied(), before);
    }

    #[test]
    fn undo_at_oldest_entry_is_noop() {
        let mut history = history_of(&['A', 'B']);
        history.undo();

        assert!(!history.can_undo());
        assert_eq!(history.undo(), None);
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(contents(&history), vec!['A', 'B']);
    }

    #[test]
    fn redo_at_newest_entry_is_noop() {
        let mut history = history_of(&['A', 'B']);

        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
        assert_eq!(history.cursor(), Some(1));
        assert_eq!(contents(&history), vec!['A', 'B']);
    }

    #[test]
    fn undo_and_redo_on_empty_history_are_noops() {
        let mut history: History<char> = History::new();
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert!(history.is_empty());
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn reset_reseeds_with_single_entry() {
        let mut history = history_of(&['A', 'B', 'C']);
        history.reset('Z');

        assert_eq!(contents(&history), vec!['Z']);
        assert_eq!(history.cursor(), Some(0));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn eviction_after_undo_keeps_cursor_on_new_entry() {
        let mut history = history_of(&['A', 'B', 'C', 'D', 'E']);
        history.undo();
        history.record('F');
        assert_eq!(contents(&history), vec!['A', 'B', 'C', 'D', 'F']);

        history.record('G');
        assert_eq!(contents(&history), vec!['B', 'C', 'D', 'F', 'G']);
        assert_eq!(history.current(), Some(&'G'));
    }
}
