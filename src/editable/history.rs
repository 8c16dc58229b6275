//! Undo/redo history as a cursor into a list of full snapshots.
//!
//! Unlike a delta-based edit log, every entry is a complete (content,
//! selection) snapshot; undo and redo just move a cursor over the list. The
//! stack is keyed by the identity of the component that owns it: pushes from
//! a new owner reset the stack, and undo/redo requests from a non-owner are
//! no-ops.

use super::selection::Selection;
use super::session::OwnerId;

/// A saved (content, selection) snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Buffer content at the time of the snapshot
    pub content: String,
    /// Selection at the time of the snapshot
    pub selection: Selection,
}

impl HistoryEntry {
    /// Create a snapshot
    pub fn new(content: impl Into<String>, selection: Selection) -> Self {
        Self {
            content: content.into(),
            selection,
        }
    }
}

/// Ordered history entries plus a cursor index, keyed by owner identity.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    owner: Option<OwnerId>,
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl HistoryStack {
    /// Create an empty, unowned stack
    pub fn new() -> Self {
        Self::default()
    }

    /// The identity currently owning this stack
    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry at the cursor, if any
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Record a snapshot for `owner`.
    ///
    /// A push from a different owner resets the stack to just this entry.
    /// Otherwise entries past the cursor are discarded (branch truncation),
    /// the entry is appended unless identical to the current tip, and the
    /// cursor moves to the new tip.
    pub fn push(&mut self, owner: OwnerId, entry: HistoryEntry) {
        if self.owner != Some(owner) {
            self.owner = Some(owner);
            self.entries = vec![entry];
            self.cursor = 0;
            return;
        }

        self.entries.truncate(self.cursor + 1);
        if self.entries.last() != Some(&entry) {
            self.entries.push(entry);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back and return the entry there.
    ///
    /// Returns `None` for a mismatched owner or an empty stack. At the
    /// bottom of the stack the first entry is returned unchanged.
    pub fn undo(&mut self, owner: OwnerId) -> Option<&HistoryEntry> {
        if self.owner != Some(owner) {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor)
    }

    /// Step the cursor forward and return the entry there.
    ///
    /// Returns `None` for a mismatched owner or an empty stack. At the tip
    /// the tip entry is returned unchanged.
    pub fn redo(&mut self, owner: OwnerId) -> Option<&HistoryEntry> {
        if self.owner != Some(owner) {
            return None;
        }
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
        }
        self.entries.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: OwnerId = OwnerId(1);
    const OTHER: OwnerId = OwnerId(2);

    fn entry(text: &str) -> HistoryEntry {
        HistoryEntry::new(text, Selection::caret(text.len()))
    }

    #[test]
    fn test_push_and_undo() {
        let mut stack = HistoryStack::new();
        stack.push(OWNER, entry("a"));
        stack.push(OWNER, entry("ab"));

        let restored = stack.undo(OWNER).unwrap();
        assert_eq!(restored.content, "a");
    }

    #[test]
    fn test_undo_at_bottom_returns_first_entry() {
        let mut stack = HistoryStack::new();
        stack.push(OWNER, entry("a"));

        assert_eq!(stack.undo(OWNER).unwrap().content, "a");
        assert_eq!(stack.undo(OWNER).unwrap().content, "a");
    }

    #[test]
    fn test_redo_beyond_tip_returns_tip() {
        let mut stack = HistoryStack::new();
        stack.push(OWNER, entry("a"));
        stack.push(OWNER, entry("ab"));

        assert_eq!(stack.redo(OWNER).unwrap().content, "ab");
    }

    #[test]
    fn test_branch_truncation() {
        let mut stack = HistoryStack::new();
        stack.push(OWNER, entry("A"));
        stack.push(OWNER, entry("B"));
        stack.push(OWNER, entry("C"));

        stack.undo(OWNER);
        stack.undo(OWNER);
        stack.push(OWNER, entry("D"));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.entries[0].content, "A");
        assert_eq!(stack.entries[1].content, "D");
        assert_eq!(stack.cursor(), 1);
    }

    #[test]
    fn test_duplicate_tip_skipped() {
        let mut stack = HistoryStack::new();
        stack.push(OWNER, entry("a"));
        stack.push(OWNER, entry("a"));
        assert_eq!(stack.len(), 1);

        // Same content, different selection: not a duplicate
        stack.push(OWNER, HistoryEntry::new("a", Selection::caret(0)));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_owner_switch_resets() {
        let mut stack = HistoryStack::new();
        stack.push(OWNER, entry("a"));
        stack.push(OWNER, entry("ab"));

        stack.push(OTHER, entry("x"));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.owner(), Some(OTHER));
        assert_eq!(stack.current().unwrap().content, "x");
    }

    #[test]
    fn test_mismatched_owner_is_noop() {
        let mut stack = HistoryStack::new();
        stack.push(OWNER, entry("a"));
        stack.push(OWNER, entry("ab"));

        assert!(stack.undo(OTHER).is_none());
        assert!(stack.redo(OTHER).is_none());
        // Cursor untouched
        assert_eq!(stack.current().unwrap().content, "ab");
    }
}
