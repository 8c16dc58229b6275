//! EditorSession - per-component editing state and command dispatch.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use crate::edit;
use crate::keymap::{Command, KeyAction, Keymap, Keystroke};

use super::buffer::TextBuffer;
use super::debounce::DebounceTimer;
use super::history::{HistoryEntry, HistoryStack};
use super::selection::Selection;

/// Identity of the editable component owning a session.
///
/// History is keyed by this identity: commands and undo/redo from another
/// owner never touch a stack they don't own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(pub u64);

/// Editing state for one editable component.
///
/// Owns the buffer, selection, history, and debounce state for that
/// component; nothing is shared between sessions. Hosts create one session
/// per component identity (typically on focus) and drop it when the
/// component goes away.
#[derive(Debug)]
pub struct EditorSession {
    owner: OwnerId,
    buffer: TextBuffer,
    selection: Selection,
    history: HistoryStack,
    debounce: DebounceTimer,
    /// Snapshot waiting for the quiet period to elapse
    pending: Option<HistoryEntry>,
    keymap: Keymap,
}

impl EditorSession {
    /// Create a session over `text` with the embedded default keymap.
    ///
    /// The selection starts as a caret at the end of the text, matching
    /// where a browser places the cursor on focus.
    pub fn new(owner: OwnerId, text: &str) -> Self {
        let buffer = TextBuffer::from_text(text);
        let caret = buffer.len_chars();
        Self {
            owner,
            buffer,
            selection: Selection::caret(caret),
            history: HistoryStack::new(),
            debounce: DebounceTimer::default(),
            pending: None,
            keymap: Keymap::default(),
        }
    }

    /// Replace the keymap (builder style)
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// The owning component identity
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Current buffer content
    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    /// Current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The text covered by the current selection
    pub fn selected_text(&self) -> &str {
        self.buffer.slice(self.selection)
    }

    /// The undo/redo stack (read-only)
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Move the selection without recording history
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamp(self.buffer.len_chars());
    }

    /// Record the current state as a history snapshot immediately.
    ///
    /// This is the focus/click path: those events bypass the debounce so
    /// the state a user clicked into is always restorable.
    pub fn record_snapshot(&mut self) {
        let entry = HistoryEntry::new(self.buffer.content(), self.selection);
        self.history.push(self.owner, entry);
    }

    /// Report a content change from the host's input event.
    ///
    /// The buffer and selection update immediately; the history snapshot is
    /// deferred until the quiet period elapses, so a burst of keystrokes
    /// coalesces into a single undo step. Each change re-arms the timer and
    /// replaces the pending snapshot with the latest state.
    pub fn note_edit(&mut self, content: String, selection: Selection, now: Instant) {
        self.buffer.set_content(content);
        self.selection = selection.clamp(self.buffer.len_chars());
        self.pending = Some(HistoryEntry::new(self.buffer.content(), self.selection));
        self.debounce.arm(now);
    }

    /// Drive the debounce timer from the host's idle loop.
    ///
    /// Returns `true` if a pending snapshot was committed to history.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debounce.poll(now) {
            if let Some(entry) = self.pending.take() {
                self.history.push(self.owner, entry);
                return true;
            }
        }
        false
    }

    /// Dispatch a keystroke through the keymap.
    ///
    /// Returns `true` when the chord mapped to a command, in which case the
    /// host must suppress the default key behavior. Unmapped chords return
    /// `false` and the event proceeds as normal input. A panicking command
    /// is logged and swallowed; the host event loop must never unwind.
    pub fn handle_key(&mut self, keystroke: Keystroke) -> bool {
        match self.keymap.handle_keystroke(&keystroke) {
            KeyAction::Execute(command) => {
                let outcome = catch_unwind(AssertUnwindSafe(|| {
                    self.apply_command(command, keystroke)
                }));
                if let Err(payload) = outcome {
                    let message = payload
                        .downcast_ref::<&str>()
                        .map(|s| (*s).to_string())
                        .or_else(|| payload.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "non-string panic payload".to_string());
                    tracing::error!(?command, %message, "editing command panicked");
                }
                true
            }
            KeyAction::NoMatch => false,
        }
    }

    /// Execute a command directly, outside keymap dispatch.
    pub fn apply_command(&mut self, command: Command, keystroke: Keystroke) {
        // Commit any in-flight typing burst first so the command's pre-edit
        // snapshot sits on top of it rather than replacing it.
        self.flush_pending();

        tracing::debug!(?command, "executing editing command");
        match command {
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::NavigateForward => self.navigate(edit::Direction::Forward),
            Command::NavigateBackward => self.navigate(edit::Direction::Backward),
            Command::ToggleComment => self.edit_with(edit::toggle_comment),
            Command::WrapBracket => {
                if let Some(open) = keystroke.char_key() {
                    self.edit_with(|content, selection| {
                        edit::wrap_brackets(content, selection, open)
                    });
                }
            }
            Command::Unbound => {}
        }
    }

    fn flush_pending(&mut self) {
        if let Some(entry) = self.pending.take() {
            self.debounce.cancel();
            self.history.push(self.owner, entry);
        }
    }

    fn undo(&mut self) {
        if let Some(entry) = self.history.undo(self.owner).cloned() {
            self.restore(entry);
        }
    }

    fn redo(&mut self) {
        if let Some(entry) = self.history.redo(self.owner).cloned() {
            self.restore(entry);
        }
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.buffer.set_content(entry.content);
        self.selection = entry.selection.clamp(self.buffer.len_chars());
    }

    fn navigate(&mut self, direction: edit::Direction) {
        let Some(selection) = edit::tab_navigate(self.buffer.content(), self.selection, direction)
        else {
            return;
        };
        let pre = HistoryEntry::new(self.buffer.content(), self.selection);
        let post = HistoryEntry::new(self.buffer.content(), selection);
        self.history.push(self.owner, pre);
        self.history.push(self.owner, post);
        self.selection = selection;
    }

    fn edit_with(&mut self, f: impl FnOnce(&str, Selection) -> Option<edit::EditOutcome>) {
        let Some(outcome) = f(self.buffer.content(), self.selection) else {
            return;
        };
        let pre = HistoryEntry::new(self.buffer.content(), self.selection);
        let post = HistoryEntry::new(&outcome.content, outcome.selection);
        self.history.push(self.owner, pre);
        self.history.push(self.owner, post);
        self.buffer.set_content(outcome.content);
        self.selection = outcome.selection;
    }
}
