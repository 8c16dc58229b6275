//! Editing session state for a multiline prompt input.
//!
//! One [`EditorSession`] exists per editable component identity and owns
//! everything the editing commands touch:
//!
//! - [`TextBuffer`]: the string content, replaced wholesale on every command
//! - [`Selection`]: half-open character-offset range into the buffer
//! - [`HistoryStack`]: undo/redo log of (content, selection) snapshots
//! - [`DebounceTimer`]: coalesces typing bursts into single undo steps
//!
//! Hosts wire their input events to the session: keystrokes go through
//! [`EditorSession::handle_key`], content changes through
//! [`EditorSession::note_edit`], and an idle-loop tick through
//! [`EditorSession::tick`].

mod buffer;
mod debounce;
mod history;
mod selection;
mod session;

pub use buffer::TextBuffer;
pub use debounce::{DebounceTimer, CHANGE_DEBOUNCE};
pub use history::{HistoryEntry, HistoryStack};
pub use selection::Selection;
pub use session::{EditorSession, OwnerId};
