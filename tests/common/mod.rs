//! Shared helpers for integration tests

use promptpad::editable::{EditorSession, OwnerId, Selection};

/// Build a session over `text` with the selection set to `[start, end)`
/// and an initial focus snapshot recorded.
pub fn test_session(text: &str, start: usize, end: usize) -> EditorSession {
    let mut session = EditorSession::new(OwnerId(1), text);
    session.set_selection(Selection::new(start, end));
    session.record_snapshot();
    session
}
