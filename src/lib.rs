//! promptpad - structured editing and template expansion for prompt inputs
//!
//! This crate provides the algorithmic core behind a multiline prompt
//! editor: token-aware editing commands with coalesced undo/redo, and a
//! serialization-time grammar that resolves random-choice templates into
//! concrete strings.
//!
//! # Editing
//!
//! Hosts create one [`editable::EditorSession`] per editable component and
//! feed it key, change, and focus events:
//!
//! ```
//! use promptpad::editable::{EditorSession, OwnerId, Selection};
//! use promptpad::keymap::{KeyCode, Keystroke, Modifiers};
//!
//! let mut session = EditorSession::new(OwnerId(1), "red, green, blue");
//! session.set_selection(Selection::caret(0));
//!
//! // Tab selects the token at/after the caret
//! let consumed = session.handle_key(Keystroke::new(KeyCode::Tab, Modifiers::NONE));
//! assert!(consumed);
//! assert_eq!(session.selection(), Selection::new(0, 3));
//! ```
//!
//! # Expansion
//!
//! ```
//! use promptpad::expand::{resolve_prompt, SeededRandom};
//!
//! let mut rng = SeededRandom::new(7);
//! let out = resolve_prompt("a {red|blue} bird", &mut rng);
//! assert!(out == "a red bird" || out == "a blue bird");
//! ```

pub mod cli;
pub mod edit;
pub mod editable;
pub mod expand;
pub mod keymap;
pub mod logging;
pub mod tokenizer;
pub mod workflow;

// Re-export commonly used types
pub use editable::{EditorSession, OwnerId, Selection};
pub use expand::{resolve_prompt, resolve_prompt_default, RandomSource};
pub use keymap::{Command, Keymap, Keystroke};
pub use tokenizer::{tokenize, Token};
