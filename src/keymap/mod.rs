//! Keymap system: chord canonicalization, bindings, and configuration.
//!
//! A [`Keystroke`] canonicalizes to a chord string (`"ctrl+"` then
//! `"shift+"` then the lowercase key name, in that fixed order; the
//! platform meta key folds into ctrl). The [`Keymap`] maps chords to
//! [`Command`]s; bindings come from the embedded `keymap.yaml` with user
//! overrides merged on top.

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{default_bindings, default_keymap, get_user_config_path, load_default_keymap};
pub use keymap::{KeyAction, Keymap};
pub use types::{KeyCode, Keystroke, Modifiers};
