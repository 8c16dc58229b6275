//! Default keybindings for the editing commands
//!
//! The standard chord table ships embedded in the binary; a user keymap at
//! `~/.config/promptpad/keymap.yaml` is merged on top when present.

use std::path::PathBuf;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::Keystroke;

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Get the user's keymap configuration path
///
/// Returns `~/.config/promptpad/keymap.yaml` on Unix and the equivalent
/// config directory on other platforms.
pub fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join("promptpad").join("keymap.yaml"))
}

/// The embedded default keymap.
///
/// Falls back to the hardcoded table if the embedded YAML fails to parse,
/// which would indicate a packaging defect rather than a user error.
pub fn default_keymap() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(bindings) => bindings,
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Load and merge keymaps: embedded defaults + user overrides.
///
/// User bindings for an already-bound chord replace the default; bindings
/// with `command: Unbound` remove it.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = default_keymap();

    if let Some(user_path) = get_user_config_path() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Loaded user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings.extend(user_bindings);
                }
                Err(e) => {
                    tracing::warn!("Failed to load user keymap: {}, keeping defaults", e);
                }
            }
        }
    }

    bindings
}

/// Hardcoded fallback matching the embedded keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    use super::types::{KeyCode, Modifiers};

    vec![
        Keybinding::new(Keystroke::ctrl('z'), Command::Undo),
        Keybinding::new(
            Keystroke::new(KeyCode::Char('z'), Modifiers::CTRL | Modifiers::SHIFT),
            Command::Redo,
        ),
        Keybinding::new(Keystroke::new(KeyCode::Tab, Modifiers::NONE), Command::NavigateForward),
        Keybinding::new(
            Keystroke::new(KeyCode::Tab, Modifiers::SHIFT),
            Command::NavigateBackward,
        ),
        Keybinding::new(Keystroke::ctrl('/'), Command::ToggleComment),
        Keybinding::new(Keystroke::shift('{'), Command::WrapBracket),
        Keybinding::new(Keystroke::shift('('), Command::WrapBracket),
        Keybinding::new(Keystroke::char('['), Command::WrapBracket),
        Keybinding::new(Keystroke::char('\''), Command::WrapBracket),
        Keybinding::new(Keystroke::char('`'), Command::WrapBracket),
        Keybinding::new(Keystroke::shift('"'), Command::WrapBracket),
    ]
}
