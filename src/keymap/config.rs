//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;

    parse_keymap_yaml(&content)
}

/// Parse keybindings from YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let mut bindings = Vec::new();
    for entry in config.bindings {
        let keystroke = parse_key_string(&entry.key)?;
        let command = parse_command(&entry.command)?;
        bindings.push(Keybinding::new(keystroke, command));
    }

    Ok(bindings)
}

/// Parse a key string like "ctrl+shift+z" into a Keystroke
///
/// Everything after the last `+` separator is the key; everything before
/// it must be modifier names. A lone `+` (or `ctrl++`) parses as the plus
/// key.
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    if key_str.is_empty() {
        return Err(KeymapError::InvalidKey(key_str.to_string()));
    }

    let (mods_str, key_name) = if key_str == "+" {
        ("", "+")
    } else if let Some(prefix) = key_str.strip_suffix("++") {
        (prefix, "+")
    } else {
        match key_str.rfind('+') {
            Some(idx) => (&key_str[..idx], &key_str[idx + 1..]),
            None => ("", key_str),
        }
    };

    let mut mods = Modifiers::NONE;
    for part in mods_str.split('+').filter(|p| !p.is_empty()) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" | "cmd" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                return Err(KeymapError::InvalidKey(format!(
                    "Unknown modifier '{}' in binding: {}",
                    part, key_str
                )))
            }
        }
    }

    let key = parse_key_code(key_name)?;
    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    // Single character: the character the keystroke produces
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    // Named keys
    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        _ => Err(KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Parse a command name string into a Command enum
fn parse_command(cmd: &str) -> Result<Command, KeymapError> {
    Command::from_str(cmd).map_err(|_| KeymapError::InvalidCommand(cmd.to_string()))
}

/// Errors that can occur when parsing keymaps
#[derive(Debug, Clone)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let stroke = parse_key_string("a").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('a'));
        assert!(stroke.mods.is_empty());
    }

    #[test]
    fn test_parse_key_with_modifier() {
        let stroke = parse_key_string("ctrl+z").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('z'));
        assert!(stroke.mods.ctrl());
    }

    #[test]
    fn test_parse_key_with_multiple_modifiers() {
        let stroke = parse_key_string("ctrl+shift+z").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('z'));
        assert!(stroke.mods.ctrl());
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_parse_produced_characters() {
        assert_eq!(parse_key_string("[").unwrap().key, KeyCode::Char('['));

        let stroke = parse_key_string("shift+{").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('{'));
        assert!(stroke.mods.shift());

        let stroke = parse_key_string("ctrl+/").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('/'));
        assert!(stroke.mods.ctrl());
    }

    #[test]
    fn test_parse_named_key() {
        let stroke = parse_key_string("tab").unwrap();
        assert_eq!(stroke.key, KeyCode::Tab);

        let stroke = parse_key_string("shift+tab").unwrap();
        assert_eq!(stroke.key, KeyCode::Tab);
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_parse_plus_as_key() {
        assert_eq!(parse_key_string("+").unwrap().key, KeyCode::Char('+'));

        let stroke = parse_key_string("ctrl++").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('+'));
        assert!(stroke.mods.ctrl());
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(parse_key_string("").is_err());
        assert!(parse_key_string("bogus+z").is_err());
        assert!(parse_key_string("ctrl+frobnicate").is_err());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
bindings:
  - key: "ctrl+z"
    command: Undo
  - key: "tab"
    command: NavigateForward
"#;

        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].command, Command::Undo);
        assert_eq!(bindings[1].command, Command::NavigateForward);
    }

    #[test]
    fn test_parse_yaml_bad_command() {
        let yaml = r#"
bindings:
  - key: "ctrl+z"
    command: Explode
"#;
        assert!(matches!(
            parse_keymap_yaml(yaml),
            Err(KeymapError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_load_keymap_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "bindings:\n  - key: \"ctrl+z\"\n    command: Undo\n"
        )
        .unwrap();

        let bindings = load_keymap_file(file.path()).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].command, Command::Undo);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_keymap_file(Path::new("/nonexistent/keymap.yaml"));
        assert!(matches!(result, Err(KeymapError::IoError(_))));
    }
}
