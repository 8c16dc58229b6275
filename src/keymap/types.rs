//! Core types for the keymap system: Keystroke, Modifiers, KeyCode

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if alt/option is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if meta (cmd/win) is held
    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code representing a logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,
}

impl KeyCode {
    /// Lowercase name used in canonical chord strings and keymap files
    pub fn name(&self) -> String {
        match self {
            KeyCode::Char(c) => c.to_lowercase().collect(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Escape => "escape".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Space => "space".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    /// Create a new keystroke
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with a character key and no modifiers
    pub fn char(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::NONE,
        }
    }

    /// Create a ctrl+character keystroke
    pub fn ctrl(c: char) -> Self {
        Self {
            key: KeyCode::Char(c.to_ascii_lowercase()),
            mods: Modifiers::CTRL,
        }
    }

    /// Create a shift+character keystroke
    ///
    /// The character is the one the keystroke *produces* (so `shift+{`, not
    /// `shift+[`), matching how hosts report key events.
    pub fn shift(c: char) -> Self {
        Self {
            key: KeyCode::Char(c),
            mods: Modifiers::SHIFT,
        }
    }

    /// The character for character keys, `None` for named keys
    pub fn char_key(&self) -> Option<char> {
        match self.key {
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Canonical chord string used for command lookup.
    ///
    /// `"ctrl+"` (when ctrl *or* the platform meta key is held) then
    /// `"shift+"` (when shift is held) then the lowercase key name, in that
    /// fixed order. Alt does not participate in chords and is ignored.
    pub fn chord_string(&self) -> String {
        let mut chord = String::new();
        if self.mods.ctrl() || self.mods.meta() {
            chord.push_str("ctrl+");
        }
        if self.mods.shift() {
            chord.push_str("shift+");
        }
        chord.push_str(&self.key.name());
        chord
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chord_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_individual() {
        assert!(Modifiers::CTRL.ctrl());
        assert!(!Modifiers::CTRL.shift());

        assert!(Modifiers::SHIFT.shift());
        assert!(!Modifiers::SHIFT.ctrl());

        assert!(Modifiers::ALT.alt());
        assert!(Modifiers::META.meta());
    }

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
    }

    #[test]
    fn test_chord_string_fixed_order() {
        let stroke = Keystroke::new(KeyCode::Char('z'), Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(stroke.chord_string(), "ctrl+shift+z");
    }

    #[test]
    fn test_chord_string_meta_folds_to_ctrl() {
        let stroke = Keystroke::new(KeyCode::Char('z'), Modifiers::META);
        assert_eq!(stroke.chord_string(), "ctrl+z");
    }

    #[test]
    fn test_chord_string_ignores_alt() {
        let stroke = Keystroke::new(KeyCode::Char('z'), Modifiers::ALT);
        assert_eq!(stroke.chord_string(), "z");
    }

    #[test]
    fn test_chord_string_named_key() {
        let stroke = Keystroke::new(KeyCode::Tab, Modifiers::SHIFT);
        assert_eq!(stroke.chord_string(), "shift+tab");
    }

    #[test]
    fn test_char_keystroke_lowercased() {
        assert_eq!(Keystroke::char('A'), Keystroke::char('a'));
    }

    #[test]
    fn test_produced_character_chords() {
        assert_eq!(Keystroke::shift('{').chord_string(), "shift+{");
        assert_eq!(Keystroke::char('[').chord_string(), "[");
        assert_eq!(Keystroke::ctrl('/').chord_string(), "ctrl+/");
    }
}
