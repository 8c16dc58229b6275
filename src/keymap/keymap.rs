//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// Result of handling a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Execute this command and suppress the default key behavior
    Execute(Command),
    /// No binding matches; default key behavior proceeds
    NoMatch,
}

/// The keymap stores all keybindings and handles lookup.
///
/// Lookup goes through the canonical chord string of the keystroke, so
/// `cmd+z` and `ctrl+z` resolve to the same binding. A later binding for
/// the same chord replaces an earlier one, which is how user keymaps
/// override defaults.
#[derive(Debug, Clone)]
pub struct Keymap {
    /// All registered bindings, in registration order
    bindings: Vec<Keybinding>,
    /// Chord string → index into bindings (latest registration wins)
    lookup: HashMap<String, usize>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding, replacing any earlier binding for the same chord.
    ///
    /// Binding a chord to [`Command::Unbound`] removes it entirely.
    pub fn add_binding(&mut self, binding: Keybinding) {
        let chord = binding.chord_string();
        if binding.command == Command::Unbound {
            self.lookup.remove(&chord);
            return;
        }
        let idx = self.bindings.len();
        self.bindings.push(binding);
        self.lookup.insert(chord, idx);
    }

    /// Look up the command for a keystroke
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup
            .get(&keystroke.chord_string())
            .map(|&idx| self.bindings[idx].command)
    }

    /// Handle a keystroke and return the action to take
    pub fn handle_keystroke(&self, keystroke: &Keystroke) -> KeyAction {
        match self.lookup(keystroke) {
            Some(command) => KeyAction::Execute(command),
            None => KeyAction::NoMatch,
        }
    }

    /// Get all bindings that are currently reachable via lookup
    pub fn bindings(&self) -> Vec<&Keybinding> {
        let mut reachable: Vec<&Keybinding> =
            self.lookup.values().map(|&idx| &self.bindings[idx]).collect();
        reachable.sort_by_key(|b| b.chord_string());
        reachable
    }

    /// Get the chord string for a command (first match)
    pub fn chord_for(&self, command: Command) -> Option<String> {
        self.bindings()
            .iter()
            .find(|b| b.command == command)
            .map(|b| b.chord_string())
    }
}

impl Default for Keymap {
    /// The embedded default keymap
    fn default() -> Self {
        Self::with_bindings(super::defaults::default_keymap())
    }
}
