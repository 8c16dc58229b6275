//! Keybinding struct representing a mapping from keystroke to command

use super::command::Command;
use super::types::Keystroke;

/// A single keybinding mapping a keystroke to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    /// The keystroke that triggers the command
    pub keystroke: Keystroke,
    /// The command to execute
    pub command: Command,
}

impl Keybinding {
    /// Create a binding
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self { keystroke, command }
    }

    /// The canonical chord string this binding answers to
    pub fn chord_string(&self) -> String {
        self.keystroke.chord_string()
    }
}
