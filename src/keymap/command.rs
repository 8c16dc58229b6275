//! Command enum representing the executable editing actions

use std::fmt;

/// All editing commands that can be bound to key chords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Step back through the history stack
    Undo,
    /// Step forward through the history stack
    Redo,
    /// Select the next token relative to the selection
    NavigateForward,
    /// Select the previous token relative to the selection
    NavigateBackward,
    /// Comment or uncomment the lines intersecting the selection
    ToggleComment,
    /// Wrap the selection in the bracket pair of the pressed key
    WrapBracket,
    /// Explicitly does nothing; removes a default binding when bound in a
    /// user keymap
    Unbound,
}

impl Command {
    /// Human-readable description for host UIs
    pub fn description(self) -> &'static str {
        match self {
            Command::Undo => "Undo the last edit",
            Command::Redo => "Redo the last undone edit",
            Command::NavigateForward => "Select the next token",
            Command::NavigateBackward => "Select the previous token",
            Command::ToggleComment => "Toggle line comments on the selection",
            Command::WrapBracket => "Wrap the selection in brackets",
            Command::Unbound => "No action",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::NavigateForward => "NavigateForward",
            Command::NavigateBackward => "NavigateBackward",
            Command::ToggleComment => "ToggleComment",
            Command::WrapBracket => "WrapBracket",
            Command::Unbound => "Unbound",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Undo" => Ok(Command::Undo),
            "Redo" => Ok(Command::Redo),
            "NavigateForward" => Ok(Command::NavigateForward),
            "NavigateBackward" => Ok(Command::NavigateBackward),
            "ToggleComment" => Ok(Command::ToggleComment),
            "WrapBracket" => Ok(Command::WrapBracket),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
