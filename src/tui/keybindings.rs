//! Keybinding definitions
//!
//! Maps key presses in the browsing view to commands, and lists the hints
//! shown in the status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Commands available while browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Focus the next transaction kind
    NextKind,
    /// Focus the previous transaction kind
    PrevKind,
    /// Move the highlight within the focused list
    MoveHighlight(isize),
    /// Open the add-transaction wizard
    StartAdd,
    /// Leave the application
    Quit,
}

/// A key hint for the status bar
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Keys as shown to the user
    pub keys: &'static str,
    /// What the keys do
    pub description: &'static str,
}

/// Hints shown while browsing
pub static BROWSE_KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: "←/→",
        description: "Switch list",
    },
    Keybinding {
        keys: "↑/↓",
        description: "Move",
    },
    Keybinding {
        keys: "a",
        description: "Add",
    },
    Keybinding {
        keys: "q",
        description: "Quit",
    },
];

/// Hints shown inside the wizard
pub static WIZARD_KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        keys: "Enter",
        description: "Confirm",
    },
    Keybinding {
        keys: "Esc",
        description: "Cancel",
    },
];

/// Translate a key press in the browsing view
pub fn browse_command(key: &KeyEvent) -> Option<BrowseCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(BrowseCommand::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => BrowseCommand::Quit,
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => BrowseCommand::NextKind,
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => BrowseCommand::PrevKind,
        KeyCode::Down | KeyCode::Char('j') => BrowseCommand::MoveHighlight(1),
        KeyCode::Up | KeyCode::Char('k') => BrowseCommand::MoveHighlight(-1),
        KeyCode::PageDown => BrowseCommand::MoveHighlight(10),
        KeyCode::PageUp => BrowseCommand::MoveHighlight(-10),
        KeyCode::Char('a') | KeyCode::Char('n') => BrowseCommand::StartAdd,
        _ => return None,
    };
    Some(command)
}

/// Render hints as `keys:description` pairs
pub fn hint_line(bindings: &[Keybinding]) -> String {
    bindings
        .iter()
        .map(|b| format!("{}:{}", b.keys, b.description))
        .collect::<Vec<_>>()
        .join("  ")
}
