//! Keyboard shortcuts.
//!
//! | Shortcut | Command |
//! |---|---|
//! | Ctrl+G | group |
//! | Ctrl+Shift+G | ungroup |
//! | Ctrl+Z | undo |
//! | Ctrl+Shift+Z | redo |
//! | Ctrl+S | save checkpoint |
//! | Ctrl+C / Ctrl+V | copy / paste |
//! | Ctrl+A | select all |
//! | Delete, Backspace | delete selection |

use super::EditorSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Delete,
    Backspace,
}

/// A key with its modifier state. Character keys are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub ctrl: bool,
    pub shift: bool,
    pub key: Key,
}

impl KeyCombo {
    pub fn new(key: Key) -> Self {
        let key = match key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self {
            ctrl: false,
            shift: false,
            key,
        }
    }

    /// Ctrl + character.
    pub fn ctrl(c: char) -> Self {
        Self {
            ctrl: true,
            ..Self::new(Key::Char(c))
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Group,
    Ungroup,
    Undo,
    Redo,
    SaveCheckpoint,
    Copy,
    Paste,
    SelectAll,
    Delete,
}

impl EditorCommand {
    /// Map a key combination to its command.
    pub fn from_key(combo: &KeyCombo) -> Option<Self> {
        let key = match combo.key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        match (combo.ctrl, combo.shift, key) {
            (_, _, Key::Delete | Key::Backspace) => Some(Self::Delete),
            (true, false, Key::Char('g')) => Some(Self::Group),
            (true, true, Key::Char('g')) => Some(Self::Ungroup),
            (true, false, Key::Char('z')) => Some(Self::Undo),
            (true, true, Key::Char('z')) => Some(Self::Redo),
            (true, false, Key::Char('s')) => Some(Self::SaveCheckpoint),
            (true, false, Key::Char('c')) => Some(Self::Copy),
            (true, false, Key::Char('v')) => Some(Self::Paste),
            (true, false, Key::Char('a')) => Some(Self::SelectAll),
            _ => None,
        }
    }
}

impl EditorSession {
    /// Run a command. Returns whether it changed anything.
    pub fn execute(&mut self, command: EditorCommand) -> bool {
        tracing::debug!("Executing {:?}", command);
        match command {
            EditorCommand::Group => self.group().is_some(),
            EditorCommand::Ungroup => self.ungroup(),
            EditorCommand::Undo => self.undo(),
            EditorCommand::Redo => self.redo(),
            EditorCommand::SaveCheckpoint => self.checkpoint(),
            EditorCommand::Copy => self.copy_selected(),
            EditorCommand::Paste => self.paste().is_some(),
            EditorCommand::SelectAll => {
                self.select_all();
                !self.selection.is_empty()
            }
            EditorCommand::Delete => self.delete_selected() > 0,
        }
    }

    /// Dispatch a shortcut. Unbound keys return false.
    pub fn handle_key(&mut self, combo: &KeyCombo) -> bool {
        match EditorCommand::from_key(combo) {
            Some(command) => self.execute(command),
            None => false,
        }
    }
}
