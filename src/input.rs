//! Keyboard collaborator and key mapping.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fire from the player nearest a random target.
    Fire,
    Quit,
}

/// `a`, `d` and space all fire; `q` quits.  Case does not matter.
pub fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' | 'd' | ' ' => Some(Command::Fire),
            'q' => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}

pub trait Keyboard {
    /// True when a key can be read without blocking.
    fn key_pending(&mut self) -> std::io::Result<bool>;

    /// Read one pending key.
    fn read_key(&mut self) -> std::io::Result<KeyCode>;
}

/// Check the keyboard once; never blocks when nothing is pending.
pub fn poll_command<K: Keyboard + ?Sized>(keyboard: &mut K) -> std::io::Result<Option<Command>> {
    if !keyboard.key_pending()? {
        return Ok(None);
    }
    Ok(map_key(keyboard.read_key()?))
}

/// Reads the real terminal through crossterm.  Raw mode must be enabled by
/// the caller.
#[derive(Debug, Default)]
pub struct TerminalKeyboard;

impl Keyboard for TerminalKeyboard {
    fn key_pending(&mut self) -> std::io::Result<bool> {
        event::poll(Duration::ZERO)
    }

    fn read_key(&mut self) -> std::io::Result<KeyCode> {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(key.code),
            // Resizes, mouse events and key releases carry no command.
            _ => Ok(KeyCode::Null),
        }
    }
}
