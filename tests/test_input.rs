mod common;

use common::ScriptedKeyboard;
use crossterm::event::KeyCode;
use line_shooter::input::{map_key, poll_command, Command};

#[test]
fn fire_keys() {
    for c in ['a', 'A', 'd', 'D', ' '] {
        assert_eq!(map_key(KeyCode::Char(c)), Some(Command::Fire), "{:?}", c);
    }
}

#[test]
fn quit_key_either_case() {
    assert_eq!(map_key(KeyCode::Char('q')), Some(Command::Quit));
    assert_eq!(map_key(KeyCode::Char('Q')), Some(Command::Quit));
}

#[test]
fn other_keys_ignored() {
    assert_eq!(map_key(KeyCode::Char('w')), None);
    assert_eq!(map_key(KeyCode::Left), None);
    assert_eq!(map_key(KeyCode::Esc), None);
    assert_eq!(map_key(KeyCode::Null), None);
}

#[test]
fn poll_without_pending_key() {
    let mut keyboard = ScriptedKeyboard::new(vec![None, Some(KeyCode::Char('q'))]);
    assert_eq!(poll_command(&mut keyboard).unwrap(), None);
    assert_eq!(poll_command(&mut keyboard).unwrap(), Some(Command::Quit));
    assert_eq!(poll_command(&mut keyboard).unwrap(), None);
}

#[test]
fn poll_reads_one_key_per_call() {
    let mut keyboard = ScriptedKeyboard::new(vec![
        Some(KeyCode::Char(' ')),
        Some(KeyCode::Char('z')),
        Some(KeyCode::Char('d')),
    ]);
    assert_eq!(poll_command(&mut keyboard).unwrap(), Some(Command::Fire));
    assert_eq!(poll_command(&mut keyboard).unwrap(), None);
    assert_eq!(poll_command(&mut keyboard).unwrap(), Some(Command::Fire));
}
