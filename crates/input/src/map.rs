//! Key mapping from terminal events to engine commands.

use crate::types::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an engine command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Command::Move(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Command::Move(Direction::Right)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Command::Move(Direction::Down)),

        // Rotation (clockwise only)
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),

        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Drop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::NewGame),

        _ => None,
    }
}

/// Check if key toggles pause.
///
/// The engine has no pause state; the caller stops delivering ticks and
/// commands while paused.
pub fn is_pause_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
