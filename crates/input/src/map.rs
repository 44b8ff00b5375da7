//! Key mapping from terminal events to intents.

use crate::types::{Direction, Intent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to an intent.
///
/// WASD and the arrow keys move, IJKL illuminate (I up, J left, K down,
/// L right), R resets and Q quits. Anything else is `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(Intent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Intent::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Intent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Intent::Move(Direction::Right))
        }

        // Lamp
        KeyCode::Char('i') | KeyCode::Char('I') => Some(Intent::Illuminate(Direction::Up)),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(Intent::Illuminate(Direction::Down)),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(Intent::Illuminate(Direction::Left)),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Intent::Illuminate(Direction::Right)),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
