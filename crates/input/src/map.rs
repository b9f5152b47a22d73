//! Key mapping from terminal events to commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Pointer
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::CursorDown)
        }

        // Pick
        KeyCode::Char(' ') => Some(Command::Select),
        KeyCode::Char('?') | KeyCode::Tab => Some(Command::Hint),

        // Settings panel
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Start),
        KeyCode::Char('1') | KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::CycleDifficulty),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::ToggleTimeLimit),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_pointer_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Command::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Command::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(Command::CursorDown)
        );
    }

    #[test]
    fn test_pick_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Command::Select)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(Command::Hint)
        );
    }

    #[test]
    fn test_settings_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(Command::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(Command::CycleDifficulty)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('T'))),
            Some(Command::ToggleTimeLimit)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
