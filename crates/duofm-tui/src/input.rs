//! Keyboard → command mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use duofm_core::Command;

/// Maps a key event to a [`Command`]. Unbound keys map to `None`.
///
/// Alt+Left/Alt+Right walk the history; plain arrows move the cursor.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::CursorDown),
        KeyCode::Home => Some(Command::CursorFirst),
        KeyCode::End => Some(Command::CursorLast),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::Enter => Some(Command::Activate),
        KeyCode::Backspace => Some(Command::GoParent),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => Some(Command::GoBack),
        KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => Some(Command::GoForward),
        KeyCode::Tab => Some(Command::FocusOther),
        KeyCode::Char('r') => Some(Command::Refresh),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn alt(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::ALT)
    }

    #[test]
    fn arrows_move_the_cursor() {
        assert_eq!(map_key(key(KeyCode::Up)), Some(Command::CursorUp));
        assert_eq!(map_key(key(KeyCode::Down)), Some(Command::CursorDown));
        assert_eq!(map_key(key(KeyCode::Char('k'))), Some(Command::CursorUp));
        assert_eq!(map_key(key(KeyCode::Char('j'))), Some(Command::CursorDown));
    }

    #[test]
    fn home_end_and_pages_jump() {
        assert_eq!(map_key(key(KeyCode::Home)), Some(Command::CursorFirst));
        assert_eq!(map_key(key(KeyCode::End)), Some(Command::CursorLast));
        assert_eq!(map_key(key(KeyCode::PageUp)), Some(Command::PageUp));
        assert_eq!(map_key(key(KeyCode::PageDown)), Some(Command::PageDown));
    }

    #[test]
    fn alt_arrows_walk_history() {
        assert_eq!(map_key(alt(KeyCode::Left)), Some(Command::GoBack));
        assert_eq!(map_key(alt(KeyCode::Right)), Some(Command::GoForward));
    }

    #[test]
    fn plain_left_right_are_unbound() {
        assert_eq!(map_key(key(KeyCode::Left)), None);
        assert_eq!(map_key(key(KeyCode::Right)), None);
    }

    #[test]
    fn enter_activates_and_backspace_goes_up() {
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Command::Activate));
        assert_eq!(map_key(key(KeyCode::Backspace)), Some(Command::GoParent));
    }

    #[test]
    fn tab_refresh_and_quit() {
        assert_eq!(map_key(key(KeyCode::Tab)), Some(Command::FocusOther));
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(Command::Refresh));
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Command::Quit));
    }

    #[test]
    fn unbound_keys_map_to_none() {
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(key(KeyCode::Esc)), None);
        assert_eq!(map_key(key(KeyCode::F(5))), None);
    }
}
