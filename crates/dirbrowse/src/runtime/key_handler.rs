use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::NavEvent;

/// Maps one terminal key press to a navigation event.
///
/// Returns `None` for key releases and for keys without a binding.
pub(crate) fn nav_event(key: KeyEvent) -> Option<NavEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(NavEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(NavEvent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(NavEvent::MoveDown),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(NavEvent::Enter),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Some(NavEvent::GoToParent),
        KeyCode::Esc | KeyCode::Char('q') => Some(NavEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_nav_event_maps_arrow_and_vim_keys() {
        // Arrange
        let cases = [
            (KeyCode::Up, NavEvent::MoveUp),
            (KeyCode::Char('k'), NavEvent::MoveUp),
            (KeyCode::Down, NavEvent::MoveDown),
            (KeyCode::Char('j'), NavEvent::MoveDown),
            (KeyCode::Enter, NavEvent::Enter),
            (KeyCode::Right, NavEvent::Enter),
            (KeyCode::Char('l'), NavEvent::Enter),
            (KeyCode::Backspace, NavEvent::GoToParent),
            (KeyCode::Left, NavEvent::GoToParent),
            (KeyCode::Char('h'), NavEvent::GoToParent),
            (KeyCode::Char('q'), NavEvent::Quit),
            (KeyCode::Esc, NavEvent::Quit),
        ];

        // Act & Assert
        for (code, expected) in cases {
            assert_eq!(nav_event(press(code)), Some(expected), "{code:?}");
        }
    }

    #[test]
    fn test_nav_event_maps_ctrl_c_to_quit() {
        // Arrange
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        // Act
        let event = nav_event(key);

        // Assert
        assert_eq!(event, Some(NavEvent::Quit));
    }

    #[test]
    fn test_nav_event_ignores_unbound_and_modified_keys() {
        // Arrange
        let keys = [
            press(KeyCode::Char('x')),
            press(KeyCode::Tab),
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL),
        ];

        // Act & Assert
        for key in keys {
            assert_eq!(nav_event(key), None);
        }
    }

    #[test]
    fn test_nav_event_ignores_key_release() {
        // Arrange
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Down,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );

        // Act
        let event = nav_event(key);

        // Assert
        assert_eq!(event, None);
    }
}
