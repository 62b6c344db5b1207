//! Key and mouse mapping from terminal events to simulation actions.

use crate::types::{GridPreset, LifeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Map keyboard input to simulation actions.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Playback
        KeyCode::Char('g') | KeyCode::Char('G') | KeyCode::Enter => Some(LifeAction::Start),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(LifeAction::Stop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(LifeAction::TogglePlay),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(LifeAction::Step),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(LifeAction::Fast),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(LifeAction::Slow),

        // Grid contents
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Randomize),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(LifeAction::Clear),
        KeyCode::Char('1') => Some(LifeAction::Resize(GridPreset::Small)),
        KeyCode::Char('2') => Some(LifeAction::Resize(GridPreset::Medium)),
        KeyCode::Char('3') => Some(LifeAction::Resize(GridPreset::Large)),

        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(LifeAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(LifeAction::CursorDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(LifeAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(LifeAction::CursorRight),
        KeyCode::Char(' ') => Some(LifeAction::ToggleCursor),

        _ => None,
    }
}

/// Terminal position `(column, row)` of a left click, if this is one.
pub fn mouse_click(event: MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_playback_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(LifeAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(LifeAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(LifeAction::Stop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('P'))),
            Some(LifeAction::TogglePlay)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('n'))),
            Some(LifeAction::Step)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('f'))),
            Some(LifeAction::Fast)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(LifeAction::Slow)
        );
    }

    #[test]
    fn test_grid_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(LifeAction::Randomize)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(LifeAction::Clear)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(LifeAction::Resize(GridPreset::Small))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(LifeAction::Resize(GridPreset::Large))
        );
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(LifeAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('l'))),
            Some(LifeAction::CursorRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(LifeAction::ToggleCursor)
        );
    }

    #[test]
    fn test_ctrl_c_is_not_clear() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_mouse_left_click_only() {
        assert_eq!(
            mouse_click(mouse(MouseEventKind::Down(MouseButton::Left), 7, 3)),
            Some((7, 3))
        );
        assert_eq!(
            mouse_click(mouse(MouseEventKind::Down(MouseButton::Right), 7, 3)),
            None
        );
        assert_eq!(mouse_click(mouse(MouseEventKind::Moved, 7, 3)), None);
    }
}
