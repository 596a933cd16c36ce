use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    OpenRepo,
    OpenLive,
    OpenProfile,
    Help,
    ClosePopup,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Action::MoveLeft,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::MoveRight,
        KeyCode::Enter => Action::OpenRepo,
        KeyCode::Char('o') => Action::OpenLive,
        KeyCode::Char('g') => Action::OpenProfile,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}

/// Cell of a left-button press, if this is one.
pub fn left_click(mouse: MouseEvent) -> Option<(u16, u16)> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((mouse.column, mouse.row)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_open_bindings_are_distinct() {
        assert_eq!(map_key(key(KeyCode::Enter)), Action::OpenRepo);
        assert_eq!(map_key(key(KeyCode::Char('o'))), Action::OpenLive);
        assert_eq!(map_key(key(KeyCode::Char('g'))), Action::OpenProfile);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ev), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_left_click_only() {
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(left_click(down), Some((4, 9)));

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..down
        };
        assert_eq!(left_click(right), None);
    }
}
