use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Convert,
    Save,
    CopyResult,
    ToggleFocus,
    PreviousBase,
    NextBase,
    MoveUp,
    MoveDown,
    UseSelected,
    DeleteSelected,
    ClearHistory,
    ExportHistory,
    ToggleTheme,
    Input(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        (KeyCode::Enter, _) => Action::Convert,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Save,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyResult,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::UseSelected,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ClearHistory,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::ExportHistory,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::ToggleTheme,
        (KeyCode::Delete, _) => Action::DeleteSelected,

        (KeyCode::Tab, _) => Action::ToggleFocus,
        (KeyCode::Left, _) => Action::PreviousBase,
        (KeyCode::Right, _) => Action::NextBase,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Action {
        key_to_action(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key(KeyCode::Char('c'), KeyModifiers::CONTROL), Action::Quit);
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), Action::Quit);
    }

    #[test]
    fn test_conversion_keys() {
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Action::Convert);
        assert_eq!(key(KeyCode::Char('s'), KeyModifiers::CONTROL), Action::Save);
        assert_eq!(key(KeyCode::Char('y'), KeyModifiers::CONTROL), Action::CopyResult);
    }

    #[test]
    fn test_history_keys() {
        assert_eq!(key(KeyCode::Up, KeyModifiers::NONE), Action::MoveUp);
        assert_eq!(key(KeyCode::Down, KeyModifiers::NONE), Action::MoveDown);
        assert_eq!(key(KeyCode::Char('u'), KeyModifiers::CONTROL), Action::UseSelected);
        assert_eq!(key(KeyCode::Delete, KeyModifiers::NONE), Action::DeleteSelected);
        assert_eq!(key(KeyCode::Char('l'), KeyModifiers::CONTROL), Action::ClearHistory);
        assert_eq!(key(KeyCode::Char('e'), KeyModifiers::CONTROL), Action::ExportHistory);
    }

    #[test]
    fn test_focus_and_base_keys() {
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Action::ToggleFocus);
        assert_eq!(key(KeyCode::Left, KeyModifiers::NONE), Action::PreviousBase);
        assert_eq!(key(KeyCode::Right, KeyModifiers::NONE), Action::NextBase);
        assert_eq!(key(KeyCode::Char('t'), KeyModifiers::CONTROL), Action::ToggleTheme);
    }

    #[test]
    fn test_text_input() {
        assert_eq!(key(KeyCode::Char('f'), KeyModifiers::NONE), Action::Input('f'));
        assert_eq!(key(KeyCode::Char('F'), KeyModifiers::SHIFT), Action::Input('F'));
        assert_eq!(key(KeyCode::Char('-'), KeyModifiers::NONE), Action::Input('-'));
        assert_eq!(key(KeyCode::Backspace, KeyModifiers::NONE), Action::DeleteChar);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key(KeyCode::F(1), KeyModifiers::NONE), Action::None);
        assert_eq!(key(KeyCode::Char('z'), KeyModifiers::ALT), Action::None);
    }
}
