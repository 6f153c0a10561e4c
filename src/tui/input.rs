use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::Focus;

/// What a key press asks the UI loop to do. Kept as data so the mapping
/// stays a pure function of (key, focus) and can be tested directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    ToggleAuto,
    FocusNext,
    FocusPrev,
    Submit,
    FieldToggle,
    ScrollUp,
    ScrollDown,
    Input(char),
    Backspace,
    None,
}

/// Map one key event to an action for the given focused panel.
///
/// Only the initial key press maps to an action; Repeat and Release are
/// ignored so one physical press triggers one action. Plain characters go
/// into the focused form's text field, so single-letter shortcuts only
/// exist while the interface list is focused.
pub fn map_key(key: KeyEvent, focus: Focus) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    // Ctrl+C quits from anywhere, including while editing a field.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Tab => return Action::FocusNext,
        KeyCode::BackTab => return Action::FocusPrev,
        _ => {}
    }

    match focus {
        Focus::Nics => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('r') | KeyCode::Enter => Action::Refresh,
            KeyCode::Char('a') => Action::ToggleAuto,
            KeyCode::Up => Action::ScrollUp,
            KeyCode::Down => Action::ScrollDown,
            _ => Action::None,
        },
        Focus::Ping => match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Up | KeyCode::Down => Action::FieldToggle,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        },
        Focus::Discovery => match key.code {
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        },
    }
}
