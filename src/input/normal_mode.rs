use chrono::Local;
use crossterm::event::KeyCode;

use crate::app::{Action, AppState, SwipeDirection};

pub fn handle_key(key: KeyCode, _state: &AppState) -> Option<Action> {
    let action = match key {
        KeyCode::Char('h') | KeyCode::Left => Action::MoveSelection(-1),
        KeyCode::Char('l') | KeyCode::Right => Action::MoveSelection(1),
        KeyCode::Char('k') | KeyCode::Up => Action::MoveSelection(-7),
        KeyCode::Char('j') | KeyCode::Down => Action::MoveSelection(7),
        KeyCode::Char('{') | KeyCode::PageUp => Action::Swipe(SwipeDirection::Right),
        KeyCode::Char('}') | KeyCode::PageDown => Action::Swipe(SwipeDirection::Left),
        KeyCode::Char('t') => Action::JumpToDate(Local::now().date_naive()),
        KeyCode::Char('m') => Action::OpenMonthPicker,
        KeyCode::Char('a') => Action::OpenEventForm(None),
        KeyCode::Esc => Action::ClearSelection,
        KeyCode::Char('?') => Action::ShowHelp,
        KeyCode::Char(':') => Action::EnterCommand,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}
