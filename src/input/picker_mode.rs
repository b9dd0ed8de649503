use crossterm::event::KeyCode;

use crate::app::Action;

pub fn handle_key(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Char('h') | KeyCode::Left => Action::PickerMonth(-1),
        KeyCode::Char('l') | KeyCode::Right => Action::PickerMonth(1),
        KeyCode::Char('k') | KeyCode::Up => Action::PickerYear(1),
        KeyCode::Char('j') | KeyCode::Down => Action::PickerYear(-1),
        KeyCode::Enter => Action::ConfirmPicker,
        KeyCode::Esc | KeyCode::Char('q') => Action::DismissPicker,
        _ => return None,
    };
    Some(action)
}
