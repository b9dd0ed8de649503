pub mod command_mode;
pub mod gesture;
pub mod insert_mode;
pub mod normal_mode;
pub mod picker_mode;

use crossterm::event::KeyCode;

use crate::app::{Action, AppState, UiMode};

/// Translates a key press into an action for whichever surface owns input.
pub fn map_key(key: KeyCode, state: &AppState) -> Option<Action> {
    match &state.mode {
        UiMode::Idle => normal_mode::handle_key(key, state),
        UiMode::PickingMonth(_) => picker_mode::handle_key(key),
        UiMode::AddingEvent(_) => insert_mode::handle_key(key),
        UiMode::Command(_) => command_mode::handle_key(key),
        UiMode::Help { .. } => match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollHelp(1)),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollHelp(-1)),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => Some(Action::CloseHelp),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_route_by_mode() {
        let idle = AppState::new();
        assert_eq!(map_key(KeyCode::Char('m'), &idle), Some(Action::OpenMonthPicker));

        let picking = idle.clone().apply(Action::OpenMonthPicker);
        assert_eq!(map_key(KeyCode::Enter, &picking), Some(Action::ConfirmPicker));

        let adding = idle.apply(Action::OpenEventForm(None));
        assert_eq!(map_key(KeyCode::Char('m'), &adding), Some(Action::DraftInput('m')));
    }

    #[test]
    fn help_overlay_scrolls_and_closes() {
        let help = AppState::new().apply(Action::ShowHelp);

        assert_eq!(map_key(KeyCode::Char('j'), &help), Some(Action::ScrollHelp(1)));
        assert_eq!(map_key(KeyCode::Esc, &help), Some(Action::CloseHelp));
        assert_eq!(map_key(KeyCode::Char('x'), &help), None);
    }
}
