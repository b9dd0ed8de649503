use crossterm::event::KeyCode;

use crate::app::Action;

pub fn handle_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter => Some(Action::SaveEvent),
        KeyCode::Esc => Some(Action::CancelEvent),
        KeyCode::Backspace => Some(Action::DraftBackspace),
        KeyCode::Char(c) => Some(Action::DraftInput(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppState, UiMode};

    fn type_text(state: AppState, text: &str) -> AppState {
        text.chars()
            .filter_map(|c| handle_key(KeyCode::Char(c)))
            .fold(state, AppState::apply)
    }

    #[test]
    fn typing_fills_title() {
        let state = AppState::new().apply(Action::OpenEventForm(None));
        let state = type_text(state, "Standup");

        match &state.mode {
            UiMode::AddingEvent(draft) => assert_eq!(draft.title, "Standup"),
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn letters_are_text_not_commands() {
        assert_eq!(handle_key(KeyCode::Char('q')), Some(Action::DraftInput('q')));
    }

    #[test]
    fn enter_saves_and_escape_cancels() {
        assert_eq!(handle_key(KeyCode::Enter), Some(Action::SaveEvent));
        assert_eq!(handle_key(KeyCode::Esc), Some(Action::CancelEvent));
        assert_eq!(handle_key(KeyCode::Tab), None);
    }
}
