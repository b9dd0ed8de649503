use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::ops::RangeInclusive;

use crate::calendar::{Event, month_grid};
use crate::input::command_mode::{self, Command, GotoTarget};
use crate::ui::help;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    NoSelection,
    Selected(NaiveDate),
}

impl Selection {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Selection::Selected(date) => Some(*date),
            Selection::NoSelection => None,
        }
    }

    pub fn is(&self, date: NaiveDate) -> bool {
        self.date()
            .is_some_and(|selected| month_grid::is_same_day(&selected, &date))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPicker {
    pub month: u32,
    pub year: i32,
}

impl MonthPicker {
    pub fn seeded(shown: NaiveDate, years: &RangeInclusive<i32>) -> Self {
        Self {
            month: shown.month(),
            year: shown.year().clamp(*years.start(), *years.end()),
        }
    }

    /// Month selector wraps around, 12 -> 1 and 1 -> 12.
    pub fn step_month(&mut self, step: i32) {
        self.month = ((self.month as i32 - 1 + step).rem_euclid(12) + 1) as u32;
    }

    pub fn step_year(&mut self, step: i32, years: &RangeInclusive<i32>) {
        self.year = self.year.saturating_add(step).clamp(*years.start(), *years.end());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
}

/// Which surface currently owns input. Only one modal can be open.
#[derive(Debug, Clone, PartialEq)]
pub enum UiMode {
    Idle,
    PickingMonth(MonthPicker),
    AddingEvent(EventDraft),
    Help { scroll: usize },
    Command(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub week_start: Weekday,
    pub year_range: RangeInclusive<i32>,
    pub clear_selection_on_month_change: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            year_range: 2020..=2030,
            clear_selection_on_month_change: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectDate(NaiveDate),
    MoveSelection(i64),
    ClearSelection,
    Swipe(SwipeDirection),
    JumpToDate(NaiveDate),
    OpenMonthPicker,
    PickerMonth(i32),
    PickerYear(i32),
    ConfirmPicker,
    DismissPicker,
    ShowMonth { year: i32, month: u32 },
    OpenEventForm(Option<String>),
    DraftInput(char),
    DraftBackspace,
    SaveEvent,
    CancelEvent,
    ShowHelp,
    ScrollHelp(i32),
    CloseHelp,
    EnterCommand,
    CommandInput(char),
    CommandBackspace,
    SubmitCommand,
    CancelCommand,
    SetTheme(String),
    Quit,
}

/// One immutable snapshot of the calendar screen. Every transition goes
/// through [`AppState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Always day 1 of the displayed month.
    pub current_month: NaiveDate,
    pub selection: Selection,
    pub mode: UiMode,
    pub events: Vec<Event>,
    pub settings: Settings,
    pub theme: Theme,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            current_month: today.with_day(1).unwrap_or(today),
            selection: Selection::NoSelection,
            mode: UiMode::Idle,
            events: Vec::new(),
            settings: Settings::default(),
            theme: Theme::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_month(mut self, date: NaiveDate) -> Self {
        self.current_month = date.with_day(1).unwrap_or(date);
        self
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Events on the selected day, in insertion order.
    pub fn events_for_selection(&self) -> Vec<&Event> {
        match self.selection {
            Selection::Selected(date) => self.events_on(date),
            Selection::NoSelection => Vec::new(),
        }
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.falls_on(date)).collect()
    }

    pub fn is_displayed(&self, date: NaiveDate) -> bool {
        date.year() == self.current_month.year() && date.month() == self.current_month.month()
    }

    pub fn apply(mut self, action: Action) -> Self {
        tracing::debug!(?action, "apply");
        self.status = None;

        match action {
            Action::SelectDate(date) => {
                self.selection = Selection::Selected(date);
            }
            Action::MoveSelection(days) => self.move_selection(days),
            Action::ClearSelection => {
                self.selection = Selection::NoSelection;
            }
            Action::Swipe(direction) => {
                let delta = match direction {
                    SwipeDirection::Left => 1,
                    SwipeDirection::Right => -1,
                };
                self.change_month(delta);
            }
            Action::JumpToDate(date) => {
                if let Some(first) = date.with_day(1) {
                    self.set_month(first);
                }
                self.selection = Selection::Selected(date);
            }
            Action::OpenMonthPicker => {
                if self.mode == UiMode::Idle {
                    let picker = MonthPicker::seeded(self.current_month, &self.settings.year_range);
                    self.mode = UiMode::PickingMonth(picker);
                }
            }
            Action::PickerMonth(step) => {
                if let UiMode::PickingMonth(picker) = &mut self.mode {
                    picker.step_month(step);
                }
            }
            Action::PickerYear(step) => {
                if let UiMode::PickingMonth(picker) = &mut self.mode {
                    picker.step_year(step, &self.settings.year_range);
                }
            }
            Action::ConfirmPicker => {
                if let UiMode::PickingMonth(picker) = self.mode {
                    self.mode = UiMode::Idle;
                    return self.apply(Action::ShowMonth {
                        year: picker.year,
                        month: picker.month,
                    });
                }
            }
            Action::DismissPicker => {
                if matches!(self.mode, UiMode::PickingMonth(_)) {
                    self.mode = UiMode::Idle;
                }
            }
            Action::ShowMonth { year, month } => match month_grid::month_start(year, month) {
                Some(first) => self.set_month(first),
                None => tracing::warn!("Ignoring invalid month {}-{:02}", year, month),
            },
            Action::OpenEventForm(prefill) => {
                if self.mode == UiMode::Idle {
                    self.mode = UiMode::AddingEvent(EventDraft {
                        title: prefill.unwrap_or_default(),
                    });
                }
            }
            Action::DraftInput(c) => {
                if let UiMode::AddingEvent(draft) = &mut self.mode {
                    draft.title.push(c);
                }
            }
            Action::DraftBackspace => {
                if let UiMode::AddingEvent(draft) = &mut self.mode {
                    draft.title.pop();
                }
            }
            Action::SaveEvent => self.save_draft(),
            Action::CancelEvent => {
                if matches!(self.mode, UiMode::AddingEvent(_)) {
                    self.mode = UiMode::Idle;
                }
            }
            Action::ShowHelp => {
                if self.mode == UiMode::Idle {
                    self.mode = UiMode::Help { scroll: 0 };
                }
            }
            Action::ScrollHelp(delta) => {
                if let UiMode::Help { scroll } = &mut self.mode {
                    *scroll = scroll
                        .saturating_add_signed(delta as isize)
                        .min(help::max_scroll());
                }
            }
            Action::CloseHelp => {
                if matches!(self.mode, UiMode::Help { .. }) {
                    self.mode = UiMode::Idle;
                }
            }
            Action::EnterCommand => {
                if self.mode == UiMode::Idle {
                    self.mode = UiMode::Command(":".to_string());
                }
            }
            Action::CommandInput(c) => {
                if let UiMode::Command(buffer) = &mut self.mode {
                    buffer.push(c);
                }
            }
            Action::CommandBackspace => {
                if let UiMode::Command(buffer) = &mut self.mode {
                    buffer.pop();
                    if buffer.is_empty() {
                        self.mode = UiMode::Idle;
                    }
                }
            }
            Action::SubmitCommand => return self.submit_command(),
            Action::CancelCommand => {
                if matches!(self.mode, UiMode::Command(_)) {
                    self.mode = UiMode::Idle;
                }
            }
            Action::SetTheme(name) => match Theme::find(&name) {
                Some(theme) => {
                    self.status = Some(StatusMessage::Info(format!("Theme: {}", theme.name)));
                    self.theme = theme;
                }
                None => {
                    self.status = Some(StatusMessage::Error(format!("Unknown theme: {}", name)));
                }
            },
            Action::Quit => {
                self.should_quit = true;
            }
        }

        self
    }

    fn move_selection(&mut self, days: i64) {
        let target = match self.selection {
            Selection::Selected(date) if self.is_displayed(date) => {
                date.checked_add_signed(Duration::days(days))
            }
            _ => {
                let today = Local::now().date_naive();
                Some(if self.is_displayed(today) { today } else { self.current_month })
            }
        };

        if let Some(date) = target
            && self.is_displayed(date)
        {
            self.selection = Selection::Selected(date);
        }
    }

    fn change_month(&mut self, delta: i32) {
        match month_grid::shift_month(self.current_month, delta) {
            Some(first) => self.set_month(first),
            None => tracing::warn!("Cannot move {} months from {}", delta, self.current_month),
        }
    }

    fn set_month(&mut self, first: NaiveDate) {
        tracing::info!("Showing {}", month_grid::month_label(first));
        self.current_month = first;

        if self.settings.clear_selection_on_month_change
            && let Some(date) = self.selection.date()
            && !self.is_displayed(date)
        {
            self.selection = Selection::NoSelection;
        }
    }

    fn save_draft(&mut self) {
        let UiMode::AddingEvent(draft) = &self.mode else {
            return;
        };
        let title = draft.title.clone();
        self.mode = UiMode::Idle;

        match self.selection {
            Selection::Selected(date) => {
                let event = Event::new(title, date);
                tracing::info!("Added event {} on {}", event.id, event.date);
                self.events.push(event);
            }
            Selection::NoSelection => {
                tracing::debug!("Save without a selected date ignored");
            }
        }
    }

    fn submit_command(mut self) -> Self {
        let UiMode::Command(buffer) = &self.mode else {
            return self;
        };
        let command = command_mode::parse_command(buffer);
        self.mode = UiMode::Idle;

        match command {
            Command::Quit => self.apply(Action::Quit),
            Command::Goto(GotoTarget::Month { year, month }) => {
                self.apply(Action::ShowMonth { year, month })
            }
            Command::Goto(GotoTarget::Day(date)) => self.apply(Action::JumpToDate(date)),
            Command::NewEvent(title) => self.apply(Action::OpenEventForm(title)),
            Command::Theme(name) => self.apply(Action::SetTheme(name)),
            Command::Help => self.apply(Action::ShowHelp),
            Command::Error(message) => {
                tracing::warn!("Command failed: {}", message);
                self.status = Some(StatusMessage::Error(message));
                self
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn state_in(year: i32, month: u32) -> AppState {
        AppState::new().with_month(date(year, month, 1))
    }

    fn titles(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    fn run(state: AppState, actions: impl IntoIterator<Item = Action>) -> AppState {
        actions.into_iter().fold(state, AppState::apply)
    }

    #[test]
    fn new_app_shows_current_month_without_selection() {
        let app = AppState::new();
        let today = Local::now().date_naive();

        assert_eq!(app.current_month, today.with_day(1).unwrap());
        assert_eq!(app.selection, Selection::NoSelection);
        assert_eq!(app.mode, UiMode::Idle);
        assert!(app.events.is_empty());
    }

    #[test]
    fn with_month_normalises_to_first_day() {
        let app = AppState::new().with_month(date(2024, 3, 17));
        assert_eq!(app.current_month, date(2024, 3, 1));
    }

    #[test]
    fn tapping_a_cell_selects_it() {
        let app = state_in(2024, 3).apply(Action::SelectDate(date(2024, 3, 5)));
        assert_eq!(app.selection, Selection::Selected(date(2024, 3, 5)));
    }

    #[test]
    fn filtered_events_keep_insertion_order() {
        let mut app = state_in(2024, 3);
        app.add_event(Event::new("Meeting", date(2024, 3, 5)));
        app.add_event(Event::new("Lunch", date(2024, 3, 5)));
        app.add_event(Event::new("Call", date(2024, 3, 6)));

        let app = app.apply(Action::SelectDate(date(2024, 3, 5)));

        assert_eq!(titles(&app.events_for_selection()), vec!["Meeting", "Lunch"]);
    }

    fn day_in_march(day: u32) -> NaiveDate {
        date(2024, 3, day)
    }

    proptest! {
        #[test]
        fn selection_lists_exactly_its_events_in_order(
            days in prop::collection::vec(1u32..=10, 0..24),
            selected in 1u32..=10,
        ) {
            let mut app = state_in(2024, 3);
            for (i, day) in days.iter().enumerate() {
                app.add_event(Event::new(format!("Event {i}"), day_in_march(*day)));
            }
            let selected = day_in_march(selected);

            let expected: Vec<Uuid> = app
                .events
                .iter()
                .filter(|e| e.date == selected)
                .map(|e| e.id)
                .collect();
            prop_assert!(app.events_for_selection().is_empty());

            let app = app.apply(Action::SelectDate(selected));
            let listed: Vec<Uuid> = app.events_for_selection().iter().map(|e| e.id).collect();
            prop_assert_eq!(listed, expected);

            let app = app.apply(Action::ClearSelection);
            prop_assert!(app.events_for_selection().is_empty());
        }
    }

    #[test]
    fn no_selection_lists_no_events() {
        let mut app = state_in(2024, 3);
        app.add_event(Event::new("Meeting", date(2024, 3, 5)));

        assert!(app.events_for_selection().is_empty());
    }

    #[test]
    fn saving_appends_event_for_selected_date() {
        let app = run(
            state_in(2024, 4),
            [
                Action::SelectDate(date(2024, 4, 10)),
                Action::OpenEventForm(None),
                Action::DraftInput('R'),
                Action::DraftInput('e'),
                Action::DraftInput('v'),
                Action::DraftInput('i'),
                Action::DraftInput('e'),
                Action::DraftInput('w'),
                Action::SaveEvent,
            ],
        );

        assert_eq!(app.events.len(), 1);
        assert_eq!(app.events[0].title, "Review");
        assert_eq!(app.events[0].date, date(2024, 4, 10));
        assert_eq!(app.mode, UiMode::Idle);
    }

    #[test]
    fn saving_without_selection_appends_nothing_and_closes_form() {
        let app = run(
            state_in(2024, 4),
            [
                Action::OpenEventForm(Some("Review".to_string())),
                Action::SaveEvent,
            ],
        );

        assert!(app.events.is_empty());
        assert_eq!(app.mode, UiMode::Idle);
    }

    #[test]
    fn cancel_discards_draft() {
        let app = run(
            state_in(2024, 4),
            [
                Action::SelectDate(date(2024, 4, 10)),
                Action::OpenEventForm(Some("Draft".to_string())),
                Action::CancelEvent,
            ],
        );

        assert!(app.events.is_empty());
        assert_eq!(app.mode, UiMode::Idle);

        let reopened = app.apply(Action::OpenEventForm(None));
        assert_eq!(reopened.mode, UiMode::AddingEvent(EventDraft::default()));
    }

    #[test]
    fn backspace_edits_draft_title() {
        let app = run(
            state_in(2024, 4),
            [
                Action::OpenEventForm(Some("Lunchx".to_string())),
                Action::DraftBackspace,
            ],
        );

        assert_eq!(app.mode, UiMode::AddingEvent(EventDraft { title: "Lunch".to_string() }));
    }

    #[test]
    fn empty_title_is_still_saved() {
        let app = run(
            state_in(2024, 4),
            [
                Action::SelectDate(date(2024, 4, 1)),
                Action::OpenEventForm(None),
                Action::SaveEvent,
            ],
        );

        assert_eq!(app.events.len(), 1);
        assert_eq!(app.events[0].title, "");
    }

    #[test]
    fn swipe_left_advances_one_month() {
        let app = state_in(2024, 3).apply(Action::Swipe(SwipeDirection::Left));
        assert_eq!(app.current_month, date(2024, 4, 1));
    }

    #[test]
    fn swipe_right_goes_back_one_month() {
        let app = state_in(2024, 3).apply(Action::Swipe(SwipeDirection::Right));
        assert_eq!(app.current_month, date(2024, 2, 1));
    }

    #[test]
    fn swipes_wrap_across_years() {
        let forward = state_in(2024, 12).apply(Action::Swipe(SwipeDirection::Left));
        let back = state_in(2024, 1).apply(Action::Swipe(SwipeDirection::Right));

        assert_eq!(forward.current_month, date(2025, 1, 1));
        assert_eq!(back.current_month, date(2023, 12, 1));
    }

    #[test]
    fn selection_survives_month_change_by_default() {
        let app = run(
            state_in(2024, 3),
            [
                Action::SelectDate(date(2024, 3, 5)),
                Action::Swipe(SwipeDirection::Left),
            ],
        );

        assert_eq!(app.selection, Selection::Selected(date(2024, 3, 5)));
    }

    #[test]
    fn selection_cleared_on_month_change_when_configured() {
        let settings = Settings {
            clear_selection_on_month_change: true,
            ..Settings::default()
        };
        let app = run(
            state_in(2024, 3).with_settings(settings),
            [
                Action::SelectDate(date(2024, 3, 5)),
                Action::Swipe(SwipeDirection::Left),
            ],
        );

        assert_eq!(app.selection, Selection::NoSelection);
    }

    #[test]
    fn confirming_picker_shows_first_of_chosen_month() {
        let app = run(
            state_in(2021, 9),
            [
                Action::OpenMonthPicker,
                Action::PickerMonth(-3),
                Action::PickerYear(4),
                Action::ConfirmPicker,
            ],
        );

        assert_eq!(app.current_month, date(2025, 6, 1));
        assert_eq!(app.mode, UiMode::Idle);
    }

    #[test]
    fn show_month_ignores_prior_value() {
        let app = state_in(2029, 11).apply(Action::ShowMonth { year: 2025, month: 6 });
        assert_eq!(app.current_month, date(2025, 6, 1));
    }

    #[test]
    fn invalid_month_retains_previous_state() {
        let before = state_in(2024, 3);
        let after = before.clone().apply(Action::ShowMonth { year: 2024, month: 13 });

        assert_eq!(after, before);
    }

    #[test]
    fn dismissing_picker_keeps_month() {
        let app = run(
            state_in(2024, 3),
            [Action::OpenMonthPicker, Action::PickerMonth(1), Action::DismissPicker],
        );

        assert_eq!(app.current_month, date(2024, 3, 1));
        assert_eq!(app.mode, UiMode::Idle);
    }

    #[test]
    fn picker_is_seeded_from_displayed_month() {
        let app = state_in(2024, 3).apply(Action::OpenMonthPicker);
        assert_eq!(app.mode, UiMode::PickingMonth(MonthPicker { month: 3, year: 2024 }));
    }

    #[test]
    fn picker_year_clamps_to_range() {
        let app = run(state_in(2035, 1), [Action::OpenMonthPicker, Action::PickerYear(1)]);
        assert_eq!(app.mode, UiMode::PickingMonth(MonthPicker { month: 1, year: 2030 }));

        let app = run(state_in(2020, 1), [Action::OpenMonthPicker, Action::PickerYear(-1)]);
        assert_eq!(app.mode, UiMode::PickingMonth(MonthPicker { month: 1, year: 2020 }));
    }

    #[test]
    fn picker_month_wraps() {
        let mut picker = MonthPicker { month: 12, year: 2024 };
        picker.step_month(1);
        assert_eq!(picker.month, 1);
        picker.step_month(-1);
        assert_eq!(picker.month, 12);
    }

    #[test]
    fn only_one_modal_opens_at_a_time() {
        let app = run(state_in(2024, 3), [Action::OpenMonthPicker, Action::OpenEventForm(None)]);
        assert!(matches!(app.mode, UiMode::PickingMonth(_)));
    }

    #[test]
    fn move_selection_stays_within_displayed_month() {
        let app = run(
            state_in(2024, 3),
            [Action::SelectDate(date(2024, 3, 30)), Action::MoveSelection(7)],
        );
        assert_eq!(app.selection, Selection::Selected(date(2024, 3, 30)));

        let app = app.apply(Action::MoveSelection(1));
        assert_eq!(app.selection, Selection::Selected(date(2024, 3, 31)));
    }

    #[test]
    fn first_move_without_selection_picks_first_of_month() {
        let app = state_in(2001, 5).apply(Action::MoveSelection(1));
        assert_eq!(app.selection, Selection::Selected(date(2001, 5, 1)));
    }

    #[test]
    fn jump_to_date_shows_and_selects_it() {
        let app = state_in(2024, 3).apply(Action::JumpToDate(date(2026, 10, 18)));

        assert_eq!(app.current_month, date(2026, 10, 1));
        assert_eq!(app.selection, Selection::Selected(date(2026, 10, 18)));
    }

    #[test]
    fn clear_selection_removes_it() {
        let app = run(
            state_in(2024, 3),
            [Action::SelectDate(date(2024, 3, 5)), Action::ClearSelection],
        );
        assert_eq!(app.selection, Selection::NoSelection);
    }

    #[test]
    fn goto_command_changes_month() {
        let mut actions = vec![Action::EnterCommand];
        actions.extend("goto 2025-06".chars().map(Action::CommandInput));
        actions.push(Action::SubmitCommand);

        let app = run(state_in(2024, 3), actions);

        assert_eq!(app.current_month, date(2025, 6, 1));
        assert_eq!(app.mode, UiMode::Idle);
    }

    #[test]
    fn unknown_command_sets_error_status() {
        let mut actions = vec![Action::EnterCommand];
        actions.extend("bogus".chars().map(Action::CommandInput));
        actions.push(Action::SubmitCommand);

        let app = run(state_in(2024, 3), actions);

        assert!(matches!(app.status, Some(StatusMessage::Error(_))));
        assert_eq!(app.mode, UiMode::Idle);
    }

    #[test]
    fn status_clears_on_next_action() {
        let app = state_in(2024, 3).apply(Action::SetTheme("neon".to_string()));
        assert!(app.status.is_some());

        let app = app.apply(Action::ClearSelection);
        assert_eq!(app.status, None);
    }

    #[test]
    fn backspacing_past_colon_leaves_command_mode() {
        let app = run(state_in(2024, 3), [Action::EnterCommand, Action::CommandBackspace]);
        assert_eq!(app.mode, UiMode::Idle);
    }

    #[test]
    fn set_theme_switches_known_theme() {
        let app = state_in(2024, 3).apply(Action::SetTheme("nord".to_string()));
        assert_eq!(app.theme.name, "nord");
    }

    #[test]
    fn help_scroll_never_goes_negative() {
        let app = run(
            state_in(2024, 3),
            [Action::ShowHelp, Action::ScrollHelp(2), Action::ScrollHelp(-5)],
        );
        assert_eq!(app.mode, UiMode::Help { scroll: 0 });
    }

    #[test]
    fn help_scroll_stops_at_last_page() {
        let app = run(
            state_in(2024, 3),
            [Action::ShowHelp, Action::ScrollHelp(100)],
        );
        assert_eq!(app.mode, UiMode::Help { scroll: help::max_scroll() });

        let app = app.apply(Action::ScrollHelp(-1));
        assert_eq!(app.mode, UiMode::Help { scroll: help::max_scroll() - 1 });
    }

    #[test]
    fn quit_sets_flag() {
        let app = state_in(2024, 3).apply(Action::Quit);
        assert!(app.should_quit);
    }
}
