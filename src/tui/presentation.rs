use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use gridcal::app::{AppState, StatusMessage, UiMode};
use crate::tui::{calendar_views, dialogs};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub grid: Rect,
    pub events: Rect,
    pub status: Rect,
}

pub fn screen_areas(size: Rect) -> ScreenAreas {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    ScreenAreas {
        title: main_chunks[0],
        grid: content_chunks[0],
        events: content_chunks[1],
        status: main_chunks[2],
    }
}

fn mode_label(mode: &UiMode) -> &'static str {
    match mode {
        UiMode::Idle => "Calendar",
        UiMode::PickingMonth(_) => "Change Month",
        UiMode::AddingEvent(_) => "Add Event",
        UiMode::Help { .. } => "Help",
        UiMode::Command(_) => "Command",
    }
}

pub fn ui(f: &mut Frame, app: &AppState) {
    let areas = screen_areas(f.size());

    let title = Paragraph::new(format!("gridcal - {}", mode_label(&app.mode)))
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, areas.title);

    calendar_views::month::render(f, app, areas.grid);
    calendar_views::event_list::render(f, app, areas.events);

    let (status_text, status_color, alignment) = match (&app.mode, &app.status) {
        (UiMode::Command(buffer), _) => (buffer.clone(), app.theme.command_mode, Alignment::Left),
        (_, Some(StatusMessage::Error(message))) => (message.clone(), app.theme.error, Alignment::Left),
        (_, Some(StatusMessage::Info(message))) => (message.clone(), app.theme.success, Alignment::Left),
        _ => (
            format!(
                "Events: {} | m = month, a = add, {{/}} or drag = swipe | 'q' quit, '?' help",
                app.events.len()
            ),
            app.theme.status_bar,
            Alignment::Center,
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, areas.status);

    match &app.mode {
        UiMode::PickingMonth(picker) => dialogs::month_picker::render(f, app, picker),
        UiMode::AddingEvent(draft) => dialogs::event_form::render(f, app, draft),
        UiMode::Help { scroll } => dialogs::help::render(f, app, *scroll),
        UiMode::Idle | UiMode::Command(_) => {}
    }
}
