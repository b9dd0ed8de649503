use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use gridcal::app::{AppState, EventDraft, Selection};

pub fn render(f: &mut Frame, app: &AppState, draft: &EventDraft) {
    let form_area = super::centered(f.size(), 60, 9);
    f.render_widget(Clear, form_area);

    let date_line = match app.selection {
        Selection::Selected(date) => Line::from(vec![
            Span::styled("Date:  ", Style::default().fg(app.theme.muted)),
            Span::raw(date.format("%Y-%m-%d").to_string()),
        ]),
        Selection::NoSelection => Line::from(vec![
            Span::styled("Date:  ", Style::default().fg(app.theme.muted)),
            Span::styled("none selected, Save will not add anything", Style::default().fg(app.theme.error)),
        ]),
    };

    let form_text = vec![
        Line::from(vec![Span::styled("Create New Event", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(app.theme.selected_outline)),
            Span::raw(draft.title.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        date_line,
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Save | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = Cancel"),
        ]),
    ];

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" New Event ")
            .style(Style::default().bg(app.theme.dialog_bg)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
