use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use gridcal::app::{AppState, Selection};

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let title = match app.selection {
        Selection::Selected(date) => format!("Events on {}", date.format("%B %d, %Y")),
        Selection::NoSelection => "No date selected".to_string(),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    let events = app.events_for_selection();

    if matches!(app.selection, Selection::NoSelection) {
        lines.push(Line::from(vec![
            Span::styled("Click a day or use h/j/k/l to select one", Style::default().fg(app.theme.muted)),
        ]));
    } else if events.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No events", Style::default().fg(app.theme.muted)),
        ]));
    } else {
        for event in events {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(app.theme.event_marker)),
                Span::styled(event.title.clone(), Style::default().fg(app.theme.day_fg)),
            ]));
        }
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Events "));
    f.render_widget(content, area);
}
