use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use gridcal::{
    app::{AppState, MonthPicker},
    calendar::month_grid,
};

pub fn render(f: &mut Frame, app: &AppState, picker: &MonthPicker) {
    let picker_area = super::centered(f.size(), 44, 10);
    f.render_widget(Clear, picker_area);

    let month_name = month_grid::month_start(picker.year, picker.month)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default();
    let years = &app.settings.year_range;
    let value_style = Style::default().fg(app.theme.selected_outline).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(app.theme.muted);

    let picker_text = vec![
        Line::from(vec![Span::styled("Select Month and Year", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Month: ", label_style),
            Span::raw("◀ "),
            Span::styled(format!("{:>2} ({})", picker.month, month_name), value_style),
            Span::raw(" ▶"),
        ]),
        Line::from(vec![
            Span::styled("Year:  ", label_style),
            Span::raw("◀ "),
            Span::styled(picker.year.to_string(), value_style),
            Span::raw(" ▶"),
            Span::styled(format!("  ({}-{})", years.start(), years.end()), label_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("h/l", Style::default().fg(Color::Cyan)),
            Span::raw(" = Month | "),
            Span::styled("j/k", Style::default().fg(Color::Cyan)),
            Span::raw(" = Year"),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Done | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = Cancel"),
        ]),
    ];

    let picker_paragraph = Paragraph::new(picker_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Change Month ")
            .style(Style::default().bg(app.theme.dialog_bg)))
        .alignment(Alignment::Left);

    f.render_widget(picker_paragraph, picker_area);
}
