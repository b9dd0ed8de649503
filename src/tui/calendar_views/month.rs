use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use gridcal::{
    app::AppState,
    ui::{month_view::{self, DayCell, GridGeometry}, theme::Theme},
};

/// Width of the visible part of a cell: `[dd]` plus the event marker.
const CELL_CONTENT_WIDTH: usize = 5;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let grid = month_view::calculate_layout(app);
    let width = usize::from(GridGeometry::for_area(area).cell_width);

    let header: Vec<Span> = grid.header
        .iter()
        .map(|weekday| {
            Span::styled(
                format!("{:^width$}", month_view::weekday_abbrev(*weekday), width = width),
                Style::default().fg(app.theme.weekday_header),
            )
        })
        .collect();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(grid.label.clone(), Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(header),
    ];

    for week in &grid.weeks {
        let spans: Vec<Span> = week.days
            .iter()
            .flat_map(|cell| cell_spans(cell, width, &app.theme))
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Month "));
    f.render_widget(content, area);
}

fn cell_spans(cell: &DayCell, width: usize, theme: &Theme) -> Vec<Span<'static>> {
    let Some(date) = cell.date else {
        return vec![Span::raw(" ".repeat(width))];
    };

    let (open, close) = if cell.is_selected { ("[", "]") } else { (" ", " ") };
    let marker = if cell.has_events { "•" } else { " " };
    let left = width.saturating_sub(CELL_CONTENT_WIDTH) / 2;
    let right = width.saturating_sub(CELL_CONTENT_WIDTH + left);

    let mut style = Style::default().fg(theme.day_fg);
    if cell.is_today {
        style = style.bg(theme.today_bg).fg(theme.today_fg).add_modifier(Modifier::BOLD);
    } else if cell.is_selected {
        style = style.fg(theme.selected_outline).add_modifier(Modifier::BOLD);
    }

    vec![
        Span::raw(" ".repeat(left)),
        Span::styled(format!("{}{:>2}{}", open, date.day(), close), style),
        Span::styled(marker, Style::default().fg(theme.event_marker)),
        Span::raw(" ".repeat(right)),
    ]
}
