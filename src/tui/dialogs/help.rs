use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use gridcal::{
    app::AppState,
    ui::help::{self, HelpLine, HELP_HEIGHT},
};

pub fn render(f: &mut Frame, app: &AppState, scroll: usize) {
    let help_area = super::centered(f.size(), 60, HELP_HEIGHT);
    f.render_widget(Clear, help_area);

    let section = Style::default().fg(app.theme.help_section);
    let title = Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD);
    let help_text: Vec<Line> = help::help_lines()
        .into_iter()
        .map(|line| match line {
            HelpLine::Title(text) => Line::from(vec![Span::styled(text, title)]),
            HelpLine::Section(text) => Line::from(vec![Span::styled(text, section)]),
            HelpLine::Entry(text) => Line::from(text),
            HelpLine::Blank => Line::from(""),
        })
        .collect();

    let visible_lines = help::visible_lines();
    let total_lines = help_text.len();
    let scroll = scroll.min(help::max_scroll());

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(app.theme.dialog_bg)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
