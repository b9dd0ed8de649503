use crate::ui::theme::Theme;

/// Height of the help overlay, borders included.
pub const HELP_HEIGHT: u16 = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum HelpLine {
    Title(&'static str),
    Section(&'static str),
    Entry(String),
    Blank,
}

pub fn help_lines() -> Vec<HelpLine> {
    use HelpLine::{Blank, Entry, Section, Title};

    let entry = |s: &str| Entry(s.to_string());
    vec![
        Title("gridcal Help"),
        Blank,
        Section("Selecting days:"),
        entry("  click    - Select the clicked day"),
        entry("  h/l      - Previous/next day"),
        entry("  j/k      - Next/previous week"),
        entry("  t        - Jump to today"),
        entry("  Esc      - Clear the selection"),
        Blank,
        Section("Changing month:"),
        entry("  drag     - Drag left for next month, right for previous"),
        entry("  { / }    - Previous/next month"),
        entry("  m        - Month and year picker"),
        Blank,
        Section("Events:"),
        entry("  a        - Add an event on the selected day"),
        entry("  :new     - Add with a title (:new Team lunch)"),
        Blank,
        Section("Commands:"),
        entry("  :q       - Quit"),
        entry("  :goto    - Show a month or day (:goto 2025-06)"),
        Entry(format!("  :theme   - Change theme ({})", Theme::available_themes().join(", "))),
        entry("  :help    - Show this help"),
        Blank,
    ]
}

pub fn visible_lines() -> usize {
    usize::from(HELP_HEIGHT.saturating_sub(3))
}

/// Largest scroll offset that still fills the overlay.
pub fn max_scroll() -> usize {
    help_lines().len().saturating_sub(visible_lines())
}
