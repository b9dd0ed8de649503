use chrono::{Datelike, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::Action;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GotoTarget {
    Month { year: i32, month: u32 },
    Day(NaiveDate),
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(GotoTarget),
    NewEvent(Option<String>),
    Theme(String),
    Help,
    Error(String),
}

pub fn handle_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Enter => Some(Action::SubmitCommand),
        KeyCode::Esc => Some(Action::CancelCommand),
        KeyCode::Backspace => Some(Action::CommandBackspace),
        KeyCode::Char(c) => Some(Action::CommandInput(c)),
        _ => None,
    }
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "goto" => match parts.get(1) {
            None => Command::Error("goto requires a date argument".to_string()),
            Some(arg) => parse_goto_target(arg)
                .map(Command::Goto)
                .unwrap_or_else(|| Command::Error(format!("Invalid date format: {}", arg))),
        },
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                Command::NewEvent(Some(parts[1..].join(" ")))
            }
        }
        "theme" => match parts.get(1) {
            None => Command::Error("theme requires a theme name".to_string()),
            Some(name) => Command::Theme(name.to_string()),
        },
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

/// Accepts `YYYY-MM-DD` for a day or `YYYY-MM` for a whole month.
pub fn parse_goto_target(arg: &str) -> Option<GotoTarget> {
    if let Ok(date) = NaiveDate::parse_from_str(arg, "%Y-%m-%d") {
        return Some(GotoTarget::Day(date));
    }
    parse_year_month(arg).map(|first| GotoTarget::Month {
        year: first.year(),
        month: first.month(),
    })
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_year_month(arg: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", arg), "%Y-%m-%d").ok()
}
