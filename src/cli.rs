use std::path::PathBuf;

use chrono::NaiveDate;

use gridcal::{
    app::{AppState, Settings},
    input::command_mode::parse_year_month,
    ui::month_view,
};

pub const USAGE: &str = "Usage: gridcal [--month YYYY-MM] [--sample] [--config PATH] [--print [YYYY-MM]]";

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Interactive { sample: bool, month: Option<NaiveDate> },
    Print(Option<NaiveDate>),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub mode: CliMode,
    pub config_path: Option<PathBuf>,
}

pub fn parse_cli_args<I>(args: I) -> Result<CliOptions, String>
where
    I: IntoIterator<Item = String>,
{
    let mut sample = false;
    let mut month = None;
    let mut print = None;
    let mut config_path = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--month" => {
                let value = args.next().ok_or("--month requires a YYYY-MM value")?;
                month = Some(parse_month_arg(&value)?);
            }
            "--config" => {
                let value = args.next().ok_or("--config requires a path")?;
                config_path = Some(PathBuf::from(value));
            }
            "--print" => {
                let target = match args.next_if(|next| !next.starts_with("--")) {
                    Some(value) => Some(parse_month_arg(&value)?),
                    None => None,
                };
                print = Some(target);
            }
            "--help" | "-h" => {
                return Ok(CliOptions { mode: CliMode::Help, config_path });
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    let mode = match print {
        Some(target) => CliMode::Print(target.or(month)),
        None => CliMode::Interactive { sample, month },
    };

    Ok(CliOptions { mode, config_path })
}

fn parse_month_arg(value: &str) -> Result<NaiveDate, String> {
    parse_year_month(value).ok_or_else(|| format!("Invalid month '{}'. Use YYYY-MM.", value))
}

pub fn format_month(month: NaiveDate, settings: Settings) -> String {
    let state = AppState::new().with_settings(settings).with_month(month);
    month_view::format_plain(&month_view::calculate_layout(&state))
}
