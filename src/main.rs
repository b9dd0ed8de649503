use anyhow::Context;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use gridcal::{app::AppState, storage::config::Config, ui::theme::Theme};

mod cli;
use cli::{CliMode, USAGE, format_month, parse_cli_args};
mod tui;
use tui::{add_sample_events, run_tui};

fn main() -> anyhow::Result<()> {
    setup_logging();

    let options = match parse_cli_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let config = match &options.config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    let settings = config.settings().context("applying configuration")?;

    match options.mode {
        CliMode::Help => {
            println!("{}", USAGE);
        }
        CliMode::Print(month) => {
            let month = month.unwrap_or_else(|| Local::now().date_naive());
            println!("{}", format_month(month, settings));
        }
        CliMode::Interactive { sample, month } => {
            let mut app = AppState::new()
                .with_settings(settings)
                .with_theme(Theme::get_by_name(&config.ui.theme));
            if let Some(month) = month {
                app = app.with_month(month);
            }
            if sample {
                add_sample_events(&mut app);
            }
            run_tui(app, config.input.swipe_threshold).context("running terminal UI")?;
        }
    }

    Ok(())
}

fn setup_logging() {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "gridcal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("gridcal started");
}
