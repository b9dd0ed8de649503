mod calendar_views;
mod dialogs;
mod presentation;
mod sample_events;
mod session;

pub use sample_events::add_sample_events;
pub use session::run_tui;
