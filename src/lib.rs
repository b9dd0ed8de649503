pub mod calendar;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use calendar::Event;
pub use app::{Action, AppState, Selection, UiMode};
