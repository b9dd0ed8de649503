pub mod event;
pub mod month_grid;

pub use event::Event;
