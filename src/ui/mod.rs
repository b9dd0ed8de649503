pub mod help;
pub mod month_view;
pub mod theme;
