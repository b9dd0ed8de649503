use chrono::{Datelike, Local, NaiveDate, Weekday};
use ratatui::layout::Rect;

use crate::app::AppState;
use crate::calendar::month_grid;

/// Rows above the first week: month label, spacer, weekday header.
pub const HEADER_ROWS: u16 = 3;
/// Each week takes a day row plus a spacer row.
pub const WEEK_STRIDE: u16 = 2;
pub const MIN_CELL_WIDTH: u16 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub label: String,
    pub header: [Weekday; 7],
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_selected: bool,
    pub is_today: bool,
    pub has_events: bool,
}

impl DayCell {
    pub fn blank() -> Self {
        Self::new(None)
    }

    pub fn new(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            has_events: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_events(mut self, has_events: bool) -> Self {
        self.has_events = has_events;
        self
    }
}

pub fn calculate_layout(state: &AppState) -> MonthGrid {
    build_grid(state, Local::now().date_naive())
}

/// Lays out the displayed month as rows of seven cells, padded with blanks
/// before day 1 and after the last day.
pub fn build_grid(state: &AppState, today: NaiveDate) -> MonthGrid {
    let week_start = state.settings.week_start;
    let month = state.current_month;
    let leading_blanks = month_grid::first_weekday_offset(month, week_start) - 1;

    let mut cells: Vec<DayCell> = (0..leading_blanks).map(|_| DayCell::blank()).collect();

    cells.extend(month_grid::dates_in_month(month).into_iter().map(|date| {
        DayCell::new(Some(date))
            .with_selected(state.selection.is(date))
            .with_today(month_grid::is_same_day(&date, &today))
            .with_events(!state.events_on(date).is_empty())
    }));

    let rows = month_grid::row_count(month, week_start) as usize;
    cells.resize(rows * 7, DayCell::blank());

    let weeks = cells
        .chunks(7)
        .map(|days| Week { days: days.to_vec() })
        .collect();

    MonthGrid {
        label: month_grid::month_label(month),
        header: month_grid::weekday_order(week_start),
        weeks,
    }
}

pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}

/// Plain-text rendering in the style of `cal(1)`.
pub fn format_plain(grid: &MonthGrid) -> String {
    let mut lines = Vec::with_capacity(grid.weeks.len() + 2);
    lines.push(format!("{:^20}", grid.label).trim_end().to_string());
    lines.push(
        grid.header
            .iter()
            .map(|w| weekday_abbrev(*w))
            .collect::<Vec<_>>()
            .join(" "),
    );

    for week in &grid.weeks {
        let line = week
            .days
            .iter()
            .map(|cell| match cell.date {
                Some(date) => format!("{:>2}", date.day()),
                None => "  ".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Screen geometry of the grid inside a bordered block, shared by the
/// renderer and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub x: u16,
    pub y: u16,
    pub cell_width: u16,
}

impl GridGeometry {
    pub fn for_area(area: Rect) -> Self {
        let inner_x = area.x.saturating_add(1);
        let inner_y = area.y.saturating_add(1);
        let inner_width = area.width.saturating_sub(2);

        Self {
            x: inner_x,
            y: inner_y.saturating_add(HEADER_ROWS),
            cell_width: (inner_width / 7).max(MIN_CELL_WIDTH),
        }
    }

    pub fn cell_at(&self, grid: &MonthGrid, column: u16, row: u16) -> Option<NaiveDate> {
        if column < self.x || row < self.y {
            return None;
        }
        let col = usize::from((column - self.x) / self.cell_width);
        let week = usize::from((row - self.y) / WEEK_STRIDE);
        if col >= 7 {
            return None;
        }

        grid.weeks.get(week)?.days.get(col)?.date
    }
}
