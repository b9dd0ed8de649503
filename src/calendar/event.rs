use chrono::NaiveDate;
use uuid::Uuid;

use super::month_grid::is_same_day;

/// A titled entry pinned to one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
}

impl Event {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            date,
        }
    }

    pub fn falls_on(&self, date: NaiveDate) -> bool {
        is_same_day(&self.date, &date)
    }
}
