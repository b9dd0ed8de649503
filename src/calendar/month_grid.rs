use chrono::{Datelike, Local, Months, NaiveDate, Weekday};

/// Day 1 of `(year, month)`, or `None` when the pair is not a real month.
pub fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Length of the month, found without leaving it so the last month chrono
/// can represent still has an answer.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    month_start(year, month)?;
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
}

/// Every calendar day of `date`'s month, in ascending order.
pub fn dates_in_month(date: NaiveDate) -> Vec<NaiveDate> {
    let count = days_in_month(date.year(), date.month()).unwrap_or(0);

    (1..=count).filter_map(|day| date.with_day(day)).collect()
}

/// 1-based column of day 1 of `date`'s month in a week that begins on
/// `week_start`. The grid is left-padded with `offset - 1` blank cells.
pub fn first_weekday_offset(date: NaiveDate, week_start: Weekday) -> u32 {
    let first = date.with_day(1).unwrap_or(date);
    let from_monday = first.weekday().num_days_from_monday();
    let start_from_monday = week_start.num_days_from_monday();

    (7 + from_monday - start_from_monday) % 7 + 1
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Calendar-day equality; any time-of-day component is ignored.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

pub fn is_today<D: Datelike>(date: &D) -> bool {
    is_same_day(date, &Local::now().date_naive())
}

/// Day 1 of the month `delta` months away from `date`'s month.
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let first = month_start(date.year(), date.month())?;
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    }
}

pub fn weekday_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    for i in 1..7 {
        order[i] = order[i - 1].succ();
    }
    order
}

/// Number of week rows needed to show `date`'s month.
pub fn row_count(date: NaiveDate, week_start: Weekday) -> u32 {
    let blanks = first_weekday_offset(date, week_start) - 1;
    let days = dates_in_month(date).len() as u32;
    (blanks + days).div_ceil(7)
}
