use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub is_today: bool,
    pub is_selected: bool,
}

/// The seven dates of the Monday-first week containing `today`.
pub fn week_of(today: NaiveDate) -> Vec<NaiveDate> {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    (0..7).map(|offset| monday + Duration::days(offset)).collect()
}

pub fn week_view(today: NaiveDate, selected: NaiveDate) -> Vec<CalendarDay> {
    week_of(today)
        .into_iter()
        .map(|date| CalendarDay {
            date,
            weekday: date.weekday(),
            is_today: date == today,
            is_selected: date == selected,
        })
        .collect()
}
