//! ISO week arithmetic
//!
//! The planner walks ISO-8601 weeks: weeks run Monday to Sunday, week 1
//! is the week containing the year's first Thursday, and a week belongs
//! to the month its Thursday falls in (the month holding the majority of
//! its days).

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::types::{CalendarError, Result};

/// Number of ISO weeks in a year (52 or 53).
///
/// December 28th is always inside the year's last ISO week.
pub fn weeks_in_year(year: i32) -> Result<u32> {
    let dec_28 =
        NaiveDate::from_ymd_opt(year, 12, 28).ok_or(CalendarError::YearOutOfRange(year))?;
    Ok(dec_28.iso_week().week())
}

/// The Thursday of an ISO week: the day whose month owns the week.
pub fn week_anchor(year: i32, week: u32) -> Result<NaiveDate> {
    NaiveDate::from_isoywd_opt(year, week, Weekday::Thu)
        .ok_or(CalendarError::InvalidWeek { year, week })
}

/// Monday through Sunday dates of an ISO week.
pub fn week_dates(year: i32, week: u32) -> Result<[NaiveDate; 7]> {
    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or(CalendarError::InvalidWeek { year, week })?;
    let mut dates = [monday; 7];
    for (offset, date) in dates.iter_mut().enumerate() {
        *date = monday
            .checked_add_days(Days::new(offset as u64))
            .ok_or(CalendarError::YearOutOfRange(year))?;
    }
    Ok(dates)
}

/// Header text naming a week: "2024 WEEK 5"
pub fn week_description(year: i32, week: u32) -> String {
    format!("{year} WEEK {week}")
}

/// Uppercase English month name of a date: "JANUARY"
pub fn month_name_upper(date: NaiveDate) -> String {
    date.format("%B").to_string().to_uppercase()
}

/// Header text for a week's date span: "JANUARY 1 - 7", or with both
/// month names when the week crosses a month boundary:
/// "JANUARY 29 - FEBRUARY 4".
pub fn month_days_text(dates: &[NaiveDate; 7]) -> String {
    let monday = dates[0];
    let sunday = dates[6];
    if monday.month() == sunday.month() {
        format!(
            "{} {} - {}",
            month_name_upper(monday),
            monday.day(),
            sunday.day()
        )
    } else {
        format!(
            "{} {} - {} {}",
            month_name_upper(monday),
            monday.day(),
            month_name_upper(sunday),
            sunday.day()
        )
    }
}
