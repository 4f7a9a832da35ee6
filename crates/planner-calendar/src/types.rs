use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("year {0} is outside the representable date range")]
    YearOutOfRange(i32),
    #[error("week {week} does not exist in year {year}")]
    InvalidWeek { year: i32, week: u32 },
}

pub type Result<T> = std::result::Result<T, CalendarError>;

/// How many Monday-first calendar weeks a month spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthShape {
    FourWeek,
    FiveWeek,
    SixWeek,
}

/// The kind of planner page, selecting which A5 template it fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Month overview with the day grid
    MonthSummary(MonthShape),
    /// Free-form notes page for one week
    WeekPad,
    /// Day-by-day list for one week
    WeekDayList,
}

impl PageKind {
    /// File stem of the template this page fills
    pub fn template_name(self) -> &'static str {
        match self {
            PageKind::MonthSummary(MonthShape::FourWeek) => "month_summary_4wk",
            PageKind::MonthSummary(MonthShape::FiveWeek) => "month_summary_5wk",
            PageKind::MonthSummary(MonthShape::SixWeek) => "month_summary_6wk",
            PageKind::WeekPad => "week_pad",
            PageKind::WeekDayList => "week_daylist",
        }
    }
}

/// One planned page: the template to fill, the output file slug, and a
/// complete substitution set covering every token the template carries.
///
/// Pages are self-contained; nothing about one page depends on the
/// pages planned before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPage {
    pub kind: PageKind,
    pub slug: String,
    pub substitutions: BTreeMap<String, String>,
}
