use planner_calendar::{PageKind, plan_year, weeks_in_year};
use planner_impose::{PAGES_PER_SHEET_PAIR, SheetOrder};

use crate::types::Result;

/// Statistics about one year's planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerStatistics {
    /// ISO weeks in the year (52 or 53)
    pub weeks: u32,
    /// Month summary pages
    pub month_pages: usize,
    /// Week pages (one pad and one day list per week)
    pub week_pages: usize,
    /// Blank pages, including end padding
    pub blank_pages: usize,
    /// Total page slots after padding
    pub total_pages: usize,
    /// A4 sheet sides
    pub sheets: usize,
    /// Physical sheets of paper (two sides each)
    pub sheets_of_paper: usize,
}

/// Calculate statistics for one year without writing anything.
pub fn calculate_statistics(year: i32, order: SheetOrder) -> Result<PlannerStatistics> {
    let weeks = weeks_in_year(year)?;
    let pages = plan_year(year, order)?;

    let mut month_pages = 0;
    let mut week_pages = 0;
    let mut blank_pages = 0;
    for page in &pages {
        match page {
            Some(page) => match page.kind {
                PageKind::MonthSummary(_) => month_pages += 1,
                PageKind::WeekPad | PageKind::WeekDayList => week_pages += 1,
            },
            None => blank_pages += 1,
        }
    }

    // Pad to a multiple of four; the filler counts as blank pages
    let total_pages = ((pages.len() + PAGES_PER_SHEET_PAIR - 1) / PAGES_PER_SHEET_PAIR)
        * PAGES_PER_SHEET_PAIR;
    blank_pages += total_pages - pages.len();

    let sheets = total_pages / 2;

    Ok(PlannerStatistics {
        weeks,
        month_pages,
        week_pages,
        blank_pages,
        total_pages,
        sheets,
        sheets_of_paper: sheets / 2,
    })
}
