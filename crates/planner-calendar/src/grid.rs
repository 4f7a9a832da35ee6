//! Monday-first month grids for the month summary templates

use chrono::{Datelike, Months, NaiveDate};

use crate::types::{CalendarError, MonthShape, Result};

/// Cells in the full grid: six rows of seven days
pub const GRID_CELLS: usize = 42;

/// A month laid out on a Monday-first calendar grid.
///
/// The grid always holds 42 cells (six weeks of seven days); cells
/// before the 1st and after the last day of the month are empty. The
/// month itself occupies four, five, or six rows depending on its
/// length and starting weekday, and the unused trailing rows stay
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: [Option<u32>; GRID_CELLS],
    weeks: usize,
}

impl MonthGrid {
    /// Lay out one month of a year.
    pub fn for_month(year: i32, month: u32) -> Result<Self> {
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange(year))?;
        let next_month = first
            .checked_add_months(Months::new(1))
            .ok_or(CalendarError::YearOutOfRange(year))?;
        let days = (next_month - first).num_days() as u32;

        let lead = first.weekday().num_days_from_monday() as usize;
        let mut cells = [None; GRID_CELLS];
        for day in 1..=days {
            cells[lead + day as usize - 1] = Some(day);
        }

        // Rows covered by the leading gap plus the days, rounded up
        let weeks = (lead + days as usize + 6) / 7;

        Ok(Self { cells, weeks })
    }

    /// The 42 grid cells, row-major from the top-left Monday.
    pub fn cells(&self) -> &[Option<u32>; GRID_CELLS] {
        &self.cells
    }

    /// Number of grid rows the month occupies (4, 5, or 6).
    pub fn weeks(&self) -> usize {
        self.weeks
    }

    /// Which month summary template fits this month.
    pub fn shape(&self) -> MonthShape {
        match self.weeks {
            4 => MonthShape::FourWeek,
            5 => MonthShape::FiveWeek,
            _ => MonthShape::SixWeek,
        }
    }
}
