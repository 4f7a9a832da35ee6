//! Year planning
//!
//! Walks the ISO weeks of a year and produces the ordered page
//! sequence: a month summary page whenever the walk enters a new month,
//! then a week pad page and a week day list page for every week. Blank
//! slots (`None`) position the real pages on the correct sheet sides.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use log::{debug, info};
use planner_impose::SheetOrder;

use crate::grid::MonthGrid;
use crate::types::{PageKind, PlannedPage, Result};
use crate::week::{
    month_days_text, month_name_upper, week_anchor, week_dates, week_description, weeks_in_year,
};

/// Substitution tokens for the day-of-month slots on the day list page,
/// Monday first
const DAY_TOKENS: [&str; 7] = [
    "{mon_dom}",
    "{tue_dom}",
    "{wed_dom}",
    "{thur_dom}",
    "{fri_dom}",
    "{sat_dom}",
    "{sun_dom}",
];

/// Plan the complete page sequence for one year.
///
/// Month summary pages always land on right-hand sheet sides: the
/// sequence opens with a blank slot in natural order (reordered sheets
/// already start on a right-hand side), and every summary after the
/// first is preceded by one blank. The sequence is not padded; run
/// [`planner_impose::pad_pages`] before imposing it.
pub fn plan_year(year: i32, order: SheetOrder) -> Result<Vec<Option<PlannedPage>>> {
    let weeks = weeks_in_year(year)?;
    info!("planning {year}: {weeks} ISO weeks");

    let mut pages: Vec<Option<PlannedPage>> = Vec::new();
    if order == SheetOrder::Natural {
        pages.push(None);
    }

    let mut current_month = None;
    for week in 1..=weeks {
        let anchor = week_anchor(year, week)?;
        if current_month != Some(anchor.month()) {
            if current_month.is_some() {
                pages.push(None);
            }
            current_month = Some(anchor.month());
            let summary = month_summary_page(anchor)?;
            debug!("month summary {} at week {week}", summary.slug);
            pages.push(Some(summary));
        }
        pages.push(Some(week_pad_page(year, week)));
        pages.push(Some(week_daylist_page(year, week)?));
    }

    Ok(pages)
}

/// Month overview page for the anchor's month, grid tokens `{1}`..`{42}`
fn month_summary_page(anchor: NaiveDate) -> Result<PlannedPage> {
    let grid = MonthGrid::for_month(anchor.year(), anchor.month())?;
    let month_name = month_name_upper(anchor);

    let mut substitutions = BTreeMap::new();
    substitutions.insert("{MONTH}".to_string(), month_name.clone());
    for (index, cell) in grid.cells().iter().enumerate() {
        let value = cell.map(|day| day.to_string()).unwrap_or_default();
        substitutions.insert(format!("{{{}}}", index + 1), value);
    }

    Ok(PlannedPage {
        kind: PageKind::MonthSummary(grid.shape()),
        slug: format!("{month_name}_start_page"),
        substitutions,
    })
}

fn week_pad_page(year: i32, week: u32) -> PlannedPage {
    let mut substitutions = BTreeMap::new();
    substitutions.insert(
        "{WEEK_DESCRIPTION_TEXT}".to_string(),
        week_description(year, week),
    );

    PlannedPage {
        kind: PageKind::WeekPad,
        slug: format!("week_pad_week{week}"),
        substitutions,
    }
}

fn week_daylist_page(year: i32, week: u32) -> Result<PlannedPage> {
    let dates = week_dates(year, week)?;

    let mut substitutions = BTreeMap::new();
    substitutions.insert(
        "{WEEK_DESCRIPTION_TEXT}".to_string(),
        week_description(year, week),
    );
    substitutions.insert("{MONTH_DAYS_TEXT}".to_string(), month_days_text(&dates));
    for (token, date) in DAY_TOKENS.iter().zip(dates) {
        substitutions.insert(token.to_string(), date.day().to_string());
    }

    Ok(PlannedPage {
        kind: PageKind::WeekDayList,
        slug: format!("week_daylist_week{week}"),
        substitutions,
    })
}
