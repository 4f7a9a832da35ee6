//! A5 template loading and token substitution

use std::collections::BTreeMap;
use std::path::Path;

use planner_calendar::{MonthShape, PageKind};

use crate::types::{RenderError, Result};

/// The five A5 templates a planner needs, loaded up front so a missing
/// file fails the run before anything is written.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    month_4wk: String,
    month_5wk: String,
    month_6wk: String,
    week_pad: String,
    week_daylist: String,
}

impl TemplateSet {
    /// Load `<name>.svg` for every page kind from `dir`.
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            month_4wk: read_template(dir, "month_summary_4wk").await?,
            month_5wk: read_template(dir, "month_summary_5wk").await?,
            month_6wk: read_template(dir, "month_summary_6wk").await?,
            week_pad: read_template(dir, "week_pad").await?,
            week_daylist: read_template(dir, "week_daylist").await?,
        })
    }

    /// The template body for a page kind.
    pub fn get(&self, kind: PageKind) -> &str {
        match kind {
            PageKind::MonthSummary(MonthShape::FourWeek) => &self.month_4wk,
            PageKind::MonthSummary(MonthShape::FiveWeek) => &self.month_5wk,
            PageKind::MonthSummary(MonthShape::SixWeek) => &self.month_6wk,
            PageKind::WeekPad => &self.week_pad,
            PageKind::WeekDayList => &self.week_daylist,
        }
    }
}

async fn read_template(dir: &Path, name: &'static str) -> Result<String> {
    let path = dir.join(format!("{name}.svg"));
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| RenderError::Template { name, path, source })
}

/// Replace every token of the substitution set with its value.
///
/// Plain text replacement; anything that is not a known token passes
/// through untouched. Every token ends with `}` so no token is a
/// substring of another and the replacement order does not matter.
pub fn substitute(template: &str, substitutions: &BTreeMap<String, String>) -> String {
    let mut text = template.to_string();
    for (token, value) in substitutions {
        text = text.replace(token.as_str(), value);
    }
    text
}
