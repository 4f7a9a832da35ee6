//! Rendering planned pages to A5 SVG files

use std::path::Path;

use log::debug;
use planner_calendar::PlannedPage;

use crate::templates::{TemplateSet, substitute};
use crate::types::Result;

/// Render every planned page into `dir`.
///
/// Non-blank pages are numbered 001, 002, ... in sequence order and
/// written as `NNN_<slug>.svg`. Blank slots write nothing; the returned
/// sequence carries the file names with blanks in the same positions, so
/// it can be imposed directly.
pub async fn render_pages(
    pages: &[Option<PlannedPage>],
    templates: &TemplateSet,
    dir: impl AsRef<Path>,
) -> Result<Vec<Option<String>>> {
    let dir = dir.as_ref();
    let mut names = Vec::with_capacity(pages.len());
    let mut counter = 0usize;

    for page in pages {
        match page {
            Some(page) => {
                counter += 1;
                let name = format!("{counter:03}_{}.svg", page.slug);
                let body = substitute(templates.get(page.kind), &page.substitutions);
                tokio::fs::write(dir.join(&name), body).await?;
                debug!("wrote page {name}");
                names.push(Some(name));
            }
            None => names.push(None),
        }
    }

    Ok(names)
}
