//! A4 sheet SVG output
//!
//! Each sheet side is a landscape A4 document holding up to two A5 page
//! images side by side, plus two short lines at the horizontal centre
//! marking where to cut the printed sheet in half.

use std::path::Path;

use log::debug;
use planner_impose::Sheet;

use crate::constants::{
    A5_PAGES_DIR, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PAGE_X_LEFT_MM, PAGE_X_RIGHT_MM, PAGE_Y_MM,
    SHEET_HEIGHT_MM, SHEET_WIDTH_MM,
};
use crate::types::Result;

/// Cut guides at the horizontal centre, one near each edge
const GUIDE_LINES: &str = "<line x1=\"50%\" x2=\"50%\" y1=\"90%\" y2=\"91%\" stroke=\"black\" stroke-width=\"0.5\"/>\n\
<line x1=\"50%\" x2=\"50%\" y1=\"9%\" y2=\"10%\" stroke=\"black\" stroke-width=\"0.5\"/>\n";

/// Build the SVG document for one sheet side.
///
/// Blank slots contribute nothing; a fully blank sheet still carries the
/// cut guides so the printed stack cuts the same everywhere.
pub fn sheet_svg(sheet: &Sheet<String>) -> String {
    let mut svg = format!(
        "<svg version=\"1.1\" width=\"{SHEET_WIDTH_MM}mm\" height=\"{SHEET_HEIGHT_MM}mm\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    );
    if let Some(page) = &sheet.left {
        svg.push_str(&page_image(page, PAGE_X_LEFT_MM));
    }
    if let Some(page) = &sheet.right {
        svg.push_str(&page_image(page, PAGE_X_RIGHT_MM));
    }
    svg.push_str(GUIDE_LINES);
    svg.push_str("</svg>\n");
    svg
}

/// One A5 page placed on the sheet, referenced relative to the sheet
/// directory (`../a5_pages/<file>`)
fn page_image(file_name: &str, x_mm: f32) -> String {
    format!(
        "<image x=\"{x_mm}mm\" y=\"{PAGE_Y_MM}mm\" width=\"{PAGE_WIDTH_MM}mm\" height=\"{PAGE_HEIGHT_MM}mm\" href=\"../{A5_PAGES_DIR}/{file_name}\"/>\n"
    )
}

/// Write every sheet as `NNN.svg` under `dir`, numbered from 001.
///
/// Returns the file names in order.
pub async fn write_sheets(sheets: &[Sheet<String>], dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let mut names = Vec::with_capacity(sheets.len());
    for (index, sheet) in sheets.iter().enumerate() {
        let name = format!("{:03}.svg", index + 1);
        tokio::fs::write(dir.join(&name), sheet_svg(sheet)).await?;
        debug!("wrote sheet {name}");
        names.push(name);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_svg_two_pages() {
        let sheet = Sheet::new(
            Some("001_JANUARY_start_page.svg".to_string()),
            Some("002_week_pad_week1.svg".to_string()),
        );
        let svg = sheet_svg(&sheet);

        assert!(svg.starts_with("<svg version=\"1.1\" width=\"297mm\" height=\"210mm\""));
        assert!(svg.contains("x=\"5.5mm\""));
        assert!(svg.contains("x=\"156.5mm\""));
        assert!(svg.contains("href=\"../a5_pages/001_JANUARY_start_page.svg\""));
        assert!(svg.contains("href=\"../a5_pages/002_week_pad_week1.svg\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_sheet_svg_blank_left_slot() {
        let sheet = Sheet::new(None, Some("001_JANUARY_start_page.svg".to_string()));
        let svg = sheet_svg(&sheet);

        // Only the right image is placed
        assert!(!svg.contains("x=\"5.5mm\""));
        assert!(svg.contains("x=\"156.5mm\""));
        assert_eq!(svg.matches("<image").count(), 1);
    }

    #[test]
    fn test_blank_sheet_keeps_cut_guides() {
        let svg = sheet_svg(&Sheet::new(None, None));
        assert!(!svg.contains("<image"));
        assert_eq!(svg.matches("<line").count(), 2);
        assert!(svg.contains("y1=\"90%\" y2=\"91%\""));
        assert!(svg.contains("y1=\"9%\" y2=\"10%\""));
    }

    #[test]
    fn test_image_geometry() {
        let sheet = Sheet::new(Some("001.svg".to_string()), None);
        let svg = sheet_svg(&sheet);
        assert!(svg.contains("y=\"5mm\" width=\"135mm\" height=\"200mm\""));
    }
}
