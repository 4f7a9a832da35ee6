//! Shared constants for planner output
//!
//! This module centralizes output naming and the geometry used when
//! laying two A5 pages onto one landscape A4 sheet.

// =============================================================================
// Output Layout
// =============================================================================

/// Prefix of the per-year output directory (`planner_files_<year>`)
pub const OUTPUT_DIR_PREFIX: &str = "planner_files";

/// Subdirectory for rendered A5 page SVGs
pub const A5_PAGES_DIR: &str = "a5_pages";

/// Subdirectory for imposed A4 sheet SVGs
pub const A4_SVGS_DIR: &str = "a4_svgs";

/// Subdirectory for per-sheet PDFs
pub const A4_PDFS_DIR: &str = "a4_pdfs";

/// Default directory holding the A5 templates
pub const DEFAULT_TEMPLATE_DIR: &str = "a5_templates";

// =============================================================================
// Sheet Geometry (millimeters)
// =============================================================================

/// Landscape A4 sheet width
pub const SHEET_WIDTH_MM: f32 = 297.0;

/// Landscape A4 sheet height
pub const SHEET_HEIGHT_MM: f32 = 210.0;

/// Width of each placed A5 page image
pub const PAGE_WIDTH_MM: f32 = 135.0;

/// Height of each placed A5 page image
pub const PAGE_HEIGHT_MM: f32 = 200.0;

/// X offset of the left page image
pub const PAGE_X_LEFT_MM: f32 = 5.5;

/// X offset of the right page image
pub const PAGE_X_RIGHT_MM: f32 = 156.5;

/// Y offset of both page images
pub const PAGE_Y_MM: f32 = 5.0;

// =============================================================================
// External Tools
// =============================================================================

/// SVG to PDF converter executable
pub const SVG_TO_PDF_TOOL: &str = "cairosvg";

/// PDF merge executable (Ghostscript)
pub const PDF_MERGE_TOOL: &str = "gs";
