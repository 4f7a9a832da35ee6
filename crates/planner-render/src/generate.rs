//! Planner generation pipeline
//!
//! This module orchestrates a generation run:
//! 1. Validate options and load the A5 templates
//! 2. Plan the year's page sequence
//! 3. Render A5 pages and impose them onto A4 sheets
//! 4. Convert every sheet to PDF and merge them (external tools)

use std::path::{Path, PathBuf};

use log::{debug, info};
use planner_calendar::plan_year;
use planner_impose::{impose, pad_pages};

use crate::constants::{A4_PDFS_DIR, A4_SVGS_DIR, A5_PAGES_DIR};
use crate::convert::{ensure_tools_installed, merge_pdfs, svg_to_pdf};
use crate::options::GenerateOptions;
use crate::pages::render_pages;
use crate::sheets::write_sheets;
use crate::templates::TemplateSet;
use crate::types::Result;

/// Output directory tree for one year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDirs {
    pub root: PathBuf,
    pub a5_pages: PathBuf,
    pub a4_svgs: PathBuf,
    pub a4_pdfs: PathBuf,
}

impl OutputDirs {
    /// Create the full tree under the options' output directory.
    pub async fn create(options: &GenerateOptions) -> Result<Self> {
        let root = options.year_dir();
        let dirs = Self {
            a5_pages: root.join(A5_PAGES_DIR),
            a4_svgs: root.join(A4_SVGS_DIR),
            a4_pdfs: root.join(A4_PDFS_DIR),
            root,
        };
        tokio::fs::create_dir_all(&dirs.a5_pages).await?;
        tokio::fs::create_dir_all(&dirs.a4_svgs).await?;
        tokio::fs::create_dir_all(&dirs.a4_pdfs).await?;
        Ok(dirs)
    }

    /// Path of the final merged PDF
    pub fn merged_pdf(&self, year: i32) -> PathBuf {
        self.root.join(format!("merged_year_{year}.pdf"))
    }
}

/// SVG outputs of a generation run, before any PDF conversion
#[derive(Debug, Clone)]
pub struct SvgOutputs {
    pub dirs: OutputDirs,
    /// A5 page file names, with blank slots preserved
    pub page_files: Vec<Option<String>>,
    /// A4 sheet file names in print order
    pub sheet_files: Vec<String>,
}

/// Everything written by a full generation run
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub pages_written: usize,
    pub sheets_written: usize,
    pub merged_pdf: PathBuf,
}

/// Plan, render, and impose one year's planner as SVG files.
///
/// This is the whole pipeline short of the external PDF tools, so it
/// runs anywhere (including tests) without cairosvg or Ghostscript
/// installed.
pub async fn generate_svgs(options: &GenerateOptions) -> Result<SvgOutputs> {
    options.validate()?;

    let templates = TemplateSet::load(&options.template_dir).await?;
    let dirs = OutputDirs::create(options).await?;

    let pages = plan_year(options.year, options.sheet_order)?;
    let mut page_files = render_pages(&pages, &templates, &dirs.a5_pages).await?;
    info!(
        "wrote {} A5 pages to {}",
        page_files.iter().flatten().count(),
        dirs.a5_pages.display()
    );

    pad_pages(&mut page_files);
    let sheets = impose(page_files.clone(), options.sheet_order);
    let blank_sheets = sheets.iter().filter(|sheet| sheet.is_blank()).count();
    if blank_sheets > 0 {
        debug!("{blank_sheets} sheet sides are fully blank");
    }

    let sheet_files = write_sheets(&sheets, &dirs.a4_svgs).await?;
    info!(
        "wrote {} A4 sheets to {}",
        sheet_files.len(),
        dirs.a4_svgs.display()
    );

    Ok(SvgOutputs {
        dirs,
        page_files,
        sheet_files,
    })
}

/// Generate the complete planner: SVG pages and sheets, one PDF per
/// sheet, and the merged year PDF.
pub async fn generate(options: &GenerateOptions) -> Result<GenerateSummary> {
    ensure_tools_installed()?;

    let outputs = generate_svgs(options).await?;

    let mut pdfs = Vec::with_capacity(outputs.sheet_files.len());
    for sheet in &outputs.sheet_files {
        let svg = outputs.dirs.a4_svgs.join(sheet);
        let pdf = outputs.dirs.a4_pdfs.join(Path::new(sheet).with_extension("pdf"));
        svg_to_pdf(&svg, &pdf).await?;
        pdfs.push(pdf);
    }
    info!("converted {} sheets to PDF", pdfs.len());

    let merged = outputs.dirs.merged_pdf(options.year);
    merge_pdfs(&pdfs, &merged).await?;

    Ok(GenerateSummary {
        pages_written: outputs.page_files.iter().flatten().count(),
        sheets_written: outputs.sheet_files.len(),
        merged_pdf: merged,
    })
}
