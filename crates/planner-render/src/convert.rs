//! External tool invocation
//!
//! SVG to PDF conversion is delegated to `cairosvg` and the final merge
//! to Ghostscript, both found on PATH at run time.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::process::Command;

use crate::constants::{PDF_MERGE_TOOL, SVG_TO_PDF_TOOL};
use crate::types::{RenderError, Result};

/// Check that both external tools are installed before any work starts.
pub fn ensure_tools_installed() -> Result<()> {
    for tool in [SVG_TO_PDF_TOOL, PDF_MERGE_TOOL] {
        which::which(tool).map_err(|source| RenderError::ToolMissing { tool, source })?;
    }
    Ok(())
}

/// Convert one SVG file to a PDF with cairosvg.
pub async fn svg_to_pdf(svg: impl AsRef<Path>, pdf: impl AsRef<Path>) -> Result<()> {
    let svg = svg.as_ref();
    let pdf = pdf.as_ref();
    debug!("{SVG_TO_PDF_TOOL} -o {} {}", pdf.display(), svg.display());

    let status = Command::new(SVG_TO_PDF_TOOL)
        .arg("-o")
        .arg(pdf)
        .arg(svg)
        .status()
        .await?;
    if !status.success() {
        return Err(RenderError::ToolFailed {
            tool: SVG_TO_PDF_TOOL,
            status,
        });
    }
    Ok(())
}

/// Concatenate PDFs into a single document with Ghostscript.
pub async fn merge_pdfs(inputs: &[PathBuf], output: impl AsRef<Path>) -> Result<()> {
    let output = output.as_ref();
    info!("merging {} PDFs into {}", inputs.len(), output.display());

    let mut command = Command::new(PDF_MERGE_TOOL);
    command
        .arg("-dBATCH")
        .arg("-dNOPAUSE")
        .arg("-q")
        .arg("-sDEVICE=pdfwrite")
        .arg("-dAutoRotatePages=/None")
        .arg(format!("-sOutputFile={}", output.display()));
    for input in inputs {
        command.arg(input);
    }

    let status = command.status().await?;
    if !status.success() {
        return Err(RenderError::ToolFailed {
            tool: PDF_MERGE_TOOL,
            status,
        });
    }
    Ok(())
}
