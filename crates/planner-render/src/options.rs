use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use planner_impose::SheetOrder;

use crate::constants::{DEFAULT_TEMPLATE_DIR, OUTPUT_DIR_PREFIX};
use crate::types::{RenderError, Result};

/// Planner generation configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerateOptions {
    /// Year to generate
    pub year: i32,

    /// How pages are arranged across sheet sides
    pub sheet_order: SheetOrder,

    /// Directory holding the five A5 templates
    pub template_dir: PathBuf,

    /// Directory under which `planner_files_<year>` is created
    pub output_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            year: 0,
            sheet_order: SheetOrder::Natural,
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            output_dir: PathBuf::from("."),
        }
    }
}

impl GenerateOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| RenderError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| RenderError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.year < 1 {
            return Err(RenderError::Config(format!(
                "Year must be a positive calendar year (got {})",
                self.year
            )));
        }

        if self.template_dir.as_os_str().is_empty() {
            return Err(RenderError::Config(
                "No template directory specified".to_string(),
            ));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(RenderError::Config(
                "No output directory specified".to_string(),
            ));
        }

        Ok(())
    }

    /// The per-year output directory (`<output_dir>/planner_files_<year>`)
    pub fn year_dir(&self) -> PathBuf {
        self.output_dir
            .join(format!("{OUTPUT_DIR_PREFIX}_{}", self.year))
    }
}
