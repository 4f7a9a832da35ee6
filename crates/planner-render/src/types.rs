use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Calendar error: {0}")]
    Calendar(#[from] planner_calendar::CalendarError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Failed to read template `{name}` at {}: {source}", .path.display())]
    Template {
        name: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("`{tool}` not found. Please install it first.")]
    ToolMissing {
        tool: &'static str,
        source: which::Error,
    },
    #[error("`{tool}` exited with {status}")]
    ToolFailed {
        tool: &'static str,
        status: ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;
