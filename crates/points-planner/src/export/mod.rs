//! Downloadable renderings of a plan: a JSON document and a flat CSV table.

mod document;
mod table;

pub use document::{parse_document, PlanDocument};
pub use table::to_csv;

use crate::plan::PlanBlock;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV buffer: {0}")]
    Buffer(String),
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("invalid plan document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported export format '{0}' (expected json or csv)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Json => "points_strategy_plan.json",
            Self::Csv => "points_strategy_plan.csv",
        }
    }

    pub fn mime(self) -> mime::Mime {
        match self {
            Self::Json => mime::APPLICATION_JSON,
            Self::Csv => mime::TEXT_CSV,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// File name, MIME type, and body handed to whatever triggers the download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: &'static str,
    pub mime: mime::Mime,
    pub content: String,
}

/// Renders the selection and its plan in the requested format.
pub fn export(
    format: ExportFormat,
    selection: &Selection,
    plan: &[PlanBlock],
) -> Result<ExportPayload, ExportError> {
    let content = match format {
        ExportFormat::Json => PlanDocument::new(selection, plan).to_json()?,
        ExportFormat::Csv => to_csv(plan)?,
    };

    Ok(ExportPayload {
        file_name: format.file_name(),
        mime: format.mime(),
        content,
    })
}
