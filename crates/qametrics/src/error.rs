use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::extract::Source;
use crate::normalize::StatusCategory;

#[derive(Error, Debug)]
pub enum QametricsError {
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),
}

/// The engine's one hard failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no status data found: neither table nor text extraction produced any observation")]
    NoDataFound,
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse PDF: {0}")]
    PdfParse(String),
}

/// Non-fatal conditions accumulated in `MetricsRecord::warnings`, in the
/// order they were observed. None of these interrupts aggregation: the engine
/// prefers a best-effort record with visible caveats over refusing to report.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExtractionWarning {
    #[error("label '{label}' ({count} case(s)) could not be normalized and was counted as unmapped")]
    UnmappedLabel { label: String, count: u64 },

    #[error("{rows} table row(s) skipped: count cell did not parse as a non-negative integer")]
    MalformedCounts { rows: usize },

    #[error("{entries} entries for status '{category}' were merged by summing their counts")]
    DuplicateCategoryMerge {
        category: StatusCategory,
        entries: usize,
    },

    #[error("metrics extracted via the {0} path")]
    MethodUsed(Source),
}

pub type Result<T> = std::result::Result<T, QametricsError>;
