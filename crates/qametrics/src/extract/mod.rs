pub mod table;
pub mod text;

pub use table::{TableExtractor, TableScan};
pub use text::TextExtractor;

use serde::Serialize;
use std::fmt;

/// Which extraction path produced an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    Table,
    Text,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Table => f.write_str("table"),
            Source::Text => f.write_str("text"),
        }
    }
}

/// One (label, count) pair as found in the document, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObservation {
    pub label: String,
    pub count: u64,
    pub source: Source,
}
