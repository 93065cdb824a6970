use regex::Regex;
use std::sync::LazyLock;

use crate::document::{Document, Table};
use crate::extract::{RawObservation, Source};
use crate::normalize::{is_count_header, is_status_header};

/// Thousands-grouped integer, either convention: `1.234` or `1,234`.
static RE_GROUPED_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:[.,]\d{3})+$").unwrap());

/// Result of scanning a document's tables: clean observations plus the
/// number of rows dropped because their label or count cell was unusable.
/// The orchestrator owns turning the counter into a warning.
#[derive(Debug, Default)]
pub struct TableScan {
    pub observations: Vec<RawObservation>,
    pub skipped_rows: usize,
}

/// Scans structured tabular regions for Status/Total-style column pairs.
#[derive(Debug, Default)]
pub struct TableExtractor;

impl TableExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Harvests one `RawObservation` per data row under a recognized header
    /// pair. An empty result means no table matched anywhere — the signal
    /// that triggers the text fallback, not an error.
    pub fn scan(&self, document: &Document) -> TableScan {
        let _span = tracing::debug_span!("extract.table").entered();

        let mut scan = TableScan::default();
        for table in &document.tables {
            scan_table(table, &mut scan);
        }

        tracing::debug!(
            observations = scan.observations.len(),
            skipped = scan.skipped_rows,
            "table scan finished"
        );
        scan
    }
}

fn scan_table(table: &Table, scan: &mut TableScan) {
    let Some((header_row, status_col, count_col)) = find_header(table) else {
        return;
    };

    for row in table.rows.iter().skip(header_row + 1) {
        let label = row.get(status_col).map(|c| c.trim()).unwrap_or("");
        let count_cell = row.get(count_col).map(|c| c.trim()).unwrap_or("");

        if label.is_empty() {
            scan.skipped_rows += 1;
            continue;
        }
        match parse_count(count_cell) {
            Some(count) => scan.observations.push(RawObservation {
                label: label.to_string(),
                count,
                source: Source::Table,
            }),
            None => {
                tracing::debug!(label, cell = count_cell, "count cell did not parse, row skipped");
                scan.skipped_rows += 1;
            }
        }
    }
}

/// First row holding both a status-like and a count-like cell, with the two
/// column indexes.
fn find_header(table: &Table) -> Option<(usize, usize, usize)> {
    for (row_idx, row) in table.rows.iter().enumerate() {
        let Some(status_col) = row.iter().position(|cell| is_status_header(cell)) else {
            continue;
        };
        let count_col = row
            .iter()
            .enumerate()
            .find_map(|(idx, cell)| (idx != status_col && is_count_header(cell)).then_some(idx));
        if let Some(count_col) = count_col {
            return Some((row_idx, status_col, count_col));
        }
    }
    None
}

/// Parses a non-negative integer cell, tolerating thousands grouping.
fn parse_count(cell: &str) -> Option<u64> {
    if !cell.is_empty() && cell.bytes().all(|b| b.is_ascii_digit()) {
        return cell.parse().ok();
    }
    if RE_GROUPED_COUNT.is_match(cell) {
        let digits: String = cell.chars().filter(|c| c.is_ascii_digit()).collect();
        return digits.parse().ok();
    }
    None
}
