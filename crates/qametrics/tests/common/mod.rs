//! Shared builders for integration tests.

use qametrics::{Document, Table};

/// Builds a table from rows of string slices.
pub fn table(rows: &[&[&str]]) -> Table {
    Table::new(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
}

/// A document holding a single table and no free text.
pub fn doc_with_table(rows: &[&[&str]]) -> Document {
    Document::new(vec![], vec![table(rows)])
}

/// A document holding free text lines and no detected tables.
pub fn doc_with_lines(lines: &[&str]) -> Document {
    Document::new(lines.iter().map(|l| l.to_string()).collect(), vec![])
}
