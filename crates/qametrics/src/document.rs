use serde::Serialize;

/// One detected tabular region: rows of cell strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parsed, in-memory representation of one report: the engine's input
/// boundary.
///
/// Producing this from raw bytes is an adapter's job (see the `pdf` module);
/// callers with their own parser construct it directly via [`Document::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub lines: Vec<String>,
    pub tables: Vec<Table>,
}

/// Delimiters whose repetition across consecutive lines marks a pseudo-table.
const TABLE_DELIMITERS: [char; 2] = ['|', '\t'];

impl Document {
    pub fn new(lines: Vec<String>, tables: Vec<Table>) -> Self {
        Self { lines, tables }
    }

    /// Builds a document from plain text: trimmed non-empty lines, plus
    /// pseudo-tables detected from runs of delimiter-separated lines.
    ///
    /// Reports that render tables as `Status | Total` text keep those lines
    /// in `lines` too, but the table representation takes precedence during
    /// extraction, so they are not counted twice.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        let tables = detect_pseudo_tables(&lines);

        Self { lines, tables }
    }
}

/// Runs of two or more consecutive lines sharing a delimiter become a table.
fn detect_pseudo_tables(lines: &[String]) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut run_delimiter: Option<char> = None;

    for line in lines {
        let delimiter = TABLE_DELIMITERS.iter().copied().find(|d| line.contains(*d));
        match delimiter {
            Some(d) if run_delimiter == Some(d) => rows.push(split_row(line, d)),
            Some(d) => {
                flush_run(&mut tables, &mut rows);
                run_delimiter = Some(d);
                rows.push(split_row(line, d));
            }
            None => {
                flush_run(&mut tables, &mut rows);
                run_delimiter = None;
            }
        }
    }
    flush_run(&mut tables, &mut rows);

    tables
}

fn split_row(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// A single delimiter-bearing line is prose, not a table.
fn flush_run(tables: &mut Vec<Table>, rows: &mut Vec<Vec<String>>) {
    if rows.len() >= 2 {
        tables.push(Table::new(std::mem::take(rows)));
    } else {
        rows.clear();
    }
}
