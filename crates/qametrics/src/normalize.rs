use serde::Serialize;
use std::fmt;

/// Canonical outcome class every raw status label normalizes into.
///
/// `Unmapped` captures labels no synonym covers. It is a normal outcome, not
/// an error: unmapped counts stay in the totals and the orchestrator surfaces
/// each occurrence as a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StatusCategory {
    Passed,
    Failed,
    Blocked,
    NotExecuted,
    Unmapped,
}

impl StatusCategory {
    /// All categories in canonical order.
    pub const ALL: [StatusCategory; 5] = [
        StatusCategory::Passed,
        StatusCategory::Failed,
        StatusCategory::Blocked,
        StatusCategory::NotExecuted,
        StatusCategory::Unmapped,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Passed => "Passed",
            StatusCategory::Failed => "Failed",
            StatusCategory::Blocked => "Blocked",
            StatusCategory::NotExecuted => "Not Executed",
            StatusCategory::Unmapped => "Unmapped",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status synonyms, folded (lowercase, no diacritics). Extending coverage to
/// a new language or report template means touching only this table.
const STATUS_SYNONYMS: &[(StatusCategory, &[&str])] = &[
    (
        StatusCategory::NotExecuted,
        &[
            "nao executado",
            "nao executada",
            "nao executados",
            "not executed",
            "not run",
            "nao rodado",
            "sem execucao",
            "pendente",
            "pendentes",
            "pending",
            "skipped",
            "n/a",
        ],
    ),
    (
        StatusCategory::Passed,
        &[
            "passed",
            "pass",
            "passou",
            "passaram",
            "passado",
            "passados",
            "aprovado",
            "aprovada",
            "aprovados",
            "sucesso",
            "success",
            "ok",
        ],
    ),
    (
        StatusCategory::Failed,
        &[
            "failed",
            "fail",
            "falhou",
            "falhado",
            "falhada",
            "falhados",
            "falharam",
            "reprovado",
            "reprovados",
            "erro",
            "error",
        ],
    ),
    (
        StatusCategory::Blocked,
        &[
            "blocked",
            "block",
            "bloqueado",
            "bloqueada",
            "bloqueados",
            "impedido",
        ],
    ),
];

/// Column names that identify the status column of a results table, folded.
const STATUS_HEADERS: &[&str] = &["status", "estado", "resultado", "situacao", "result", "outcome"];

/// Column names that identify the count column of a results table, folded.
const COUNT_HEADERS: &[&str] = &["total", "count", "qtd", "quantidade", "casos", "cases", "qty"];

/// Maps arbitrary raw status strings to a fixed set of canonical categories.
///
/// Matching folds case and Latin diacritics first, then looks for a known
/// synonym as a whole word anywhere in the label, longest synonym first.
pub struct StatusNormalizer {
    /// Flattened synonym list, longest synonym first.
    entries: Vec<(&'static str, StatusCategory)>,
}

impl StatusNormalizer {
    pub fn new() -> Self {
        let mut entries: Vec<(&'static str, StatusCategory)> = STATUS_SYNONYMS
            .iter()
            .flat_map(|(category, words)| words.iter().map(move |word| (*word, *category)))
            .collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self { entries }
    }

    /// Resolves a raw label to its category. Never fails: unknown labels map
    /// to `Unmapped`.
    pub fn normalize(&self, raw: &str) -> StatusCategory {
        let folded = fold(raw);
        for (word, category) in &self.entries {
            if contains_word(&folded, word) {
                return *category;
            }
        }
        StatusCategory::Unmapped
    }

    /// True when the label resolves to one of the four real outcome classes.
    pub fn recognizes(&self, raw: &str) -> bool {
        self.normalize(raw) != StatusCategory::Unmapped
    }
}

impl Default for StatusNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// True when any cell of a header row names the status column.
pub(crate) fn is_status_header(cell: &str) -> bool {
    let folded = fold(cell);
    STATUS_HEADERS.iter().any(|h| contains_word(&folded, h))
}

/// True when any cell of a header row names the count column.
pub(crate) fn is_count_header(cell: &str) -> bool {
    let folded = fold(cell);
    COUNT_HEADERS.iter().any(|h| contains_word(&folded, h))
}

/// Lowercases and strips the Latin diacritics that occur in the
/// Portuguese/Spanish/French labels of QA reports.
pub(crate) fn fold(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            c => c,
        })
        .collect()
}

/// Whole-word containment: `needle` must not be flanked by alphanumerics.
fn contains_word(haystack: &str, needle: &str) -> bool {
    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return true;
        }
        from = start + 1;
    }
    false
}
