use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::document::Document;
use crate::extract::{RawObservation, Source};
use crate::normalize::StatusNormalizer;

/// `<label>: <count>` — a run of words followed by a separator and digits.
static RE_LABEL_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<label>\pL[\pL\s/.]*?)\s*[:\-]\s*(?P<count>\d+)\b").unwrap());

/// `<count> <label>` — digits followed by a run of words.
static RE_COUNT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<count>\d+)\s+(?P<label>\pL[\pL\s/.]*)").unwrap());

/// Scans unstructured text lines for status keywords adjacent to counts.
///
/// Free text is expected to contain mostly irrelevant content, so a candidate
/// only becomes an observation when its label carries a known status synonym;
/// everything else is ignored silently.
pub struct TextExtractor {
    vocabulary: StatusNormalizer,
}

impl TextExtractor {
    pub fn new() -> Self {
        Self {
            vocabulary: StatusNormalizer::new(),
        }
    }

    /// An empty result is a legitimate outcome, not a failure by itself.
    pub fn scan(&self, document: &Document) -> Vec<RawObservation> {
        let _span = tracing::debug_span!("extract.text").entered();

        let mut observations = Vec::new();
        for line in &document.lines {
            let before = observations.len();
            for caps in RE_LABEL_COUNT.captures_iter(line) {
                self.push_candidate(&caps, &mut observations);
            }
            // `<count> <label>` only applies to lines the first shape missed,
            // so "Passed: 10 Failed" is not also read backwards.
            if observations.len() == before {
                for caps in RE_COUNT_LABEL.captures_iter(line) {
                    self.push_candidate(&caps, &mut observations);
                }
            }
        }

        tracing::debug!(observations = observations.len(), "text scan finished");
        observations
    }

    fn push_candidate(&self, caps: &Captures<'_>, out: &mut Vec<RawObservation>) {
        let label = caps["label"].trim();
        let Ok(count) = caps["count"].parse::<u64>() else {
            return;
        };
        if !self.vocabulary.recognizes(label) {
            return;
        }
        out.push(RawObservation {
            label: label.to_string(),
            count,
            source: Source::Text,
        });
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document::new(lines.iter().map(|l| l.to_string()).collect(), vec![])
    }

    #[test]
    fn test_label_colon_count() {
        let obs = TextExtractor::new().scan(&doc(&["Passed: 12"]));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].label, "Passed");
        assert_eq!(obs[0].count, 12);
        assert_eq!(obs[0].source, Source::Text);
    }

    #[test]
    fn test_count_then_label() {
        let obs = TextExtractor::new().scan(&doc(&["3 Failed"]));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].label, "Failed");
        assert_eq!(obs[0].count, 3);
    }

    #[test]
    fn test_multiple_matches_in_one_line() {
        let obs = TextExtractor::new().scan(&doc(&["Passou: 10  Falhou: 2"]));
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].label, "Passou");
        assert_eq!(obs[1].label, "Falhou");
    }

    #[test]
    fn test_accented_labels() {
        let obs = TextExtractor::new().scan(&doc(&["Não Executado: 5"]));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].label, "Não Executado");
        assert_eq!(obs[0].count, 5);
    }

    #[test]
    fn test_unknown_labels_are_ignored_silently() {
        let obs = TextExtractor::new().scan(&doc(&[
            "Page: 3",
            "Versão: 2",
            "Em Revisão: 4",
            "released in 2024",
        ]));
        assert!(obs.is_empty());
    }

    #[test]
    fn test_irrelevant_lines_are_skipped() {
        let obs = TextExtractor::new().scan(&doc(&[
            "Relatório de execução da sprint 42",
            "Falhou: 1",
            "Ana revisou os casos na terça",
        ]));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].label, "Falhou");
    }

    #[test]
    fn test_label_with_surrounding_words() {
        let obs = TextExtractor::new().scan(&doc(&["Casos Passados: 10"]));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].label, "Casos Passados");
        assert_eq!(obs[0].count, 10);
    }

    #[test]
    fn test_count_label_with_trailing_words() {
        let obs = TextExtractor::new().scan(&doc(&["2 blocked by environment issues"]));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].count, 2);
    }

    #[test]
    fn test_first_shape_wins_per_line() {
        // The line matches shape one; shape two must not add a second reading
        let obs = TextExtractor::new().scan(&doc(&["Passed: 10 regression"]));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].label, "Passed");
    }

    #[test]
    fn test_empty_document() {
        let obs = TextExtractor::new().scan(&Document::default());
        assert!(obs.is_empty());
    }

    #[test]
    fn test_oversized_count_is_ignored() {
        let obs = TextExtractor::new().scan(&doc(&["Passed: 99999999999999999999999999"]));
        assert!(obs.is_empty());
    }
}
