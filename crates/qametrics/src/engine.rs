use crate::document::Document;
use crate::error::{ExtractError, ExtractionWarning};
use crate::extract::{Source, TableExtractor, TextExtractor};
use crate::metrics::{MetricsRecord, StatusCounts};
use crate::normalize::{StatusCategory, StatusNormalizer};

/// Table-first, text-fallback extraction behind one entry point.
///
/// Holds only compiled patterns and fixed tables, so a single engine may
/// serve concurrent callers; each call is independent and side-effect-free
/// apart from its return value.
pub struct MetricsEngine {
    tables: TableExtractor,
    text: TextExtractor,
    normalizer: StatusNormalizer,
}

impl MetricsEngine {
    pub fn new() -> Self {
        Self {
            tables: TableExtractor::new(),
            text: TextExtractor::new(),
            normalizer: StatusNormalizer::new(),
        }
    }

    /// Extracts one `MetricsRecord` from an already-decoded document.
    ///
    /// Tables are structured and considered higher-confidence: when any table
    /// observation exists the text path never runs, so one test case
    /// represented both ways is not counted twice. `NoDataFound` is the one
    /// hard failure; everything else degrades to warnings on the record.
    pub fn extract(&self, document: &Document) -> Result<MetricsRecord, ExtractError> {
        let _span = tracing::info_span!("engine.extract").entered();

        let mut warnings = Vec::new();

        let scan = self.tables.scan(document);
        if scan.skipped_rows > 0 {
            warnings.push(ExtractionWarning::MalformedCounts {
                rows: scan.skipped_rows,
            });
        }

        let (observations, source) = if scan.observations.is_empty() {
            (self.text.scan(document), Source::Text)
        } else {
            (scan.observations, Source::Table)
        };

        if observations.is_empty() {
            tracing::warn!("neither extraction path produced any observation");
            return Err(ExtractError::NoDataFound);
        }

        let mut counts = StatusCounts::default();
        let mut entries = [0usize; StatusCategory::ALL.len()];

        for observation in &observations {
            let category = self.normalizer.normalize(&observation.label);
            counts.add(category, observation.count);
            entries[category.index()] += 1;
            if category == StatusCategory::Unmapped {
                warnings.push(ExtractionWarning::UnmappedLabel {
                    label: observation.label.clone(),
                    count: observation.count,
                });
            }
        }

        for category in StatusCategory::ALL {
            if entries[category.index()] > 1 {
                warnings.push(ExtractionWarning::DuplicateCategoryMerge {
                    category,
                    entries: entries[category.index()],
                });
            }
        }
        warnings.push(ExtractionWarning::MethodUsed(source));

        let total = counts.total();
        tracing::info!(total, source = %source, warnings = warnings.len(), "record assembled");

        Ok(MetricsRecord {
            counts,
            total,
            warnings,
        })
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper constructing a fresh engine per call.
pub fn extract(document: &Document) -> Result<MetricsRecord, ExtractError> {
    MetricsEngine::new().extract(document)
}
