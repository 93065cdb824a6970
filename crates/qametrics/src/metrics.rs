use serde::Serialize;

use crate::error::ExtractionWarning;
use crate::normalize::StatusCategory;

/// Per-category counters. Every category is always present — absent data is
/// an explicit zero, never a missing key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub passed: u64,
    pub failed: u64,
    pub blocked: u64,
    pub not_executed: u64,
    pub unmapped: u64,
}

impl StatusCounts {
    pub fn get(&self, category: StatusCategory) -> u64 {
        match category {
            StatusCategory::Passed => self.passed,
            StatusCategory::Failed => self.failed,
            StatusCategory::Blocked => self.blocked,
            StatusCategory::NotExecuted => self.not_executed,
            StatusCategory::Unmapped => self.unmapped,
        }
    }

    pub(crate) fn add(&mut self, category: StatusCategory, count: u64) {
        let slot = match category {
            StatusCategory::Passed => &mut self.passed,
            StatusCategory::Failed => &mut self.failed,
            StatusCategory::Blocked => &mut self.blocked,
            StatusCategory::NotExecuted => &mut self.not_executed,
            StatusCategory::Unmapped => &mut self.unmapped,
        };
        *slot = slot.saturating_add(count);
    }

    /// Sum over all five categories, `Unmapped` included.
    pub fn total(&self) -> u64 {
        self.passed + self.failed + self.blocked + self.not_executed + self.unmapped
    }

    /// (category, count) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatusCategory, u64)> + '_ {
        StatusCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

/// The engine's sole output: one record per processed document, immutable
/// once produced. Recomputation starts fresh from the source document, never
/// from a mutated prior record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsRecord {
    pub counts: StatusCounts,
    /// Always equals `counts.total()`.
    pub total: u64,
    /// Non-fatal conditions observed while extracting, in occurrence order.
    pub warnings: Vec<ExtractionWarning>,
}
