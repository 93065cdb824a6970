use serde::Serialize;

use crate::metrics::MetricsRecord;

/// Derived percentage metrics. Zero denominators degrade to `0.0` — an empty
/// or fully-unexecuted report is a valid, displayable state, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Kpis {
    /// Share of all cases that were actually run.
    pub execution_percent: f64,
    /// Share of executed cases that passed.
    pub success_percent: f64,
    /// Share of executed cases that failed.
    pub defect_percent: f64,
    /// Share of executed cases that ended blocked.
    pub blocked_percent: f64,
}

/// Pure derivation over an already-assembled record. Only `NotExecuted` is
/// excluded from the executed pool; `Unmapped` cases count as executed.
pub fn compute_kpis(record: &MetricsRecord) -> Kpis {
    let total = record.total;
    let executed = total.saturating_sub(record.counts.not_executed);

    Kpis {
        execution_percent: percent(executed, total),
        success_percent: percent(record.counts.passed, executed),
        defect_percent: percent(record.counts.failed, executed),
        blocked_percent: percent(record.counts.blocked, executed),
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole > 0 {
        part as f64 * 100.0 / whole as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::StatusCounts;

    fn record(passed: u64, failed: u64, blocked: u64, not_executed: u64) -> MetricsRecord {
        let counts = StatusCounts {
            passed,
            failed,
            blocked,
            not_executed,
            unmapped: 0,
        };
        MetricsRecord {
            counts,
            total: counts.total(),
            warnings: vec![],
        }
    }

    #[test]
    fn test_kpis_for_mixed_report() {
        let kpis = compute_kpis(&record(10, 2, 1, 3));
        // 13 of 16 executed, 10 of 13 passed
        assert!((kpis.execution_percent - 81.25).abs() < 1e-9);
        assert!((kpis.success_percent - 76.923_076_923).abs() < 1e-6);
        assert!((kpis.defect_percent - 15.384_615_384).abs() < 1e-6);
        assert!((kpis.blocked_percent - 7.692_307_692).abs() < 1e-6);
    }

    #[test]
    fn test_empty_record_degrades_to_zero() {
        let kpis = compute_kpis(&record(0, 0, 0, 0));
        assert_eq!(kpis.execution_percent, 0.0);
        assert_eq!(kpis.success_percent, 0.0);
        assert_eq!(kpis.defect_percent, 0.0);
        assert_eq!(kpis.blocked_percent, 0.0);
    }

    #[test]
    fn test_fully_unexecuted_report() {
        let kpis = compute_kpis(&record(0, 0, 0, 20));
        assert_eq!(kpis.execution_percent, 0.0);
        // Executed pool is empty, so the per-execution rates stay at zero
        assert_eq!(kpis.success_percent, 0.0);
    }

    #[test]
    fn test_all_passed() {
        let kpis = compute_kpis(&record(8, 0, 0, 0));
        assert_eq!(kpis.execution_percent, 100.0);
        assert_eq!(kpis.success_percent, 100.0);
        assert_eq!(kpis.defect_percent, 0.0);
    }

    #[test]
    fn test_unmapped_counts_as_executed() {
        let counts = StatusCounts {
            passed: 5,
            unmapped: 5,
            ..StatusCounts::default()
        };
        let record = MetricsRecord {
            counts,
            total: counts.total(),
            warnings: vec![],
        };

        let kpis = compute_kpis(&record);
        assert_eq!(kpis.execution_percent, 100.0);
        assert_eq!(kpis.success_percent, 50.0);
    }
}
