pub mod document;
pub mod engine;
pub mod error;
pub mod extract;
pub mod kpi;
pub mod metrics;
pub mod normalize;
pub mod pdf;

pub use document::{Document, Table};
pub use engine::{extract, MetricsEngine};
pub use error::{ExtractError, ExtractionWarning, LoadError, QametricsError, Result};
pub use kpi::{compute_kpis, Kpis};
pub use metrics::{MetricsRecord, StatusCounts};
pub use normalize::{StatusCategory, StatusNormalizer};
