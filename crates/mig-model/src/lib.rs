//! Data model shared by the migration/draft overlay pipeline.

pub mod correlation;
pub mod records;
pub mod window;

pub use correlation::{CorrelationOutcome, CorrelationResult, format_fixed, format_general};
pub use records::{Component, MergedRecord, MigrationRecord, YearTotals};
pub use window::{ANALYSIS_START_YEAR, Window};
