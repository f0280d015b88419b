//! Analysis stages of the overlay pipeline: aggregate, merge, correlate.

pub mod aggregate;
pub mod correlate;
pub mod draft;
pub mod merge;

pub use aggregate::{YearlyTotals, aggregate};
pub use correlate::{MIN_POINTS, PearsonStats, correlate_window, correlate_windows, pearson};
pub use draft::DraftTable;
pub use merge::{merge_for_analysis, merge_with_draft};
