//! Inner join of migration totals with draft inductions.

use tracing::{debug, info};

use mig_model::{ANALYSIS_START_YEAR, MergedRecord};

use crate::aggregate::YearlyTotals;
use crate::draft::DraftTable;

/// Joins on year and keeps years at or after `min_year`.
///
/// Years missing from either side are dropped without error.
pub fn merge_with_draft(
    totals: &YearlyTotals,
    draft: &DraftTable,
    min_year: i32,
) -> Vec<MergedRecord> {
    let mut merged = Vec::new();
    let mut unmatched = 0usize;
    for (year, year_totals) in totals.since(min_year) {
        match draft.inductions(year) {
            Some(inductions) => merged.push(MergedRecord::new(year, year_totals, inductions)),
            None => {
                debug!(year, "no draft inductions for year");
                unmatched += 1;
            }
        }
    }
    info!(
        merged_count = merged.len(),
        unmatched_years = unmatched,
        min_year,
        "merge complete"
    );
    merged
}

/// [`merge_with_draft`] from the first analysis year (1951).
pub fn merge_for_analysis(totals: &YearlyTotals, draft: &DraftTable) -> Vec<MergedRecord> {
    merge_with_draft(totals, draft, ANALYSIS_START_YEAR)
}
