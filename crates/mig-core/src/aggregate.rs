//! Per-year summation of cleaned migration records.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info};

use mig_model::{Component, MigrationRecord, YearTotals};

/// Component totals keyed by year, in ascending year order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyTotals {
    years: BTreeMap<i32, YearTotals>,
}

impl YearlyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the year's component total, creating the year on
    /// first sight. Repeated rows accumulate.
    pub fn add(&mut self, year: i32, component: Component, value: i64) {
        self.years.entry(year).or_default().add(component, value);
    }

    pub fn get(&self, year: i32) -> Option<&YearTotals> {
        self.years.get(&year)
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, YearTotals)> + '_ {
        self.years.iter().map(|(year, totals)| (*year, *totals))
    }

    /// Years at or after `min_year`.
    pub fn since(&self, min_year: i32) -> impl Iterator<Item = (i32, YearTotals)> + '_ {
        self.years
            .range(min_year..)
            .map(|(year, totals)| (*year, *totals))
    }

    pub fn first_year(&self) -> Option<i32> {
        self.years.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.years.keys().next_back().copied()
    }
}

impl<'a> FromIterator<&'a MigrationRecord> for YearlyTotals {
    fn from_iter<I: IntoIterator<Item = &'a MigrationRecord>>(iter: I) -> Self {
        let mut totals = Self::new();
        for record in iter {
            totals.add(record.year, record.component, record.value);
        }
        totals
    }
}

/// Sums records into yearly totals in one pass.
pub fn aggregate(records: &[MigrationRecord]) -> YearlyTotals {
    let start = Instant::now();
    let totals: YearlyTotals = records.iter().collect();
    for (year, year_totals) in totals.iter() {
        debug!(
            year,
            immigrants = year_totals.immigrants,
            emigrants = year_totals.emigrants,
            net_migration = year_totals.net_migration(),
            "year totals"
        );
    }
    info!(
        record_count = records.len(),
        year_count = totals.len(),
        first_year = totals.first_year(),
        last_year = totals.last_year(),
        duration_ms = start.elapsed().as_millis(),
        "aggregate complete"
    );
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, component: Component, value: i64) -> MigrationRecord {
        MigrationRecord {
            year,
            country: "Canada".to_string(),
            component,
            value,
        }
    }

    #[test]
    fn duplicate_rows_are_summed() {
        let records = vec![
            record(1951, Component::Immigrants, 10),
            record(1951, Component::Immigrants, 15),
            record(1951, Component::Emigrants, 4),
        ];
        let totals = aggregate(&records);
        let year = totals.get(1951).expect("1951 present");
        assert_eq!(year.immigrants, 25);
        assert_eq!(year.emigrants, 4);
        assert_eq!(year.net_migration(), 21);
    }

    #[test]
    fn missing_component_defaults_to_zero() {
        let totals = aggregate(&[record(1960, Component::Emigrants, 8)]);
        let year = totals.get(1960).expect("1960 present");
        assert_eq!(year.immigrants, 0);
        assert_eq!(year.net_migration(), -8);
    }

    #[test]
    fn years_iterate_in_order() {
        let totals = aggregate(&[
            record(1970, Component::Immigrants, 1),
            record(1950, Component::Immigrants, 1),
            record(1960, Component::Immigrants, 1),
        ]);
        let years: Vec<i32> = totals.iter().map(|(year, _)| year).collect();
        assert_eq!(years, vec![1950, 1960, 1970]);
        let recent: Vec<i32> = totals.since(1951).map(|(year, _)| year).collect();
        assert_eq!(recent, vec![1960, 1970]);
        assert_eq!(totals.first_year(), Some(1950));
        assert_eq!(totals.last_year(), Some(1970));
    }
}
