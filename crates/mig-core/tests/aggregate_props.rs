//! Order-independence and net migration properties of aggregation.

use mig_core::{DraftTable, YearlyTotals, merge_for_analysis};
use mig_model::{ANALYSIS_START_YEAR, Component, MigrationRecord};
use proptest::prelude::*;

fn component_strategy() -> impl Strategy<Value = Component> {
    prop_oneof![Just(Component::Immigrants), Just(Component::Emigrants)]
}

fn record_strategy() -> impl Strategy<Value = MigrationRecord> {
    (1940i32..1990, component_strategy(), 0i64..500_000).prop_map(|(year, component, value)| {
        MigrationRecord {
            year,
            country: "Canada".to_string(),
            component,
            value,
        }
    })
}

proptest! {
    #[test]
    fn aggregation_ignores_row_order(
        (records, shuffled) in prop::collection::vec(record_strategy(), 0..64)
            .prop_flat_map(|records| {
                let original = records.clone();
                (Just(original), Just(records).prop_shuffle())
            })
    ) {
        let forward: YearlyTotals = records.iter().collect();
        let reordered: YearlyTotals = shuffled.iter().collect();
        prop_assert_eq!(forward, reordered);
    }

    #[test]
    fn aggregation_is_associative_over_splits(
        records in prop::collection::vec(record_strategy(), 0..64),
        split in 0usize..64,
    ) {
        let split = split.min(records.len());
        let (left, right) = records.split_at(split);

        let whole: YearlyTotals = records.iter().collect();
        let mut combined: YearlyTotals = left.iter().collect();
        for (year, totals) in right.iter().collect::<YearlyTotals>().iter() {
            combined.add(year, Component::Immigrants, totals.immigrants);
            combined.add(year, Component::Emigrants, totals.emigrants);
        }
        prop_assert_eq!(whole, combined);
    }

    #[test]
    fn net_migration_is_difference(records in prop::collection::vec(record_strategy(), 0..64)) {
        let totals: YearlyTotals = records.iter().collect();
        for (year, year_totals) in totals.iter() {
            let immigrants: i64 = records
                .iter()
                .filter(|r| r.year == year && r.component == Component::Immigrants)
                .map(|r| r.value)
                .sum();
            let emigrants: i64 = records
                .iter()
                .filter(|r| r.year == year && r.component == Component::Emigrants)
                .map(|r| r.value)
                .sum();
            prop_assert_eq!(year_totals.net_migration(), immigrants - emigrants);
        }
    }

    #[test]
    fn merged_years_are_the_filtered_intersection(
        records in prop::collection::vec(record_strategy(), 0..64)
    ) {
        let totals: YearlyTotals = records.iter().collect();
        let draft = DraftTable::selective_service();
        let merged = merge_for_analysis(&totals, &draft);

        let expected: Vec<i32> = totals
            .iter()
            .map(|(year, _)| year)
            .filter(|year| *year >= ANALYSIS_START_YEAR && draft.inductions(*year).is_some())
            .collect();
        let actual: Vec<i32> = merged.iter().map(|record| record.year).collect();
        prop_assert_eq!(actual, expected);
    }
}
