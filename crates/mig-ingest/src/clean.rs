//! Date label cleaning and row selection rules.

use std::sync::LazyLock;

use regex::Regex;

use mig_model::Component;

/// Geography kept by the loader.
pub const TARGET_COUNTRY: &str = "Canada";

/// Rows whose year label contains this are dropped (incomplete year).
pub const EXCLUDED_YEAR_LABEL: &str = "2025";

static QUARTER_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d{2}").expect("quarter suffix pattern compiles"));

/// Removes every `-NN` suffix, turning `1946-01` into `1946`.
pub fn strip_quarter_suffix(label: &str) -> String {
    QUARTER_SUFFIX.replace_all(label, "").into_owned()
}

pub fn is_excluded_year(year_label: &str) -> bool {
    year_label.contains(EXCLUDED_YEAR_LABEL)
}

/// Returns the component when the row belongs to the tracked series.
pub fn select_component(country: &str, component: &str) -> Option<Component> {
    if country != TARGET_COUNTRY {
        return None;
    }
    Component::from_label(component)
}
