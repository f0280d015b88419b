//! Row-level and per-year record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Population growth component tracked by the migration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Component {
    Immigrants,
    Emigrants,
}

impl Component {
    /// All tracked components, in display order.
    pub const ALL: [Component; 2] = [Component::Immigrants, Component::Emigrants];

    /// Matches the exact label used in the source table.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Immigrants" => Some(Self::Immigrants),
            "Emigrants" => Some(Self::Emigrants),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immigrants => "Immigrants",
            Self::Emigrants => "Emigrants",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cleaned CSV row: one component count for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRecord {
    pub year: i32,
    pub country: String,
    pub component: Component,
    pub value: i64,
}

/// Summed component counts for a single year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTotals {
    pub immigrants: i64,
    pub emigrants: i64,
}

impl YearTotals {
    /// Add a value to the running total of a component.
    pub fn add(&mut self, component: Component, value: i64) {
        match component {
            Component::Immigrants => self.immigrants += value,
            Component::Emigrants => self.emigrants += value,
        }
    }

    pub fn get(&self, component: Component) -> i64 {
        match component {
            Component::Immigrants => self.immigrants,
            Component::Emigrants => self.emigrants,
        }
    }

    /// Immigrants minus emigrants.
    pub fn net_migration(&self) -> i64 {
        self.immigrants - self.emigrants
    }
}

/// A year present in both the migration totals and the draft table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedRecord {
    pub year: i32,
    pub immigrants: i64,
    pub emigrants: i64,
    pub net_migration: i64,
    pub inductions: u64,
}

impl MergedRecord {
    pub fn new(year: i32, totals: YearTotals, inductions: u64) -> Self {
        Self {
            year,
            immigrants: totals.immigrants,
            emigrants: totals.emigrants,
            net_migration: totals.net_migration(),
            inductions,
        }
    }
}
