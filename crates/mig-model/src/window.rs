//! Historical year windows used to scope correlations.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// First year considered by the analysis.
pub const ANALYSIS_START_YEAR: i32 = 1951;

/// A named range of years for one correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Window {
    /// Korean War draft, 1951-1953.
    Korea,
    /// Vietnam War draft, 1964-1973.
    Vietnam,
    /// Union of the Korea and Vietnam windows.
    Combined,
}

impl Window {
    /// Windows in reporting order.
    pub const REPORT_ORDER: [Window; 3] = [Window::Vietnam, Window::Korea, Window::Combined];

    pub fn label(self) -> &'static str {
        match self {
            Self::Korea => "Korea",
            Self::Vietnam => "Vietnam",
            Self::Combined => "Combined",
        }
    }

    /// Year ranges covered by this window.
    pub fn ranges(self) -> Vec<RangeInclusive<i32>> {
        match self {
            Self::Korea => vec![1951..=1953],
            Self::Vietnam => vec![1964..=1973],
            Self::Combined => vec![1964..=1973, 1951..=1953],
        }
    }

    pub fn contains(self, year: i32) -> bool {
        self.ranges().iter().any(|range| range.contains(&year))
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
