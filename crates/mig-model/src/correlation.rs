//! Correlation results and their console formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::window::Window;

/// Pearson statistics for one window, or the reason none were computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CorrelationOutcome {
    /// Coefficient and two-tailed p-value.
    Computed { r: f64, p: f64 },
    /// Fewer than two points fell inside the window.
    NotEnoughData,
}

/// Immigration vs. inductions correlation for one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub window: Window,
    pub n: usize,
    pub outcome: CorrelationOutcome,
}

impl CorrelationResult {
    pub fn computed(window: Window, n: usize, r: f64, p: f64) -> Self {
        Self {
            window,
            n,
            outcome: CorrelationOutcome::Computed { r, p },
        }
    }

    pub fn not_enough_data(window: Window, n: usize) -> Self {
        Self {
            window,
            n,
            outcome: CorrelationOutcome::NotEnoughData,
        }
    }

    pub fn label(&self) -> &'static str {
        self.window.label()
    }

    pub fn r(&self) -> Option<f64> {
        match self.outcome {
            CorrelationOutcome::Computed { r, .. } => Some(r),
            CorrelationOutcome::NotEnoughData => None,
        }
    }

    pub fn p(&self) -> Option<f64> {
        match self.outcome {
            CorrelationOutcome::Computed { p, .. } => Some(p),
            CorrelationOutcome::NotEnoughData => None,
        }
    }
}

/// Renders the fixed console/annotation line for a result.
impl fmt::Display for CorrelationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            CorrelationOutcome::Computed { r, p } => write!(
                f,
                "{} (Immigration): r={}, p={}, n={})",
                self.label(),
                format_fixed(r, 3),
                format_general(p, 3),
                self.n
            ),
            CorrelationOutcome::NotEnoughData => {
                write!(f, "{}: not enough data (n={})", self.label(), self.n)
            }
        }
    }
}

/// Fixed-point formatting that spells non-finite values in lowercase.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    format!("{value:.decimals$}")
}

/// General numeric formatting with `precision` significant digits.
///
/// Uses scientific notation when the decimal exponent is below -4 or at
/// least `precision`, and strips insignificant trailing zeros, e.g.
/// `0.5`, `0.000123`, `1.2e-05`, `1.23e+04`.
pub fn format_general(value: f64, precision: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    let precision = precision.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the significant digits first decides the exponent.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("nan")
    } else if value == f64::INFINITY {
        Some("inf")
    } else if value == f64::NEG_INFINITY {
        Some("-inf")
    } else {
        None
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
