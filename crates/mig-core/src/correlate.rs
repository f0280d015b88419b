//! Pearson correlation of immigration against draft inductions.

use statrs::function::beta::beta_reg;
use tracing::{debug, info, warn};

use mig_model::{CorrelationResult, MergedRecord, Window};

/// Minimum number of points for a correlation to be attempted.
pub const MIN_POINTS: usize = 2;

/// Pearson coefficient and two-tailed p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PearsonStats {
    pub r: f64,
    pub p: f64,
}

/// Computes Pearson r and its two-tailed p-value.
///
/// Returns `None` when the series differ in length or hold fewer than
/// [`MIN_POINTS`] values. A constant series yields `NaN` for both
/// statistics. With exactly two points the p-value is 1.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<PearsonStats> {
    let n = x.len();
    if n != y.len() || n < MIN_POINTS {
        return None;
    }

    let count = n as f64;
    let mean_x = x.iter().sum::<f64>() / count;
    let mean_y = y.iter().sum::<f64>() / count;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Some(PearsonStats {
            r: f64::NAN,
            p: f64::NAN,
        });
    }

    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);
    Some(PearsonStats {
        r,
        p: two_tailed_p(r, n),
    })
}

/// P(|T| >= |t|) for Student's t with n - 2 degrees of freedom, written
/// as the regularized incomplete beta I_{1-r²}(df/2, 1/2).
fn two_tailed_p(r: f64, n: usize) -> f64 {
    if n <= 2 {
        return 1.0;
    }
    let df = (n - 2) as f64;
    let x = (1.0 - r * r).clamp(0.0, 1.0);
    beta_reg(df / 2.0, 0.5, x).clamp(0.0, 1.0)
}

/// Correlates immigrants with inductions over the rows inside `window`.
pub fn correlate_window(merged: &[MergedRecord], window: Window) -> CorrelationResult {
    let (immigrants, inductions): (Vec<f64>, Vec<f64>) = merged
        .iter()
        .filter(|record| window.contains(record.year))
        .map(|record| (record.immigrants as f64, record.inductions as f64))
        .unzip();
    let n = immigrants.len();

    match pearson(&immigrants, &inductions) {
        Some(PearsonStats { r, p }) => {
            if r.is_nan() {
                warn!(window = %window, n, "constant series, correlation undefined");
            }
            debug!(window = %window, n, r, p, "window correlated");
            CorrelationResult::computed(window, n, r, p)
        }
        None => {
            warn!(window = %window, n, "not enough data to correlate");
            CorrelationResult::not_enough_data(window, n)
        }
    }
}

/// Correlates every window in reporting order (Vietnam, Korea, Combined).
pub fn correlate_windows(merged: &[MergedRecord]) -> Vec<CorrelationResult> {
    let results: Vec<CorrelationResult> = Window::REPORT_ORDER
        .iter()
        .map(|window| correlate_window(merged, *window))
        .collect();
    info!(
        window_count = results.len(),
        computed = results.iter().filter(|result| result.r().is_some()).count(),
        "correlate complete"
    );
    results
}
