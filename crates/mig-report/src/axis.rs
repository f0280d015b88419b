//! Axis scaling and tick generation.

/// Rounded axis bounds with an even tick step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Axis {
    /// Smallest rounded axis covering `[min, max]` with roughly six
    /// intervals.
    pub fn covering(min: f64, max: f64) -> Self {
        let (mut lo, mut hi) = (min, max);
        if hi <= lo {
            let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
            lo -= pad;
            hi += pad;
        }
        let step = nice_step((hi - lo) / 6.0);
        Self {
            min: (lo / step).floor() * step,
            max: (hi / step).ceil() * step,
            step,
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count)
            .map(|idx| self.min + idx as f64 * self.step)
            .collect()
    }
}

/// Rounds a raw step up to 1, 2, 2.5 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let exponent = raw.log10().floor();
    let base = 10f64.powi(exponent as i32);
    let fraction = raw / base;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Linear map from data values onto a pixel range.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl Scale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }
}

/// Year ticks every `every` years from `start` through `last`.
pub fn year_ticks(start: i32, last: i32, every: usize) -> Vec<i32> {
    (start..=last).step_by(every.max(1)).collect()
}

/// Formats an axis value with thousands separators.
pub fn format_tick(value: f64) -> String {
    if value.fract().abs() > 1e-9 {
        return format!("{value:.1}");
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covering_axis_rounds_outward() {
        let axis = Axis::covering(242.0, 551_806.0);
        assert_eq!(axis.min, 0.0);
        assert_eq!(axis.max, 600_000.0);
        assert_eq!(axis.step, 100_000.0);
        assert_eq!(axis.ticks().len(), 7);
    }

    #[test]
    fn covering_axis_handles_negative_values() {
        let axis = Axis::covering(-12_000.0, 180_000.0);
        assert!(axis.min <= -12_000.0);
        assert!(axis.max >= 180_000.0);
        assert_eq!(axis.step, 50_000.0);
        assert_eq!(axis.min, -50_000.0);
    }

    #[test]
    fn degenerate_range_is_padded() {
        let axis = Axis::covering(0.0, 0.0);
        assert!(axis.min < 0.0 && axis.max > 0.0);
        let axis = Axis::covering(100.0, 100.0);
        assert!(axis.min < 100.0 && axis.max > 100.0);
    }

    #[test]
    fn scale_maps_linearly() {
        let scale = Scale::new((0.0, 10.0), (500.0, 100.0));
        assert_eq!(scale.map(0.0), 500.0);
        assert_eq!(scale.map(10.0), 100.0);
        assert_eq!(scale.map(5.0), 300.0);
    }

    #[test]
    fn year_ticks_step_by_five() {
        assert_eq!(year_ticks(1951, 1973, 5), vec![1951, 1956, 1961, 1966, 1971]);
        assert_eq!(year_ticks(1951, 1951, 5), vec![1951]);
        assert!(year_ticks(1951, 1950, 5).is_empty());
    }

    #[test]
    fn tick_labels_are_grouped() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(600_000.0), "600,000");
        assert_eq!(format_tick(-50_000.0), "-50,000");
        assert_eq!(format_tick(3_033_361.0), "3,033,361");
        assert_eq!(format_tick(0.5), "0.5");
    }
}
