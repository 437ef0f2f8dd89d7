//! Scales mapping data values to screen positions and colors.

/// Quantile of `values` at `p` using linear interpolation between order
/// statistics (the R-7 method). The input order does not matter.
///
/// Returns `None` for empty input. `p <= 0` gives the minimum and `p >= 1`
/// the maximum.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if p <= 0.0 || n < 2 {
        return sorted.first().copied();
    }
    if p >= 1.0 {
        return sorted.last().copied();
    }

    let i = (n - 1) as f64 * p;
    let i0 = i.floor() as usize;
    let value0 = sorted[i0];
    let value1 = sorted[i0 + 1];
    Some(value0 + (value1 - value0) * (i - i0 as f64))
}

/// Minimum and maximum of `values`, ignoring NaN.
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Maps a continuous value onto discrete outputs through sorted breakpoints.
///
/// With thresholds `[t0, t1]` and outputs `[a, b, c]`: `v < t0 → a`,
/// `t0 <= v < t1 → b`, `v >= t1 → c`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale<T> {
    thresholds: Vec<f64>,
    outputs: Vec<T>,
}

impl<T: Clone> ThresholdScale<T> {
    /// `outputs` must hold exactly one more element than `thresholds`.
    pub fn new(thresholds: Vec<f64>, outputs: Vec<T>) -> Self {
        debug_assert_eq!(thresholds.len() + 1, outputs.len());
        ThresholdScale { thresholds, outputs }
    }

    /// Equal-population classes: one threshold at each `i / n` quantile of
    /// `values`, where `n` is the number of outputs.
    pub fn from_quantiles(values: &[f64], outputs: Vec<T>) -> Self {
        let n = outputs.len();
        let thresholds = (1..n)
            .map(|i| quantile(values, i as f64 / n as f64).unwrap_or(0.0))
            .collect();
        ThresholdScale::new(thresholds, outputs)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }

    /// Index of the class `value` falls into.
    pub fn class_of(&self, value: f64) -> usize {
        self.thresholds.partition_point(|&t| t <= value)
    }

    pub fn apply(&self, value: f64) -> T {
        self.outputs[self.class_of(value)].clone()
    }
}

/// Affine map from a numeric domain to a numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// A degenerate domain maps everything to the middle of the range.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + (r1 - r0) * t
    }

    /// Roughly `count` evenly spaced round values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain;
        if start == stop {
            return vec![start];
        }
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }
        let mut ticks = match tick_spec(start, stop, count as f64) {
            Some((i1, i2, inc)) => (i1..=i2)
                .map(|i| {
                    if inc < 0.0 {
                        i as f64 / -inc
                    } else {
                        i as f64 * inc
                    }
                })
                .collect(),
            None => Vec::new(),
        };
        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Step between the ticks produced by `ticks(count)`.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (start, stop) = (self.domain.0.min(self.domain.1), self.domain.0.max(self.domain.1));
        match tick_spec(start, stop, count as f64) {
            Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
            Some((_, _, inc)) => inc,
            None => 0.0,
        }
    }
}

// Nice tick bounds as (first index, last index, increment). A negative
// increment means the step is 1 / -inc.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    if !(count > 0.0) || !(stop > start) {
        return None;
    }
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1 as i64, i2 as i64, inc))
}

/// Ordinal scale dividing a continuous range into evenly spaced bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K> {
    domain: Vec<K>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<K: PartialEq> BandScale<K> {
    /// Bands over `range` with the same inner and outer `padding`
    /// (fraction of the step), centered in the range.
    pub fn new(domain: Vec<K>, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = domain.len() as f64;
        let padding_inner = padding;
        let padding_outer = padding;
        let step = (r1 - r0) / (n - padding_inner + padding_outer * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding_inner)) * 0.5;
        BandScale {
            domain,
            start,
            step,
            bandwidth: step * (1.0 - padding_inner),
        }
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of the `index`-th band.
    pub fn position_at(&self, index: usize) -> f64 {
        self.start + self.step * index as f64
    }
}
