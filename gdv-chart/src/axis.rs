use crate::scale::{BandScale, LinearScale};

/// Tick mark position along an axis with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub label: String,
    pub position: f64,
}

/// Ticks at the center of every band, labelled by `label`.
pub fn band_ticks<K: PartialEq>(scale: &BandScale<K>, label: impl Fn(&K) -> String) -> Vec<AxisTick> {
    scale
        .domain()
        .iter()
        .enumerate()
        .map(|(i, key)| AxisTick {
            label: label(key),
            position: scale.position_at(i) + scale.bandwidth() / 2.0,
        })
        .collect()
}

/// Nice ticks for a linear scale, formatted to the precision of the step.
pub fn linear_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    let step = scale.tick_step(count);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            label: format_tick(value, step),
            position: scale.apply(value),
        })
        .collect()
}

/// Integral steps get thousands separators, fractional steps just enough decimals.
pub fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 || step <= 0.0 {
        return group_thousands(value.round() as i64);
    }
    let decimals = (-step.log10()).ceil().max(0.0) as usize;
    format!("{:.*}", decimals, value)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
