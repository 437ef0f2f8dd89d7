//! View model for the stacked bar chart of deaths by gender and state.

use crate::axis::{band_ticks, linear_ticks, AxisTick};
use crate::canvas::CanvasSize;
use crate::config::BarChartConfig;
use crate::legend::TextLabel;
use crate::scale::{BandScale, LinearScale};
use crate::stack::stack;
use gdv_data::{Dataset, StateKey};
use std::fmt;

/// Opacity of bars that are not brushed while another state is.
pub const DIMMED_OPACITY: f64 = 0.4;

/// Stacked series, bottom first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Male,
    Female,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::Male, Series::Female];

    pub fn key(&self) -> &'static str {
        match self {
            Series::Male => "male",
            Series::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Series::Male => "Male",
            Series::Female => "Female",
        }
    }

    fn color<'a>(&self, config: &'a BarChartConfig) -> &'a str {
        match self {
            Series::Male => &config.male_color,
            Series::Female => &config.female_color,
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-state counts behind one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub state: StateKey,
    pub male: u64,
    pub female: u64,
    pub total: u64,
}

impl BarDatum {
    pub fn count(&self, series: Series) -> u64 {
        match series {
            Series::Male => self.male,
            Series::Female => self.female,
        }
    }
}

/// One bar per state, largest total first; ties keep record order.
pub fn bar_data(dataset: &Dataset) -> Vec<BarDatum> {
    let mut data: Vec<BarDatum> = dataset
        .states()
        .iter()
        .map(|r| BarDatum {
            state: r.state.clone(),
            male: r.male_count,
            female: r.female_count(),
            total: r.count,
        })
        .collect();
    data.sort_by(|a, b| b.total.cmp(&a.total));
    data
}

/// One stacked segment ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub state: StateKey,
    pub series: Series,
    pub count: u64,
    pub total: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// Opacity of a bar for `state` while `brushed` is selected.
pub fn bar_opacity(state: &StateKey, brushed: Option<&StateKey>) -> f64 {
    match brushed {
        Some(b) if b != state => DIMMED_OPACITY,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarLegendEntry {
    pub series: Series,
    pub color: String,
    pub label: TextLabel,
    /// Swatch square
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartViewModel {
    pub canvas: CanvasSize,
    pub bars: Vec<BarDatum>,
    /// Male segments first, then female
    pub segments: Vec<BarSegment>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    /// Baseline of the bottom axis
    pub x_axis_y: f64,
    /// Position of the left axis line
    pub y_axis_x: f64,
    pub y_scale: LinearScale,
    pub legend: Vec<BarLegendEntry>,
    pub title: TextLabel,
}

impl BarChartViewModel {
    pub fn build(dataset: &Dataset, canvas: CanvasSize, config: &BarChartConfig) -> Self {
        let margin = config.margin;
        let bars = bar_data(dataset);

        let x_scale = BandScale::new(
            bars.iter().map(|b| b.state.clone()).collect(),
            (margin, canvas.width - margin),
            config.padding,
        );
        let max_total = bars.iter().map(|b| b.total).max().unwrap_or(0);
        let y_scale = LinearScale::new((0.0, max_total as f64), (canvas.height - margin, margin));

        let layers = stack(&bars, &Series::ALL, |bar, series| bar.count(*series) as f64);
        let segments = layers
            .iter()
            .flat_map(|layer| layer.points.iter())
            .map(|point| {
                let bar = &bars[point.index];
                let top = y_scale.apply(point.upper);
                BarSegment {
                    state: bar.state.clone(),
                    series: point.key,
                    count: bar.count(point.key),
                    total: bar.total,
                    x: x_scale.position_at(point.index),
                    y: top,
                    width: x_scale.bandwidth(),
                    height: y_scale.apply(point.lower) - top,
                    fill: point.key.color(config).to_string(),
                }
            })
            .collect();

        let legend_x = canvas.width - margin - 100.0;
        let legend = Series::ALL
            .iter()
            .enumerate()
            .map(|(i, series)| {
                let y = margin + i as f64 * 20.0;
                BarLegendEntry {
                    series: *series,
                    color: series.color(config).to_string(),
                    label: TextLabel {
                        text: series.label().to_string(),
                        x: legend_x + 24.0,
                        y: y + 13.0,
                        font_size: 12.0,
                    },
                    x: legend_x,
                    y,
                    size: 18.0,
                }
            })
            .collect();

        log::debug!("bar chart: {} bars, max total {}", bars.len(), max_total);

        BarChartViewModel {
            canvas,
            x_ticks: band_ticks(&x_scale, StateKey::display_name),
            y_ticks: linear_ticks(&y_scale, config.y_ticks),
            x_axis_y: canvas.height - margin,
            y_axis_x: margin,
            bars,
            segments,
            y_scale,
            legend,
            title: TextLabel {
                text: config.title.clone(),
                x: canvas.width / 2.0,
                y: margin / 2.0,
                font_size: 16.0,
            },
        }
    }
}
