//! Choropleth legend placed to the right of the map.

use crate::canvas::CanvasSize;
use crate::geo_path::ScreenBounds;
use crate::scale::ThresholdScale;

/// One color class with its swatch and label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendBin {
    pub color: String,
    pub lower: f64,
    pub upper: f64,
    pub label: String,
    /// Swatch rectangle
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Label baseline position
    pub text_x: f64,
    pub text_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapLegend {
    pub title: TextLabel,
    pub bins: Vec<LegendBin>,
    pub font_size: f64,
}

/// Label of a class spanning `lower..upper`; every class but the last
/// excludes its upper edge.
pub fn bin_label(lower: f64, upper: f64, last: bool) -> String {
    if last {
        format!("{:.1} - {:.1} per 100k", lower, upper)
    } else {
        format!("{:.1} - {:.1} per 100k", lower, upper - 0.1)
    }
}

impl MapLegend {
    /// Legend for `scale` whose classes are bounded by the rate extent and
    /// the scale thresholds, stacked vertically right of `map_bounds`.
    pub fn build(
        title: &str,
        scale: &ThresholdScale<String>,
        rate_extent: (f64, f64),
        map_bounds: &ScreenBounds,
        canvas: CanvasSize,
    ) -> Self {
        let bar_height = (canvas.height / 10.0).min(40.0);
        let legend_x = map_bounds.x0 + 10.0 + map_bounds.width();
        let bar_width = ((canvas.width - legend_x) / 3.0).clamp(0.0, 40.0);
        let font_size = (bar_width / 2.0).min(16.0);
        let legend_y = map_bounds.y0 + 2.0 * font_size;

        let mut breaks = Vec::with_capacity(scale.thresholds().len() + 2);
        breaks.push(rate_extent.0);
        breaks.extend_from_slice(scale.thresholds());
        breaks.push(rate_extent.1);

        let classes = scale.outputs().len();
        let bins = scale
            .outputs()
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let lower = breaks[i];
                let upper = breaks[i + 1];
                let y = legend_y + i as f64 * bar_height;
                LegendBin {
                    color: color.clone(),
                    lower,
                    upper,
                    label: bin_label(lower, upper, i + 1 == classes),
                    x: legend_x,
                    y,
                    width: bar_width,
                    height: bar_height,
                    text_x: legend_x + bar_width + 5.0,
                    text_y: y + bar_height / 2.0 + font_size / 4.0,
                }
            })
            .collect();

        MapLegend {
            title: TextLabel {
                text: title.to_string(),
                x: legend_x + 5.0,
                y: map_bounds.y0 + bar_height / 2.0 + font_size / 4.0,
                font_size: 1.2 * font_size,
            },
            bins,
            font_size,
        }
    }
}
