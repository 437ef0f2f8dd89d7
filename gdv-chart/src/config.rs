//! Tunable parameters of both views.
//!
//! Both structs deserialize with `#[serde(default)]`, so a config file only
//! needs the fields it overrides.

use crate::projection::DEFAULT_SCALE;
use serde::{Deserialize, Serialize};

/// 3-class BuPu palette from ColorBrewer2.
pub const BUPU_3: [&str; 3] = ["#e0ecf4", "#9ebcda", "#8856a7"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Choropleth colors, one class per color, lightest first
    pub palette: Vec<String>,
    /// Albers USA scale factor
    pub projection_scale: f64,
    /// Largest city marker radius as a fraction of the canvas width
    pub max_radius_fraction: f64,
    /// Outline color of every state
    pub state_stroke: String,
    pub city_fill: String,
    pub city_opacity: f64,
    /// Upper bound on the click-to-zoom scale
    pub max_zoom: f64,
    /// Fraction of the canvas a zoomed feature may fill
    pub zoom_fill: f64,
    pub zoom_in_ms: u32,
    pub zoom_out_ms: u32,
    pub legend_title: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            palette: BUPU_3.iter().map(|c| c.to_string()).collect(),
            projection_scale: DEFAULT_SCALE,
            max_radius_fraction: 0.01,
            state_stroke: "#000".to_string(),
            city_fill: "red".to_string(),
            city_opacity: 0.7,
            max_zoom: 8.0,
            zoom_fill: 0.9,
            zoom_in_ms: 750,
            zoom_out_ms: 300,
            legend_title: "Gun Deaths per 100,000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    /// Space reserved on every side for axes and title
    pub margin: f64,
    /// Band padding, as a fraction of the band step
    pub padding: f64,
    pub male_color: String,
    pub female_color: String,
    pub title: String,
    /// Approximate number of ticks on the count axis
    pub y_ticks: usize,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        BarChartConfig {
            margin: 50.0,
            padding: 0.2,
            male_color: "#377eb8".to_string(),
            female_color: "#e41a1c".to_string(),
            title: "Gun Deaths by Gender and State".to_string(),
            y_ticks: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: MapConfig = serde_json::from_str(r#"{"max_zoom": 4.0}"#).unwrap();
        assert_eq!(config.max_zoom, 4.0);
        assert_eq!(config.palette.len(), 3);
        assert_eq!(config.zoom_in_ms, 750);
        assert_eq!(config.projection_scale, DEFAULT_SCALE);
        assert_eq!(config.state_stroke, "#000");

        let config: MapConfig = serde_json::from_str(r##"{"state_stroke": "#fff"}"##).unwrap();
        assert_eq!(config.state_stroke, "#fff");

        let bars: BarChartConfig = serde_json::from_str(r#"{"male_color": "blue"}"#).unwrap();
        assert_eq!(bars.male_color, "blue");
        assert_eq!(bars.margin, 50.0);
    }
}
