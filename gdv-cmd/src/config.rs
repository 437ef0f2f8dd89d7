//! Chart settings file shared by the commands.

use anyhow::Context;
use gdv_chart::{BarChartConfig, MapConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `{"map": {...}, "bar_chart": {...}}`; either section may be omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub map: MapConfig,
    pub bar_chart: BarChartConfig,
}

impl ChartConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults when `path` is `None`.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(ChartConfig::default());
        };
        let text = std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("reading config {}", path))?;
        let config = ChartConfig::from_json(&text).with_context(|| format!("parsing config {}", path))?;
        log::info!("Loaded chart config from {}", path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_optional() {
        let config = ChartConfig::from_json(r#"{"map": {"max_zoom": 4.0}}"#).unwrap();
        assert_eq!(config.map.max_zoom, 4.0);
        assert_eq!(config.map.zoom_in_ms, 750);
        assert_eq!(config.bar_chart, BarChartConfig::default());
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(ChartConfig::load(None).unwrap(), ChartConfig::default());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(ChartConfig::from_json("{not json").is_err());
    }
}
