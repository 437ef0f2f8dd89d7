//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gdv_chart::{BarChartConfig, MapConfig, TooltipState};
use gdv_data::{Dataset, Geography, StateKey};

/// Where the app is in loading its data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Failed(String),
    Ready,
}

impl LoadStatus {
    /// A load error wins over the loading flag.
    pub fn new(loading: bool, error: Option<&str>) -> Self {
        match (error, loading) {
            (Some(message), _) => LoadStatus::Failed(message.to_string()),
            (None, true) => LoadStatus::Loading,
            (None, false) => LoadStatus::Ready,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready)
    }
}

/// Shared application state for the map and the bar chart.
#[derive(Clone, Copy)]
pub struct AppState {
    /// State and city records (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// State outlines (None until loaded)
    pub geography: Signal<Option<Geography>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// State currently hovered on the map, highlighted in both views
    pub brushed_state: Signal<Option<StateKey>>,
    /// Display name of the state the map is zoomed into
    pub zoomed_state: Signal<Option<String>>,
    /// The single tooltip shared by both views
    pub tooltip: Signal<TooltipState>,
    pub map_config: Signal<MapConfig>,
    pub bar_config: Signal<BarChartConfig>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            geography: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            brushed_state: Signal::new(None),
            zoomed_state: Signal::new(None),
            tooltip: Signal::new(TooltipState::default()),
            map_config: Signal::new(MapConfig::default()),
            bar_config: Signal::new(BarChartConfig::default()),
        }
    }

    pub fn load_status(&self) -> LoadStatus {
        LoadStatus::new(*self.loading.read(), self.error_msg.read().as_deref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_status() {
        assert_eq!(LoadStatus::new(true, None), LoadStatus::Loading);
        assert_eq!(LoadStatus::new(false, None), LoadStatus::Ready);
        assert_eq!(
            LoadStatus::new(false, Some("bad csv")),
            LoadStatus::Failed("bad csv".to_string())
        );
        assert!(!LoadStatus::new(true, Some("bad csv")).is_ready());
    }
}
