//! Pure layout for the gun deaths visualizations.
//!
//! This crate provides:
//! - `scale`, `axis`, `stack`: d3-style scales, axis ticks and stacking
//! - `projection`, `geo_path`: Albers USA projection and SVG path output
//! - `map_view`, `legend`, `zoom`: the choropleth view model and its zoom state
//! - `bar_chart`: the stacked bar chart view model
//! - `tooltip`: the shared tooltip state
//! - `config`, `canvas`: tunables and drawing surface size
//!
//! Nothing here touches the DOM; the UI crate renders these models as RSX.

pub mod axis;
pub mod bar_chart;
pub mod canvas;
pub mod config;
pub mod geo_path;
pub mod legend;
pub mod map_view;
pub mod projection;
pub mod scale;
pub mod stack;
pub mod tooltip;
pub mod zoom;

pub use bar_chart::{BarChartViewModel, Series};
pub use canvas::CanvasSize;
pub use config::{BarChartConfig, MapConfig};
pub use map_view::MapViewModel;
pub use tooltip::{TooltipContent, TooltipOwner, TooltipState};
pub use zoom::{MapZoom, ZoomChange, ZoomState};
