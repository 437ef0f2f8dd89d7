//! Reusable Dioxus RSX components for the gun deaths app.

mod bar_chart_view;
mod canvas_container;
mod map_view;
mod status_bar;
mod tooltip_overlay;

pub use bar_chart_view::BarChartView;
pub use canvas_container::CanvasContainer;
pub use map_view::MapView;
pub use status_bar::StatusBar;
pub use tooltip_overlay::TooltipOverlay;
