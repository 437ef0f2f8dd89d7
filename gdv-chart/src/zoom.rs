//! Click-to-zoom state machine for the map.
//!
//! ```text
//! Idle   --click(feature)--> Zoomed   (fit feature, 750 ms)
//! Zoomed --click(any)------> Idle     (identity, 300 ms)
//! ```

use crate::canvas::CanvasSize;
use crate::config::MapConfig;
use crate::geo_path::ScreenBounds;

/// Uniform scale followed by a translation: `screen = k * p + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl ZoomTransform {
    pub const IDENTITY: ZoomTransform = ZoomTransform {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// Transform that centers `bounds` on the canvas and scales it to fill
    /// `config.zoom_fill` of the canvas, never beyond `config.max_zoom`.
    pub fn fit(bounds: &ScreenBounds, canvas: CanvasSize, config: &MapConfig) -> Self {
        let extent = (bounds.width() / canvas.width).max(bounds.height() / canvas.height);
        let k = if extent > 0.0 {
            (config.zoom_fill / extent).min(config.max_zoom)
        } else {
            config.max_zoom
        };
        let (cx, cy) = bounds.center();
        let (w2, h2) = canvas.center();
        ZoomTransform {
            k,
            x: w2 - k * cx,
            y: h2 - k * cy,
        }
    }

    pub fn apply(&self, (px, py): (f64, f64)) -> (f64, f64) {
        (self.k * px + self.x, self.k * py + self.y)
    }

    /// CSS `transform` value; pair with `transform-origin: 0 0`.
    pub fn css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.k)
    }
}

/// Whether the map is showing a single state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ZoomState {
    #[default]
    Idle,
    Zoomed {
        /// Display name of the zoomed state
        state: String,
    },
}

/// What the parent needs to hear about a click.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoomChange {
    Unchanged,
    ZoomedIn(String),
    ZoomedOut,
}

impl ZoomChange {
    /// Value for the parent's zoomed-state callback, `None` when nothing changed.
    pub fn notification(&self) -> Option<Option<String>> {
        match self {
            ZoomChange::Unchanged => None,
            ZoomChange::ZoomedIn(name) => Some(Some(name.clone())),
            ZoomChange::ZoomedOut => Some(None),
        }
    }
}

/// Zoom state of one map instance plus the transform currently applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MapZoom {
    state: ZoomState,
    transform: ZoomTransform,
    duration_ms: u32,
}

impl Default for MapZoom {
    fn default() -> Self {
        MapZoom {
            state: ZoomState::Idle,
            transform: ZoomTransform::IDENTITY,
            duration_ms: 0,
        }
    }
}

impl MapZoom {
    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Duration of the transition into the current transform.
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn is_zoomed(&self) -> bool {
        matches!(self.state, ZoomState::Zoomed { .. })
    }

    /// A state outline was clicked.
    pub fn click_feature(
        &mut self,
        name: &str,
        bounds: &ScreenBounds,
        canvas: CanvasSize,
        config: &MapConfig,
    ) -> ZoomChange {
        match self.state {
            ZoomState::Idle => {
                self.state = ZoomState::Zoomed {
                    state: name.to_string(),
                };
                self.transform = ZoomTransform::fit(bounds, canvas, config);
                self.duration_ms = config.zoom_in_ms;
                log::debug!("zoom: in on {} (k = {:.2})", name, self.transform.k);
                ZoomChange::ZoomedIn(name.to_string())
            }
            ZoomState::Zoomed { .. } => self.reset(config),
        }
    }

    /// Anything other than a state outline was clicked (city, background).
    pub fn click_elsewhere(&mut self, config: &MapConfig) -> ZoomChange {
        match self.state {
            ZoomState::Idle => ZoomChange::Unchanged,
            ZoomState::Zoomed { .. } => self.reset(config),
        }
    }

    /// The canvas changed size. A fitted transform belongs to the old layout,
    /// so a zoomed map snaps back to the identity.
    pub fn canvas_resized(&mut self) -> ZoomChange {
        match self.state {
            ZoomState::Idle => ZoomChange::Unchanged,
            ZoomState::Zoomed { .. } => {
                self.state = ZoomState::Idle;
                self.transform = ZoomTransform::IDENTITY;
                self.duration_ms = 0;
                log::debug!("zoom: reset after resize");
                ZoomChange::ZoomedOut
            }
        }
    }

    fn reset(&mut self, config: &MapConfig) -> ZoomChange {
        self.state = ZoomState::Idle;
        self.transform = ZoomTransform::IDENTITY;
        self.duration_ms = config.zoom_out_ms;
        log::debug!("zoom: reset");
        ZoomChange::ZoomedOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> CanvasSize {
        CanvasSize::new(960.0, 500.0)
    }

    fn texas_bounds() -> ScreenBounds {
        ScreenBounds {
            x0: 300.0,
            y0: 300.0,
            x1: 500.0,
            y1: 450.0,
        }
    }

    #[test]
    fn test_fit_is_capped() {
        let small = ScreenBounds {
            x0: 100.0,
            y0: 100.0,
            x1: 200.0,
            y1: 150.0,
        };
        let t = ZoomTransform::fit(&small, canvas(), &MapConfig::default());
        assert_eq!(t.k, 8.0);
        assert_eq!((t.x, t.y), (480.0 - 8.0 * 150.0, 250.0 - 8.0 * 125.0));
    }

    #[test]
    fn test_fit_centers_feature() {
        let t = ZoomTransform::fit(&texas_bounds(), canvas(), &MapConfig::default());
        // 150 / 500 dominates 200 / 960
        assert!((t.k - 0.9 / 0.3).abs() < 1e-9);
        let (cx, cy) = t.apply(texas_bounds().center());
        assert!((cx - 480.0).abs() < 1e-9);
        assert!((cy - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_cycle() {
        let config = MapConfig::default();
        let mut zoom = MapZoom::default();
        assert!(!zoom.is_zoomed());

        let change = zoom.click_feature("Texas", &texas_bounds(), canvas(), &config);
        assert_eq!(change, ZoomChange::ZoomedIn("Texas".to_string()));
        assert_eq!(change.notification(), Some(Some("Texas".to_string())));
        assert_eq!(
            zoom.state(),
            &ZoomState::Zoomed {
                state: "Texas".to_string()
            }
        );
        assert_eq!(zoom.duration_ms(), 750);
        assert!(zoom.transform().k > 1.0);

        // any click while zoomed resets, even on another state
        let change = zoom.click_feature("Ohio", &texas_bounds(), canvas(), &config);
        assert_eq!(change, ZoomChange::ZoomedOut);
        assert_eq!(change.notification(), Some(None));
        assert_eq!(zoom.state(), &ZoomState::Idle);
        assert_eq!(zoom.transform(), ZoomTransform::IDENTITY);
        assert_eq!(zoom.duration_ms(), 300);
    }

    #[test]
    fn test_background_click() {
        let config = MapConfig::default();
        let mut zoom = MapZoom::default();
        assert_eq!(zoom.click_elsewhere(&config), ZoomChange::Unchanged);
        assert_eq!(ZoomChange::Unchanged.notification(), None);

        zoom.click_feature("Texas", &texas_bounds(), canvas(), &config);
        assert_eq!(zoom.click_elsewhere(&config), ZoomChange::ZoomedOut);
        assert!(!zoom.is_zoomed());
    }

    #[test]
    fn test_resize_resets_zoom() {
        let config = MapConfig::default();
        let mut zoom = MapZoom::default();
        assert_eq!(zoom.canvas_resized(), ZoomChange::Unchanged);

        zoom.click_feature("Texas", &texas_bounds(), canvas(), &config);
        let change = zoom.canvas_resized();
        assert_eq!(change.notification(), Some(None));
        assert_eq!(zoom.state(), &ZoomState::Idle);
        assert_eq!(zoom.transform(), ZoomTransform::IDENTITY);
        assert_eq!(zoom.duration_ms(), 0);
    }

    #[test]
    fn test_css() {
        let t = ZoomTransform { k: 2.0, x: -10.0, y: 5.5 };
        assert_eq!(t.css(), "translate(-10px, 5.5px) scale(2)");
    }
}
