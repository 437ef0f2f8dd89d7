//! View model for the choropleth map: projected state outlines colored by
//! death rate, area-proportional city markers and the legend.

use crate::canvas::CanvasSize;
use crate::config::{MapConfig, BUPU_3};
use crate::geo_path::{project_outline, ScreenBounds};
use crate::legend::MapLegend;
use crate::projection::AlbersUsa;
use crate::scale::{extent, LinearScale, ThresholdScale};
use gdv_data::{CityRecord, Dataset, Geography, StateKey};
use std::f64::consts::PI;

/// One state outline ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct StateShape {
    pub key: StateKey,
    /// Display name from the map source
    pub name: String,
    pub path: String,
    pub bounds: ScreenBounds,
    pub fill: String,
    pub rate: f64,
    /// False when no state record matched the outline
    pub matched: bool,
}

/// One city circle ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMarker {
    pub record: CityRecord,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Opacity and stroke of a state outline under the current brush.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub opacity: f64,
    pub stroke_width: f64,
}

impl ShapeStyle {
    pub const NORMAL: ShapeStyle = ShapeStyle {
        opacity: 0.8,
        stroke_width: 0.5,
    };
    pub const DIMMED: ShapeStyle = ShapeStyle {
        opacity: 0.4,
        stroke_width: 0.25,
    };
    pub const HIGHLIGHTED: ShapeStyle = ShapeStyle {
        opacity: 1.0,
        stroke_width: 1.5,
    };

    /// Stroke scaled down so outlines keep their width under a zoom of `k`.
    pub fn zoomed(self, k: f64) -> ShapeStyle {
        ShapeStyle {
            opacity: self.opacity,
            stroke_width: self.stroke_width / k,
        }
    }
}

/// Style of the outline `key` while `brushed` is selected.
pub fn brush_style(key: &StateKey, brushed: Option<&StateKey>) -> ShapeStyle {
    match brushed {
        None => ShapeStyle::NORMAL,
        Some(b) if b == key => ShapeStyle::HIGHLIGHTED,
        Some(_) => ShapeStyle::DIMMED,
    }
}

/// New brush value when the pointer enters `hovered`, `None` when that
/// state is already the brushed one.
pub fn hover_brush(hovered: &StateKey, current: Option<&StateKey>) -> Option<Option<StateKey>> {
    if current == Some(hovered) {
        None
    } else {
        Some(Some(hovered.clone()))
    }
}

/// Radius giving a circle whose area is linear in `count`; the largest
/// count gets `max_radius`.
pub fn city_radius(count: u64, max_count: u64, max_radius: f64) -> f64 {
    if max_count == 0 {
        return 0.0;
    }
    let max_area = PI * max_radius.powi(2);
    let area = LinearScale::new((0.0, max_count as f64), (0.0, max_area)).apply(count as f64);
    (area.max(0.0) / PI).sqrt()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapViewModel {
    pub canvas: CanvasSize,
    pub shapes: Vec<StateShape>,
    pub cities: Vec<CityMarker>,
    pub color_scale: ThresholdScale<String>,
    /// Union of all outline bounds
    pub bounds: ScreenBounds,
    pub legend: MapLegend,
}

impl MapViewModel {
    pub fn build(geography: &Geography, dataset: &Dataset, canvas: CanvasSize, config: &MapConfig) -> Self {
        let projection = AlbersUsa::new(config.projection_scale, canvas.center());

        let palette = if config.palette.is_empty() {
            BUPU_3.iter().map(|c| c.to_string()).collect()
        } else {
            config.palette.clone()
        };
        let rates = dataset.rates();
        let color_scale = ThresholdScale::from_quantiles(&rates, palette);
        let rate_extent = extent(&rates).unwrap_or((0.0, 0.0));

        let mut shapes = Vec::with_capacity(geography.features().len());
        for feature in geography.features() {
            let projected = match project_outline(&feature.geometry, &projection) {
                Some(p) => p,
                None => {
                    log::debug!("map: {} is outside the projection, skipped", feature.key);
                    continue;
                }
            };
            let rate = dataset.rate_for(&feature.key);
            shapes.push(StateShape {
                key: feature.key.clone(),
                name: feature.name.clone(),
                path: projected.path,
                bounds: projected.bounds,
                fill: color_scale.apply(rate),
                rate,
                matched: dataset.state(&feature.key).is_some(),
            });
        }

        let bounds = shapes
            .iter()
            .map(|s| s.bounds)
            .reduce(|a, b| a.union(&b))
            .unwrap_or(ScreenBounds {
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: 0.0,
            });

        let max_count = dataset.cities().iter().map(|c| c.count).max().unwrap_or(0);
        let max_radius = canvas.width * config.max_radius_fraction;
        let cities = dataset
            .cities()
            .iter()
            .filter_map(|city| {
                let (cx, cy) = projection.project(city.lng, city.lat)?;
                Some(CityMarker {
                    record: city.clone(),
                    cx,
                    cy,
                    r: city_radius(city.count, max_count, max_radius),
                })
            })
            .collect();

        let legend = MapLegend::build(&config.legend_title, &color_scale, rate_extent, &bounds, canvas);

        MapViewModel {
            canvas,
            shapes,
            cities,
            color_scale,
            bounds,
            legend,
        }
    }

    pub fn shape(&self, key: &StateKey) -> Option<&StateShape> {
        self.shapes.iter().find(|s| &s.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::quantile;
    use gdv_data::{GeoFeature, StateRecord};
    use geo::{polygon, MultiPolygon};

    fn rect(name: &str, west: f64, south: f64, east: f64, north: f64) -> GeoFeature {
        let outline = polygon![
            (x: west, y: north),
            (x: east, y: north),
            (x: east, y: south),
            (x: west, y: south),
            (x: west, y: north),
        ];
        GeoFeature {
            name: name.to_string(),
            key: StateKey::from_name(name),
            geometry: MultiPolygon::new(vec![outline]),
        }
    }

    fn geography() -> Geography {
        Geography::new(vec![
            rect("Colorado", -109.05, 37.0, -102.05, 41.0),
            rect("Wyoming", -111.05, 41.0, -104.05, 45.0),
            rect("Kansas", -102.05, 37.0, -94.6, 40.0),
            rect("New Mexico", -109.05, 31.33, -103.0, 37.0),
        ])
        .unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                StateRecord::new("Colorado", 100, 80, 1_000_000),
                StateRecord::new("Wyoming", 30, 25, 100_000),
                StateRecord::new("Kansas", 50, 40, 1_000_000),
                StateRecord::new("Utah", 5, 4, 1_000_000),
            ],
            vec![
                CityRecord {
                    key: "den".to_string(),
                    city: "Denver".to_string(),
                    state: Some("Colorado".to_string()),
                    lat: 39.74,
                    lng: -104.99,
                    count: 400,
                },
                CityRecord {
                    key: "ict".to_string(),
                    city: "Wichita".to_string(),
                    state: Some("Kansas".to_string()),
                    lat: 37.69,
                    lng: -97.34,
                    count: 100,
                },
                CityRecord {
                    key: "par".to_string(),
                    city: "Paris".to_string(),
                    state: None,
                    lat: 48.86,
                    lng: 2.35,
                    count: 1000,
                },
            ],
        )
        .unwrap()
    }

    fn canvas() -> CanvasSize {
        CanvasSize::new(960.0, 500.0)
    }

    #[test]
    fn test_thresholds_are_rate_quantiles() {
        let data = dataset();
        let view = MapViewModel::build(&geography(), &data, canvas(), &MapConfig::default());
        let rates = data.rates();
        assert_eq!(view.color_scale.thresholds()[0], quantile(&rates, 1.0 / 3.0).unwrap());
        assert_eq!(view.color_scale.thresholds()[1], quantile(&rates, 2.0 / 3.0).unwrap());
    }

    #[test]
    fn test_thresholds_ignore_record_order() {
        let data = dataset();
        let mut reversed: Vec<StateRecord> = data.states().to_vec();
        reversed.reverse();
        let reversed = Dataset::new(reversed, data.cities().to_vec()).unwrap();

        let a = MapViewModel::build(&geography(), &data, canvas(), &MapConfig::default());
        let b = MapViewModel::build(&geography(), &reversed, canvas(), &MapConfig::default());
        assert_eq!(a.color_scale.thresholds(), b.color_scale.thresholds());
    }

    #[test]
    fn test_shape_colors_and_fallback() {
        let view = MapViewModel::build(&geography(), &dataset(), canvas(), &MapConfig::default());
        assert_eq!(view.shapes.len(), 4);

        // rates: UT 0.5, KS 5, CO 10, WY 30 -> thresholds at KS and CO
        let wyoming = view.shape(&StateKey::from_name("Wyoming")).unwrap();
        assert_eq!(wyoming.fill, BUPU_3[2]);
        let colorado = view.shape(&StateKey::from_name("Colorado")).unwrap();
        assert_eq!(colorado.fill, BUPU_3[2]);
        let kansas = view.shape(&StateKey::from_name("Kansas")).unwrap();
        assert_eq!(kansas.fill, BUPU_3[1]);
        assert!(view.shape(&StateKey::from_name("Utah")).is_none());

        let new_mexico = view.shape(&StateKey::from_name("New Mexico")).unwrap();
        assert!(!new_mexico.matched);
        assert_eq!(new_mexico.rate, 0.0);
        assert_eq!(new_mexico.fill, view.color_scale.apply(0.0));
    }

    #[test]
    fn test_city_markers() {
        let view = MapViewModel::build(&geography(), &dataset(), canvas(), &MapConfig::default());
        // Paris is not projectable
        assert_eq!(view.cities.len(), 2);

        let denver = &view.cities[0];
        let wichita = &view.cities[1];
        // the largest projectable city does not get the maximum radius: Paris holds the max count
        let area_ratio = (wichita.r * wichita.r) / (denver.r * denver.r);
        assert!((area_ratio - 100.0 / 400.0).abs() < 1e-9);

        let colorado = view.shape(&StateKey::from_name("Colorado")).unwrap();
        assert!(denver.cx > colorado.bounds.x0 && denver.cx < colorado.bounds.x1);
    }

    #[test]
    fn test_city_radius_area_is_linear() {
        let max_radius = 9.6;
        assert!((city_radius(1000, 1000, max_radius) - max_radius).abs() < 1e-9);
        assert_eq!(city_radius(0, 1000, max_radius), 0.0);
        assert_eq!(city_radius(10, 0, max_radius), 0.0);

        let a = city_radius(250, 1000, max_radius);
        let b = city_radius(750, 1000, max_radius);
        assert!(((b * b) / (a * a) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_brush_styles() {
        let ohio = StateKey::from_name("Ohio");
        let iowa = StateKey::from_name("Iowa");
        assert_eq!(brush_style(&ohio, None), ShapeStyle::NORMAL);
        assert_eq!(brush_style(&ohio, Some(&ohio)), ShapeStyle::HIGHLIGHTED);
        assert_eq!(brush_style(&iowa, Some(&ohio)), ShapeStyle::DIMMED);
        assert_eq!(ShapeStyle::HIGHLIGHTED.zoomed(3.0).stroke_width, 0.5);
    }

    #[test]
    fn test_hover_brush_only_on_change() {
        let ohio = StateKey::from_name("Ohio");
        let iowa = StateKey::from_name("Iowa");
        assert_eq!(hover_brush(&ohio, Some(&ohio)), None);
        assert_eq!(hover_brush(&ohio, Some(&iowa)), Some(Some(ohio.clone())));
        assert_eq!(hover_brush(&ohio, None), Some(Some(ohio)));
    }

    #[test]
    fn test_shape_rates_match_records() {
        let data = dataset();
        let view = MapViewModel::build(&geography(), &data, canvas(), &MapConfig::default());
        for shape in &view.shapes {
            assert_eq!(shape.rate, data.rate_for(&shape.key));
        }
    }

    #[test]
    fn test_legend_follows_scale() {
        let view = MapViewModel::build(&geography(), &dataset(), canvas(), &MapConfig::default());
        assert_eq!(view.legend.bins.len(), 3);
        let (lo, hi) = extent(&dataset().rates()).unwrap();
        assert_eq!(view.legend.bins[0].lower, lo);
        assert_eq!(view.legend.bins[2].upper, hi);
        assert_eq!(view.legend.bins[1].lower, view.color_scale.thresholds()[0]);
    }
}
