//! Turning lon/lat outlines into SVG path data.

use crate::projection::AlbersUsa;
use geo::{BoundingRect, Centroid, Coord, LineString, MapCoords, MultiPolygon};
use std::fmt::Write;

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl ScreenBounds {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    pub fn union(&self, other: &ScreenBounds) -> ScreenBounds {
        ScreenBounds {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

impl From<geo::Rect<f64>> for ScreenBounds {
    fn from(rect: geo::Rect<f64>) -> Self {
        ScreenBounds {
            x0: rect.min().x,
            y0: rect.min().y,
            x1: rect.max().x,
            y1: rect.max().y,
        }
    }
}

/// A state outline in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedShape {
    /// SVG path data
    pub path: String,
    pub bounds: ScreenBounds,
}

/// Project a whole outline with the sub-projection picked by its centroid.
///
/// Returns `None` for empty geometry or outlines whose centroid falls
/// outside every inset.
pub fn project_outline(geometry: &MultiPolygon<f64>, projection: &AlbersUsa) -> Option<ProjectedShape> {
    let centroid = geometry.centroid()?;
    let (_, part) = projection.select(centroid.x(), centroid.y())?;

    let projected: MultiPolygon<f64> = geometry.map_coords(|c| {
        let (x, y) = part.project(c.x, c.y);
        Coord { x, y }
    });
    let bounds = projected.bounding_rect()?.into();

    Some(ProjectedShape {
        path: path_data(&projected),
        bounds,
    })
}

/// SVG path data for screen-space polygons: one closed subpath per ring.
pub fn path_data(polygons: &MultiPolygon<f64>) -> String {
    let mut path = String::new();
    for polygon in polygons.0.iter() {
        write_ring(&mut path, polygon.exterior());
        for interior in polygon.interiors() {
            write_ring(&mut path, interior);
        }
    }
    path
}

fn write_ring(path: &mut String, ring: &LineString<f64>) {
    let mut coords = ring.0.iter();
    let first = match coords.next() {
        Some(c) => c,
        None => return,
    };
    write!(path, "M{:.2},{:.2}", first.x, first.y).ok();
    for c in coords {
        write!(path, "L{:.2},{:.2}", c.x, c.y).ok();
    }
    path.push('Z');
}
