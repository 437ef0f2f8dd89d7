//! Albers USA: the lower 48 states on a conic equal-area projection, with
//! Alaska and Hawaii re-projected into insets in the bottom-left corner.

use std::f64::consts::PI;

/// Default scale of the lower-48 projection.
pub const DEFAULT_SCALE: f64 = 1070.0;

/// Screen rectangle `[x0, y0] - [x1, y1]` a sub-projection is allowed to draw into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipExtent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl ClipExtent {
    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Albers conic equal-area projection with a longitude rotation, a center
/// point and a screen transform (scale, translate, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicEqualArea {
    n: f64,
    c: f64,
    r0: f64,
    rotate: f64,
    scale: f64,
    dx: f64,
    dy: f64,
}

impl ConicEqualArea {
    /// All angles in degrees. `center` is expressed in the rotated frame.
    pub fn new(
        parallels: (f64, f64),
        rotate: f64,
        center: (f64, f64),
        scale: f64,
        translate: (f64, f64),
    ) -> Self {
        let sy0 = parallels.0.to_radians().sin();
        let n = (sy0 + parallels.1.to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;

        let mut projection = ConicEqualArea {
            n,
            c,
            r0,
            rotate: rotate.to_radians(),
            scale,
            dx: 0.0,
            dy: 0.0,
        };
        let (cx, cy) = projection.raw(center.0.to_radians(), center.1.to_radians());
        projection.dx = translate.0 - scale * cx;
        projection.dy = translate.1 + scale * cy;
        projection
    }

    fn raw(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let r = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
        let theta = lambda * self.n;
        (r * theta.sin(), self.r0 - r * theta.cos())
    }

    /// Project lon/lat degrees to screen pixels.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let mut lambda = lon.to_radians() + self.rotate;
        if lambda > PI {
            lambda -= 2.0 * PI;
        } else if lambda < -PI {
            lambda += 2.0 * PI;
        }
        let (x, y) = self.raw(lambda, lat.to_radians());
        (self.dx + self.scale * x, self.dy - self.scale * y)
    }
}

/// Which part of the composite a point was drawn by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Lower48,
    Alaska,
    Hawaii,
}

/// Composite projection for the United States.
#[derive(Debug, Clone, PartialEq)]
pub struct AlbersUsa {
    parts: [(Region, ConicEqualArea, ClipExtent); 3],
}

impl AlbersUsa {
    /// `scale` is the lower-48 scale; `translate` is where the center of
    /// the lower 48 lands on screen.
    pub fn new(scale: f64, translate: (f64, f64)) -> Self {
        let k = scale;
        let (x, y) = translate;
        let eps = 1e-6;

        let lower48 = ConicEqualArea::new((29.5, 45.5), 96.0, (-0.6, 38.7), k, (x, y));
        let alaska = ConicEqualArea::new(
            (55.0, 65.0),
            154.0,
            (-2.0, 58.5),
            0.35 * k,
            (x - 0.307 * k, y + 0.201 * k),
        );
        let hawaii = ConicEqualArea::new(
            (8.0, 18.0),
            157.0,
            (-3.0, 19.9),
            k,
            (x - 0.205 * k, y + 0.212 * k),
        );

        AlbersUsa {
            parts: [
                (
                    Region::Lower48,
                    lower48,
                    ClipExtent {
                        x0: x - 0.455 * k,
                        y0: y - 0.238 * k,
                        x1: x + 0.455 * k,
                        y1: y + 0.238 * k,
                    },
                ),
                (
                    Region::Alaska,
                    alaska,
                    ClipExtent {
                        x0: x - 0.425 * k + eps,
                        y0: y + 0.120 * k + eps,
                        x1: x - 0.214 * k - eps,
                        y1: y + 0.234 * k - eps,
                    },
                ),
                (
                    Region::Hawaii,
                    hawaii,
                    ClipExtent {
                        x0: x - 0.214 * k + eps,
                        y0: y + 0.166 * k + eps,
                        x1: x - 0.115 * k - eps,
                        y1: y + 0.234 * k - eps,
                    },
                ),
            ],
        }
    }

    /// The sub-projection whose clip extent receives this point, tried in
    /// lower 48, Alaska, Hawaii order.
    pub fn select(&self, lon: f64, lat: f64) -> Option<(Region, &ConicEqualArea)> {
        self.parts
            .iter()
            .find(|(_, projection, extent)| extent.contains(projection.project(lon, lat)))
            .map(|(region, projection, _)| (*region, projection))
    }

    /// Screen position of a point, or `None` outside every inset.
    pub fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        self.select(lon, lat).map(|(_, projection)| projection.project(lon, lat))
    }
}
