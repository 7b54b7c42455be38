//! Planar point type shared by properties and road vertices.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D point in the dataset's reference frame.
///
/// `x` is the easting (longitude) and `y` the northing (latitude). Points and
/// roads must already share one frame; nothing here reprojects.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// Easting / longitude
    pub x: f64,
    /// Northing / latitude
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Length of the vector from the origin
    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt)
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Squared distance (faster, avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// As an `[x, y]` array, the layout the R-tree works with.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Point2D {
    #[inline]
    fn from(xy: [f64; 2]) -> Self {
        Point2D::new(xy[0], xy[1])
    }
}

impl From<(f64, f64)> for Point2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}
