//! Line segment between two consecutive road vertices.

use crate::core::Point2D;

use super::bearing::segment_bearing;

/// A directed 2D segment from `start` to `end`.
///
/// Direction matters: it is taken from the vertex order of the source line
/// and decides which way [`bearing`](Self::bearing) points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2D {
    /// First vertex
    pub start: Point2D,
    /// Second vertex
    pub end: Point2D,
}

impl Segment2D {
    #[inline]
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized).
    #[inline]
    pub fn direction(&self) -> Point2D {
        self.end - self.start
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().length()
    }

    /// Point along the segment at parameter t (0 = start, 1 = end).
    #[inline]
    pub fn point_at(&self, t: f64) -> Point2D {
        self.start + self.direction() * t
    }

    /// Projection parameter of `point`, clamped to [0, 1].
    ///
    /// Zero-length segments project everything onto `start`.
    #[inline]
    pub fn project_parameter(&self, point: Point2D) -> f64 {
        let dir = self.direction();
        let len_sq = dir.length_squared();

        if len_sq <= f64::EPSILON * f64::EPSILON {
            return 0.0;
        }

        ((point - self.start).dot(dir) / len_sq).clamp(0.0, 1.0)
    }

    /// Closest point on the segment to `point`.
    #[inline]
    pub fn closest_point(&self, point: Point2D) -> Point2D {
        self.point_at(self.project_parameter(point))
    }

    /// Squared distance from `point` to the segment (not the infinite line).
    #[inline]
    pub fn distance_squared_to_point(&self, point: Point2D) -> f64 {
        point.distance_squared(self.closest_point(point))
    }

    /// Distance from `point` to the segment (not the infinite line).
    #[inline]
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        self.distance_squared_to_point(point).sqrt()
    }

    /// Compass bearing from start to end, in [0, 360).
    #[inline]
    pub fn bearing(&self) -> f64 {
        segment_bearing(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn horizontal() -> Segment2D {
        Segment2D::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0))
    }

    #[test]
    fn test_perpendicular_distance() {
        let seg = horizontal();
        assert_relative_eq!(seg.distance_to_point(Point2D::new(5.0, 3.0)), 3.0);
        assert_relative_eq!(seg.closest_point(Point2D::new(5.0, 3.0)).x, 5.0);
    }

    #[test]
    fn test_distance_beyond_endpoints_uses_endpoint() {
        let seg = horizontal();
        // Past the end: distance to (10, 0), not to the infinite line
        assert_relative_eq!(seg.distance_to_point(Point2D::new(13.0, 4.0)), 5.0);
        assert_relative_eq!(seg.project_parameter(Point2D::new(-4.0, 0.0)), 0.0);
        assert_relative_eq!(seg.project_parameter(Point2D::new(20.0, 0.0)), 1.0);
    }

    #[test]
    fn test_zero_length_segment() {
        let p = Point2D::new(2.0, 2.0);
        let seg = Segment2D::new(p, p);
        assert_relative_eq!(seg.length(), 0.0);
        assert_relative_eq!(seg.distance_to_point(Point2D::new(5.0, 6.0)), 5.0);
    }

    #[test]
    fn test_bearing_follows_direction() {
        let seg = horizontal();
        assert_relative_eq!(seg.bearing(), 90.0);
        assert_relative_eq!(Segment2D::new(seg.end, seg.start).bearing(), 270.0);
    }
}
