//! Road polylines and point-to-road projection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Point2D;
use crate::error::{FacingError, Result};

use super::segment::Segment2D;

/// Identifier of a road line, assigned at load time and stable for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoadId(pub u64);

impl RoadId {
    /// Id for the road at position `index` of its input.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        // usize is at most 64 bits on every supported target
        RoadId(index as u64)
    }
}

impl fmt::Display for RoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closest point on a road line to a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Closest point on the polyline
    pub closest: Point2D,
    /// Index `i` of the winning segment (vertices `i` and `i + 1`)
    pub segment_index: usize,
    /// Distance from the query point to `closest`
    pub distance: f64,
}

/// A road as an ordered polyline.
///
/// Lines with fewer than 2 vertices can be constructed (they come straight
/// from input data) but are degenerate: [`project`](Self::project) rejects
/// them with [`FacingError::InvalidGeometry`].
#[derive(Clone, Debug, PartialEq)]
pub struct RoadLine {
    id: RoadId,
    vertices: Vec<Point2D>,
}

impl RoadLine {
    pub fn new(id: RoadId, vertices: Vec<Point2D>) -> Self {
        Self { id, vertices }
    }

    /// Build lines from vertex lists, numbering them 0, 1, 2, ... in order.
    pub fn enumerate<I, V>(vertex_lists: I) -> Vec<RoadLine>
    where
        I: IntoIterator<Item = V>,
        V: Into<Vec<Point2D>>,
    {
        vertex_lists
            .into_iter()
            .enumerate()
            .map(|(i, vertices)| RoadLine::new(RoadId::from_index(i), vertices.into()))
            .collect()
    }

    #[inline]
    pub fn id(&self) -> RoadId {
        self.id
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Fewer than 2 vertices.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 2
    }

    /// Segment `i`, from vertex `i` to vertex `i + 1`.
    #[inline]
    pub fn segment(&self, index: usize) -> Option<Segment2D> {
        match (self.vertices.get(index), self.vertices.get(index + 1)) {
            (Some(&start), Some(&end)) => Some(Segment2D::new(start, end)),
            _ => None,
        }
    }

    /// Segments in vertex order.
    pub fn segments(&self) -> impl Iterator<Item = Segment2D> + '_ {
        self.vertices
            .windows(2)
            .map(|pair| Segment2D::new(pair[0], pair[1]))
    }

    /// Axis-aligned bounds as `(min, max)`, `None` for a line with no vertices.
    pub fn bounds(&self) -> Option<(Point2D, Point2D)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().skip(1).fold(
            (first, first),
            |(min, max), v| {
                (
                    Point2D::new(min.x.min(v.x), min.y.min(v.y)),
                    Point2D::new(max.x.max(v.x), max.y.max(v.y)),
                )
            },
        ))
    }

    /// Squared distance from `point` to the nearest part of the line.
    ///
    /// A single-vertex line measures to its vertex so the index can still
    /// match it; a line with no vertices is infinitely far away.
    pub fn distance_squared_to_point(&self, point: Point2D) -> f64 {
        match self.vertices.as_slice() {
            [] => f64::INFINITY,
            [only] => only.distance_squared(point),
            _ => self
                .segments()
                .map(|seg| seg.distance_squared_to_point(point))
                .fold(f64::INFINITY, f64::min),
        }
    }

    /// Project `point` onto the line.
    ///
    /// Every segment is tried; the one at minimal distance wins, and on equal
    /// distance the lowest segment index is kept.
    ///
    /// # Errors
    /// [`FacingError::InvalidGeometry`] if the line has fewer than 2 vertices.
    pub fn project(&self, point: Point2D) -> Result<Projection> {
        if self.is_degenerate() {
            return Err(FacingError::InvalidGeometry {
                road_id: self.id,
                vertices: self.vertices.len(),
            });
        }

        let mut best: Option<(usize, Point2D, f64)> = None;
        for (i, seg) in self.segments().enumerate() {
            let closest = seg.closest_point(point);
            let dist_sq = point.distance_squared(closest);
            if best.is_none_or(|(_, _, best_sq)| dist_sq < best_sq) {
                best = Some((i, closest, dist_sq));
            }
        }

        let (segment_index, closest, dist_sq) = best.ok_or(FacingError::InvalidGeometry {
            road_id: self.id,
            vertices: self.vertices.len(),
        })?;

        Ok(Projection {
            closest,
            segment_index,
            distance: dist_sq.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    /// L-shaped road: east along y=0, then north along x=10.
    fn l_road() -> RoadLine {
        RoadLine::new(RoadId(7), vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)])
    }

    #[test]
    fn test_project_picks_nearest_segment() {
        let road = l_road();

        let proj = road.project(p(4.0, 2.0)).unwrap();
        assert_eq!(proj.segment_index, 0);
        assert_relative_eq!(proj.closest.x, 4.0);
        assert_relative_eq!(proj.distance, 2.0);

        let proj = road.project(p(13.0, 6.0)).unwrap();
        assert_eq!(proj.segment_index, 1);
        assert_relative_eq!(proj.closest.y, 6.0);
        assert_relative_eq!(proj.distance, 3.0);
    }

    #[test]
    fn test_project_tie_keeps_lowest_segment() {
        let road = l_road();
        // Equidistant from both legs
        let proj = road.project(p(5.0, 5.0)).unwrap();
        assert_eq!(proj.segment_index, 0);

        // The shared vertex is at distance 0 from both segments
        let proj = road.project(p(10.0, 0.0)).unwrap();
        assert_eq!(proj.segment_index, 0);
    }

    #[test]
    fn test_project_degenerate_fails() {
        let single = RoadLine::new(RoadId(3), vec![p(1.0, 1.0)]);
        match single.project(p(0.0, 0.0)) {
            Err(FacingError::InvalidGeometry { road_id, vertices }) => {
                assert_eq!(road_id, RoadId(3));
                assert_eq!(vertices, 1);
            }
            other => panic!("expected InvalidGeometry, got {:?}", other),
        }

        let empty = RoadLine::new(RoadId(4), vec![]);
        assert!(empty.project(p(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_distance_to_point() {
        let road = l_road();
        assert_relative_eq!(road.distance_squared_to_point(p(5.0, -3.0)), 9.0);

        let single = RoadLine::new(RoadId(0), vec![p(3.0, 4.0)]);
        assert_relative_eq!(single.distance_squared_to_point(Point2D::ZERO), 25.0);

        let empty = RoadLine::new(RoadId(0), vec![]);
        assert!(empty.distance_squared_to_point(Point2D::ZERO).is_infinite());
    }

    #[test]
    fn test_segments_and_bounds() {
        let road = l_road();
        assert_eq!(road.segments().count(), 2);
        assert_eq!(road.segment(1).unwrap().end, p(10.0, 10.0));
        assert!(road.segment(2).is_none());

        let (min, max) = road.bounds().unwrap();
        assert_eq!(min, p(0.0, 0.0));
        assert_eq!(max, p(10.0, 10.0));
        assert!(RoadLine::new(RoadId(0), vec![]).bounds().is_none());
    }

    #[test]
    fn test_enumerate_assigns_ids_in_order() {
        let lines = RoadLine::enumerate(vec![
            vec![p(0.0, 0.0), p(1.0, 0.0)],
            vec![p(0.0, 1.0), p(1.0, 1.0)],
        ]);
        assert_eq!(lines[0].id(), RoadId(0));
        assert_eq!(lines[1].id(), RoadId(1));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_index_past_u32_range_keeps_distinct_id() {
        let past = u32::MAX as usize + 1;
        assert_eq!(RoadId::from_index(past), RoadId(1 << 32));
        assert_ne!(RoadId::from_index(past), RoadId::from_index(0));
        assert_eq!(RoadId::from_index(past).to_string(), "4294967296");
    }
}
