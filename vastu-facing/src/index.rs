//! Spatial index over road lines.
//!
//! Uses an R-tree keyed on each road's bounding box, refined by the exact
//! point-to-polyline distance:
//! - Nearest road to a point within a distance limit
//! - All roads within a radius
//!
//! Building is a one-time bulk load. The index is immutable afterwards and
//! can be shared across threads.

use std::sync::Arc;

use log::{debug, info, warn};
use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::core::Point2D;
use crate::error::{FacingError, Result};
use crate::geometry::{RoadId, RoadLine};

/// A road line stored in the R-tree.
#[derive(Clone, Debug)]
struct IndexedRoad {
    line: Arc<RoadLine>,
    envelope: AABB<[f64; 2]>,
}

impl IndexedRoad {
    /// `None` if the line has no vertices.
    fn new(line: Arc<RoadLine>) -> Option<Self> {
        let (min, max) = line.bounds()?;
        Some(Self {
            envelope: AABB::from_corners(min.to_array(), max.to_array()),
            line,
        })
    }
}

impl RTreeObject for IndexedRoad {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl PointDistance for IndexedRoad {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.line.distance_squared_to_point(Point2D::from(*point))
    }

    fn contains_point(&self, _point: &[f64; 2]) -> bool {
        false // Lines have zero area
    }
}

/// The road selected for a query point.
#[derive(Clone, Copy, Debug)]
pub struct RoadMatch<'a> {
    /// Matched road id
    pub road_id: RoadId,
    /// Exact distance from the query point to the road
    pub distance: f64,
    /// Matched road geometry
    pub line: &'a RoadLine,
}

/// Spatial index for nearest-road queries.
///
/// # Example
/// ```rust
/// use vastu_facing::core::Point2D;
/// use vastu_facing::geometry::RoadLine;
/// use vastu_facing::index::RoadIndex;
///
/// let roads = RoadLine::enumerate(vec![
///     vec![Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0)],
///     vec![Point2D::new(0.0, 50.0), Point2D::new(100.0, 50.0)],
/// ]);
/// let index = RoadIndex::build(roads).unwrap();
///
/// let hit = index.nearest(Point2D::new(30.0, 40.0), 200.0).unwrap();
/// assert_eq!(hit.road_id.0, 1);
/// assert!(index.nearest(Point2D::new(30.0, 900.0), 200.0).is_none());
/// ```
#[derive(Clone)]
pub struct RoadIndex {
    tree: RTree<IndexedRoad>,
    /// Indexed lines sorted by id, for lookup.
    by_id: Vec<Arc<RoadLine>>,
}

impl RoadIndex {
    /// Bulk-load an index from road lines.
    ///
    /// Lines with no vertices or non-finite coordinates are skipped with a
    /// warning. Single-vertex lines are kept: points can match them, and then
    /// degrade to `Unknown` when projection fails.
    ///
    /// An empty input gives an empty index.
    ///
    /// # Errors
    /// [`FacingError::IndexBuildFailure`] if roads were supplied but none has
    /// at least 2 usable vertices, or if two lines share an id.
    pub fn build(lines: impl IntoIterator<Item = RoadLine>) -> Result<Self> {
        let mut supplied = 0usize;
        let mut usable = 0usize;
        let mut skipped = 0usize;
        let mut by_id: Vec<Arc<RoadLine>> = Vec::new();

        for line in lines {
            supplied += 1;

            if !line.vertices().iter().all(Point2D::is_finite) {
                warn!("Skipping road {}: non-finite coordinates", line.id());
                skipped += 1;
                continue;
            }
            match line.vertices().len() {
                0 => {
                    warn!("Skipping road {}: no vertices", line.id());
                    skipped += 1;
                    continue;
                }
                1 => warn!(
                    "Road {} has a single vertex; points matched to it will be Unknown",
                    line.id()
                ),
                _ => usable += 1,
            }

            by_id.push(Arc::new(line));
        }

        if supplied > 0 && usable == 0 {
            return Err(FacingError::IndexBuildFailure(format!(
                "none of the {} supplied road(s) has at least 2 valid vertices",
                supplied
            )));
        }

        by_id.sort_by_key(|line| line.id());
        if let Some(pair) = by_id.windows(2).find(|pair| pair[0].id() == pair[1].id()) {
            return Err(FacingError::IndexBuildFailure(format!(
                "duplicate road id {}",
                pair[0].id()
            )));
        }

        let indexed: Vec<IndexedRoad> = by_id
            .iter()
            .filter_map(|line| IndexedRoad::new(Arc::clone(line)))
            .collect();

        info!(
            "Road index built: {} road(s) indexed, {} skipped",
            indexed.len(),
            skipped
        );

        Ok(Self {
            tree: RTree::bulk_load(indexed),
            by_id,
        })
    }

    /// Create an empty index.
    pub fn empty() -> Self {
        Self {
            tree: RTree::new(),
            by_id: Vec::new(),
        }
    }

    /// Number of roads in the index.
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Check if index is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Look up an indexed road by id.
    pub fn get(&self, id: RoadId) -> Option<&RoadLine> {
        self.by_id
            .binary_search_by_key(&id, |line| line.id())
            .ok()
            .map(|slot| self.by_id[slot].as_ref())
    }

    /// Find the nearest road within `max_distance` (inclusive) of `point`.
    ///
    /// When several roads sit at exactly the minimal distance the one with
    /// the lowest [`RoadId`] wins, independent of tree layout.
    pub fn nearest(&self, point: Point2D, max_distance: f64) -> Option<RoadMatch<'_>> {
        if !point.is_finite() || max_distance.is_nan() || max_distance < 0.0 {
            return None;
        }

        let query = point.to_array();
        let max_dist_sq = max_distance * max_distance;
        let mut best: Option<(&IndexedRoad, f64)> = None;

        // Candidates arrive in order of increasing distance
        for candidate in self.tree.nearest_neighbor_iter(&query) {
            let dist_sq = candidate.distance_2(&query);
            if dist_sq > max_dist_sq {
                break;
            }
            match best {
                None => best = Some((candidate, dist_sq)),
                Some((_, best_sq)) if dist_sq > best_sq => break,
                Some((current, _)) => {
                    if candidate.line.id() < current.line.id() {
                        best = Some((candidate, dist_sq));
                    }
                }
            }
        }

        let (hit, dist_sq) = best?;
        debug!(
            "Nearest road to ({:.6}, {:.6}): {} at {:.3}",
            point.x,
            point.y,
            hit.line.id(),
            dist_sq.sqrt()
        );

        Some(RoadMatch {
            road_id: hit.line.id(),
            distance: dist_sq.sqrt(),
            line: hit.line.as_ref(),
        })
    }

    /// All roads within `radius` of `point`, sorted by distance then id.
    pub fn lines_within(&self, point: Point2D, radius: f64) -> Vec<RoadMatch<'_>> {
        if !point.is_finite() || radius.is_nan() || radius < 0.0 {
            return Vec::new();
        }

        let query = point.to_array();
        let max_dist_sq = radius * radius;

        let mut hits: Vec<RoadMatch<'_>> = self
            .tree
            .nearest_neighbor_iter(&query)
            .map(|indexed| (indexed, indexed.distance_2(&query)))
            .take_while(|(_, dist_sq)| *dist_sq <= max_dist_sq)
            .map(|(indexed, dist_sq)| RoadMatch {
                road_id: indexed.line.id(),
                distance: dist_sq.sqrt(),
                line: indexed.line.as_ref(),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.road_id.cmp(&b.road_id))
        });
        hits
    }
}

impl Default for RoadIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for RoadIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadIndex")
            .field("size", &self.tree.size())
            .finish()
    }
}
