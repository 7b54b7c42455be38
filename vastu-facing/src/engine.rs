//! Orientation engine: matches each property to its nearest road and derives
//! a facing direction.
//!
//! # Algorithm
//!
//! For each point P:
//! 1. Query the [`RoadIndex`] for the nearest road within `max_distance`
//! 2. No road: orientation is `Unknown`
//! 3. Otherwise project P onto the road to find the closest segment, take
//!    that segment's bearing, rotate it by the facing offset (+90°) and
//!    bucket it into a compass sector
//! 4. A degenerate road (fewer than 2 vertices) gives `Unknown` for that
//!    point only; the batch carries on
//!
//! Points are independent of each other once the index is built. Results
//! come back in input order.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, info, warn};

use crate::config::MatchingConfig;
use crate::core::PropertyPoint;
use crate::error::Result;
use crate::geometry::{Orientation, RoadId, rotate};
use crate::index::RoadIndex;

/// The road a point was matched to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchedRoad {
    /// Road id
    pub road_id: RoadId,
    /// Distance from the point to the road
    pub distance: f64,
    /// Index of the closest segment; `None` if the road is degenerate
    pub segment_index: Option<usize>,
}

/// Outcome of matching one point.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    /// Id of the originating point
    pub point_id: String,
    /// Nearest road within the threshold, if any
    pub road: Option<MatchedRoad>,
    /// Bearing of the closest road segment (degrees)
    pub road_bearing: Option<f64>,
    /// Road bearing rotated by the facing offset (degrees)
    pub facing_bearing: Option<f64>,
    /// Derived facing direction
    pub orientation: Orientation,
}

impl MatchResult {
    fn unmatched(point_id: &str) -> Self {
        Self {
            point_id: point_id.to_string(),
            road: None,
            road_bearing: None,
            facing_bearing: None,
            orientation: Orientation::Unknown,
        }
    }

    /// A road was found within the threshold.
    #[inline]
    pub fn is_matched(&self) -> bool {
        self.road.is_some()
    }

    /// A road was found but no direction could be derived from it.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.is_matched() && !self.orientation.is_known()
    }
}

/// Counts over a batch of results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSummary {
    /// Points processed
    pub points: usize,
    /// Points with a road within the threshold
    pub matched: usize,
    /// Points with no road within the threshold
    pub unmatched: usize,
    /// Matched points whose road gave no direction
    pub degraded: usize,
    /// Points per orientation
    pub by_orientation: BTreeMap<Orientation, usize>,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut summary = MatchSummary {
            points: results.len(),
            ..Default::default()
        };

        for result in results {
            if result.is_matched() {
                summary.matched += 1;
            } else {
                summary.unmatched += 1;
            }
            if result.is_degraded() {
                summary.degraded += 1;
            }
            *summary.by_orientation.entry(result.orientation).or_default() += 1;
        }

        summary
    }

    /// Number of points assigned a given orientation.
    pub fn count(&self, orientation: Orientation) -> usize {
        self.by_orientation.get(&orientation).copied().unwrap_or(0)
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} point(s): {} matched, {} unmatched, {} degraded",
            self.points, self.matched, self.unmatched, self.degraded
        )?;
        for (orientation, count) in &self.by_orientation {
            write!(f, ", {}={}", orientation, count)?;
        }
        Ok(())
    }
}

/// Matches points against a built [`RoadIndex`].
///
/// Holds no mutable state; the same engine can run any number of batches.
#[derive(Clone, Debug)]
pub struct OrientationEngine<'a> {
    index: &'a RoadIndex,
    config: MatchingConfig,
}

impl<'a> OrientationEngine<'a> {
    /// Create an engine over `index`.
    ///
    /// # Errors
    /// [`FacingError::InvalidConfig`](crate::FacingError::InvalidConfig) if
    /// `max_distance` is not a positive finite number or the offset is not
    /// finite.
    pub fn new(index: &'a RoadIndex, config: MatchingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { index, config })
    }

    /// Derive the facing direction for a single point.
    pub fn match_point(&self, point: &PropertyPoint) -> MatchResult {
        let Some(hit) = self.index.nearest(point.position, self.config.max_distance) else {
            debug!("Point {}: no road within {}", point.id, self.config.max_distance);
            return MatchResult::unmatched(&point.id);
        };

        let mut matched = MatchedRoad {
            road_id: hit.road_id,
            distance: hit.distance,
            segment_index: None,
        };

        let projection = match hit.line.project(point.position) {
            Ok(projection) => projection,
            Err(e) => {
                warn!("Point {}: {}; orientation set to Unknown", point.id, e);
                return MatchResult {
                    road: Some(matched),
                    ..MatchResult::unmatched(&point.id)
                };
            }
        };
        matched.segment_index = Some(projection.segment_index);

        // project() only succeeds with at least one segment
        let road_bearing = hit
            .line
            .segment(projection.segment_index)
            .map(|segment| segment.bearing());
        let facing_bearing =
            road_bearing.map(|bearing| rotate(bearing, self.config.facing_offset_degrees));
        let orientation = facing_bearing
            .map(Orientation::from_bearing)
            .unwrap_or(Orientation::Unknown);

        debug!(
            "Point {}: road {} segment {} bearing {:.1} -> {}",
            point.id,
            hit.road_id,
            projection.segment_index,
            road_bearing.unwrap_or(f64::NAN),
            orientation
        );

        MatchResult {
            point_id: point.id.clone(),
            road: Some(matched),
            road_bearing,
            facing_bearing,
            orientation,
        }
    }

    /// Match every point, returning results in input order.
    pub fn run(&self, points: &[PropertyPoint]) -> Vec<MatchResult> {
        let results: Vec<MatchResult> = points.iter().map(|p| self.match_point(p)).collect();
        info!("Orientation run complete: {}", MatchSummary::from_results(&results));
        results
    }
}
