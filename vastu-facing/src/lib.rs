//! # Vastu-Facing: Property Orientation from Road Geometry
//!
//! Assigns each property point a compass facing direction (N, NE, E, ...)
//! from the orientation of its nearest road segment, and emits a flat report.
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_facing::{FacingConfig, Orientation, analyze};
//! use vastu_facing::core::{Point2D, PropertyPoint};
//! use vastu_facing::geometry::RoadLine;
//!
//! // A north-running street and a house just east of it
//! let roads = RoadLine::enumerate(vec![
//!     vec![Point2D::new(0.0, -10.0), Point2D::new(0.0, 10.0)],
//! ]);
//! let houses = vec![PropertyPoint::new("house-1", Point2D::new(3.0, 0.0))];
//!
//! let report = analyze(&houses, roads, &FacingConfig::default()).unwrap();
//! assert_eq!(report.records()[0].orientation, Orientation::E);
//! ```
//!
//! ## Coordinate Frame
//!
//! - **X-east**: easting or longitude
//! - **Y-north**: northing or latitude
//! - **Bearings**: degrees clockwise from north, in [0, 360)
//!
//! Points and roads must already be in the same frame, and
//! `max_distance` is in that frame's units. Nothing is reprojected.
//!
//! ## Direction Ambiguity
//!
//! The facing bearing is the closest segment's bearing rotated by +90°, and
//! that bearing follows the road's stored vertex order. Reversing a road's
//! vertices flips every house along it to the opposite direction. There is
//! no canonicalization step.
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (Point2D, PropertyPoint, PassThrough)
//! - [`geometry`]: Road lines, projection, bearings, compass sectors
//! - [`index`]: R-tree over road lines for nearest-road queries
//! - [`engine`]: Per-point matching and orientation
//! - [`report`]: Report records and CSV output
//! - [`config`]: YAML configuration
//! - [`dataset`]: YAML input datasets

pub mod config;
pub mod core;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod index;
pub mod report;

// Core types
pub use crate::core::{PassThrough, Point2D, PropertyPoint};

// Geometry
pub use geometry::{Orientation, RoadId, RoadLine};

// Pipeline
pub use config::{ConfigLoadError, FacingConfig, MatchingConfig, ReportConfig};
pub use engine::{MatchResult, MatchSummary, OrientationEngine};
pub use error::{FacingError, Result};
pub use index::RoadIndex;
pub use report::{Report, ReportBuilder, ReportRecord};

/// Run the whole pipeline: build the index, match every point, build the report.
///
/// # Errors
/// - [`FacingError::InvalidConfig`] for a bad matching or report config
/// - [`FacingError::IndexBuildFailure`] if the roads cannot be indexed
/// - [`FacingError::EmptyResultSet`] if no point is within range of a road
/// - [`FacingError::ColumnConflict`] if a field is named like a report column
pub fn analyze(
    points: &[PropertyPoint],
    roads: Vec<RoadLine>,
    config: &FacingConfig,
) -> Result<Report> {
    config.matching.validate()?;
    config.report.validate()?;
    let index = RoadIndex::build(roads)?;
    let engine = OrientationEngine::new(&index, config.matching.clone())?;
    let results = engine.run(points);
    ReportBuilder::new(config.report.clone()).build(points, &results)
}
