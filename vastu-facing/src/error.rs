//! Error types for vastu-facing

use thiserror::Error;

use crate::geometry::RoadId;

/// Result type alias
pub type Result<T> = std::result::Result<T, FacingError>;

/// Failures of the orientation pipeline.
///
/// `InvalidGeometry` is absorbed per point by the engine. Every other variant
/// is fatal for the run and is returned to the caller as-is.
#[derive(Debug, Error)]
pub enum FacingError {
    /// A road line has too few vertices to form a segment.
    #[error("Invalid geometry: road {road_id} has {vertices} vertex(es), need at least 2")]
    InvalidGeometry {
        /// Offending road
        road_id: RoadId,
        /// Number of vertices it has
        vertices: usize,
    },

    /// The road index could not be built from the supplied roads.
    #[error("Road index build failed: {0}")]
    IndexBuildFailure(String),

    /// No point matched any road, so the report would be empty.
    #[error(
        "No results: none of the {points} point(s) lies within the distance threshold of a road"
    )]
    EmptyResultSet {
        /// Number of points that were processed
        points: usize,
    },

    /// Configuration rejected at entry.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Points and match results handed to the report builder are out of step.
    #[error("Result mismatch: {0}")]
    Mismatch(String),

    /// A pass-through field has the same name as a column the report
    /// writes itself.
    #[error(
        "Column conflict: point {point} has a field named {column:?}, which is a reserved report column"
    )]
    ColumnConflict {
        /// Offending point
        point: String,
        /// Clashing column header
        column: String,
    },

    /// I/O error while writing a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
