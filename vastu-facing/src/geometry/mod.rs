//! Geometric kernel: road polylines, segment bearings and compass sectors.
//!
//! Everything here is a pure function of its inputs.
//!
//! - [`RoadLine`]: polyline with [`RoadLine::project`] to find the closest segment
//! - [`Segment2D`]: two-vertex segment with clamped projection
//! - [`segment_bearing`] / [`rotate`]: compass bearings in degrees
//! - [`Orientation`]: eight 45° sectors plus `Unknown`

mod bearing;
mod orientation;
mod road;
mod segment;

pub use bearing::{FACING_OFFSET_DEG, rotate, segment_bearing};
pub use orientation::{Orientation, ParseOrientationError};
pub use road::{Projection, RoadId, RoadLine};
pub use segment::Segment2D;
