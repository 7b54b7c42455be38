//! Compass bearings of road segments.

use crate::core::Point2D;
use crate::core::math::{FULL_TURN_DEG, normalize_degrees};

/// Offset from road bearing to house-facing bearing.
///
/// A house is assumed to face perpendicular to the road it fronts.
pub const FACING_OFFSET_DEG: f64 = 90.0;

/// Compass bearing of the directed vector `p1 → p2`, in [0, 360).
///
/// Measured clockwise from north, treating +Y as north and +X as east:
/// `(atan2(dx, dy)° + 360) mod 360`.
///
/// The result depends on vertex order. Swapping `p1` and `p2` moves it by
/// 180°, so for a road line the stored vertex order alone decides which of
/// the two perpendiculars [`rotate`] later picks. Nothing canonicalizes that
/// order; a house on the "wrong" side of a road is reported facing away
/// from it.
///
/// A zero-length vector has bearing 0.
///
/// # Example
/// ```
/// use vastu_facing::core::Point2D;
/// use vastu_facing::geometry::segment_bearing;
///
/// let origin = Point2D::new(0.0, 0.0);
/// assert_eq!(segment_bearing(origin, Point2D::new(0.0, 5.0)), 0.0);
/// assert_eq!(segment_bearing(origin, Point2D::new(5.0, 0.0)), 90.0);
/// assert_eq!(segment_bearing(origin, Point2D::new(-5.0, 0.0)), 270.0);
/// ```
#[inline]
pub fn segment_bearing(p1: Point2D, p2: Point2D) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let bearing = (dx.atan2(dy).to_degrees() + FULL_TURN_DEG) % FULL_TURN_DEG;
    // -0.0 and values that round up to 360 both belong at north
    if bearing >= FULL_TURN_DEG || bearing == 0.0 {
        0.0
    } else {
        bearing
    }
}

/// Rotate a bearing clockwise by `offset_deg`, result in [0, 360).
///
/// Negative offsets rotate counter-clockwise.
#[inline]
pub fn rotate(bearing: f64, offset_deg: f64) -> f64 {
    normalize_degrees(bearing + offset_deg)
}
