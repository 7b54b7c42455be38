//! Default value functions for serde deserialization.

use crate::geometry::FACING_OFFSET_DEG;

pub fn max_distance() -> f64 {
    200.0
}

pub fn facing_offset_degrees() -> f64 {
    FACING_OFFSET_DEG
}

pub fn enabled() -> bool {
    true
}

pub fn orientation_column() -> String {
    "Orientation".to_string()
}
