//! Matching configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{FacingError, Result};

/// Nearest-road matching settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Maximum point-to-road distance for a match, in coordinate units.
    /// Inclusive. The units are whatever the coordinates use; nothing is
    /// converted.
    #[serde(default = "defaults::max_distance")]
    pub max_distance: f64,

    /// Clockwise rotation from road bearing to facing bearing (degrees)
    #[serde(default = "defaults::facing_offset_degrees")]
    pub facing_offset_degrees: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_distance: defaults::max_distance(),
            facing_offset_degrees: defaults::facing_offset_degrees(),
        }
    }
}

impl MatchingConfig {
    /// Builder-style setter for the distance threshold.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Builder-style setter for the facing offset.
    pub fn with_facing_offset(mut self, degrees: f64) -> Self {
        self.facing_offset_degrees = degrees;
        self
    }

    /// Reject thresholds that are not finite and positive, and non-finite offsets.
    pub fn validate(&self) -> Result<()> {
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(FacingError::InvalidConfig(format!(
                "max_distance must be a positive number, got {}",
                self.max_distance
            )));
        }
        if !self.facing_offset_degrees.is_finite() {
            return Err(FacingError::InvalidConfig(format!(
                "facing_offset_degrees must be finite, got {}",
                self.facing_offset_degrees
            )));
        }
        Ok(())
    }
}
