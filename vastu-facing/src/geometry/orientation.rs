//! Eight-sector compass orientation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Facing direction of a property: one of eight 45° compass sectors, or
/// `Unknown` when no direction could be derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    Unknown,
}

/// Lower edges of NE..NW. N owns [337.5, 360) ∪ [0, 22.5).
const SECTOR_EDGES: [f64; 7] = [22.5, 67.5, 112.5, 157.5, 202.5, 247.5, 292.5];

/// Upper edge of NW, where N wraps around.
const NORTH_WRAP_EDGE: f64 = 337.5;

impl Orientation {
    /// The eight sectors in clockwise order starting at north.
    pub const SECTORS: [Orientation; 8] = [
        Orientation::N,
        Orientation::NE,
        Orientation::E,
        Orientation::SE,
        Orientation::S,
        Orientation::SW,
        Orientation::W,
        Orientation::NW,
    ];

    /// Bucket a compass bearing into its sector.
    ///
    /// Sectors are 45° wide, centred on the compass points, inclusive at the
    /// lower edge and exclusive at the upper. Anything outside [0, 360),
    /// including NaN, is `Unknown`.
    ///
    /// Edges are compared directly rather than by dividing by 45, so values
    /// just below an edge never round into the next sector.
    ///
    /// # Example
    /// ```
    /// use vastu_facing::geometry::Orientation;
    ///
    /// assert_eq!(Orientation::from_bearing(22.4999), Orientation::N);
    /// assert_eq!(Orientation::from_bearing(22.5), Orientation::NE);
    /// assert_eq!(Orientation::from_bearing(337.5), Orientation::N);
    /// assert_eq!(Orientation::from_bearing(f64::NAN), Orientation::Unknown);
    /// ```
    pub fn from_bearing(bearing: f64) -> Self {
        if !(0.0..360.0).contains(&bearing) {
            return Orientation::Unknown;
        }
        if bearing >= NORTH_WRAP_EDGE {
            return Orientation::N;
        }

        let passed = SECTOR_EDGES.iter().filter(|&&edge| bearing >= edge).count();
        Self::SECTORS[passed]
    }

    /// Centre bearing of the sector, `None` for `Unknown`.
    pub fn center_bearing(&self) -> Option<f64> {
        Self::SECTORS
            .iter()
            .position(|s| s == self)
            .map(|i| i as f64 * 45.0)
    }

    /// Whether this is one of the eight sectors.
    #[inline]
    pub fn is_known(&self) -> bool {
        *self != Orientation::Unknown
    }

    /// Report label (`"N"`, `"NE"`, ..., `"Unknown"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::N => "N",
            Orientation::NE => "NE",
            Orientation::E => "E",
            Orientation::SE => "SE",
            Orientation::S => "S",
            Orientation::SW => "SW",
            Orientation::W => "W",
            Orientation::NW => "NW",
            Orientation::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an orientation label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown orientation label: {0:?}")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SECTORS
            .iter()
            .chain(std::iter::once(&Orientation::Unknown))
            .find(|o| o.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ParseOrientationError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{FULL_TURN_DEG, normalize_degrees};

    /// Smallest absolute difference between two bearings, in [0, 180].
    fn bearing_difference(a: f64, b: f64) -> f64 {
        let diff = normalize_degrees(a - b);
        diff.min(FULL_TURN_DEG - diff)
    }

    #[test]
    fn test_boundary_table() {
        let cases = [
            (0.0, Orientation::N),
            (22.4999, Orientation::N),
            (22.5, Orientation::NE),
            (67.4999, Orientation::NE),
            (67.5, Orientation::E),
            (112.5, Orientation::SE),
            (157.5, Orientation::S),
            (202.5, Orientation::SW),
            (247.5, Orientation::W),
            (292.5, Orientation::NW),
            (337.4999, Orientation::NW),
            (337.5, Orientation::N),
            (359.9999, Orientation::N),
        ];

        for (bearing, expected) in cases {
            assert_eq!(Orientation::from_bearing(bearing), expected, "bearing {}", bearing);
        }
    }

    #[test]
    fn test_just_below_edge_stays_in_sector() {
        let below = 67.5 - 1e-12;
        assert_eq!(Orientation::from_bearing(below), Orientation::NE);
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        for bearing in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.1, 360.0, 725.0] {
            assert_eq!(Orientation::from_bearing(bearing), Orientation::Unknown);
        }
    }

    #[test]
    fn test_total_over_range() {
        let mut b = 0.0;
        while b < 360.0 {
            let o = Orientation::from_bearing(b);
            assert!(o.is_known(), "bearing {} mapped to Unknown", b);
            let center = o.center_bearing().unwrap();
            let diff = bearing_difference(b, center);
            assert!(diff <= 22.5, "bearing {} is {} from {}", b, diff, o);
            b += 0.25;
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for o in Orientation::SECTORS {
            assert_eq!(o.as_str().parse::<Orientation>(), Ok(o));
        }
        assert_eq!("unknown".parse::<Orientation>(), Ok(Orientation::Unknown));
        assert!("North".parse::<Orientation>().is_err());
        assert_eq!(Orientation::SW.to_string(), "SW");
    }

    #[test]
    fn test_serde_uses_labels() {
        let yaml = serde_yaml::to_string(&Orientation::NE).unwrap();
        assert_eq!(yaml.trim(), "NE");
        let parsed: Orientation = serde_yaml::from_str("Unknown").unwrap();
        assert_eq!(parsed, Orientation::Unknown);
    }
}
