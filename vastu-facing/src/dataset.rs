//! YAML datasets of property points and road lines.
//!
//! This is the loading side of the pipeline: it turns a file into the
//! already-parsed [`PropertyPoint`]s and [`RoadLine`]s the engine consumes.
//! Coordinates must already share one reference frame.
//!
//! Pass-through values reach the report as YAML parsed them. Unquoted
//! numbers and booleans are re-rendered in canonical form (`1.50` becomes
//! `1.5`), so quote any value whose exact text matters.
//!
//! ```yaml
//! points:
//!   - id: "GA1"
//!     x: 151.2093
//!     y: -33.8688
//!     fields:
//!       Address: 1 George St
//!       PID: GA1
//! roads:
//!   - [[151.2090, -33.8690], [151.2090, -33.8680]]
//!   - vertices: [[151.2080, -33.8690], [151.2100, -33.8690]]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::core::{PassThrough, Point2D, PropertyPoint};
use crate::geometry::RoadLine;

/// Errors from loading a [`Dataset`].
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Point {point}: field {field:?} is not a scalar value")]
    InvalidField { point: String, field: String },

    #[error("Duplicate point id: {0}")]
    DuplicatePoint(String),
}

/// A point as written in the dataset file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
    /// Pass-through fields, kept in file order. Scalars only; quote values
    /// whose text must survive unchanged.
    #[serde(default)]
    pub fields: Mapping,
}

/// A road as written in the dataset file: a bare vertex list or a map with
/// a `vertices` key.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoadRecord {
    Bare(Vec<[f64; 2]>),
    Tagged { vertices: Vec<[f64; 2]> },
}

impl RoadRecord {
    fn into_vertices(self) -> Vec<Point2D> {
        let raw = match self {
            RoadRecord::Bare(v) | RoadRecord::Tagged { vertices: v } => v,
        };
        raw.into_iter().map(Point2D::from).collect()
    }
}

/// Points and roads for one run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub points: Vec<PointRecord>,
    #[serde(default)]
    pub roads: Vec<RoadRecord>,
}

impl Dataset {
    /// Load a dataset from a YAML file
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, DatasetError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Convert into engine inputs. Roads are numbered in file order.
    ///
    /// Road geometry is not validated here; degenerate lines are the index's
    /// and engine's concern.
    pub fn into_parts(self) -> Result<(Vec<PropertyPoint>, Vec<RoadLine>), DatasetError> {
        let mut seen = HashSet::with_capacity(self.points.len());
        let mut points = Vec::with_capacity(self.points.len());

        for record in self.points {
            if !seen.insert(record.id.clone()) {
                return Err(DatasetError::DuplicatePoint(record.id));
            }
            let fields = pass_through(&record.id, &record.fields)?;
            points.push(
                PropertyPoint::new(record.id, Point2D::new(record.x, record.y))
                    .with_fields(fields),
            );
        }

        let roads = RoadLine::enumerate(self.roads.into_iter().map(RoadRecord::into_vertices));

        Ok((points, roads))
    }
}

fn pass_through(point: &str, mapping: &Mapping) -> Result<PassThrough, DatasetError> {
    let mut fields = PassThrough::new();
    for (key, value) in mapping {
        let invalid = || DatasetError::InvalidField {
            point: point.to_string(),
            field: format!("{:?}", key),
        };
        let name = scalar_to_string(key).ok_or_else(invalid)?;
        let value = scalar_to_string(value).ok_or_else(invalid)?;
        fields.insert(name, value);
    }
    Ok(fields)
}

/// Canonical text of a YAML scalar. The source spelling of numbers is gone
/// after parsing, so only quoted strings come through verbatim.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::RoadId;

    const SAMPLE: &str = r#"
points:
  - id: GA1
    x: 151.2093
    y: -33.8688
    fields:
      Address: 1 George St
      PID: GA1
      Lot: 12
  - id: GA2
    x: 151.2095
    y: -33.8689
roads:
  - [[151.2090, -33.8690], [151.2090, -33.8680]]
  - vertices: [[151.2080, -33.8690], [151.2100, -33.8690], [151.2110, -33.8700]]
"#;

    #[test]
    fn test_parse_sample() {
        let (points, roads) = Dataset::from_yaml(SAMPLE).unwrap().into_parts().unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id, "GA1");
        assert_eq!(points[0].position, Point2D::new(151.2093, -33.8688));
        let names: Vec<_> = points[0].fields.names().collect();
        assert_eq!(names, vec!["Address", "PID", "Lot"]);
        assert_eq!(points[0].fields.get("Lot"), Some("12"));
        assert!(points[1].fields.is_empty());

        assert_eq!(roads.len(), 2);
        assert_eq!(roads[0].id(), RoadId(0));
        assert_eq!(roads[1].id(), RoadId(1));
        assert_eq!(roads[1].vertices().len(), 3);
    }

    #[test]
    fn test_empty_document() {
        let (points, roads) = Dataset::from_yaml("{}").unwrap().into_parts().unwrap();
        assert!(points.is_empty());
        assert!(roads.is_empty());
    }

    #[test]
    fn test_degenerate_road_is_kept() {
        let yaml = "roads:\n  - [[1.0, 2.0]]\n";
        let (_, roads) = Dataset::from_yaml(yaml).unwrap().into_parts().unwrap();
        assert!(roads[0].is_degenerate());
    }

    #[test]
    fn test_quoted_values_pass_through_verbatim() {
        let yaml = r#"
points:
  - id: a
    x: 0
    y: 0
    fields:
      Price: "1.50"
      Zip: "02134"
      Rounded: 1.50
      Flag: true
"#;
        let (points, _) = Dataset::from_yaml(yaml).unwrap().into_parts().unwrap();
        let fields = &points[0].fields;
        assert_eq!(fields.get("Price"), Some("1.50"));
        assert_eq!(fields.get("Zip"), Some("02134"));
        assert_eq!(fields.get("Rounded"), Some("1.5"));
        assert_eq!(fields.get("Flag"), Some("true"));
    }

    #[test]
    fn test_duplicate_point() {
        let yaml = r#"
points:
  - {id: a, x: 0, y: 0}
  - {id: a, x: 1, y: 1}
"#;
        let result = Dataset::from_yaml(yaml).unwrap().into_parts();
        assert!(matches!(result, Err(DatasetError::DuplicatePoint(id)) if id == "a"));
    }

    #[test]
    fn test_nested_field_rejected() {
        let yaml = r#"
points:
  - id: a
    x: 0
    y: 0
    fields:
      Address: {street: Main}
"#;
        let result = Dataset::from_yaml(yaml).unwrap().into_parts();
        assert!(matches!(result, Err(DatasetError::InvalidField { .. })));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Dataset::from_yaml("points: [{id: a, x: nope}]"),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        let dataset = Dataset::load(&path).unwrap();
        assert_eq!(dataset.points.len(), 2);
        assert_eq!(dataset.roads.len(), 2);
    }
}
