//! Property points and their pass-through fields.

use serde::{Deserialize, Serialize};

use super::Point2D;

/// Ordered `(name, value)` pairs carried opaquely from input to report.
///
/// The engine never inspects these; they exist so that whatever identifies a
/// property in the source data (address, parcel id, ...) reaches the report
/// unchanged and in its original column order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassThrough(Vec<(String, String)>);

impl PassThrough {
    /// Empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing the value if the name is already present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Value of a field by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    /// Fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PassThrough {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = PassThrough::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// A property to be assigned a facing direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyPoint {
    /// Unique identifier within a run
    pub id: String,
    /// Location in the same frame as the road network
    pub position: Point2D,
    /// Fields copied verbatim into the report
    #[serde(default)]
    pub fields: PassThrough,
}

impl PropertyPoint {
    /// Create a point with no pass-through fields.
    pub fn new(id: impl Into<String>, position: Point2D) -> Self {
        Self {
            id: id.into(),
            position,
            fields: PassThrough::new(),
        }
    }

    /// Attach pass-through fields.
    pub fn with_fields(mut self, fields: PassThrough) -> Self {
        self.fields = fields;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_preserves_order() {
        let fields = PassThrough::new()
            .with("Address", "1 Main St")
            .with("PID", "GA123")
            .with("Suburb", "Newtown");

        let names: Vec<_> = fields.names().collect();
        assert_eq!(names, vec!["Address", "PID", "Suburb"]);
        assert_eq!(fields.get("PID"), Some("GA123"));
        assert_eq!(fields.get("Missing"), None);
    }

    #[test]
    fn test_pass_through_insert_replaces() {
        let mut fields = PassThrough::new().with("PID", "old");
        fields.insert("PID", "new");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("PID"), Some("new"));
    }

    #[test]
    fn test_from_iter() {
        let fields: PassThrough = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec![("a", "1"), ("b", "2")]);
    }
}
