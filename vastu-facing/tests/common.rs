//! Test utilities for vastu-facing pipeline tests.

#![allow(dead_code)]

use vastu_facing::{PassThrough, Point2D, PropertyPoint, RoadLine};

/// Property with Address/PID pass-through fields derived from its id.
pub fn property(id: &str, x: f64, y: f64) -> PropertyPoint {
    PropertyPoint::new(id, Point2D::new(x, y)).with_fields(
        PassThrough::new()
            .with("Address", format!("{} Test St", id))
            .with("PID", format!("GA{}", id)),
    )
}

/// Straight road through the given vertices.
pub fn road(vertices: &[(f64, f64)]) -> Vec<Point2D> {
    vertices.iter().copied().map(Point2D::from).collect()
}

/// A square grid of streets `blocks` wide, `spacing` apart.
///
/// Horizontal streets run east, vertical streets run north.
pub fn street_grid(blocks: usize, spacing: f64) -> Vec<RoadLine> {
    let extent = blocks as f64 * spacing;
    let mut lines = Vec::new();
    for i in 0..=blocks {
        let offset = i as f64 * spacing;
        lines.push(road(&[(0.0, offset), (extent, offset)]));
        lines.push(road(&[(offset, 0.0), (offset, extent)]));
    }
    RoadLine::enumerate(lines)
}

/// Properties scattered deterministically over the grid area.
pub fn scattered_properties(n: usize, extent: f64) -> Vec<PropertyPoint> {
    (0..n)
        .map(|i| {
            let x = (i as f64 * 37.31) % extent;
            let y = (i as f64 * 71.73) % extent;
            property(&i.to_string(), x, y)
        })
        .collect()
}
