//! Core types for the vastu-facing library.
//!
//! - [`Point2D`]: planar coordinate shared by properties and road vertices
//! - [`PropertyPoint`] and [`PassThrough`]: the points being classified
//! - [`math`]: bearing arithmetic in compass degrees

pub mod math;
mod point;
mod property;

pub use point::Point2D;
pub use property::{PassThrough, PropertyPoint};
