//! Geometric value types: points, segments and rectangle outlines.

mod point;
mod segment;
mod vector_object;

pub use point::Point;
pub use segment::{Axis, Segment};
pub use vector_object::VectorRectangle;

use std::sync::Arc;

/// The ordered grid points of a rasterized segment, both endpoints
/// inclusive, ascending along the varying axis.
///
/// Shared behind an [`Arc`] so cache hits return the original allocation
/// instead of copying the point list.
pub type PointSet = Arc<Vec<Point>>;
