//! Memoizing conversion of axis-aligned line segments into the integer
//! grid points they pass through.
//!
//! The central type is [`LineToPointAdapter`]: it rasterizes a
//! [`Segment`] into an ordered [`PointSet`] and caches the result under
//! the segment's structural identity, so converting an equal segment
//! again is O(1) and fires no second generation event. Diagonal segments
//! are outside the supported input domain and fail with
//! [`GeometryError::UnsupportedGeometry`].
//!
//! ```
//! use rasterline::{LineToPointAdapter, Point, Segment};
//!
//! let mut adapter = LineToPointAdapter::default();
//! let segment = Segment::new(Point::new(3, 1), Point::new(3, 4));
//!
//! let points = adapter.convert(&segment)?;
//! assert_eq!(points.len(), 4);
//! assert_eq!(points[0], Point::new(3, 1));
//!
//! // structurally equal segment: cache hit, no recomputation
//! adapter.convert(&Segment::new(Point::new(3, 1), Point::new(3, 4)))?;
//! assert_eq!(adapter.miss_count(), 1);
//! # anyhow::Ok(())
//! ```

pub mod adapter;
pub mod cache;
pub mod config;
mod error;
pub mod types;

pub use adapter::{LineToPointAdapter, SharedAdapter};
pub use error::GeometryError;
pub use types::{Axis, Point, PointSet, Segment, VectorRectangle};
