//! Axis-aligned line segments and their rasterization into grid points.
//!
//! A [`Segment`] is a pair of endpoints with structural equality: two
//! segments with the same coordinates in the same order are the same
//! cache key, regardless of where they were constructed.

use crate::{error::GeometryError, types::Point};
use anyhow::Result;
use std::fmt;

/// The axis along which a segment varies.
///
/// A degenerate segment (both endpoints equal) classifies as
/// [`Axis::Vertical`]: the vertical check runs first, so a zero delta on
/// both axes is unambiguous.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
	Vertical,
	Horizontal,
}

/// A line segment defined by two endpoints, endpoint order significant.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Segment {
	pub start: Point,
	pub end: Point,
}

impl Segment {
	#[must_use]
	pub fn new(start: Point, end: Point) -> Segment {
		Segment { start, end }
	}

	/// Classifies the segment as vertical or horizontal.
	///
	/// Vertical is checked before horizontal, so a degenerate segment
	/// counts as vertical. Diagonal segments fail with
	/// [`GeometryError::UnsupportedGeometry`].
	pub fn axis(&self) -> Result<Axis> {
		if self.start.x == self.end.x {
			Ok(Axis::Vertical)
		} else if self.start.y == self.end.y {
			Ok(Axis::Horizontal)
		} else {
			Err(GeometryError::UnsupportedGeometry { segment: *self }.into())
		}
	}

	#[must_use]
	pub fn is_axis_aligned(&self) -> bool {
		self.start.x == self.end.x || self.start.y == self.end.y
	}

	#[must_use]
	pub fn is_degenerate(&self) -> bool {
		self.start == self.end
	}

	/// Enumerates every integer grid point the segment passes through,
	/// both endpoints inclusive, ascending along the varying axis.
	pub fn rasterize(&self) -> Result<Vec<Point>> {
		Ok(self.rasterize_along(self.axis()?))
	}

	pub(crate) fn rasterize_along(&self, axis: Axis) -> Vec<Point> {
		match axis {
			Axis::Vertical => {
				let x = self.start.x;
				let top = self.start.y.min(self.end.y);
				let bottom = self.start.y.max(self.end.y);
				(top..=bottom).map(|y| Point::new(x, y)).collect()
			}
			Axis::Horizontal => {
				let y = self.start.y;
				let left = self.start.x.min(self.end.x);
				let right = self.start.x.max(self.end.x);
				(left..=right).map(|x| Point::new(x, y)).collect()
			}
		}
	}
}

impl fmt::Display for Segment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} -> {}", self.start, self.end)
	}
}

impl fmt::Debug for Segment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("Segment({} -> {})", &self.start, &self.end))
	}
}

impl From<((i64, i64), (i64, i64))> for Segment {
	fn from(value: ((i64, i64), (i64, i64))) -> Self {
		Segment::new(value.0.into(), value.1.into())
	}
}
