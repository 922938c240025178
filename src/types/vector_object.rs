use crate::types::{Point, Segment};
use anyhow::{Result, ensure};

/// An axis-aligned rectangle decomposed into its four outline segments.
///
/// All four segments are axis-aligned by construction, so each of them is
/// valid input for [`LineToPointAdapter::convert`](crate::LineToPointAdapter::convert).
/// Overlapping rectangles share no segments unless their edges coincide
/// exactly, endpoint for endpoint.
#[derive(Clone, Debug)]
pub struct VectorRectangle {
	segments: [Segment; 4],
}

impl VectorRectangle {
	/// Builds a rectangle at `(x, y)` with the given extent.
	pub fn new(x: i64, y: i64, width: i64, height: i64) -> Result<VectorRectangle> {
		ensure!(width >= 0, "width ({width}) must be >= 0");
		ensure!(height >= 0, "height ({height}) must be >= 0");

		Ok(VectorRectangle {
			segments: [
				Segment::new(Point::new(x, y), Point::new(x + width, y)),
				Segment::new(Point::new(x + width, y), Point::new(x + width, y + height)),
				Segment::new(Point::new(x, y), Point::new(x, y + height)),
				Segment::new(Point::new(x, y + height), Point::new(x + width, y + height)),
			],
		})
	}

	#[must_use]
	pub fn segments(&self) -> &[Segment; 4] {
		&self.segments
	}
}

impl IntoIterator for &VectorRectangle {
	type Item = Segment;
	type IntoIter = std::array::IntoIter<Segment, 4>;

	fn into_iter(self) -> Self::IntoIter {
		self.segments.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn four_axis_aligned_segments() -> Result<()> {
		let rect = VectorRectangle::new(1, 1, 10, 10)?;
		assert_eq!(rect.segments().len(), 4);
		for segment in &rect {
			assert!(segment.is_axis_aligned());
		}
		Ok(())
	}

	#[test]
	fn outline_covers_all_corners() -> Result<()> {
		let rect = VectorRectangle::new(0, 0, 2, 3)?;
		let corners = [
			Point::new(0, 0),
			Point::new(2, 0),
			Point::new(0, 3),
			Point::new(2, 3),
		];
		for corner in corners {
			assert!(
				rect.into_iter().any(|s| s.start == corner || s.end == corner),
				"corner {corner} missing from outline"
			);
		}
		Ok(())
	}

	#[test]
	fn zero_extent_collapses_to_degenerate_segments() -> Result<()> {
		let rect = VectorRectangle::new(5, 5, 0, 0)?;
		for segment in &rect {
			assert!(segment.is_degenerate());
		}
		Ok(())
	}

	#[test]
	fn negative_extent_is_rejected() {
		assert!(VectorRectangle::new(0, 0, -1, 5).is_err());
		assert!(VectorRectangle::new(0, 0, 5, -1).is_err());
	}
}
