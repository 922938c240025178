use crate::types::{PointSet, Segment};

/// Storage seam for memoized rasterization results.
///
/// Keys are segments themselves: structural equality over the coordinate
/// tuple, endpoint order significant. `get` takes `&mut self` because
/// bounded implementations update recency bookkeeping on every lookup.
pub trait PointCache {
	fn get(&mut self, segment: &Segment) -> Option<PointSet>;

	/// Stores `points` under `segment` and returns the stored handle.
	///
	/// If the segment is already present the existing entry wins, so two
	/// racing inserts can never leave divergent results behind.
	fn insert(&mut self, segment: Segment, points: PointSet) -> PointSet;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
