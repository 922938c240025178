use super::traits::PointCache;
use crate::types::{PointSet, Segment};
use std::collections::HashMap;

/// Append-only cache: entries are inserted lazily on first miss and never
/// removed for the lifetime of the process. This is the reference
/// memoization behavior.
#[derive(Debug, Default)]
pub struct UnboundedCache {
	data: HashMap<Segment, PointSet>,
}

impl UnboundedCache {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

impl PointCache for UnboundedCache {
	fn get(&mut self, segment: &Segment) -> Option<PointSet> {
		self.data.get(segment).cloned()
	}

	fn insert(&mut self, segment: Segment, points: PointSet) -> PointSet {
		self.data.entry(segment).or_insert(points).clone()
	}

	fn len(&self) -> usize {
		self.data.len()
	}
}
