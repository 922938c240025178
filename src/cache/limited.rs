//! A bounded cache that holds at most `capacity` rasterized segments.
//!
//! Eviction is LRU-flavored but batched: once the cache is full, the less
//! recently used half (everything at or below the median access index) is
//! dropped in one pass. Evicting an entry only means the next conversion
//! of that segment recomputes; it never changes what is returned.

use super::traits::PointCache;
use crate::types::{PointSet, Segment};
use std::{collections::HashMap, fmt::Debug, ops::Div};

pub struct LimitedCache {
	cache: HashMap<Segment, (PointSet, u64)>,
	capacity: usize,
	last_index: u64,
}

impl LimitedCache {
	/// Creates a cache bounded to `capacity` entries.
	///
	/// # Panics
	/// Panics if `capacity` is zero.
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		if capacity < 1 {
			panic!("capacity is too small to store a single element");
		}
		Self {
			cache: HashMap::new(),
			capacity,
			last_index: 0,
		}
	}

	/// Drops every entry whose access index is at or below the median.
	fn cleanup(&mut self) {
		let mut latest_access: Vec<u64> = self.cache.values().map(|e| e.1).collect();
		latest_access.sort_unstable();
		let median = latest_access[latest_access.len().div(2)];
		self.cache.retain(|_, e| e.1 > median);
	}
}

impl PointCache for LimitedCache {
	fn get(&mut self, segment: &Segment) -> Option<PointSet> {
		if let Some(entry) = self.cache.get_mut(segment) {
			self.last_index += 1;
			entry.1 = self.last_index;
			Some(entry.0.clone())
		} else {
			None
		}
	}

	fn insert(&mut self, segment: Segment, points: PointSet) -> PointSet {
		if self.cache.len() >= self.capacity {
			self.cleanup();
		}

		self.last_index += 1;
		self
			.cache
			.entry(segment)
			.or_insert((points, self.last_index))
			.0
			.clone()
	}

	fn len(&self) -> usize {
		self.cache.len()
	}
}

impl Debug for LimitedCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LimitedCache")
			.field("length", &self.cache.len())
			.field("capacity", &self.capacity)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Point;
	use std::sync::Arc;

	fn seg(i: i64) -> Segment {
		Segment::new(Point::new(i, 0), Point::new(i, 3))
	}

	fn points(i: i64) -> PointSet {
		Arc::new(vec![Point::new(i, 0)])
	}

	#[test]
	fn add_and_get_items() {
		let mut cache = LimitedCache::with_capacity(10);
		cache.insert(seg(1), points(1));
		cache.insert(seg(2), points(2));

		assert_eq!(cache.get(&seg(1)), Some(points(1)));
		assert_eq!(cache.get(&seg(2)), Some(points(2)));
		assert_eq!(cache.get(&seg(3)), None); // never added
	}

	#[test]
	fn first_insert_wins() {
		let mut cache = LimitedCache::with_capacity(4);
		let first = points(1);
		cache.insert(seg(1), first.clone());
		let stored = cache.insert(seg(1), points(99));
		assert!(Arc::ptr_eq(&stored, &first));
		assert_eq!(cache.len(), 1);
	}

	#[test]
	fn eviction_keeps_recently_used_entries() {
		let mut cache = LimitedCache::with_capacity(4);
		for i in 1..=4 {
			cache.insert(seg(i), points(i));
		}
		// refresh 3 and 4; cleanup keeps only entries strictly above the
		// median access index, so 4 is the sole survivor
		cache.get(&seg(3));
		cache.get(&seg(4));

		cache.insert(seg(5), points(5));

		assert!(cache.len() <= 4);
		assert_eq!(cache.get(&seg(1)), None);
		assert_eq!(cache.get(&seg(2)), None);
		assert_eq!(cache.get(&seg(3)), None);
		assert_eq!(cache.get(&seg(4)), Some(points(4)));
		assert_eq!(cache.get(&seg(5)), Some(points(5)));
	}

	#[test]
	fn stays_within_capacity_under_churn() {
		let mut cache = LimitedCache::with_capacity(8);
		for i in 0..1000 {
			cache.insert(seg(i), points(i));
			assert!(cache.len() <= 8, "overflow at insert {i}");
		}
	}

	#[test]
	#[should_panic(expected = "capacity is too small")]
	fn zero_capacity_panics() {
		let _ = LimitedCache::with_capacity(0);
	}

	#[test]
	fn debug_reports_length_and_capacity() {
		let mut cache = LimitedCache::with_capacity(4);
		cache.insert(seg(1), points(1));
		assert_eq!(
			format!("{cache:?}"),
			"LimitedCache { length: 1, capacity: 4 }"
		);
	}
}
