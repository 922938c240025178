use super::LineToPointAdapter;
use crate::{
	config::Config,
	types::{PointSet, Segment},
};
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// A clonable, thread-safe handle around a [`LineToPointAdapter`].
///
/// One mutex guards the whole get-or-compute sequence, so concurrent
/// first-time requests for the same segment still produce exactly one
/// computation and one generation event. Rasterization is bounded by
/// segment length, so holding the lock across the computation is cheap.
#[derive(Clone)]
pub struct SharedAdapter {
	inner: Arc<Mutex<LineToPointAdapter>>,
}

impl SharedAdapter {
	#[must_use]
	pub fn new(config: &Arc<Config>) -> Self {
		Self::from_adapter(LineToPointAdapter::new(config))
	}

	#[must_use]
	pub fn from_adapter(adapter: LineToPointAdapter) -> Self {
		Self {
			inner: Arc::new(Mutex::new(adapter)),
		}
	}

	pub fn convert(&self, segment: &Segment) -> Result<PointSet> {
		self.inner.lock().convert(segment)
	}

	#[must_use]
	pub fn cache_size(&self) -> usize {
		self.inner.lock().cache_size()
	}

	#[must_use]
	pub fn miss_count(&self) -> u64 {
		self.inner.lock().miss_count()
	}
}

impl Default for SharedAdapter {
	fn default() -> Self {
		Self::from_adapter(LineToPointAdapter::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Point;
	use std::thread;

	fn seg(x0: i64, y0: i64, x1: i64, y1: i64) -> Segment {
		Segment::new(Point::new(x0, y0), Point::new(x1, y1))
	}

	#[test]
	fn at_most_one_computation_per_key() {
		let adapter = SharedAdapter::default();
		let segment = seg(0, 0, 0, 100);

		thread::scope(|scope| {
			for _ in 0..8 {
				let adapter = adapter.clone();
				scope.spawn(move || {
					let points = adapter.convert(&segment).unwrap();
					assert_eq!(points.len(), 101);
				});
			}
		});

		assert_eq!(adapter.miss_count(), 1);
		assert_eq!(adapter.cache_size(), 1);
	}

	#[test]
	fn clones_share_one_cache() -> Result<()> {
		let adapter = SharedAdapter::default();
		let clone = adapter.clone();

		let first = adapter.convert(&seg(1, 1, 4, 1))?;
		let second = clone.convert(&seg(1, 1, 4, 1))?;
		assert!(Arc::ptr_eq(&first, &second));
		assert_eq!(adapter.miss_count(), 1);
		Ok(())
	}

	#[test]
	fn concurrent_distinct_segments_all_land() {
		let adapter = SharedAdapter::default();

		thread::scope(|scope| {
			for i in 0..8 {
				let adapter = adapter.clone();
				scope.spawn(move || {
					adapter.convert(&seg(i, 0, i, 5)).unwrap();
				});
			}
		});

		assert_eq!(adapter.miss_count(), 8);
		assert_eq!(adapter.cache_size(), 8);
	}
}
