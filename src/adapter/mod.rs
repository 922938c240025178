//! The memoizing line-to-point adapter.
//!
//! [`LineToPointAdapter`] converts axis-aligned segments into the grid
//! points they pass through, caching each result under the segment's
//! structural identity. Converting a structurally-equal segment a second
//! time is a cache hit: no recomputation, no side effects, and the
//! returned [`PointSet`] is the same allocation as the first call's.

mod shared;
pub use shared::SharedAdapter;

use crate::{
	cache::CacheMap,
	config::Config,
	types::{PointSet, Segment},
};
use anyhow::Result;
use std::sync::Arc;

#[derive(Debug)]
pub struct LineToPointAdapter {
	cache: CacheMap,
	misses: u64,
}

impl LineToPointAdapter {
	#[must_use]
	pub fn new(config: &Arc<Config>) -> Self {
		Self::with_cache(CacheMap::new(config))
	}

	/// Builds an adapter around an externally constructed cache.
	#[must_use]
	pub fn with_cache(cache: CacheMap) -> Self {
		Self { cache, misses: 0 }
	}

	/// Converts a segment into the ordered grid points it passes through.
	///
	/// A cache miss rasterizes the segment, counts one generation event
	/// and stores the result; a hit returns the stored result untouched.
	/// Diagonal segments fail with
	/// [`GeometryError::UnsupportedGeometry`](crate::GeometryError) and
	/// leave the cache unchanged.
	pub fn convert(&mut self, segment: &Segment) -> Result<PointSet> {
		// classify before touching the cache, so a rejected segment can
		// never leave a partial entry behind
		let axis = segment.axis()?;

		if let Some(points) = self.cache.get(segment) {
			log::trace!("cache hit for segment {segment}");
			return Ok(points);
		}

		self.misses += 1;
		let points: PointSet = Arc::new(segment.rasterize_along(axis));
		log::debug!(
			"{}: generating {} points for segment {segment}",
			self.misses,
			points.len()
		);
		Ok(self.cache.insert(*segment, points))
	}

	/// Number of distinct segments currently cached.
	#[must_use]
	pub fn cache_size(&self) -> usize {
		self.cache.len()
	}

	/// Number of generation events fired so far, i.e. conversions that
	/// were not answered from the cache.
	#[must_use]
	pub fn miss_count(&self) -> u64 {
		self.misses
	}
}

impl Default for LineToPointAdapter {
	fn default() -> Self {
		Self::new(&Config::default().arc())
	}
}
