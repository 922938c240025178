use crate::{
	cache::{limited::LimitedCache, traits::PointCache, unbounded::UnboundedCache},
	config::{CacheType, Config},
	types::{PointSet, Segment},
};

/// The cache variant selected by [`Config::cache_type`].
#[derive(Debug)]
pub enum CacheMap {
	Unbounded(UnboundedCache),
	Limited(LimitedCache),
}

impl CacheMap {
	#[must_use]
	pub fn new(config: &Config) -> Self {
		match config.cache_type {
			CacheType::Unbounded => Self::Unbounded(UnboundedCache::new()),
			CacheType::Limited(capacity) => Self::Limited(LimitedCache::with_capacity(capacity)),
		}
	}

	pub fn get(&mut self, segment: &Segment) -> Option<PointSet> {
		match self {
			Self::Unbounded(cache) => cache.get(segment),
			Self::Limited(cache) => cache.get(segment),
		}
	}

	pub fn insert(&mut self, segment: Segment, points: PointSet) -> PointSet {
		match self {
			Self::Unbounded(cache) => cache.insert(segment, points),
			Self::Limited(cache) => cache.insert(segment, points),
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		match self {
			Self::Unbounded(cache) => cache.len(),
			Self::Limited(cache) => cache.len(),
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
