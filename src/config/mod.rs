pub use crate::config::cache_type::CacheType;
use std::sync::Arc;
mod cache_type;

#[derive(Clone, Debug, Default)]
pub struct Config {
	pub cache_type: CacheType,
}

impl Config {
	#[must_use]
	pub fn arc(self) -> Arc<Self> {
		Arc::new(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_unbounded() {
		assert_eq!(Config::default().cache_type, CacheType::Unbounded);
	}

	#[test]
	fn constructors() {
		assert_eq!(CacheType::new_unbounded(), CacheType::Unbounded);
		assert_eq!(CacheType::new_limited(16), CacheType::Limited(16));
	}
}
