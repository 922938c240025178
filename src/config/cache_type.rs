/// Selects how long memoized results are kept.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CacheType {
	/// Keep every entry for the lifetime of the process (reference
	/// behavior).
	Unbounded,
	/// Keep at most this many entries, evicting the less recently used
	/// ones. Must be at least 1.
	Limited(usize),
}

impl CacheType {
	#[must_use]
	pub fn new_unbounded() -> Self {
		Self::Unbounded
	}

	#[must_use]
	pub fn new_limited(capacity: usize) -> Self {
		Self::Limited(capacity)
	}
}

impl Default for CacheType {
	fn default() -> Self {
		Self::Unbounded
	}
}
