use std::fmt;

/// A single integer grid coordinate.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Point {
	pub x: i64,
	pub y: i64,
}

impl Point {
	#[must_use]
	pub fn new(x: i64, y: i64) -> Point {
		Point { x, y }
	}
}

impl fmt::Display for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

impl fmt::Debug for Point {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("Point({}, {})", &self.x, &self.y))
	}
}

impl From<(i64, i64)> for Point {
	fn from(value: (i64, i64)) -> Self {
		Point::new(value.0, value.1)
	}
}

impl From<[i64; 2]> for Point {
	fn from(value: [i64; 2]) -> Self {
		Point::new(value[0], value[1])
	}
}
