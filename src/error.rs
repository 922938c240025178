use crate::types::Segment;
use std::fmt;

/// Errors produced when classifying segment geometry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GeometryError {
	/// The segment is neither perfectly horizontal nor perfectly vertical.
	UnsupportedGeometry { segment: Segment },
}

impl fmt::Display for GeometryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnsupportedGeometry { segment } => {
				write!(f, "segment {segment} is neither horizontal nor vertical")
			}
		}
	}
}

impl std::error::Error for GeometryError {}
