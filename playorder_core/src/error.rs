//! The only error a traversal can raise.
//!
//! [`Traversal::current`](crate::Traversal::current) returns it wrapped in an `anyhow::Error`
//! once the cursor has passed the last entry. Callers that need to tell it apart can recover it
//! with `downcast_ref::<OutOfRange>()`.

use std::fmt::{Display, Formatter};

/// Reading past the end of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
	position: usize,
	len: usize,
}

impl OutOfRange {
	pub fn new(position: usize, len: usize) -> Self {
		Self { position, len }
	}

	/// Cursor position at the time of the failed read.
	pub fn position(&self) -> usize {
		self.position
	}

	/// Number of entries in the traversal.
	pub fn traversal_len(&self) -> usize {
		self.len
	}
}

impl Display for OutOfRange {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"traversal has reached the end (position {} of {})",
			self.position, self.len
		)
	}
}

impl std::error::Error for OutOfRange {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_and_fields() {
		let err = OutOfRange::new(4, 4);
		assert_eq!(err.to_string(), "traversal has reached the end (position 4 of 4)");
		assert_eq!(err.position(), 4);
		assert_eq!(err.traversal_len(), 4);
		assert_eq!(OutOfRange::new(0, 0).traversal_len(), 0);
	}

	#[test]
	fn survives_anyhow_wrapping() {
		let err: anyhow::Error = OutOfRange::new(2, 2).into();
		assert_eq!(err.downcast_ref::<OutOfRange>(), Some(&OutOfRange::new(2, 2)));
	}
}
