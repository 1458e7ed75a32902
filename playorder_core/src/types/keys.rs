//! Key capabilities a record must offer to be stored in a [`Collection`](crate::Collection).
//!
//! Each [`TraversalOrder`](crate::TraversalOrder) reads exactly one of these keys. Any type that
//! implements all three is [`Orderable`] through the blanket implementation.

/// Text key used by the alphabetic order.
pub trait TextKey {
	fn text_key(&self) -> &str;
}

/// Numeric key used by the length order.
pub trait LengthKey {
	fn length_key(&self) -> i64;
}

/// Numeric key used by the popularity order.
pub trait ScoreKey {
	fn score_key(&self) -> i64;
}

/// A record that can be sorted by every [`TraversalOrder`](crate::TraversalOrder).
pub trait Orderable: TextKey + LengthKey + ScoreKey {}

impl<T: TextKey + LengthKey + ScoreKey + ?Sized> Orderable for T {}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Collection, TraversalOrder};

	struct Chapter {
		heading: String,
		pages: u16,
	}

	impl TextKey for Chapter {
		fn text_key(&self) -> &str {
			&self.heading
		}
	}

	impl LengthKey for Chapter {
		fn length_key(&self) -> i64 {
			i64::from(self.pages)
		}
	}

	impl ScoreKey for Chapter {
		fn score_key(&self) -> i64 {
			-i64::from(self.pages)
		}
	}

	fn chapter(heading: &str, pages: u16) -> Chapter {
		Chapter {
			heading: heading.to_string(),
			pages,
		}
	}

	#[test]
	fn custom_record_shape_is_orderable() {
		let book: Collection<Chapter> = [chapter("Intro", 4), chapter("Body", 40), chapter("Appendix", 12)]
			.into_iter()
			.collect();

		let headings = |order: TraversalOrder| -> Vec<String> {
			book
				.create_traversal(order)
				.iter()
				.map(|c| c.heading.clone())
				.collect()
		};

		assert_eq!(headings(TraversalOrder::Alphabetic), ["Appendix", "Body", "Intro"]);
		assert_eq!(headings(TraversalOrder::ByLengthDescending), ["Body", "Appendix", "Intro"]);
		assert_eq!(headings(TraversalOrder::ByPopularityDescending), ["Intro", "Appendix", "Body"]);
	}
}
