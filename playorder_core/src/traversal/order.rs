//! This module defines the `TraversalOrder` enum, the strategy tag that decides how a
//! [`Traversal`](crate::Traversal) sequences the records of a collection.
//!
//! Every order is a comparator over two records. It is applied once, when the traversal is
//! created, to sort a permutation of insertion positions.
//!
//! # Examples
//!
//! ```
//! use playorder_core::{Song, TraversalOrder};
//! use std::cmp::Ordering;
//!
//! let short = Song::new("Imagined", "c", 183, 1200);
//! let long = Song::new("Stairway", "b", 482, 800);
//!
//! assert_eq!(TraversalOrder::Alphabetic.compare(&short, &long), Ordering::Less);
//! assert_eq!(TraversalOrder::ByLengthDescending.compare(&short, &long), Ordering::Greater);
//! assert_eq!(TraversalOrder::parse_str("popularity").unwrap(), TraversalOrder::ByPopularityDescending);
//! ```

use crate::types::Orderable;
use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use enumset::EnumSetType;
use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	str::FromStr,
};

/// Orderings in which a collection can be traversed.
///
/// * **`Alphabetic`** – text key, ascending (byte-wise lexicographic).
/// * **`ByLengthDescending`** – length key, longest first.
/// * **`ByPopularityDescending`** – score key, highest first.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(EnumSetType, Debug, Hash)]
pub enum TraversalOrder {
	Alphabetic,
	ByLengthDescending,
	ByPopularityDescending,
}

impl TraversalOrder {
	/// Compares two records by this order's key.
	///
	/// Records with equal keys compare as `Ordering::Equal`; resolving those ties is left to the
	/// permutation builder.
	pub fn compare<R: Orderable>(&self, a: &R, b: &R) -> Ordering {
		use TraversalOrder::*;
		match self {
			Alphabetic => a.text_key().cmp(b.text_key()),
			ByLengthDescending => b.length_key().cmp(&a.length_key()),
			ByPopularityDescending => b.score_key().cmp(&a.score_key()),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			TraversalOrder::Alphabetic => "alphabetic",
			TraversalOrder::ByLengthDescending => "length",
			TraversalOrder::ByPopularityDescending => "popularity",
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"alpha" | "alphabetic" | "title" => TraversalOrder::Alphabetic,
			"length" | "by_length" | "bylengthdescending" => TraversalOrder::ByLengthDescending,
			"popularity" | "by_popularity" | "bypopularitydescending" => TraversalOrder::ByPopularityDescending,
			_ => bail!("Unknown traversal order: '{}'", value),
		})
	}
}

impl Display for TraversalOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TraversalOrder {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		TraversalOrder::parse_str(s)
	}
}
