use anyhow::{Result, bail};
#[cfg(feature = "cli")]
use clap::ValueEnum;
use std::{fmt::Display, str::FromStr};

/// How records with equal keys are ordered relative to each other.
///
/// `InsertionOrder` sorts stably, so ties keep the order in which the records were added.
/// `Unspecified` sorts unstably; ties may come out in any order.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
	#[default]
	InsertionOrder,
	Unspecified,
}

impl TieBreak {
	pub fn as_str(&self) -> &str {
		match self {
			TieBreak::InsertionOrder => "insertion",
			TieBreak::Unspecified => "unspecified",
		}
	}

	pub fn parse_str(value: &str) -> Result<Self> {
		Ok(match value.to_lowercase().trim() {
			"insertion" | "stable" => TieBreak::InsertionOrder,
			"unspecified" | "unstable" => TieBreak::Unspecified,
			_ => bail!("Unknown tie break: '{}'", value),
		})
	}
}

impl Display for TieBreak {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TieBreak {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		TieBreak::parse_str(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_str() {
		fn test(input: &str, expected: Option<TieBreak>) {
			let result = TieBreak::parse_str(input);
			match expected {
				Some(value) => assert_eq!(result.unwrap(), value, "input: {input}"),
				None => assert!(result.is_err(), "Expected error for input: {input}"),
			}
		}

		test("insertion", Some(TieBreak::InsertionOrder));
		test("Stable", Some(TieBreak::InsertionOrder));
		test("unspecified", Some(TieBreak::Unspecified));
		test(" unstable ", Some(TieBreak::Unspecified));
		test("random", None);
		test("", None);
	}

	#[test]
	fn test_display_trait() {
		assert_eq!(format!("{}", TieBreak::InsertionOrder), "insertion");
		assert_eq!(TieBreak::Unspecified.to_string().parse::<TieBreak>().unwrap(), TieBreak::Unspecified);
	}

	#[cfg(feature = "cli")]
	#[test]
	fn value_enum_from_str() {
		assert_eq!(
			<TieBreak as ValueEnum>::from_str("insertion-order", true).unwrap(),
			TieBreak::InsertionOrder
		);
		assert!(<TieBreak as ValueEnum>::from_str("random", true).is_err());
	}
}
