//! This module defines `Song`, the record type shipped with the crate.
//!
//! A `Song` is immutable once constructed: all fields are private and only readable through
//! accessors. The title is the text key, the length in seconds is the length key and the
//! popularity is the score key. The artist is carried along but never used for ordering.
//!
//! # Examples
//!
//! ```
//! use playorder_core::Song;
//!
//! let song = Song::new("Hey Jude", "d", 431, 900);
//! assert_eq!(song.title(), "Hey Jude");
//! assert_eq!(song.to_string(), "Hey Jude by d (431s, 900)");
//! ```

use crate::types::{LengthKey, ScoreKey, TextKey};
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Song {
	title: String,
	artist: String,
	length: i64,
	popularity: i64,
}

impl Song {
	pub fn new(title: &str, artist: &str, length: i64, popularity: i64) -> Self {
		Song {
			title: title.to_owned(),
			artist: artist.to_owned(),
			length,
			popularity,
		}
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn artist(&self) -> &str {
		&self.artist
	}

	/// Length in seconds.
	pub fn length(&self) -> i64 {
		self.length
	}

	pub fn popularity(&self) -> i64 {
		self.popularity
	}
}

impl TextKey for Song {
	fn text_key(&self) -> &str {
		&self.title
	}
}

impl LengthKey for Song {
	fn length_key(&self) -> i64 {
		self.length
	}
}

impl ScoreKey for Song {
	fn score_key(&self) -> i64 {
		self.popularity
	}
}

impl Display for Song {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} by {} ({}s, {})",
			self.title, self.artist, self.length, self.popularity
		)
	}
}
