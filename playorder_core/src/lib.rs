//! Append-only record collections with independent, snapshot traversal orders.
//!
//! A [`Collection`] stores records in insertion order. Each call to
//! [`Collection::create_traversal`] computes a frozen permutation for one
//! [`TraversalOrder`] and hands the resulting [`Traversal`] to the caller.
//!
//! ```rust
//! use playorder_core::{Collection, Song, TraversalOrder};
//!
//! let mut playlist = Collection::new();
//! playlist.add(Song::new("Stairway", "b", 482, 800));
//! playlist.add(Song::new("Bohemian", "a", 354, 1000));
//!
//! let mut traversal = playlist.create_traversal(TraversalOrder::Alphabetic);
//! let mut titles = Vec::new();
//! traversal.reset();
//! while traversal.has_more() {
//!     titles.push(traversal.current().unwrap().title().to_string());
//!     traversal.advance();
//! }
//! assert_eq!(titles, ["Bohemian", "Stairway"]);
//! ```

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod traversal;
pub use traversal::*;

pub mod types;
pub use types::*;
