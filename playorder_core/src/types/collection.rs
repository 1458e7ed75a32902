//! This module provides `Collection`, an append-only store of records that hands out
//! independently ordered traversals.
//!
//! Records are kept in insertion order. That order is never exposed as a traversal order itself,
//! but it is the reference for tie breaking. Each record is stored behind its own `Arc`, so growing
//! the collection never relocates existing records, and traversals share the records instead of
//! copying them.
//!
//! # Examples
//!
//! ```rust
//! use playorder_core::{Collection, Song, TraversalOrder};
//!
//! let mut playlist = Collection::new();
//! playlist.add(Song::new("Bohemian", "a", 354, 1000));
//! playlist.add(Song::new("Stairway", "b", 482, 800));
//!
//! let longest_first = playlist.create_traversal(TraversalOrder::ByLengthDescending);
//! playlist.add(Song::new("Imagined", "c", 183, 1200));
//!
//! // the traversal is a snapshot and does not see the third song
//! assert_eq!(longest_first.len(), 2);
//! assert_eq!(playlist.len(), 3);
//! ```

use crate::{
	config::TraversalConfig,
	traversal::{Traversal, TraversalOrder},
	types::Orderable,
};
use enumset::EnumSet;
use std::{fmt::Debug, sync::Arc};

/// An append-only, insertion-ordered store of records.
pub struct Collection<R> {
	records: Vec<Arc<R>>,
	config: Arc<TraversalConfig>,
}

impl<R> Collection<R> {
	/// Creates an empty collection with the default [`TraversalConfig`].
	pub fn new() -> Self {
		Self::with_config(TraversalConfig::default())
	}

	/// Creates an empty collection whose traversals are built with `config`.
	pub fn with_config(config: impl Into<Arc<TraversalConfig>>) -> Self {
		Self {
			records: Vec::new(),
			config: config.into(),
		}
	}

	/// Appends a record. Traversals created earlier are not affected.
	pub fn add(&mut self, record: R) {
		self.records.push(Arc::new(record));
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Returns the record at insertion `position`, if any.
	pub fn get(&self, position: usize) -> Option<&R> {
		self.records.get(position).map(Arc::as_ref)
	}

	/// Iterates the records in insertion order.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = &R> {
		self.records.iter().map(Arc::as_ref)
	}

	pub fn config(&self) -> &TraversalConfig {
		&self.config
	}

	/// Shared handle to the record at `position`, for traversals that must keep it alive.
	pub(crate) fn handle(&self, position: usize) -> Option<&Arc<R>> {
		self.records.get(position)
	}
}

impl<R: Orderable> Collection<R> {
	/// Builds a traversal over every record currently stored, sequenced by `order`.
	///
	/// The permutation is computed here, once. The returned traversal is owned by the caller and
	/// stays valid however the collection grows afterwards; it simply never sees the new records.
	pub fn create_traversal(&self, order: TraversalOrder) -> Traversal<R> {
		log::debug!(
			"creating {order} traversal over {} records (tie break: {})",
			self.len(),
			self.config.tie_break
		);
		Traversal::new(self, order, self.config.tie_break)
	}

	pub fn alphabetic(&self) -> Traversal<R> {
		self.create_traversal(TraversalOrder::Alphabetic)
	}

	pub fn by_length(&self) -> Traversal<R> {
		self.create_traversal(TraversalOrder::ByLengthDescending)
	}

	pub fn by_popularity(&self) -> Traversal<R> {
		self.create_traversal(TraversalOrder::ByPopularityDescending)
	}

	/// Creates one traversal per order in `orders`, in declaration order of [`TraversalOrder`].
	pub fn create_traversals(&self, orders: EnumSet<TraversalOrder>) -> Vec<Traversal<R>> {
		orders.iter().map(|order| self.create_traversal(order)).collect()
	}
}

impl<R> Default for Collection<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> FromIterator<R> for Collection<R> {
	fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
		let mut collection = Collection::new();
		collection.extend(iter);
		collection
	}
}

impl<R> Extend<R> for Collection<R> {
	fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
		for record in iter {
			self.add(record);
		}
	}
}

impl<R> Debug for Collection<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Collection")
			.field("length", &self.records.len())
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}
