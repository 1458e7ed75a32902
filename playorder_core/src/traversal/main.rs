use crate::{
	config::TieBreak,
	error::OutOfRange,
	traversal::{TraversalOrder, permutation::sort_positions},
	types::{Collection, Orderable},
};
use anyhow::Result;
use std::{fmt::Debug, sync::Arc};

/// A snapshot cursor over a [`Collection`], sequenced by one [`TraversalOrder`].
///
/// The permutation is computed once, by [`Collection::create_traversal`], and never recomputed.
/// Records added to the collection afterwards are not visited. The traversal holds shared handles
/// to the records it visits, so it does not borrow the collection and may outlive it.
///
/// The walk contract is the same for every order:
///
/// ```rust
/// use playorder_core::{Collection, Song};
///
/// let playlist: Collection<Song> = [Song::new("Imagined", "c", 183, 1200), Song::new("Hey Jude", "d", 431, 900)]
///     .into_iter()
///     .collect();
///
/// let mut traversal = playlist.by_popularity();
/// traversal.reset();
/// while traversal.has_more() {
///     println!("{}", traversal.current().unwrap());
///     traversal.advance();
/// }
/// assert!(traversal.current().is_err());
/// ```
pub struct Traversal<R> {
	order: TraversalOrder,
	permutation: Vec<usize>,
	records: Vec<Arc<R>>,
	cursor: usize,
}

impl<R: Orderable> Traversal<R> {
	pub(crate) fn new(collection: &Collection<R>, order: TraversalOrder, tie_break: TieBreak) -> Self {
		let permutation = sort_positions(collection, order, tie_break);
		let records: Vec<Arc<R>> = permutation
			.iter()
			.filter_map(|position| collection.handle(*position).cloned())
			.collect();
		debug_assert_eq!(records.len(), permutation.len());

		Traversal {
			order,
			permutation,
			records,
			cursor: 0,
		}
	}
}

impl<R> Traversal<R> {
	/// Moves the cursor back to the first entry of the frozen permutation.
	pub fn reset(&mut self) {
		log::trace!("reset {} traversal of {} records", self.order, self.records.len());
		self.cursor = 0;
	}

	/// Returns `true` while the cursor points at an entry.
	pub fn has_more(&self) -> bool {
		self.cursor < self.records.len()
	}

	/// Moves the cursor one entry forward. Does nothing once the traversal is exhausted.
	pub fn advance(&mut self) {
		if self.has_more() {
			self.cursor += 1;
		}
	}

	/// Returns the record under the cursor.
	///
	/// # Errors
	/// Fails with [`OutOfRange`] if the traversal is exhausted, i.e. `has_more()` is `false`.
	pub fn current(&self) -> Result<&R> {
		self
			.records
			.get(self.cursor)
			.map(Arc::as_ref)
			.ok_or_else(|| OutOfRange::new(self.cursor, self.records.len()).into())
	}

	pub fn order(&self) -> TraversalOrder {
		self.order
	}

	/// Number of records in the snapshot.
	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Current cursor position; equals `len()` once exhausted.
	pub fn position(&self) -> usize {
		self.cursor
	}

	/// Insertion positions of the records, in traversal order.
	pub fn permutation(&self) -> &[usize] {
		&self.permutation
	}

	/// Iterates the frozen order from the start, without moving the cursor.
	pub fn iter(&self) -> impl ExactSizeIterator<Item = &R> {
		self.records.iter().map(Arc::as_ref)
	}
}

impl<R> Debug for Traversal<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Traversal")
			.field("order", &self.order)
			.field("length", &self.records.len())
			.field("cursor", &self.cursor)
			.finish_non_exhaustive()
	}
}
