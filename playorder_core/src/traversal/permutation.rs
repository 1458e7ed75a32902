use crate::{
	config::TieBreak,
	traversal::TraversalOrder,
	types::{Collection, Orderable},
};
use itertools::Itertools;

/// Sorts the insertion positions `0..collection.len()` by `order`.
///
/// Records are read through [`Collection::get`]; the collection itself is left untouched.
pub(crate) fn sort_positions<R: Orderable>(
	collection: &Collection<R>,
	order: TraversalOrder,
	tie_break: TieBreak,
) -> Vec<usize> {
	// pair every position with its record, sort the pairs, then strip the records
	let items = (0..collection.len()).filter_map(|position| collection.get(position).map(|record| (position, record)));

	let sorted = match tie_break {
		TieBreak::InsertionOrder => items.sorted_by(|a, b| order.compare(a.1, b.1)),
		TieBreak::Unspecified => items.sorted_unstable_by(|a, b| order.compare(a.1, b.1)),
	};

	sorted.map(|(position, _)| position).collect()
}
