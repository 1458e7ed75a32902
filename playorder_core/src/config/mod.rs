pub use crate::config::tie_break::TieBreak;
use std::sync::Arc;
mod tie_break;

/// Settings applied by a [`Collection`](crate::Collection) when it builds traversals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalConfig {
	pub tie_break: TieBreak,
}

impl TraversalConfig {
	pub fn new(tie_break: TieBreak) -> Self {
		Self { tie_break }
	}

	pub fn arc(self) -> Arc<Self> {
		Arc::new(self)
	}
}
