//! Contains the record type, its key capabilities and the collection that stores records.

mod collection;
pub use collection::*;

mod keys;
pub use keys::*;

mod song;
pub use song::*;
