mod main;
mod order;
mod permutation;

pub use main::*;
pub use order::*;
