//! Separate-chaining hash table
//!
//! - `ChainedHashTable`: integer multiset with per-bucket `Vec` chains and
//!   load-factor driven doubling
//! - `TableKey`: Euclidean bucket placement for every primitive integer type

mod bucket;
mod chained;
mod key;

pub use chained::{ChainedHashTable, Iter, TableStats};
pub use key::TableKey;
