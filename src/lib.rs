//! # chaintable: Separate-Chaining Integer Hash Table
//!
//! A dynamically-resizing hash table for integer keys that resolves collisions
//! with per-bucket chains and doubles its bucket array whenever the load factor
//! climbs above a threshold.
//!
//! ## Key Features
//!
//! - **Multiset semantics**: duplicate keys are stored and counted individually
//! - **Load-factor growth**: the table doubles before an insert once `size / capacity > 0.5`
//! - **Canonical negative keys**: bucket placement uses the Euclidean remainder
//! - **Capacity ceiling**: optional maximum bucket count with a recoverable error
//! - **Configuration**: builder, presets, environment variables and JSON files
//!
//! ## Quick Start
//!
//! ```rust
//! use chaintable::ChainedHashTable;
//!
//! let mut table: ChainedHashTable = ChainedHashTable::new(10);
//! for key in [1, 15, 1, 2, 3, 1, 12] {
//!     table.insert(key).unwrap();
//! }
//!
//! assert_eq!(table.size(), 7);
//! assert!(table.contains(&15));
//! assert!(!table.contains(&99));
//!
//! // Each erase removes one occurrence
//! assert!(table.erase(&1));
//! assert_eq!(table.count(&1), 2);
//!
//! for key in &table {
//!     println!("{}", key);
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod hash_table;

// Re-export core types
pub use config::{Config, TableConfig};
pub use error::{ChainTableError, Result};
pub use hash_table::{ChainedHashTable, TableKey, TableStats};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently only logs the version)
pub fn init() {
    log::debug!("Initializing chaintable v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        let mut table: ChainedHashTable = ChainedHashTable::default();
        table.insert(42).unwrap();
        assert!(table.contains(&42));
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.len() > 0);
        assert!(VERSION.contains('.'));
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }
}
