//! ChainedHashTable - separate-chaining multiset of integer keys
//!
//! Buckets are owned `Vec` chains indexed by `key mod capacity` (Euclidean
//! remainder). Before every insert the load factor is checked; once it is above
//! the configured threshold (0.5 by default) the bucket array is doubled and every
//! key is placed again, then the new key goes in.
//!
//! Duplicate keys are kept: inserting `1` three times stores three entries, and
//! each [`erase`](ChainedHashTable::erase) removes one of them.
//!
//! # Examples
//!
//! ```rust
//! use chaintable::hash_table::ChainedHashTable;
//!
//! let mut table = ChainedHashTable::new(10);
//! for key in [1, 15, 1, 2, 3, 1, 12] {
//!     table.insert(key).unwrap();
//! }
//! assert_eq!(table.size(), 7);
//! assert!(table.contains(&1));
//! assert!(table.erase(&1));
//! assert_eq!(table.count(&1), 2);
//! ```

use super::bucket::Bucket;
use super::key::TableKey;
use crate::config::table::MIN_CAPACITY;
use crate::config::{Config, TableConfig};
use crate::error::{ChainTableError, Result};
use std::fmt;
use std::iter::FusedIterator;

/// Snapshot of table layout for diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    /// Number of stored entries
    pub size: usize,
    /// Number of buckets
    pub capacity: usize,
    /// size / capacity
    pub load_factor: f64,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Resizes performed since construction
    pub resize_count: usize,
}

/// Separate-chaining hash table over integer keys
///
/// Generic over the key type `K`, which defaults to `i64`.
#[derive(Clone)]
pub struct ChainedHashTable<K: TableKey = i64> {
    /// Bucket array, length is the capacity
    buckets: Vec<Bucket<K>>,
    /// Number of stored entries across all buckets
    len: usize,
    /// Resizes performed so far
    resize_count: usize,
    config: TableConfig,
}

impl<K: TableKey> ChainedHashTable<K> {
    /// Create an empty table with `max(capacity_hint, MIN_CAPACITY)` buckets
    pub fn new(capacity_hint: usize) -> Self {
        let config = TableConfig {
            initial_capacity: capacity_hint,
            ..TableConfig::default()
        };
        Self::from_valid_config(config)
    }

    /// Create an empty table from a signed capacity hint
    ///
    /// Negative and zero hints are clamped to `MIN_CAPACITY` like any other small hint.
    pub fn with_signed_hint(capacity_hint: i64) -> Self {
        let hint = if capacity_hint <= 0 {
            0
        } else {
            usize::try_from(capacity_hint).unwrap_or(usize::MAX)
        };
        Self::new(hint)
    }

    /// Create an empty table with a custom configuration
    pub fn with_config(config: TableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TableConfig) -> Self {
        let requested = config.effective_initial_capacity();
        let buckets = Self::try_allocate_buckets(requested).unwrap_or_else(|| {
            log::warn!(
                "chained table could not allocate {} buckets, starting with {}",
                requested,
                config.min_capacity
            );
            Self::empty_buckets(config.min_capacity)
        });
        log::trace!(
            "creating chained table: capacity={}, max_load_factor={}",
            buckets.len(),
            config.max_load_factor
        );
        Self {
            buckets,
            len: 0,
            resize_count: 0,
            config,
        }
    }

    /// Insert a key, doubling the table first if the load factor is above the threshold
    ///
    /// Duplicates are stored as separate entries. Fails with
    /// [`ChainTableError::CapacityExceeded`] when the required resize would pass
    /// the capacity ceiling; the table is unchanged in that case.
    pub fn insert(&mut self, key: K) -> Result<()> {
        if self.load_factor() > self.config.max_load_factor {
            self.resize()?;
        }

        Self::place(&mut self.buckets, key);
        self.len += 1;
        Ok(())
    }

    /// Check if at least one entry equals `key`
    pub fn contains(&self, key: &K) -> bool {
        self.bucket_for(key).contains(key)
    }

    /// Number of entries equal to `key`
    pub fn count(&self, key: &K) -> usize {
        self.bucket_for(key).count(key)
    }

    /// Remove one entry equal to `key`, returns whether one was removed
    ///
    /// Capacity is never reduced.
    pub fn erase(&mut self, key: &K) -> bool {
        let idx = key.bucket_index(self.buckets.len());
        if self.buckets[idx].remove_first(key) {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Number of stored entries (not buckets)
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of stored entries, same as [`size`](Self::size)
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get bucket count
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Get current load factor
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Load factor above which the next insert doubles the table
    pub fn max_load_factor(&self) -> f64 {
        self.config.max_load_factor
    }

    /// Configuration the table was built with
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Remove every entry, keeping the current capacity
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterate over every key in bucket order, then chain order
    ///
    /// Each call starts a fresh pass. Order changes after a resize.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            buckets: self.buckets.iter(),
            chain: <&[K]>::default().iter(),
            remaining: self.len,
        }
    }

    /// Collect layout statistics (walks every bucket)
    pub fn stats(&self) -> TableStats {
        let (occupied_buckets, longest_chain) = self
            .buckets
            .iter()
            .filter(|b| !b.is_empty())
            .fold((0, 0), |(occupied, longest), b| (occupied + 1, longest.max(b.len())));

        TableStats {
            size: self.len,
            capacity: self.buckets.len(),
            load_factor: self.load_factor(),
            occupied_buckets,
            longest_chain,
            resize_count: self.resize_count,
        }
    }

    #[inline]
    fn bucket_for(&self, key: &K) -> &Bucket<K> {
        &self.buckets[key.bucket_index(self.buckets.len())]
    }

    // Internal: append to the chain of `key` without any load check
    #[inline]
    fn place(buckets: &mut [Bucket<K>], key: K) {
        let idx = key.bucket_index(buckets.len());
        buckets[idx].push_back(key);
    }

    // Internal: double the bucket array and place every key again.
    // The new array is fully built before it replaces the old one.
    fn resize(&mut self) -> Result<()> {
        let old_capacity = self.buckets.len();
        let max = self.config.max_capacity;

        let new_capacity = match old_capacity.checked_mul(2) {
            Some(doubled) if doubled <= max => doubled,
            doubled => {
                let requested = doubled.unwrap_or(usize::MAX);
                log::warn!(
                    "chained table resize refused: requested {} buckets, maximum is {}",
                    requested,
                    max
                );
                return Err(ChainTableError::capacity_exceeded(requested, max));
            }
        };

        let mut new_buckets = match Self::try_allocate_buckets(new_capacity) {
            Some(buckets) => buckets,
            None => {
                log::warn!(
                    "chained table resize refused: could not allocate {} buckets",
                    new_capacity
                );
                return Err(ChainTableError::capacity_exceeded(new_capacity, old_capacity));
            }
        };
        for bucket in &self.buckets {
            for &key in bucket.as_slice() {
                Self::place(&mut new_buckets, key);
            }
        }

        self.buckets = new_buckets;
        self.resize_count += 1;

        log::debug!(
            "chained table resized: {} -> {} buckets, {} entries",
            old_capacity,
            new_capacity,
            self.len
        );
        Ok(())
    }

    /// Bucket array of `capacity` empty chains, or `None` if it cannot be allocated
    fn try_allocate_buckets(capacity: usize) -> Option<Vec<Bucket<K>>> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(capacity).ok()?;
        buckets.resize_with(capacity, Bucket::new);
        Some(buckets)
    }

    fn empty_buckets(capacity: usize) -> Vec<Bucket<K>> {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Bucket::new);
        buckets
    }
}

impl<K: TableKey> Default for ChainedHashTable<K> {
    fn default() -> Self {
        Self::new(MIN_CAPACITY)
    }
}

impl<K: TableKey> fmt::Debug for ChainedHashTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// One key per line, in iteration order
impl<K: TableKey + fmt::Display> fmt::Display for ChainedHashTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.iter() {
            writeln!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl<'a, K: TableKey> IntoIterator for &'a ChainedHashTable<K> {
    type Item = K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the keys of a [`ChainedHashTable`]
#[derive(Clone)]
pub struct Iter<'a, K> {
    buckets: std::slice::Iter<'a, Bucket<K>>,
    chain: std::slice::Iter<'a, K>,
    remaining: usize,
}

impl<'a, K: TableKey> Iterator for Iter<'a, K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&key) = self.chain.next() {
                self.remaining -= 1;
                return Some(key);
            }
            self.chain = self.buckets.next()?.as_slice().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: TableKey> ExactSizeIterator for Iter<'a, K> {}

impl<'a, K: TableKey> FusedIterator for Iter<'a, K> {}
