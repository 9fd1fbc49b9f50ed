//! Owned collision chain
//!
//! A bucket keeps the keys that hashed to its index in append order. Removal
//! takes out the first match and shifts the tail down, so the chain stays
//! contiguous and in order.

use super::key::TableKey;

/// Collision chain for one bucket index
#[derive(Debug, Clone)]
pub(crate) struct Bucket<K> {
    entries: Vec<K>,
}

impl<K: TableKey> Bucket<K> {
    /// Create an empty bucket
    pub(crate) fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append a key at the chain tail
    #[inline]
    pub(crate) fn push_back(&mut self, key: K) {
        self.entries.push(key);
    }

    /// Check whether the chain holds `key`
    #[inline]
    pub(crate) fn contains(&self, key: &K) -> bool {
        self.entries.iter().any(|k| k == key)
    }

    /// Number of occurrences of `key` in the chain
    pub(crate) fn count(&self, key: &K) -> usize {
        self.entries.iter().filter(|k| *k == key).count()
    }

    /// Remove the first occurrence of `key`, returns whether one was found
    pub(crate) fn remove_first(&mut self, key: &K) -> bool {
        match self.entries.iter().position(|k| k == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Chain length
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the chain is empty
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in chain order
    #[inline]
    pub(crate) fn as_slice(&self) -> &[K] {
        &self.entries
    }

    /// Drop every key
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
