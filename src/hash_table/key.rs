//! Bucket placement for integer keys
//!
//! Every key maps to `key mod capacity` using the Euclidean (non-negative)
//! remainder, so `-1` in a table of 10 buckets lands in bucket 9. Insert, lookup,
//! erase and resize all go through [`TableKey::bucket_index`].

use std::fmt::Debug;

/// Integer key trait for chained tables
///
/// Implemented for every primitive integer type.
pub trait TableKey: Copy + Eq + Debug {
    /// Bucket index of this key in a table with `capacity` buckets
    ///
    /// Always in `0..capacity`. `capacity` must be non-zero.
    fn bucket_index(self, capacity: usize) -> usize;
}

macro_rules! impl_table_key_widened {
    ($($t:ty),*) => {
        $(
            impl TableKey for $t {
                #[inline]
                fn bucket_index(self, capacity: usize) -> usize {
                    debug_assert!(capacity > 0);
                    // usize and every type listed here fit in i128
                    (self as i128).rem_euclid(capacity as i128) as usize
                }
            }
        )*
    };
}

impl_table_key_widened!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TableKey for i128 {
    #[inline]
    fn bucket_index(self, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        self.rem_euclid(capacity as i128) as usize
    }
}

impl TableKey for u128 {
    #[inline]
    fn bucket_index(self, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        (self % capacity as u128) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_keys() {
        assert_eq!(1i64.bucket_index(10), 1);
        assert_eq!(15i64.bucket_index(10), 5);
        assert_eq!(12i64.bucket_index(10), 2);
        assert_eq!(20i64.bucket_index(10), 0);
    }

    #[test]
    fn test_negative_keys_use_euclidean_remainder() {
        assert_eq!((-1i64).bucket_index(10), 9);
        assert_eq!((-10i64).bucket_index(10), 0);
        assert_eq!((-11i32).bucket_index(10), 9);
        assert_eq!(i64::MIN.bucket_index(10), 2);
    }

    #[test]
    fn test_capacity_larger_than_key_range() {
        assert_eq!(200u8.bucket_index(1000), 200);
        assert_eq!((-1i8).bucket_index(1000), 999);
    }

    #[test]
    fn test_wide_keys() {
        assert_eq!(u128::MAX.bucket_index(10), 5);
        assert_eq!((-1i128).bucket_index(7), 6);
        assert_eq!(u64::MAX.bucket_index(usize::MAX), (u64::MAX % usize::MAX as u64) as usize);
    }

    #[test]
    fn test_always_in_range() {
        for capacity in [1usize, 2, 3, 10, 17, 64] {
            for key in -100i64..100 {
                assert!(key.bucket_index(capacity) < capacity);
            }
        }
    }
}
