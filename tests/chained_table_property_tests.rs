//! Property-based testing for ChainedHashTable
//!
//! Random operation sequences are replayed against the table and against a
//! `HashMap<i64, usize>` multiset model; both must agree after every step.

use chaintable::ChainedHashTable;
use proptest::prelude::*;
use std::collections::HashMap;

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

#[derive(Debug, Clone)]
enum TableOp {
    Insert(i64),
    Erase(i64),
    Contains(i64),
}

/// Narrow key range so sequences hit duplicates and shared buckets often
fn table_ops_strategy() -> impl Strategy<Value = Vec<TableOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (-40i64..40).prop_map(TableOp::Insert),
            2 => (-40i64..40).prop_map(TableOp::Erase),
            1 => (-40i64..40).prop_map(TableOp::Contains),
        ],
        0..500,
    )
}

fn model_size(model: &HashMap<i64, usize>) -> usize {
    model.values().sum()
}

// =============================================================================
// CHAINED TABLE PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_matches_multiset_model(ops in table_ops_strategy(), hint in 0usize..64) {
        let mut table: ChainedHashTable = ChainedHashTable::new(hint);
        let mut model: HashMap<i64, usize> = HashMap::new();

        for op in ops {
            match op {
                TableOp::Insert(key) => {
                    table.insert(key).unwrap();
                    *model.entry(key).or_insert(0) += 1;
                }
                TableOp::Erase(key) => {
                    let expected = match model.get_mut(&key) {
                        Some(count) if *count > 0 => {
                            *count -= 1;
                            true
                        }
                        _ => false,
                    };
                    prop_assert_eq!(table.erase(&key), expected);
                }
                TableOp::Contains(key) => {
                    let expected = model.get(&key).map_or(false, |&c| c > 0);
                    prop_assert_eq!(table.contains(&key), expected);
                }
            }
            prop_assert_eq!(table.size(), model_size(&model));
        }

        for key in -40i64..40 {
            let expected = model.get(&key).copied().unwrap_or(0);
            prop_assert_eq!(table.count(&key), expected);
            prop_assert_eq!(table.contains(&key), expected > 0);
        }
    }

    #[test]
    fn prop_size_matches_iteration(ops in table_ops_strategy()) {
        let mut table: ChainedHashTable = ChainedHashTable::new(10);
        for op in ops {
            match op {
                TableOp::Insert(key) => table.insert(key).unwrap(),
                TableOp::Erase(key) => {
                    table.erase(&key);
                }
                TableOp::Contains(_) => {}
            }
            prop_assert_eq!(table.iter().count(), table.size());
            prop_assert_eq!(table.iter().len(), table.size());
        }
    }

    #[test]
    fn prop_load_factor_bounded_after_insert(
        keys in prop::collection::vec(any::<i64>(), 1..2000)
    ) {
        let mut table: ChainedHashTable = ChainedHashTable::new(10);
        for key in keys {
            table.insert(key).unwrap();
            let capacity = table.capacity() as f64;
            prop_assert!(table.size() as f64 / capacity <= 0.5 + 1.0 / capacity);
        }
    }

    #[test]
    fn prop_resize_preserves_contents(
        keys in prop::collection::vec(any::<i64>(), 0..300)
    ) {
        let mut table: ChainedHashTable = ChainedHashTable::new(10);
        let mut resizes_seen = 0;

        for &key in &keys {
            let before: Vec<i64> = {
                let mut v: Vec<i64> = table.iter().collect();
                v.sort_unstable();
                v
            };
            let capacity_before = table.capacity();

            table.insert(key).unwrap();

            if table.capacity() != capacity_before {
                resizes_seen += 1;
                prop_assert_eq!(table.capacity(), capacity_before * 2);
                for existing in &before {
                    prop_assert!(table.contains(existing));
                }
            }

            let mut after: Vec<i64> = table.iter().collect();
            after.sort_unstable();
            let mut expected = before;
            expected.push(key);
            expected.sort_unstable();
            prop_assert_eq!(after, expected);
        }

        prop_assert_eq!(table.stats().resize_count, resizes_seen);
    }

    #[test]
    fn prop_iteration_follows_bucket_order(
        keys in prop::collection::vec(-1000i64..1000, 0..200)
    ) {
        let mut table: ChainedHashTable = ChainedHashTable::new(10);
        for &key in &keys {
            table.insert(key).unwrap();
        }
        let capacity = table.capacity() as i64;
        let buckets: Vec<i64> = table.iter().map(|k| k.rem_euclid(capacity)).collect();
        prop_assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    }
}
