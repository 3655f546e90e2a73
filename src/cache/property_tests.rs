//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against its capacity and LRU contract.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_CAPACITY: usize = 100;

// == Strategies ==
/// Generates cache keys from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-f]{1,2}".prop_map(|s| s)
}

/// Generates values, including embedded spaces
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Put { key: String, value: String },
    Get { key: String },
    Invalidate { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Put { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
    ]
}

/// Reference LRU: most recently used key at the back of the vector.
#[derive(Default)]
struct ModelLru {
    order: Vec<(String, String)>,
}

impl ModelLru {
    fn touch(&mut self, key: &str) -> Option<String> {
        let pos = self.order.iter().position(|(k, _)| k == key)?;
        let item = self.order.remove(pos);
        let value = item.1.clone();
        self.order.push(item);
        Some(value)
    }

    fn put(&mut self, key: String, value: String, capacity: usize) {
        if let Some(pos) = self.order.iter().position(|(k, _)| *k == key) {
            self.order.remove(pos);
        } else if self.order.len() >= capacity {
            self.order.remove(0);
        }
        self.order.push((key, value));
    }

    fn invalidate(&mut self, key: &str) {
        self.order.retain(|(k, _)| k != key);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Put followed by Get returns exactly what was stored.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_CAPACITY).unwrap();

        store.put(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // The entry count never exceeds capacity after any operation.
    #[test]
    fn prop_capacity_enforcement(
        capacity in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..200)
    ) {
        let mut store = CacheStore::new(capacity).unwrap();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => store.put(key, value),
                CacheOp::Get { key } => { store.get(&key); }
                CacheOp::Invalidate { key } => store.invalidate(&key),
            }
            prop_assert!(
                store.len() <= capacity,
                "Cache size {} exceeds capacity {}",
                store.len(),
                capacity
            );
        }
    }

    // Invalidating twice is observably the same as invalidating once.
    #[test]
    fn prop_invalidate_idempotent(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 0..20),
        target in key_strategy()
    ) {
        let mut once = CacheStore::new(TEST_CAPACITY).unwrap();
        let mut twice = CacheStore::new(TEST_CAPACITY).unwrap();
        for (key, value) in &entries {
            once.put(key.clone(), value.clone());
            twice.put(key.clone(), value.clone());
        }

        once.invalidate(&target);
        twice.invalidate(&target);
        twice.invalidate(&target);

        prop_assert!(!once.contains(&target));
        prop_assert!(!twice.contains(&target));
        prop_assert_eq!(once.len(), twice.len());
    }

    // Filling to capacity and inserting a fresh key evicts exactly the key
    // that was accessed least recently.
    #[test]
    fn prop_lru_eviction_order(
        keys in prop::collection::hash_set("[a-z]{1,6}", 2..10),
        access_index in 0usize..100,
        new_key in "[0-9]{1,4}"
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len();
        let mut store = CacheStore::new(capacity).unwrap();

        for key in &keys {
            store.put(key.clone(), format!("value_{}", key));
        }

        // Touch one key; the first-inserted remaining key becomes the victim
        let accessed = keys[access_index % capacity].clone();
        store.get(&accessed);
        let expected_evicted = keys
            .iter()
            .find(|k| **k != accessed)
            .cloned()
            .unwrap();

        store.put(new_key.clone(), "new".to_string());

        prop_assert_eq!(store.len(), capacity);
        prop_assert!(!store.contains(&expected_evicted));
        prop_assert!(store.contains(&accessed));
        prop_assert!(store.contains(&new_key));
        prop_assert_eq!(store.stats().evictions, 1);
    }

    // The store agrees with a straightforward reference LRU on every GET.
    #[test]
    fn prop_matches_reference_lru(
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..150)
    ) {
        let mut store = CacheStore::new(capacity).unwrap();
        let mut model = ModelLru::default();

        for op in ops {
            match op {
                CacheOp::Put { key, value } => {
                    model.put(key.clone(), value.clone(), capacity);
                    store.put(key, value);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key), model.touch(&key));
                }
                CacheOp::Invalidate { key } => {
                    model.invalidate(&key);
                    store.invalidate(&key);
                }
            }
        }

        let live: HashSet<&String> = model.order.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(store.len(), live.len());
        for key in live {
            prop_assert!(store.contains(key));
        }
    }

    // Hits and misses match what GET actually returned.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(TEST_CAPACITY).unwrap();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Put { key, value } => store.put(key, value),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Invalidate { key } => store.invalidate(&key),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }
}
