//! Long seeded workloads checked against an insertion-ordered model.

use corral_core::{ByHashable, CollectionError};
use corral_table::{HashMap, HashTable, TableConfig};
use corral_test_utils::{churn_script, ChurnOp, CollidingKey, ModelTable};

fn replay(seed: u64, config: TableConfig) {
    let mut table = HashTable::with_config(config).unwrap();
    let mut model = ModelTable::new();
    for op in churn_script(seed, 5_000, 97) {
        match op {
            ChurnOp::Put { key, value } => {
                assert_eq!(table.put(key, value), model.put(key, value));
            }
            ChurnOp::Remove { key } => {
                assert_eq!(table.take(&key), model.remove(&key));
            }
            ChurnOp::Get { key } => {
                assert_eq!(table.try_get(&key), model.get(&key));
            }
        }
        assert_eq!(table.len(), model.len());
    }
    let got: Vec<_> = table.iter().collect();
    let expected: Vec<_> = model.pairs().collect();
    assert_eq!(got, expected);
    for position in [0, model.len() / 2, model.len().saturating_sub(1)] {
        if let Some((key, value)) = model.get_index(position) {
            assert_eq!(table.skip(position), Ok((key, value)));
        }
    }
}

#[test]
fn default_config_matches_model() {
    for seed in 0..4 {
        replay(seed, TableConfig::new());
    }
}

#[test]
fn eager_compaction_matches_model() {
    let config = TableConfig {
        initial_buckets: 1,
        load_factor: 1.0,
        compaction_ratio: 0.0,
    };
    replay(42, config);
}

#[test]
fn lazy_compaction_matches_model() {
    let config = TableConfig {
        compaction_ratio: 8.0,
        ..TableConfig::new()
    };
    replay(7, config);
}

#[test]
fn single_bucket_map_still_resolves_every_key() {
    let mut map = HashMap::with_contract(ByHashable);
    let mut model = ModelTable::new();
    for op in churn_script(99, 1_000, 40) {
        match op {
            ChurnOp::Put { key, value } => {
                assert_eq!(map.put(CollidingKey(key), value), model.put(key, value));
            }
            ChurnOp::Remove { key } => {
                assert_eq!(map.take(&CollidingKey(key)), model.remove(&key));
            }
            ChurnOp::Get { key } => {
                let expected = model.get(&key).ok_or(CollectionError::NotFound);
                assert_eq!(map.get(&CollidingKey(key)), expected);
            }
        }
    }
    let keys: Vec<u32> = map.iter().map(|(key, _)| key.0).collect();
    let expected: Vec<u32> = model.keys().copied().collect();
    assert_eq!(keys, expected);
}
