/*!
 * Property Tests
 * Guards behave like their unsynchronized payload under arbitrary operations
 */

use proptest::prelude::*;
use rw_guard::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum SliceOp {
    Append(Vec<i32>),
    Unshift(i32),
    Remove(usize),
    Pop,
    Clear,
}

fn slice_op() -> impl Strategy<Value = SliceOp> {
    prop_oneof![
        prop::collection::vec(any::<i32>(), 0..4).prop_map(SliceOp::Append),
        any::<i32>().prop_map(SliceOp::Unshift),
        (0usize..8).prop_map(SliceOp::Remove),
        Just(SliceOp::Pop),
        Just(SliceOp::Clear),
    ]
}

#[derive(Debug, Clone)]
enum MapOp {
    Store(u8, i32),
    Delete(u8),
    LoadAndDelete(u8),
    Clear,
}

fn map_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        (any::<u8>(), any::<i32>()).prop_map(|(k, v)| MapOp::Store(k % 16, v)),
        any::<u8>().prop_map(|k| MapOp::Delete(k % 16)),
        any::<u8>().prop_map(|k| MapOp::LoadAndDelete(k % 16)),
        Just(MapOp::Clear),
    ]
}

proptest! {
    #[test]
    fn slice_guard_matches_vec_model(ops in prop::collection::vec(slice_op(), 0..64)) {
        let guard = SliceGuard::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                SliceOp::Append(items) => {
                    guard.append(items.clone());
                    model.extend(items);
                }
                SliceOp::Unshift(item) => {
                    guard.unshift(item);
                    model.insert(0, item);
                }
                SliceOp::Remove(index) => {
                    if index < model.len() {
                        prop_assert_eq!(guard.remove(index), model.remove(index));
                    } else {
                        prop_assert!(guard.try_remove(index).is_err());
                    }
                }
                SliceOp::Pop => {
                    prop_assert_eq!(guard.pop(), model.pop());
                }
                SliceOp::Clear => {
                    guard.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(guard.len(), model.len());
        }

        prop_assert_eq!(guard.to_vec(), model);
    }

    #[test]
    fn map_guard_matches_hash_map_model(ops in prop::collection::vec(map_op(), 0..64)) {
        let guard: MapGuard<u8, i32> = MapGuard::new();
        let mut model: HashMap<u8, i32> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Store(k, v) => {
                    guard.store(k, v);
                    model.insert(k, v);
                }
                MapOp::Delete(k) => {
                    guard.delete(&k);
                    model.remove(&k);
                }
                MapOp::LoadAndDelete(k) => {
                    prop_assert_eq!(guard.load_and_delete(&k), model.remove(&k));
                }
                MapOp::Clear => {
                    guard.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(guard.len(), model.len());
        }

        for k in 0u8..16 {
            prop_assert_eq!(guard.load(&k), model.get(&k).copied());
        }
    }
}
