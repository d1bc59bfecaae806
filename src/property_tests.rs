//! Property-based tests for the container's state-transition algebra

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Id, Remote, RemoteMap, Row};

    type Map = RemoteMap<String, String, u32>;
    type MapId = Id<String, String, u32>;
    type State = Remote<String, u32>;

    // Small key alphabet so collisions and overwrites actually happen
    fn key_strategy() -> impl Strategy<Value = String> {
        "[a-e]{1,2}".prop_map(|s| s)
    }

    fn state_strategy() -> impl Strategy<Value = State> {
        prop_oneof![
            Just(Remote::NotAsked),
            Just(Remote::Loading),
            any::<u32>().prop_map(Remote::Success),
            "[A-Z]{1,6}".prop_map(Remote::Failure),
        ]
    }

    fn row_strategy() -> impl Strategy<Value = Row<String, String, u32>> {
        (key_strategy(), state_strategy()).prop_map(|(key, state)| Row::new(Id::new(key), state))
    }

    fn map_strategy() -> impl Strategy<Value = Map> {
        prop::collection::vec(row_strategy(), 0..24).prop_map(|rows| rows.into_iter().collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Property: after remove, the id reads NotAsked
        #[test]
        fn prop_remove_then_get_not_asked(map in map_strategy(), key in key_strategy()) {
            let id: MapId = Id::new(key);
            let removed = map.remove(&id);
            prop_assert_eq!(removed.get(&id), Remote::NotAsked);
            prop_assert!(!removed.contains(&id));
        }

        /// Property: succeed followed by get returns exactly the item
        #[test]
        fn prop_succeed_then_get(map in map_strategy(), key in key_strategy(), item in any::<u32>()) {
            let id: MapId = Id::new(key);
            let map = map.succeed(id.clone(), item);
            prop_assert_eq!(map.get(&id), Remote::Success(item));
        }

        /// Property: inserting NotAsked reads NotAsked, present or not
        #[test]
        fn prop_insert_not_asked_reads_not_asked(map in map_strategy(), key in key_strategy()) {
            let id: MapId = Id::new(key);
            let map = map.insert(Row::new(id.clone(), Remote::NotAsked));
            prop_assert_eq!(map.get(&id), Remote::NotAsked);
        }

        /// Property: insert is idempotent
        #[test]
        fn prop_insert_idempotent(map in map_strategy(), row in row_strategy()) {
            let once = map.insert(row.clone());
            let twice = once.clone().insert(row);
            prop_assert_eq!(once, twice);
        }

        /// Property: updating with the identity function changes nothing
        #[test]
        fn prop_update_identity_is_noop(map in map_strategy(), key in key_strategy()) {
            let id: MapId = Id::new(key);
            let updated = map.clone().update(id, |state| state);
            prop_assert_eq!(updated, map);
        }

        /// Property: get_many is an element-wise map over the input ids
        #[test]
        fn prop_get_many_preserves_order_and_length(
            map in map_strategy(),
            keys in prop::collection::vec(key_strategy(), 0..16),
        ) {
            let ids: Vec<MapId> = keys.iter().cloned().map(Id::new).collect();
            let rows = map.get_many(ids.clone());

            prop_assert_eq!(rows.len(), ids.len());
            for (row, id) in rows.iter().zip(ids.iter()) {
                prop_assert_eq!(&row.id, id);
                prop_assert_eq!(&row.state, &map.get(id));
            }
        }

        /// Property: map preserves the key set and non-loaded entries
        #[test]
        fn prop_map_preserves_key_set(map in map_strategy()) {
            let keys: Vec<String> = map.keys().cloned().collect();
            let mapped = map.clone().map(|x| u64::from(x) + 1);

            let mapped_keys: Vec<String> = mapped.keys().cloned().collect();
            prop_assert_eq!(mapped_keys, keys.clone());

            for key in keys {
                let before = map.get(&Id::new(key.clone()));
                let after = mapped.get(&Id::new(key));
                match before {
                    Remote::Success(item) => {
                        prop_assert_eq!(after, Remote::Success(u64::from(item) + 1))
                    }
                    Remote::Loading => prop_assert!(after.is_loading()),
                    Remote::Failure(error) => prop_assert_eq!(after, Remote::Failure(error)),
                    Remote::NotAsked => prop_assert!(after.is_not_asked()),
                }
            }
        }

        /// Property: map_item is a no-op unless the id holds a loaded value
        #[test]
        fn prop_map_item_noop_when_not_loaded(map in map_strategy(), key in key_strategy()) {
            let id: MapId = Id::new(key);
            if !map.get(&id).is_success() {
                let mapped = map.clone().map_item(&id, |x| x.wrapping_add(1));
                prop_assert_eq!(mapped, map);
            }
        }

        /// Property: bulk succeed resolves duplicate ids as last write wins
        #[test]
        fn prop_succeed_many_last_write_wins(
            pairs in prop::collection::vec((key_strategy(), any::<u32>()), 0..16),
        ) {
            let map = Map::new().succeed_many(
                pairs.iter().map(|(key, item)| (Id::new(key.clone()), *item)),
            );

            let mut last: std::collections::BTreeMap<String, u32> = Default::default();
            for (key, item) in &pairs {
                last.insert(key.clone(), *item);
            }

            prop_assert_eq!(map.len(), last.len());
            for (key, item) in last {
                prop_assert_eq!(map.get(&Id::new(key)), Remote::Success(item));
            }
        }

        /// Property: serialization round-trips the whole container
        #[test]
        fn prop_serde_round_trip(map in map_strategy()) {
            let json = serde_json::to_string(&map).unwrap();
            let back: Map = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, map);
        }
    }
}
