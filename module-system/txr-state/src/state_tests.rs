use super::*;
use crate::codec::PathKeyCodec;

fn create_state_map_and_storage(
    key: u32,
    value: u32,
) -> (StateMap<u32, u32>, MemoryStorage, WorkingSet<MemoryStorage>) {
    let storage = MemoryStorage::new();
    let mut working_set = WorkingSet::new(storage.clone());

    let state_map = StateMap::new(Prefix::new(vec![0]));
    state_map.set(&key, &value, &mut working_set);
    (state_map, storage, working_set)
}

fn commit(storage: &MemoryStorage, working_set: WorkingSet<MemoryStorage>) {
    storage.commit(&working_set.checkpoint().freeze());
}

#[test]
fn test_state_map_get() {
    let (state_map, _, mut working_set) = create_state_map_and_storage(1, 11);

    assert_eq!(state_map.get(&1, &mut working_set), Some(11));
    assert_eq!(state_map.get(&2, &mut working_set), None);
    assert!(state_map.get_or_err(&2, &mut working_set).is_err());
}

#[test]
fn test_state_map_with_remove() {
    let (state_map, storage, mut working_set) = create_state_map_and_storage(1, 11);

    assert_eq!(state_map.remove(&1, &mut working_set), Some(11));
    assert!(state_map.get(&1, &mut working_set).is_none());

    commit(&storage, working_set);
    let mut working_set = WorkingSet::new(storage);
    assert!(state_map.get(&1, &mut working_set).is_none());
}

#[test]
fn test_state_map_with_delete() {
    let (state_map, _, mut working_set) = create_state_map_and_storage(1, 11);

    state_map.delete(&1, &mut working_set);
    assert!(state_map.get(&1, &mut working_set).is_none());
    assert!(state_map.remove_or_err(&1, &mut working_set).is_err());
}

#[test]
fn test_state_map_survives_commit() {
    let (state_map, storage, working_set) = create_state_map_and_storage(1, 11);

    commit(&storage, working_set);

    let mut working_set = WorkingSet::new(storage);
    assert_eq!(state_map.get(&1, &mut working_set), Some(11));
}

#[test]
fn test_state_value() {
    let storage = MemoryStorage::new();
    let mut working_set = WorkingSet::new(storage.clone());

    let state_value: StateValue<u64> = StateValue::new(Prefix::new(b"counter".to_vec()));
    assert!(state_value.get(&mut working_set).is_none());
    assert!(state_value.get_or_err(&mut working_set).is_err());

    state_value.set(&7, &mut working_set);
    assert_eq!(state_value.get(&mut working_set), Some(7));

    commit(&storage, working_set);
    let mut working_set = WorkingSet::new(storage.clone());
    assert_eq!(state_value.get_or_err(&mut working_set).unwrap(), 7);

    assert_eq!(state_value.remove(&mut working_set), Some(7));
    assert!(state_value.get(&mut working_set).is_none());

    commit(&storage, working_set);
    assert!(storage.is_empty());
}

#[test]
fn test_revert_discards_writes() {
    let storage = MemoryStorage::new();
    let state_value: StateValue<u64> = StateValue::new(Prefix::new(b"counter".to_vec()));

    let mut working_set = WorkingSet::new(storage.clone());
    state_value.set(&1, &mut working_set);
    storage.commit(&working_set.checkpoint().freeze());

    let mut working_set = WorkingSet::new(storage.clone());
    state_value.set(&2, &mut working_set);
    assert_eq!(state_value.get(&mut working_set), Some(2));

    storage.commit(&working_set.revert().freeze());

    let mut working_set = WorkingSet::new(storage);
    assert_eq!(state_value.get(&mut working_set), Some(1));
}

#[test]
fn test_events() {
    let mut working_set: WorkingSet<MemoryStorage> = WorkingSet::new(MemoryStorage::new());

    working_set.add_event("key_1", "value_1");
    working_set.add_event("key_2", "value_2");

    assert_eq!(working_set.events().len(), 2);
    let events = working_set.take_events();
    assert_eq!(events[0], Event::new("key_1", "value_1"));
    assert_eq!(events[1], Event::new("key_2", "value_2"));
    assert!(working_set.events().is_empty());
}

#[derive(Debug, PartialEq, Eq, borsh::BorshSerialize, borsh::BorshDeserialize)]
struct Seg(u8);

impl StorageIndex for Seg {
    fn to_path(&self, tail: Vec<String>) -> Vec<String> {
        let mut path = Vec::with_capacity(1 + tail.len());
        path.push(hex::encode([self.0]));
        path.extend(tail);
        path
    }

    fn of_path(path: &[String]) -> Option<Self> {
        match path {
            [segment] => {
                let bytes = hex::decode(segment).ok()?;
                match bytes.as_slice() {
                    [byte] => Some(Seg(*byte)),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[test]
fn test_path_key_codec_layout() {
    use crate::codec::StateKeyCodec;

    let codec = PathKeyCodec;
    let encoded = codec.encode_key(&Seg(0xab));
    assert_eq!(encoded, b"ab".to_vec());
    assert_eq!(codec.try_decode_key(&encoded), Ok(Seg(0xab)));

    // The storage key of an indexed map entry is prefix || hex segment.
    let prefix = Prefix::new(b"rollups/".to_vec());
    let storage_key = StorageKey::new(&prefix, &encoded);
    assert_eq!(storage_key.as_ref().as_slice(), b"rollups/ab");
}

#[test]
fn test_path_key_codec_map() {
    let storage = MemoryStorage::new();
    let mut working_set = WorkingSet::new(storage.clone());

    let map: StateMap<Seg, u32, PathKeyCodec> =
        StateMap::with_codec(Prefix::new(b"segments/".to_vec()), PathKeyCodec);
    map.set(&Seg(1), &100, &mut working_set);

    commit(&storage, working_set);
    let mut working_set = WorkingSet::new(storage);
    assert_eq!(map.get(&Seg(1), &mut working_set), Some(100));
}
