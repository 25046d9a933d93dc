use std::collections::HashMap;

use crate::codec::{StateKeyCodec, StateValueCodec};
use crate::storage::{Storage, StorageKey, StorageValue};
use crate::Prefix;

/// An event recorded during the execution of a call, collected by the
/// [`WorkingSet`] alongside the read-write set.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    key: String,
    value: String,
}

impl Event {
    /// Creates a new event with the given key and value.
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// The event key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The event value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An ordered batch of writes produced by freezing a [`StateCheckpoint`],
/// ready to be handed to the concrete store. `None` marks a deletion.
pub type StateWrites = Vec<(StorageKey, Option<StorageValue>)>;

/// A non-revertable set of changes accumulated on top of the backing store.
struct Delta<S: Storage> {
    inner: S,
    writes: HashMap<StorageKey, Option<StorageValue>>,
}

impl<S: Storage> Delta<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            writes: HashMap::new(),
        }
    }

    fn get(&self, key: &StorageKey) -> Option<StorageValue> {
        match self.writes.get(key) {
            Some(value) => value.clone(),
            None => self.inner.get(key),
        }
    }

    fn set(&mut self, key: StorageKey, value: Option<StorageValue>) {
        self.writes.insert(key, value);
    }

    fn freeze(&mut self) -> StateWrites {
        let mut writes: StateWrites = self.writes.drain().collect();
        writes.sort_by(|(left, _), (right, _)| left.cmp(right));
        writes
    }
}

/// A wrapper that adds additional writes on top of an underlying [`Delta`].
///
/// Operations that might fail run against this overlay, so a failed call can
/// be discarded without throwing away the rest of the working set.
struct RevertableDelta<S: Storage> {
    inner: Delta<S>,
    writes: HashMap<StorageKey, Option<StorageValue>>,
}

impl<S: Storage> RevertableDelta<S> {
    fn get(&self, key: &StorageKey) -> Option<StorageValue> {
        match self.writes.get(key) {
            Some(value) => value.clone(),
            None => self.inner.get(key),
        }
    }

    fn set(&mut self, key: StorageKey, value: Option<StorageValue>) {
        self.writes.insert(key, value);
    }

    fn commit(mut self) -> Delta<S> {
        for (key, value) in self.writes.drain() {
            self.inner.set(key, value);
        }
        self.inner
    }

    fn revert(self) -> Delta<S> {
        self.inner
    }
}

/// The read-write set accumulated between two commit points.
///
/// Obtained from the [`WorkingSet`] by using either the `checkpoint` or
/// `revert` method; [`StateCheckpoint::freeze`] turns it into the ordered
/// write batch to apply to the concrete store.
pub struct StateCheckpoint<S: Storage> {
    delta: Delta<S>,
}

impl<S: Storage> StateCheckpoint<S> {
    /// Creates a new checkpoint directly on top of the backing store.
    pub fn new(inner: S) -> Self {
        Self {
            delta: Delta::new(inner),
        }
    }

    /// Wraps this checkpoint into a revertable [`WorkingSet`].
    pub fn to_revertable(self) -> WorkingSet<S> {
        WorkingSet {
            delta: RevertableDelta {
                inner: self.delta,
                writes: HashMap::new(),
            },
            events: Vec::new(),
        }
    }

    /// Extracts the ordered write batch accumulated so far.
    pub fn freeze(&mut self) -> StateWrites {
        self.delta.freeze()
    }
}

/// A working set accumulates reads and writes on top of the underlying store.
///
/// There are two ways to convert it back into a [`StateCheckpoint`]:
/// 1. `checkpoint()`, where all the changes are kept;
/// 2. `revert()`, where the changes made since the last checkpoint are
///    discarded.
pub struct WorkingSet<S: Storage> {
    delta: RevertableDelta<S>,
    events: Vec<Event>,
}

impl<S: Storage> WorkingSet<S> {
    /// Creates a new working set directly on top of the backing store.
    pub fn new(inner: S) -> Self {
        StateCheckpoint::new(inner).to_revertable()
    }

    /// Commits the revertable changes and returns the updated checkpoint.
    pub fn checkpoint(self) -> StateCheckpoint<S> {
        StateCheckpoint {
            delta: self.delta.commit(),
        }
    }

    /// Discards the revertable changes and returns the previous checkpoint.
    pub fn revert(self) -> StateCheckpoint<S> {
        StateCheckpoint {
            delta: self.delta.revert(),
        }
    }

    /// Returns a handle to the backing store.
    pub fn backing(&self) -> &S {
        &self.delta.inner.inner
    }

    /// Records an event.
    pub fn add_event(&mut self, key: &str, value: &str) {
        self.events.push(Event::new(key, value));
    }

    /// Moves the recorded events out of the working set.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// The events recorded so far.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub(crate) fn get_value<K, V, C>(&mut self, prefix: &Prefix, codec: &C, key: &K) -> Option<V>
    where
        C: StateKeyCodec<K> + StateValueCodec<V>,
    {
        let storage_key = StorageKey::new(prefix, &codec.encode_key(key));
        self.get_decoded(codec, &storage_key)
    }

    pub(crate) fn set_value<K, V, C>(&mut self, prefix: &Prefix, codec: &C, key: &K, value: &V)
    where
        C: StateKeyCodec<K> + StateValueCodec<V>,
    {
        let storage_key = StorageKey::new(prefix, &codec.encode_key(key));
        let storage_value = StorageValue::from(codec.encode_value(value));
        self.delta.set(storage_key, Some(storage_value));
    }

    pub(crate) fn remove_value<K, V, C>(&mut self, prefix: &Prefix, codec: &C, key: &K) -> Option<V>
    where
        C: StateKeyCodec<K> + StateValueCodec<V>,
    {
        let storage_key = StorageKey::new(prefix, &codec.encode_key(key));
        let value = self.get_decoded(codec, &storage_key);
        self.delta.set(storage_key, None);
        value
    }

    pub(crate) fn delete_value<K, C>(&mut self, prefix: &Prefix, codec: &C, key: &K)
    where
        C: StateKeyCodec<K>,
    {
        let storage_key = StorageKey::new(prefix, &codec.encode_key(key));
        self.delta.set(storage_key, None);
    }

    pub(crate) fn get_singleton<V, C>(&mut self, prefix: &Prefix, codec: &C) -> Option<V>
    where
        C: StateValueCodec<V>,
    {
        let storage_key = StorageKey::singleton(prefix);
        self.get_decoded(codec, &storage_key)
    }

    pub(crate) fn set_singleton<V, C>(&mut self, prefix: &Prefix, codec: &C, value: &V)
    where
        C: StateValueCodec<V>,
    {
        let storage_key = StorageKey::singleton(prefix);
        let storage_value = StorageValue::from(codec.encode_value(value));
        self.delta.set(storage_key, Some(storage_value));
    }

    pub(crate) fn remove_singleton<V, C>(&mut self, prefix: &Prefix, codec: &C) -> Option<V>
    where
        C: StateValueCodec<V>,
    {
        let storage_key = StorageKey::singleton(prefix);
        let value = self.get_decoded(codec, &storage_key);
        self.delta.set(storage_key, None);
        value
    }

    pub(crate) fn delete_singleton(&mut self, prefix: &Prefix) {
        let storage_key = StorageKey::singleton(prefix);
        self.delta.set(storage_key, None);
    }

    fn get_decoded<V, C>(&mut self, codec: &C, storage_key: &StorageKey) -> Option<V>
    where
        C: StateValueCodec<V>,
    {
        self.delta
            .get(storage_key)
            .map(|storage_value| codec.decode_value(storage_value.value()))
    }
}
