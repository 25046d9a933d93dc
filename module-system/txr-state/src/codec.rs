//! Serialization and deserialization -related logic.

use crate::index::StorageIndex;

/// A trait for types that can serialize and deserialize keys for storage
/// access.
pub trait StateKeyCodec<K> {
    /// Error type that can arise during deserialization.
    type KeyError: std::fmt::Debug;

    /// Serializes a key into a bytes vector.
    ///
    /// This method **must** not panic as all instances of the key type are
    /// supposed to be serializable.
    fn encode_key(&self, key: &K) -> Vec<u8>;

    /// Tries to deserialize a key from a bytes slice, and returns a
    /// [`Result`] with either the deserialized key or an error.
    fn try_decode_key(&self, bytes: &[u8]) -> Result<K, Self::KeyError>;
}

/// A trait for types that can serialize and deserialize values for storage
/// access.
pub trait StateValueCodec<V> {
    /// Error type that can arise during deserialization.
    type ValueError: std::fmt::Debug;

    /// Serializes a value into a bytes vector.
    ///
    /// This method **must** not panic as all instances of the value type are
    /// supposed to be serializable.
    fn encode_value(&self, value: &V) -> Vec<u8>;

    /// Tries to deserialize a value from a bytes slice, and returns a
    /// [`Result`] with either the deserialized value or an error.
    fn try_decode_value(&self, bytes: &[u8]) -> Result<V, Self::ValueError>;

    /// Deserializes a value from a bytes slice.
    ///
    /// # Panics
    /// Panics if the call to [`StateValueCodec::try_decode_value`] fails.
    /// Stored bytes were produced by [`StateValueCodec::encode_value`], so a
    /// failure here means the state itself is corrupt.
    fn decode_value(&self, bytes: &[u8]) -> V {
        self.try_decode_value(bytes)
            .map_err(|err| {
                format!(
                    "Failed to decode value 0x{}, error: {:?}",
                    hex::encode(bytes),
                    err
                )
            })
            .unwrap()
    }
}

/// A marker trait for types that implement both [`StateKeyCodec`] and
/// [`StateValueCodec`].
pub trait StateCodec<K, V>: StateKeyCodec<K> + StateValueCodec<V> {}

impl<K, V, C> StateCodec<K, V> for C where C: StateKeyCodec<K> + StateValueCodec<V> {}

/// A [`StateCodec`] that uses [`borsh`] for all keys and values.
#[derive(Debug, Default, PartialEq, Eq, Clone, borsh::BorshDeserialize, borsh::BorshSerialize)]
pub struct BorshCodec;

impl<K> StateKeyCodec<K> for BorshCodec
where
    K: borsh::BorshSerialize + borsh::BorshDeserialize,
{
    type KeyError = std::io::Error;

    fn encode_key(&self, key: &K) -> Vec<u8> {
        key.try_to_vec().expect("Failed to serialize key")
    }

    fn try_decode_key(&self, bytes: &[u8]) -> Result<K, Self::KeyError> {
        K::try_from_slice(bytes)
    }
}

impl<V> StateValueCodec<V> for BorshCodec
where
    V: borsh::BorshSerialize + borsh::BorshDeserialize,
{
    type ValueError = std::io::Error;

    fn encode_value(&self, value: &V) -> Vec<u8> {
        value.try_to_vec().expect("Failed to serialize value")
    }

    fn try_decode_value(&self, bytes: &[u8]) -> Result<V, Self::ValueError> {
        V::try_from_slice(bytes)
    }
}

/// A [`StateCodec`] that stores map keys as their [`StorageIndex`] path and
/// values as borsh.
///
/// The resulting storage key layout for an indexed map is the container
/// prefix followed by the key's path segments, so indexed entries live under
/// the same human-readable segments an external store browser would show.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct PathKeyCodec;

impl<K> StateKeyCodec<K> for PathKeyCodec
where
    K: StorageIndex,
{
    type KeyError = String;

    fn encode_key(&self, key: &K) -> Vec<u8> {
        key.to_path(Vec::new()).join("/").into_bytes()
    }

    fn try_decode_key(&self, bytes: &[u8]) -> Result<K, Self::KeyError> {
        let path = std::str::from_utf8(bytes)
            .map_err(|err| format!("path segments are not utf-8: {err}"))?;
        let segments: Vec<String> = path.split('/').map(str::to_string).collect();
        K::of_path(&segments).ok_or_else(|| format!("no value at path {path:?}"))
    }
}

impl<V> StateValueCodec<V> for PathKeyCodec
where
    V: borsh::BorshSerialize + borsh::BorshDeserialize,
{
    type ValueError = std::io::Error;

    fn encode_value(&self, value: &V) -> Vec<u8> {
        value.try_to_vec().expect("Failed to serialize value")
    }

    fn try_decode_value(&self, bytes: &[u8]) -> Result<V, Self::ValueError> {
        V::try_from_slice(bytes)
    }
}
