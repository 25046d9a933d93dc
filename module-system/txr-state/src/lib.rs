//! Storage and state management interfaces for Txr SDK modules.

#![deny(missing_docs)]

pub mod codec;

mod index;
mod map;
#[cfg(feature = "native")]
mod memory_storage;
mod scratchpad;

/// Trait and type definitions related to the [`Storage`] trait.
pub mod storage;
mod value;

use std::fmt::Display;
use std::str;

pub use index::StorageIndex;
pub use map::{Error as StateMapError, StateMap};
#[cfg(feature = "native")]
pub use memory_storage::MemoryStorage;
pub use scratchpad::{Event, StateCheckpoint, StateWrites, WorkingSet};
pub use storage::{Storage, StorageKey, StorageValue};
pub use value::{Error as StateValueError, StateValue};

/// A prefix prepended to each key before insertion and retrieval from the storage.
///
/// State containers accessed through the same working set share a single key
/// space, so each container prepends its own prefix to every key it touches.
#[derive(
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    Debug,
    PartialEq,
    Eq,
    Clone,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Prefix {
    prefix: Vec<u8>,
}

impl Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buf = self.prefix.as_slice();
        match str::from_utf8(buf) {
            Ok(s) => {
                write!(f, "{:?}", s)
            }
            Err(_) => {
                write!(f, "0x{}", hex::encode(buf))
            }
        }
    }
}

impl Prefix {
    /// Creates a new prefix from a byte vector.
    pub fn new(prefix: Vec<u8>) -> Self {
        Self { prefix }
    }

    /// Returns the prefix bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.prefix
    }

    /// Returns the length in bytes of the prefix.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    /// Returns `true` if the prefix is empty, `false` otherwise.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    /// Returns a new prefix allocated on the fly, by extending the current
    /// prefix with the given bytes.
    pub fn extended(&self, bytes: &[u8]) -> Self {
        let mut prefix = self.prefix.clone();
        prefix.extend_from_slice(bytes);
        Self { prefix }
    }
}

#[cfg(test)]
mod state_tests;
