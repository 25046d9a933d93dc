use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::hash::OperationHash;

/// The deterministic input from which fresh rollup identifiers are minted.
///
/// One nonce is in force per creating operation: the hash of the operation
/// itself, shared by every rollup that operation creates, plus the number of
/// rollups it has created so far. The borsh encoding of this record — the 32
/// operation-hash bytes followed by the 4-byte little-endian index — is the
/// sole preimage hashed into a rollup identifier; changing its layout
/// changes every future identifier and is a protocol-breaking change.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshDeserialize, BorshSerialize, Serialize, Deserialize,
)]
pub struct CreationNonce {
    /// Hash of the operation creating rollup(s).
    pub operation_hash: OperationHash,
    /// Number of rollups already created by that operation.
    #[serde(default)]
    pub creation_index: i32,
}

impl CreationNonce {
    /// The nonce in force before an operation has created any rollup.
    pub fn initial(operation_hash: OperationHash) -> Self {
        Self {
            operation_hash,
            creation_index: 0,
        }
    }

    /// The nonce in force after one more rollup has been created.
    ///
    /// The index is not guarded against wraparound.
    pub fn advance(&self) -> Self {
        Self {
            operation_hash: self.operation_hash,
            creation_index: self.creation_index + 1,
        }
    }

    /// The canonical binary encoding, used as the identifier-derivation
    /// preimage.
    pub fn to_preimage(&self) -> Vec<u8> {
        self.try_to_vec()
            .expect("Failed to serialize creation nonce")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_advance_is_monotonic() {
        let nonce = CreationNonce::initial(OperationHash::new([4; 32]));
        assert_eq!(nonce.creation_index, 0);

        let advanced = nonce.advance();
        assert_eq!(advanced.creation_index, 1);
        assert_eq!(advanced.operation_hash, nonce.operation_hash);

        assert_eq!(advanced.advance().creation_index, 2);
    }

    #[test]
    fn test_preimage_layout_is_frozen() {
        let nonce = CreationNonce {
            operation_hash: OperationHash::new([0xaa; 32]),
            creation_index: 1,
        };
        let preimage = nonce.to_preimage();

        assert_eq!(preimage.len(), 36);
        assert_eq!(&preimage[..32], &[0xaa; 32]);
        assert_eq!(&preimage[32..], &[1, 0, 0, 0]);
    }

    #[test]
    fn test_json_index_defaults_to_zero() {
        let nonce: CreationNonce = serde_json::from_str(&format!(
            "{{\"operation_hash\": \"{}\"}}",
            hex::encode([4u8; 32])
        ))
        .unwrap();

        assert_eq!(nonce, CreationNonce::initial(OperationHash::new([4; 32])));
    }
}
