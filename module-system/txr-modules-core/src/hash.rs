use core::fmt;
use core::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use digest::Digest;
use sha2::Sha256;

use crate::error::InvalidNotation;

/// Encodes `prefix || payload` as base58 with a trailing 4-byte
/// double-SHA256 checksum.
pub fn encode_b58check(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len());
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    bs58::encode(data).with_check().into_string()
}

/// Decodes a checksummed base58 string into its raw payload, binary prefix
/// included, verifying the checksum.
pub fn decode_b58check(s: &str) -> Result<Vec<u8>, bs58::decode::Error> {
    bs58::decode(s).with_check(None).into_vec()
}

/// A 20-byte digest used as a canonical on-chain identifier.
///
/// Ordering and equality are byte-lexicographic over the raw digest. The
/// text form is a checksummed base58 string carrying the reserved `KT1`
/// prefix, always [`AddressHash::NOTATION_LEN`] characters long.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, BorshDeserialize, BorshSerialize)]
pub struct AddressHash {
    addr: [u8; 20],
}

impl AddressHash {
    /// Digest width in bytes.
    pub const LEN: usize = 20;

    /// Binary prefix of the checksummed text encoding.
    pub const B58_PREFIX: [u8; 3] = [0x02, 0x5a, 0x79];

    /// Length in characters of the text encoding.
    pub const NOTATION_LEN: usize = 36;

    /// Creates a new hash containing the given bytes.
    pub const fn new(addr: [u8; 20]) -> Self {
        Self { addr }
    }

    /// Digests the concatenation of `chunks` down to the identifier width.
    pub fn hash(chunks: &[&[u8]]) -> Self {
        let mut hasher = Sha256::new();
        for chunk in chunks {
            hasher.update(chunk);
        }
        let digest: [u8; 32] = hasher.finalize().into();

        let mut addr = [0u8; Self::LEN];
        addr.copy_from_slice(&digest[..Self::LEN]);
        Self { addr }
    }

    /// Encodes as checksummed base58 with the reserved prefix.
    pub fn to_b58check(&self) -> String {
        encode_b58check(&Self::B58_PREFIX, &self.addr)
    }

    /// Decodes a checksummed base58 string, verifying checksum, prefix and
    /// payload length.
    pub fn from_b58check(s: &str) -> Result<Self, InvalidNotation> {
        let bytes = decode_b58check(s).map_err(|_| InvalidNotation(s.to_string()))?;
        let payload = bytes
            .strip_prefix(&Self::B58_PREFIX[..])
            .ok_or_else(|| InvalidNotation(s.to_string()))?;
        Self::try_from(payload).map_err(|_| InvalidNotation(s.to_string()))
    }

    pub(crate) fn to_byte_array(self) -> [u8; 20] {
        self.addr
    }
}

impl AsRef<[u8]> for AddressHash {
    fn as_ref(&self) -> &[u8] {
        &self.addr
    }
}

impl From<[u8; 20]> for AddressHash {
    fn from(addr: [u8; 20]) -> Self {
        Self { addr }
    }
}

impl<'a> TryFrom<&'a [u8]> for AddressHash {
    type Error = anyhow::Error;

    fn try_from(addr: &'a [u8]) -> Result<Self, Self::Error> {
        if addr.len() != Self::LEN {
            anyhow::bail!("AddressHash must be {} bytes long", Self::LEN);
        }
        let mut addr_bytes = [0u8; Self::LEN];
        addr_bytes.copy_from_slice(addr);
        Ok(Self { addr: addr_bytes })
    }
}

impl FromStr for AddressHash {
    type Err = InvalidNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_b58check(s)
    }
}

impl fmt::Display for AddressHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_b58check())
    }
}

impl fmt::Debug for AddressHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_b58check())
    }
}

impl serde::Serialize for AddressHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            serde::Serialize::serialize(&self.to_b58check(), serializer)
        } else {
            serde::Serialize::serialize(&self.addr, serializer)
        }
    }
}

impl<'de> serde::Deserialize<'de> for AddressHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let notation: String = serde::Deserialize::deserialize(deserializer)?;
            Self::from_b58check(&notation).map_err(serde::de::Error::custom)
        } else {
            let addr = <[u8; 20] as serde::Deserialize>::deserialize(deserializer)?;
            Ok(Self { addr })
        }
    }
}

/// The hash of a chain operation, identifying the operation currently
/// executing.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, BorshDeserialize, BorshSerialize)]
pub struct OperationHash {
    hash: [u8; 32],
}

impl serde::Serialize for OperationHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        hex::serde::serialize(self.hash, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for OperationHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        hex::serde::deserialize(deserializer).map(|hash| Self { hash })
    }
}

impl OperationHash {
    /// Creates a new operation hash containing the given bytes.
    pub const fn new(hash: [u8; 32]) -> Self {
        Self { hash }
    }
}

impl AsRef<[u8]> for OperationHash {
    fn as_ref(&self) -> &[u8] {
        &self.hash
    }
}

impl From<[u8; 32]> for OperationHash {
    fn from(hash: [u8; 32]) -> Self {
        Self { hash }
    }
}

impl<'a> TryFrom<&'a [u8]> for OperationHash {
    type Error = anyhow::Error;

    fn try_from(hash: &'a [u8]) -> Result<Self, Self::Error> {
        if hash.len() != 32 {
            anyhow::bail!("OperationHash must be 32 bytes long");
        }
        let mut hash_bytes = [0u8; 32];
        hash_bytes.copy_from_slice(hash);
        Ok(Self { hash: hash_bytes })
    }
}

impl fmt::Display for OperationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.hash))
    }
}

impl fmt::Debug for OperationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OperationHash(0x{})", hex::encode(self.hash))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_b58check_round_trip() {
        let hash = AddressHash::new([7; 20]);
        let notation = hash.to_b58check();

        assert!(notation.starts_with("KT1"));
        assert_eq!(notation.len(), AddressHash::NOTATION_LEN);
        assert_eq!(AddressHash::from_b58check(&notation), Ok(hash));
    }

    #[test]
    fn test_b58check_rejects_empty_string() {
        assert_eq!(
            AddressHash::from_b58check(""),
            Err(InvalidNotation(String::new()))
        );
    }

    #[test]
    fn test_b58check_rejects_bad_checksum() {
        let mut notation = AddressHash::new([7; 20]).to_b58check();
        let last = notation.pop().unwrap();
        notation.push(if last == '1' { '2' } else { '1' });

        assert_eq!(
            AddressHash::from_b58check(&notation),
            Err(InvalidNotation(notation.clone()))
        );
    }

    #[test]
    fn test_b58check_rejects_wrong_prefix() {
        // Valid checksum, valid length, but the binary prefix is not the
        // reserved one.
        let notation = encode_b58check(&[0x02, 0x5a, 0x78], &[7; 20]);

        assert_eq!(
            AddressHash::from_b58check(&notation),
            Err(InvalidNotation(notation.clone()))
        );
    }

    #[test]
    fn test_b58check_rejects_wrong_length() {
        let notation = encode_b58check(&AddressHash::B58_PREFIX, &[7; 19]);

        assert_eq!(
            AddressHash::from_b58check(&notation),
            Err(InvalidNotation(notation.clone()))
        );
    }

    #[test]
    fn test_hash_is_deterministic() {
        let left = AddressHash::hash(&[b"chunk_1", b"chunk_2"]);
        let right = AddressHash::hash(&[b"chunk_1", b"chunk_2"]);

        assert_eq!(left, right);
        assert_ne!(left, AddressHash::hash(&[b"chunk_1"]));
    }

    #[test]
    fn test_ordering_is_byte_lexicographic() {
        let mut low = [0u8; 20];
        let mut high = [0u8; 20];
        low[19] = 1;
        high[0] = 1;

        assert!(AddressHash::new(low) < AddressHash::new(high));
        assert!(AddressHash::new([0; 20]) < AddressHash::new(low));
    }
}
