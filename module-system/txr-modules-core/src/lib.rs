//! Core components of the Txr SDK module system: the identifier types minted
//! and parsed by the protocol, their canonical codecs, and the module and
//! hook traits implemented by runtime modules.

#![deny(missing_docs)]

mod address;
#[cfg(feature = "native")]
mod arg;
mod error;
mod hash;
mod module;
mod nonce;

pub use address::RollupId;
#[cfg(feature = "native")]
pub use arg::RpcArg;
/// Digest trait definitions, re-exported for downstream hashing.
pub use digest;
pub use error::{Error, InvalidNotation, InvalidRollupNotation};
pub use hash::{decode_b58check, encode_b58check, AddressHash, OperationHash};
pub use module::{CallResponse, Context, Module, ModulePrefix, OperationHooks};
pub use nonce::CreationNonce;
