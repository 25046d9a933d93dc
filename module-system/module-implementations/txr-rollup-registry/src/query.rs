//! Defines rpc queries exposed by the rollup registry module, along with the
//! relevant types.

use jsonrpsee::core::RpcResult;
use jsonrpsee::types::error::ErrorCode;
use jsonrpsee::types::ErrorObjectOwned;
use txr_modules_core::{CreationNonce, RollupId, RpcArg};
use txr_state::{Storage, WorkingSet};

use crate::{PendingInbox, RollupRegistry};

/// Structure returned by the `pendingInbox` rpc method.
#[derive(Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize, Clone)]
pub struct PendingInboxResponse {
    /// The stored record, present only if the rollup exists.
    pub inbox: Option<PendingInbox>,
}

/// Structure returned by the `creationNonce` rpc method.
#[derive(Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize, Clone)]
pub struct CreationNonceResponse {
    /// The nonce in force, absent outside a creating operation.
    pub nonce: Option<CreationNonce>,
}

impl<S: Storage> RollupRegistry<S> {
    /// Rpc method that returns the pending inbox of the rollup at
    /// `rollup_id`, given in its textual notation.
    pub fn pending_inbox_of(
        &self,
        rollup_id: String,
        working_set: &mut WorkingSet<S>,
    ) -> RpcResult<PendingInboxResponse> {
        let rollup_id = RollupId::parse_arg(&rollup_id).map_err(|message| {
            tracing::debug!(%message, "rejecting malformed rollup id argument");
            ErrorObjectOwned::owned(ErrorCode::InvalidParams.code(), message, None::<()>)
        })?;

        Ok(PendingInboxResponse {
            inbox: self.pending_inboxes.get(&rollup_id, working_set),
        })
    }

    /// Rpc method that returns the creation nonce currently in force.
    pub fn current_creation_nonce(
        &self,
        working_set: &mut WorkingSet<S>,
    ) -> RpcResult<CreationNonceResponse> {
        Ok(CreationNonceResponse {
            nonce: self.creation_nonce.get(working_set),
        })
    }
}
