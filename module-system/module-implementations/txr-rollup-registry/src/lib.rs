//! The rollup registry module mints globally-unique rollup identifiers and
//! keeps one record per live rollup. It provides functionality for:
//! - Deterministic identifier creation from the operation in progress.
//! - Creation-nonce bookkeeping across the calls of one operation.
//! - Lookup of the per-rollup pending inbox record.

pub mod call;
pub mod genesis;
mod hooks;

#[cfg(feature = "native")]
pub mod query;

use std::marker::PhantomData;

use txr_modules_core::{CallResponse, Context, CreationNonce, Error, Module, ModulePrefix, RollupId};
use txr_state::codec::PathKeyCodec;
use txr_state::{StateMap, StateValue, Storage, WorkingSet};

/// Initial configuration for the rollup registry. Rollups only come into
/// existence through creation, so there is nothing to configure yet.
pub struct RollupRegistryConfig {}

/// Placeholder record stored per rollup at creation time.
///
/// Carries no information yet; it is the attachment point for future inbox
/// state, and its presence marks the rollup as existing.
#[derive(
    borsh::BorshDeserialize,
    borsh::BorshSerialize,
    serde::Serialize,
    serde::Deserialize,
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
)]
pub struct PendingInbox {}

/// The rollup registry module.
///
/// State is threaded through every call as an explicit working set; the
/// registry holds no run-time data of its own, only the wiring of its state
/// containers.
pub struct RollupRegistry<S: Storage> {
    /// The creation nonce in force for the operation currently executing.
    /// Seeded by the begin-operation hook, advanced on every creation, and
    /// cleared by the end-operation hook.
    pub(crate) creation_nonce: StateValue<CreationNonce>,

    /// One pending inbox record per live rollup, keyed by the identifier's
    /// storage path segment.
    pub(crate) pending_inboxes: StateMap<RollupId, PendingInbox, PathKeyCodec>,

    _phantom: PhantomData<S>,
}

const MODULE_PATH: &str = "txr_rollup_registry";
const MODULE_NAME: &str = "RollupRegistry";

impl<S: Storage> RollupRegistry<S> {
    /// Wires the registry's state containers under its module prefix.
    pub fn new() -> Self {
        Self {
            creation_nonce: StateValue::new(
                ModulePrefix::new_storage(MODULE_PATH, MODULE_NAME, "creation_nonce").into(),
            ),
            pending_inboxes: StateMap::with_codec(
                ModulePrefix::new_storage(MODULE_PATH, MODULE_NAME, "pending_inboxes").into(),
                PathKeyCodec,
            ),
            _phantom: PhantomData,
        }
    }

    /// Returns the pending inbox stored for `rollup_id`, if the rollup
    /// exists.
    pub fn pending_inbox(
        &self,
        rollup_id: &RollupId,
        working_set: &mut WorkingSet<S>,
    ) -> Option<PendingInbox> {
        self.pending_inboxes.get(rollup_id, working_set)
    }
}

impl<S: Storage> Default for RollupRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> Module for RollupRegistry<S> {
    type Storage = S;

    type Config = RollupRegistryConfig;

    type CallMessage = call::CallMessage;

    fn genesis(
        &self,
        config: &Self::Config,
        working_set: &mut WorkingSet<S>,
    ) -> Result<(), Error> {
        Ok(self.init_module(config, working_set)?)
    }

    fn call(
        &self,
        msg: Self::CallMessage,
        context: &Context,
        working_set: &mut WorkingSet<S>,
    ) -> Result<CallResponse, Error> {
        match msg {
            call::CallMessage::CreateRollup => Ok(self.create(context, working_set)?),
        }
    }
}
