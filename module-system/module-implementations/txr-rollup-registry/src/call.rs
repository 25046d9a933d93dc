use anyhow::{bail, Context as _, Result};
use txr_modules_core::{CallResponse, Context, RollupId};
use txr_state::{Storage, WorkingSet};

use crate::{PendingInbox, RollupRegistry};

/// This enumeration represents the available call messages for interacting
/// with the rollup registry module.
#[cfg_attr(
    feature = "native",
    derive(serde::Serialize),
    derive(serde::Deserialize)
)]
#[derive(borsh::BorshDeserialize, borsh::BorshSerialize, Debug, PartialEq, Clone)]
pub enum CallMessage {
    /// Originate a new transaction rollup.
    CreateRollup,
}

impl<S: Storage> RollupRegistry<S> {
    /// Mints a fresh rollup identifier and stores its empty pending inbox.
    ///
    /// Reads the creation nonce in force for the operation currently
    /// executing, derives the identifier from it, writes the advanced nonce
    /// back and inserts the record. Exactly one nonce advance and one insert
    /// per successful call; every failure exit precedes the first write, so
    /// a failed call leaves the working set untouched.
    pub fn create_rollup(&self, working_set: &mut WorkingSet<S>) -> Result<RollupId> {
        let nonce = self
            .creation_nonce
            .get_or_err(working_set)
            .context("No creating operation in progress")?;
        let rollup_id = RollupId::derive(&nonce);

        if self.pending_inboxes.get(&rollup_id, working_set).is_some() {
            bail!("Rollup {} already exists", rollup_id);
        }

        self.creation_nonce.set(&nonce.advance(), working_set);
        self.pending_inboxes
            .set(&rollup_id, &PendingInbox::default(), working_set);

        Ok(rollup_id)
    }

    pub(crate) fn create(
        &self,
        context: &Context,
        working_set: &mut WorkingSet<S>,
    ) -> Result<CallResponse> {
        let nonce = self
            .creation_nonce
            .get_or_err(working_set)
            .context("No creating operation in progress")?;
        if &nonce.operation_hash != context.operation_hash() {
            bail!(
                "Creation nonce belongs to operation {}, not to the executing operation {}",
                nonce.operation_hash,
                context.operation_hash()
            );
        }

        let rollup_id = self.create_rollup(working_set)?;
        working_set.add_event("rollup_created", &format!("rollup_id: {rollup_id}"));

        Ok(CallResponse::default())
    }
}
