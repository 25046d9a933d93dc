use txr_modules_core::{CreationNonce, OperationHash, OperationHooks};
use txr_state::{Storage, WorkingSet};

use crate::RollupRegistry;

impl<S: Storage> OperationHooks for RollupRegistry<S> {
    type Storage = S;

    fn begin_operation_hook(
        &self,
        operation_hash: &OperationHash,
        working_set: &mut WorkingSet<S>,
    ) -> anyhow::Result<()> {
        self.creation_nonce
            .set(&CreationNonce::initial(*operation_hash), working_set);
        Ok(())
    }

    fn end_operation_hook(&self, working_set: &mut WorkingSet<S>) -> anyhow::Result<()> {
        self.creation_nonce.delete(working_set);
        Ok(())
    }
}
