use anyhow::Result;
use txr_state::{Storage, WorkingSet};

use crate::RollupRegistry;

impl<S: Storage> RollupRegistry<S> {
    pub(crate) fn init_module(
        &self,
        _config: &<Self as txr_modules_core::Module>::Config,
        _working_set: &mut WorkingSet<S>,
    ) -> Result<()> {
        // Rollups exist only by creation; genesis writes nothing.
        Ok(())
    }
}
