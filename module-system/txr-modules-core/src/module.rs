use txr_state::{Prefix, Storage, WorkingSet};

use crate::error::Error;
use crate::hash::OperationHash;

/// Execution context threaded into every module call.
///
/// Within a single state-transition step the context is fixed; it carries
/// the hash of the chain operation currently executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    operation_hash: OperationHash,
}

impl Context {
    /// Creates the context of the operation with the given hash.
    pub fn new(operation_hash: OperationHash) -> Self {
        Self { operation_hash }
    }

    /// Hash of the operation currently executing.
    pub fn operation_hash(&self) -> &OperationHash {
        &self.operation_hash
    }
}

/// Empty response returned by successful module calls.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct CallResponse {}

/// Every module of the runtime implements this trait.
pub trait Module {
    /// The storage backend the module's state lives in.
    type Storage: Storage;

    /// Genesis configuration of the module.
    type Config;

    /// Messages the module can be called with.
    type CallMessage;

    /// Initializes the module state from its genesis configuration.
    fn genesis(
        &self,
        config: &Self::Config,
        working_set: &mut WorkingSet<Self::Storage>,
    ) -> Result<(), Error>;

    /// Executes a call message against the module state.
    fn call(
        &self,
        message: Self::CallMessage,
        context: &Context,
        working_set: &mut WorkingSet<Self::Storage>,
    ) -> Result<CallResponse, Error>;
}

/// Hooks invoked by the dispatch pipeline around every state-mutating chain
/// operation.
pub trait OperationHooks {
    /// The storage backend the hooks operate on.
    type Storage: Storage;

    /// Runs before the first call of an operation is dispatched.
    fn begin_operation_hook(
        &self,
        operation_hash: &OperationHash,
        working_set: &mut WorkingSet<Self::Storage>,
    ) -> anyhow::Result<()>;

    /// Runs after the last call of an operation is dispatched.
    fn end_operation_hook(
        &self,
        working_set: &mut WorkingSet<Self::Storage>,
    ) -> anyhow::Result<()>;
}

// separator == "/"
const DOMAIN_SEPARATOR: [u8; 1] = [47];

/// A unique identifier for each state variable in a module.
#[derive(Debug, PartialEq, Eq)]
pub struct ModulePrefix {
    module_path: &'static str,
    module_name: &'static str,
    storage_name: &'static str,
}

impl ModulePrefix {
    /// Creates the prefix of the state variable `storage_name` of the module
    /// `module_name` living at `module_path`.
    pub fn new_storage(
        module_path: &'static str,
        module_name: &'static str,
        storage_name: &'static str,
    ) -> Self {
        Self {
            module_path,
            module_name,
            storage_name,
        }
    }

    fn combine_prefix(&self) -> Vec<u8> {
        let mut combined_prefix = Vec::with_capacity(
            self.module_path.len()
                + self.module_name.len()
                + self.storage_name.len()
                + 3 * DOMAIN_SEPARATOR.len(),
        );

        combined_prefix.extend(self.module_path.as_bytes());
        combined_prefix.extend(DOMAIN_SEPARATOR);
        combined_prefix.extend(self.module_name.as_bytes());
        combined_prefix.extend(DOMAIN_SEPARATOR);
        combined_prefix.extend(self.storage_name.as_bytes());
        combined_prefix.extend(DOMAIN_SEPARATOR);
        combined_prefix
    }
}

impl From<ModulePrefix> for Prefix {
    fn from(prefix: ModulePrefix) -> Self {
        Prefix::new(prefix.combine_prefix())
    }
}
