use txr_modules_core::{Module, OperationHash, OperationHooks};
use txr_rollup_registry::{RollupRegistry, RollupRegistryConfig};
use txr_state::{MemoryStorage, WorkingSet};

pub const OPERATION_HASH_A: [u8; 32] = [1; 32];
#[allow(dead_code)]
pub const OPERATION_HASH_B: [u8; 32] = [2; 32];

pub fn create_registry() -> (
    RollupRegistry<MemoryStorage>,
    MemoryStorage,
    WorkingSet<MemoryStorage>,
) {
    let storage = MemoryStorage::new();
    let registry = RollupRegistry::new();
    let mut working_set = WorkingSet::new(storage.clone());

    registry
        .genesis(&RollupRegistryConfig {}, &mut working_set)
        .unwrap();

    (registry, storage, working_set)
}

pub fn begin_operation(
    registry: &RollupRegistry<MemoryStorage>,
    operation_hash: [u8; 32],
    working_set: &mut WorkingSet<MemoryStorage>,
) {
    registry
        .begin_operation_hook(&OperationHash::new(operation_hash), working_set)
        .unwrap();
}
