mod helpers;

use helpers::{begin_operation, create_registry, OPERATION_HASH_A};
use txr_modules_core::{CreationNonce, OperationHash, OperationHooks};

#[test]
fn test_begin_operation_seeds_initial_nonce() {
    let (registry, _, mut working_set) = create_registry();
    begin_operation(&registry, OPERATION_HASH_A, &mut working_set);

    let response = registry.current_creation_nonce(&mut working_set).unwrap();
    assert_eq!(
        response.nonce,
        Some(CreationNonce::initial(OperationHash::new(OPERATION_HASH_A)))
    );
}

#[test]
fn test_end_operation_clears_nonce() {
    let (registry, _, mut working_set) = create_registry();
    begin_operation(&registry, OPERATION_HASH_A, &mut working_set);

    registry.create_rollup(&mut working_set).unwrap();
    registry.end_operation_hook(&mut working_set).unwrap();

    let response = registry.current_creation_nonce(&mut working_set).unwrap();
    assert_eq!(response.nonce, None);

    let err = registry.create_rollup(&mut working_set).unwrap_err();
    assert!(err
        .to_string()
        .contains("No creating operation in progress"));
}

#[test]
fn test_reentering_an_operation_restarts_the_nonce() {
    let (registry, _, mut working_set) = create_registry();

    begin_operation(&registry, OPERATION_HASH_A, &mut working_set);
    registry.create_rollup(&mut working_set).unwrap();

    // A fresh begin hook resets the index for the next operation.
    begin_operation(&registry, OPERATION_HASH_A, &mut working_set);
    let response = registry.current_creation_nonce(&mut working_set).unwrap();
    assert_eq!(response.nonce.unwrap().creation_index, 0);

    // Replaying the same nonce re-derives an identifier that is already
    // taken; the registry surfaces the clash instead of overwriting.
    let err = registry.create_rollup(&mut working_set).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}
