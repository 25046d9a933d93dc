use proptest::prelude::{prop_assume, proptest};
use txr_modules_core::{AddressHash, CreationNonce, OperationHash, RollupId};

fn nonce(operation_hash: [u8; 32], creation_index: i32) -> CreationNonce {
    CreationNonce {
        operation_hash: OperationHash::new(operation_hash),
        creation_index,
    }
}

proptest! {
    #[test]
    fn test_derivation_is_deterministic(operation_hash: [u8; 32], creation_index: i32) {
        let nonce = nonce(operation_hash, creation_index);
        assert_eq!(RollupId::derive(&nonce), RollupId::derive(&nonce));
    }

    #[test]
    fn test_distinct_nonces_yield_distinct_ids(
        left_hash: [u8; 32],
        left_index: i32,
        right_hash: [u8; 32],
        right_index: i32,
    ) {
        let left = nonce(left_hash, left_index);
        let right = nonce(right_hash, right_index);

        if left != right {
            assert_ne!(RollupId::derive(&left), RollupId::derive(&right));
        }
    }

    #[test]
    fn test_sibling_indices_yield_distinct_ids(operation_hash: [u8; 32], creation_index: i32) {
        prop_assume!(creation_index != i32::MAX);

        let nonce = nonce(operation_hash, creation_index);
        assert_ne!(RollupId::derive(&nonce), RollupId::derive(&nonce.advance()));
    }

    #[test]
    fn test_notation_round_trip(addr: [u8; 20]) {
        let hash = AddressHash::new(addr);
        let notation = hash.to_b58check();

        assert!(notation.starts_with("KT1"));
        assert_eq!(notation.len(), AddressHash::NOTATION_LEN);
        assert_eq!(AddressHash::from_b58check(&notation), Ok(hash));
    }
}

#[test]
fn test_literal_creation_scenario() {
    let mut operation_hash = [0u8; 32];
    operation_hash[31] = 1;

    let initial = CreationNonce::initial(OperationHash::new(operation_hash));
    let rollup_id = RollupId::derive(&initial);
    assert_eq!(rollup_id, RollupId::derive(&initial));

    let notation = rollup_id.to_b58check();
    assert!(notation.starts_with("KT1"));
    assert_eq!(notation.len(), 36);
    assert_eq!(RollupId::from_b58check(&notation), Ok(rollup_id));

    // The next rollup created by the same operation gets a fresh identifier.
    assert_ne!(RollupId::derive(&initial.advance()), rollup_id);
}
