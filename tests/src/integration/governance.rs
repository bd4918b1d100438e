//! # Governance Resolution Flow
//!
//! Network profiles supplying fork heights to the governance resolver over
//! shared contract storage.

#[cfg(test)]
mod tests {
    use std::thread;

    use primitive_types::{H160, U256};
    use rv_01_network_params::{create, networks, NetworkId, OverrideArgs};
    use rv_03_governance_params::domain::{
        BLOCK_GAS_LIMIT_ADDRESS, BLOCK_SIZE_ADDRESS, GAS_PRICE_ADDRESS, GAS_SCHEDULE_ADDRESS,
    };
    use rv_03_governance_params::{DgpResolver, FeeSchedule, InMemoryStorage};

    fn instance(byte: u8) -> H160 {
        H160::repeat_byte(byte)
    }

    /// Storage where every family has instances at heights 0, 1000 and 5000.
    fn governed_storage() -> InMemoryStorage {
        let mut storage = InMemoryStorage::new();
        let steps = [(0u64, 0x10u8), (1000, 0x20), (5000, 0x30)];
        for (i, (height, base)) in steps.into_iter().enumerate() {
            let step = i as u64 + 1;

            storage.push_checkpoint(&BLOCK_SIZE_ADDRESS, height, instance(base + 1));
            storage.set_u64_param(instance(base + 1), U256::from(step * 1_000_000));

            storage.push_checkpoint(&GAS_PRICE_ADDRESS, height, instance(base + 2));
            storage.set_u64_param(instance(base + 2), U256::from(step * 10));

            storage.push_checkpoint(&BLOCK_GAS_LIMIT_ADDRESS, height, instance(base + 4));
            storage.set_u64_param(instance(base + 4), U256::from(step * 10_000_000));

            let mut entries = FeeSchedule::eip158().to_entries();
            entries[29] = 21_000 + step as u32;
            storage.push_checkpoint(&GAS_SCHEDULE_ADDRESS, height, instance(base));
            storage.set_schedule_entries(instance(base), &entries);
        }
        storage
    }

    #[test]
    fn test_all_families_follow_checkpoints() {
        let profile = create(NetworkId::Main, &OverrideArgs::default()).unwrap();
        let storage = governed_storage();
        let resolver = DgpResolver::new(profile.consensus(), &storage);

        let at_2500 = resolver.resolve(2500);
        assert_eq!(at_2500.block_size, 2_000_000);
        assert_eq!(at_2500.min_gas_price, 20);
        assert_eq!(at_2500.block_gas_limit, 20_000_000);
        assert_eq!(at_2500.fee_schedule.tx_gas, 21_002);

        let at_5000 = resolver.resolve(5000);
        assert_eq!(at_5000.block_size, 3_000_000);
        assert_eq!(at_5000.fee_schedule.tx_gas, 21_003);
    }

    #[test]
    fn test_empty_state_defaults_on_every_network() {
        let storage = InMemoryStorage::new();
        for network in NetworkId::ALL {
            let profile = create(network, &OverrideArgs::default()).unwrap();
            let empty = DgpResolver::new(profile.consensus(), &storage);
            let legacy = DgpResolver::<InMemoryStorage>::legacy(profile.consensus());
            for height in [0, 1, 466_600, 10_000_000] {
                assert_eq!(empty.resolve(height), legacy.resolve(height), "{network} @ {height}");
            }
        }
    }

    #[test]
    fn test_fee_defaults_follow_profile_forks() {
        let mut builder = networks::regtest::builder();
        builder.update_constantinople_height(100);
        builder.update_muir_glacier_height(200);
        let profile = builder.build().unwrap();
        let resolver = DgpResolver::<InMemoryStorage>::legacy(profile.consensus());

        assert!(!resolver.fee_schedule(99).have_create2);
        assert!(resolver.fee_schedule(100).have_create2);
        assert_eq!(resolver.fee_schedule(199).sload_gas, 200);
        assert_eq!(resolver.fee_schedule(200).sload_gas, 800);
    }

    #[test]
    fn test_snapshot_round_trip_resolves_identically() {
        let profile = create(NetworkId::Regtest, &OverrideArgs::default()).unwrap();
        let storage = governed_storage();
        let json = serde_json::to_string(&storage).unwrap();
        let restored = InMemoryStorage::from_json(&json).unwrap();

        let a = DgpResolver::new(profile.consensus(), &storage);
        let b = DgpResolver::new(profile.consensus(), &restored);
        for height in [0, 999, 1000, 4999, 5000, 9999] {
            assert_eq!(a.resolve(height), b.resolve(height));
        }
    }

    #[test]
    fn test_concurrent_resolution() {
        let profile = create(NetworkId::Main, &OverrideArgs::default()).unwrap();
        let storage = governed_storage();
        let resolver = DgpResolver::new(profile.consensus(), &storage);
        let expected: Vec<_> = (0..8u32).map(|i| resolver.resolve(i * 1000)).collect();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..8u32)
                .map(|i| {
                    let resolver = &resolver;
                    scope.spawn(move || resolver.resolve(i * 1000))
                })
                .collect();
            for (handle, expected) in handles.into_iter().zip(&expected) {
                assert_eq!(&handle.join().unwrap(), expected);
            }
        });
    }
}
