//! # Startup Flow
//!
//! Registry → overrides → genesis verification, as the node runs them at
//! startup.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use rv_01_network_params::{
        create, BuriedRule, ConfigError, DeploymentId, DeploymentStart, DeploymentTimeout,
        NetworkId, OverrideArgs,
    };
    use rv_02_genesis::{mining, ChainParams, GenesisBuilder, GenesisError, GenesisInputs};
    use shared_types::Hash256;

    // =============================================================================
    // GENESIS PINNING
    // =============================================================================

    #[test]
    fn test_every_network_starts() {
        for network in NetworkId::ALL {
            let params = ChainParams::select(network, &OverrideArgs::default()).unwrap();
            let profile = params.profile();
            assert_eq!(params.genesis_hash(), profile.genesis().expected_hash);
            assert_eq!(
                params.genesis().header.merkle_root,
                profile.genesis().expected_merkle_root
            );
        }
    }

    #[test]
    fn test_repeated_selection_is_identical() {
        let hashes: Vec<Hash256> = (0..3)
            .map(|_| {
                ChainParams::select(NetworkId::Main, &OverrideArgs::default())
                    .unwrap()
                    .genesis_hash()
            })
            .collect();
        assert!(hashes.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_time_change_moves_hash() {
        let profile = create(NetworkId::Main, &OverrideArgs::default()).unwrap();
        let builder = GenesisBuilder::for_profile(&profile);
        let pinned = builder.build().hash();
        let time = builder.inputs().time;
        let moved = builder.clone().with_time(time + 1).build().hash();
        assert_eq!(pinned, profile.genesis().expected_hash);
        assert_ne!(moved, pinned);
    }

    #[test]
    fn test_mined_block_meets_target() {
        let profile = create(NetworkId::Regtest, &OverrideArgs::default()).unwrap();
        let inputs = GenesisInputs::from_spec(profile.genesis());
        let block = mining::mine(&inputs, 0).unwrap();
        assert_eq!(block.hash(), profile.genesis().expected_hash);
    }

    // =============================================================================
    // OVERRIDES
    // =============================================================================

    #[test]
    fn test_vbparams_on_regtest() {
        let args = OverrideArgs {
            vbparams: vec!["testbit:100:200:0".into()],
            ..Default::default()
        };
        let params = ChainParams::select(NetworkId::Regtest, &args).unwrap();
        let window = params.profile().consensus().deployments.get(DeploymentId::TestDummy);
        assert_eq!(window.start, DeploymentStart::At(100));
        assert_eq!(window.timeout, DeploymentTimeout::At(200));
        assert_eq!(window.min_activation_height, 0);
    }

    #[test]
    fn test_bad_vbparams_abort_startup() {
        for bad in ["unknownname:0:0:0", "testbit:100"] {
            let args = OverrideArgs {
                vbparams: vec![bad.into()],
                ..Default::default()
            };
            let err = ChainParams::select(NetworkId::Regtest, &args).unwrap_err();
            assert!(matches!(err, GenesisError::Config(_)), "{bad}: {err:?}");
        }
    }

    #[test]
    fn test_overrides_do_not_touch_genesis() {
        let args = OverrideArgs {
            vbparams: vec!["taproot:0:999999999".into()],
            segwit_height: Some(-1),
            fast_prune: true,
            ..Default::default()
        };
        let plain = ChainParams::select(NetworkId::Regtest, &OverrideArgs::default()).unwrap();
        let overridden = ChainParams::select(NetworkId::Regtest, &args).unwrap();
        assert_eq!(plain.genesis_hash(), overridden.genesis_hash());
        assert!(!overridden
            .profile()
            .consensus()
            .is_active(BuriedRule::Segwit, 1_000_000));
        assert_eq!(overridden.profile().prune_after_height(), 100);
    }

    #[test]
    fn test_custom_signet_challenge() {
        let args = OverrideArgs {
            signet_challenges: vec!["51".into()],
            ..Default::default()
        };
        let custom = ChainParams::select(NetworkId::Signet, &args).unwrap();
        let default = ChainParams::select(NetworkId::Signet, &OverrideArgs::default()).unwrap();
        assert_eq!(custom.profile().message_start(), [0x54, 0xd2, 0x6f, 0xbd]);
        assert_eq!(default.profile().message_start(), [0x0a, 0x03, 0xcf, 0x40]);
        assert_eq!(custom.genesis_hash(), default.genesis_hash());
    }

    #[test]
    fn test_two_signet_challenges_rejected() {
        let args = OverrideArgs {
            signet_challenges: vec!["51".into(), "52".into()],
            ..Default::default()
        };
        assert_eq!(
            create(NetworkId::Signet, &args).unwrap_err(),
            ConfigError::MultipleSignetChallenges
        );
    }

    // =============================================================================
    // SHARING
    // =============================================================================

    #[test]
    fn test_params_shared_across_threads() {
        let params = Arc::new(ChainParams::select(NetworkId::Test, &OverrideArgs::default()).unwrap());
        let expected = params.genesis_hash();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let params = Arc::clone(&params);
                thread::spawn(move || {
                    (
                        params.genesis_hash(),
                        params.profile().consensus().target_spacing(0),
                    )
                })
            })
            .collect();
        for handle in handles {
            let (hash, spacing) = handle.join().unwrap();
            assert_eq!(hash, expected);
            assert!(spacing > 0);
        }
    }
}
