//! # Profile Registry
//!
//! Selects the builder for a network id, applies operator overrides and
//! freezes the result. Called once at startup; the returned profile is then
//! passed by reference (or `Arc`) to every consumer.

use std::sync::Arc;

use tracing::info;

use crate::domain::{NetworkId, NetworkProfile, NetworkProfileBuilder};
use crate::errors::Result;
use crate::networks;
use crate::overrides::{self, OverrideArgs};

/// Builder for `network` with overrides applied, not yet frozen.
pub fn create_builder(network: NetworkId, args: &OverrideArgs) -> Result<NetworkProfileBuilder> {
    let mut builder = match network {
        NetworkId::Main => networks::main::builder(),
        NetworkId::Test => networks::test::builder(),
        NetworkId::Signet => match overrides::parse_challenge(&args.signet_challenges)? {
            Some(challenge) => {
                info!(challenge = %hex::encode(&challenge), "Using custom signet challenge");
                networks::signet::builder_with_challenge(challenge)
            }
            None => networks::signet::builder(),
        },
        NetworkId::Regtest => networks::regtest::builder(),
        NetworkId::Unittest => networks::regtest::unittest_builder(),
    };
    overrides::apply(&mut builder, args)?;
    Ok(builder)
}

/// Builds the frozen profile of `network`.
pub fn create(network: NetworkId, args: &OverrideArgs) -> Result<NetworkProfile> {
    let profile = create_builder(network, args)?.build()?;
    info!(
        network = %profile.id(),
        magic = %hex::encode(profile.message_start()),
        port = profile.default_port(),
        "Network profile created"
    );
    Ok(profile)
}

/// [`create`] from a network name such as `"regtest"`.
pub fn create_from_name(name: &str, args: &OverrideArgs) -> Result<NetworkProfile> {
    create(name.parse()?, args)
}

/// [`create`] wrapped for sharing across threads.
pub fn create_shared(network: NetworkId, args: &OverrideArgs) -> Result<Arc<NetworkProfile>> {
    create(network, args).map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeploymentId;
    use crate::errors::ConfigError;
    use std::collections::HashSet;

    fn all_profiles() -> Vec<NetworkProfile> {
        NetworkId::ALL
            .into_iter()
            .map(|id| create(id, &OverrideArgs::default()).unwrap())
            .collect()
    }

    #[test]
    fn test_create_is_deterministic() {
        for id in NetworkId::ALL {
            let a = create(id, &OverrideArgs::default()).unwrap();
            let b = create(id, &OverrideArgs::default()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_unknown_network_name() {
        assert_eq!(
            create_from_name("litecoin", &OverrideArgs::default()),
            Err(ConfigError::UnknownNetwork("litecoin".into()))
        );
    }

    #[test]
    fn test_multiple_signet_challenges() {
        let args = OverrideArgs {
            signet_challenges: vec!["51".into(), "51".into()],
            ..Default::default()
        };
        assert_eq!(
            create(NetworkId::Signet, &args),
            Err(ConfigError::MultipleSignetChallenges)
        );
    }

    #[test]
    fn test_checkpoints_strictly_increasing() {
        for profile in all_profiles() {
            let heights: Vec<_> = profile.checkpoints().keys().copied().collect();
            assert!(!heights.is_empty());
            assert!(heights.windows(2).all(|w| w[0] < w[1]), "{}", profile.id());
            assert_eq!(
                profile.checkpoints().get(&0),
                Some(&profile.genesis().expected_hash),
                "{}",
                profile.id()
            );
        }
    }

    #[test]
    fn test_deployment_bits_unique_and_in_range() {
        for profile in all_profiles() {
            let deployments = &profile.consensus().deployments;
            let bits: HashSet<u8> = deployments.iter().map(|(_, w)| w.bit).collect();
            assert_eq!(bits.len(), DeploymentId::COUNT);
            assert!(bits.iter().all(|b| *b <= crate::domain::MAX_VERSION_BIT));
        }
    }

    #[test]
    fn test_magic_bytes_distinct() {
        let magics: HashSet<[u8; 4]> = all_profiles()
            .iter()
            .filter(|p| p.id() != NetworkId::Unittest)
            .map(|p| p.message_start())
            .collect();
        assert_eq!(magics.len(), 4);
    }

    #[test]
    fn test_unittest_honours_segwit_override() {
        let args = OverrideArgs {
            segwit_height: Some(500),
            ..Default::default()
        };
        let profile = create(NetworkId::Unittest, &args).unwrap();
        assert_eq!(profile.consensus().segwit_height, 500);
    }

    #[test]
    fn test_shared_profile_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let shared = create_shared(NetworkId::Main, &OverrideArgs::default()).unwrap();
        assert_send_sync(&shared);
    }
}
