//! # Activation Overrides
//!
//! Operator-supplied adjustments applied to a freshly built profile before it
//! is frozen. Activation overrides only take effect on the local test
//! networks; elsewhere they are logged and ignored.

mod signet;
mod vbparams;

pub use signet::parse_challenge;
pub use vbparams::{segwit_activation_height, VersionBitsOverride};

use tracing::{info, warn};

use crate::domain::{NetworkId, NetworkProfileBuilder};
use crate::errors::Result;
use crate::networks::regtest::FAST_PRUNE_AFTER_HEIGHT;

/// Raw override values as they arrive from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideArgs {
    /// `-vbparams` values, applied in order.
    pub vbparams: Vec<String>,
    /// `-segwitheight`.
    pub segwit_height: Option<i64>,
    /// `-signetchallenge` values; more than one is an error.
    pub signet_challenges: Vec<String>,
    /// `-signetseednode` values, replacing the signet DNS seeds.
    pub signet_seed_nodes: Vec<String>,
    /// `-fastprune`.
    pub fast_prune: bool,
}

impl OverrideArgs {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applies every override relevant to the builder's network.
pub(crate) fn apply(builder: &mut NetworkProfileBuilder, args: &OverrideArgs) -> Result<()> {
    let network = builder.profile().id();

    if network.accepts_activation_overrides() {
        apply_activation(builder, args)?;
    } else if args.segwit_height.is_some() || !args.vbparams.is_empty() {
        warn!(%network, "Activation overrides are only honoured on regtest; ignoring");
    }

    if network == NetworkId::Signet {
        if !args.signet_seed_nodes.is_empty() {
            builder.set_dns_seeds(args.signet_seed_nodes.clone());
        }
    } else if !args.signet_challenges.is_empty() || !args.signet_seed_nodes.is_empty() {
        warn!(%network, "Signet options ignored outside signet");
    }

    if args.fast_prune {
        if network == NetworkId::Regtest {
            builder.set_prune_after_height(FAST_PRUNE_AFTER_HEIGHT);
        } else {
            warn!(%network, "-fastprune ignored outside regtest");
        }
    }
    Ok(())
}

fn apply_activation(builder: &mut NetworkProfileBuilder, args: &OverrideArgs) -> Result<()> {
    if let Some(raw) = args.segwit_height {
        let height = segwit_activation_height(raw)?;
        builder.set_segwit_height(height);
    }

    for arg in &args.vbparams {
        let parsed: VersionBitsOverride = arg.parse()?;
        let current = *builder.profile().consensus().deployments.get(parsed.deployment);
        builder.set_deployment(parsed.deployment, parsed.apply_to(&current));
        info!(
            deployment = parsed.deployment.name(),
            start = %parsed.start,
            timeout = %parsed.timeout,
            min_activation_height = parsed.min_activation_height,
            "Setting version bits activation parameters"
        );
    }
    Ok(())
}
