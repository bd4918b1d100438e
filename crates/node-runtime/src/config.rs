//! # Node Configuration
//!
//! ## Environment Overrides
//!
//! | Variable       | Effect                                     |
//! |----------------|--------------------------------------------|
//! | `RV_CHAIN`     | Network name, replaces `--chain`           |
//! | `RV_LEGACY_VM` | `1`/`true` runs without governed parameters |

use std::path::PathBuf;

use rv_01_network_params::{ConfigError, NetworkId, OverrideArgs};
use shared_types::BlockHeight;
use tracing::{info, warn};

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Selected network.
    pub network: NetworkId,
    /// `-vbparams` deployment overrides.
    pub vbparams: Vec<String>,
    /// `-segwitheight`.
    pub segwit_height: Option<i64>,
    /// `-signetchallenge`.
    pub signet_challenges: Vec<String>,
    /// `-signetseednode`.
    pub signet_seed_nodes: Vec<String>,
    /// `-fastprune`.
    pub fast_prune: bool,
    /// Resolve every governed parameter to its default.
    pub legacy_vm: bool,
    /// JSON storage snapshot used as VM state.
    pub dgp_snapshot: Option<PathBuf>,
    /// Height at which governed parameters are resolved.
    pub height: BlockHeight,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: NetworkId::Main,
            vbparams: Vec::new(),
            segwit_height: None,
            signet_challenges: Vec::new(),
            signet_seed_nodes: Vec::new(),
            fast_prune: false,
            legacy_vm: false,
            dgp_snapshot: None,
            height: 0,
        }
    }
}

impl NodeConfig {
    /// Override values handed to the network registry.
    pub fn override_args(&self) -> OverrideArgs {
        OverrideArgs {
            vbparams: self.vbparams.clone(),
            segwit_height: self.segwit_height,
            signet_challenges: self.signet_challenges.clone(),
            signet_seed_nodes: self.signet_seed_nodes.clone(),
            fast_prune: self.fast_prune,
        }
    }

    /// Applies `RV_*` variables from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Applies `RV_*` variables read through `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(chain) = lookup("RV_CHAIN") {
            self.network = chain.trim().parse()?;
            info!(network = %self.network, "Network selected from environment");
        }

        if let Some(flag) = lookup("RV_LEGACY_VM") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => self.legacy_vm = true,
                "0" | "false" | "no" => self.legacy_vm = false,
                other => warn!(value = other, "RV_LEGACY_VM must be a boolean; ignoring"),
            }
        }

        Ok(())
    }
}
