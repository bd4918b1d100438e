//! # rv-01-network-params
//!
//! Network parameter registry for the Revo node.
//!
//! ## Architecture
//!
//! One immutable [`NetworkProfile`] value type, populated by one builder per
//! network and selected by a runtime [`NetworkId`] tag:
//!
//! ```text
//! NetworkId ──→ networks::<id>::builder() ──→ overrides::apply ──→ build()
//!                                                                   │
//!                                              Arc<NetworkProfile> ←┘
//! ```
//!
//! Overrides (`-vbparams`, `-segwitheight`, `-signetchallenge`,
//! `-signetseednode`, `-fastprune`) are applied to the builder before it is
//! frozen. There is no process-wide instance; callers own the profile.
//!
//! ## Usage
//!
//! ```rust
//! use rv_01_network_params::{create, NetworkId, OverrideArgs};
//!
//! let profile = create(NetworkId::Main, &OverrideArgs::default()).unwrap();
//! assert_eq!(profile.default_port(), 6999);
//! ```

pub mod domain;
pub mod errors;
pub mod networks;
pub mod overrides;
pub mod registry;

pub use domain::{
    activation_reached, Base58Prefixes, BuriedRule, ChainTxData, ConsensusRules, DeploymentId,
    DeploymentStart, DeploymentTimeout, DeploymentWindow, Deployments, GenesisSpec, NetworkId,
    NetworkProfile, NetworkProfileBuilder, VmForkSchedule, DISABLED_HEIGHT,
};
pub use errors::{ConfigError, Result};
pub use overrides::OverrideArgs;
pub use registry::{create, create_builder, create_from_name, create_shared};
