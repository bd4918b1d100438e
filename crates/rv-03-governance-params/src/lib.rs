//! # rv-03-governance-params
//!
//! On-chain governed consensus parameters (DGP) for the Revo node.
//!
//! Four parameter families are governed by contracts at fixed addresses:
//!
//! | Family            | Address  | Value                         |
//! |-------------------|----------|-------------------------------|
//! | Fee schedule      | `…0080`  | 39 `u32` gas cost entries     |
//! | Block size        | `…0081`  | `u64` bytes                   |
//! | Minimum gas price | `…0082`  | `u64`                         |
//! | Block gas limit   | `…0084`  | `u64`                         |
//!
//! A template contract lists, per family, the instances that take effect at
//! given heights. [`DgpResolver`] picks the instance in force and decodes its
//! storage, substituting defaults for anything missing or out of range.
//!
//! ## Usage
//!
//! ```rust
//! use rv_01_network_params::{create, NetworkId, OverrideArgs};
//! use rv_03_governance_params::{DgpResolver, InMemoryStorage};
//!
//! let profile = create(NetworkId::Regtest, &OverrideArgs::default()).unwrap();
//! let storage = InMemoryStorage::new();
//! let resolver = DgpResolver::new(profile.consensus(), &storage);
//! assert_eq!(resolver.block_size(100), 2_000_000);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod resolver;

pub use adapters::InMemoryStorage;
pub use domain::{
    FeeSchedule, GovernanceParameterSet, ParamsCheckpoint, ScheduleForks, StorageMap,
    StorageSlot, U64Bounds,
};
pub use ports::ContractStorage;
pub use resolver::DgpResolver;
