//! Domain layer for network parameters.
//!
//! - network: network identifiers
//! - deployment: version-bits windows and sentinels
//! - consensus: consensus rule set and height-dependent accessors
//! - profile: immutable profile and its pre-publication builder
//! - vm_forks: VM chain configuration

mod consensus;
mod deployment;
mod network;
mod profile;
mod vm_forks;

pub use consensus::*;
pub use deployment::*;
pub use network::*;
pub use profile::*;
pub use vm_forks::*;
