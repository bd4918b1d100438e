//! # Revo Node Runtime
//!
//! Startup of the consensus parameter layer.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (command line, then `RV_*` environment overrides)
//! 2. Build the network profile with overrides applied
//! 3. Build and verify the genesis block; a mismatch aborts startup
//! 4. Attach VM state (a storage snapshot) or run in legacy mode
//! 5. Report the selected parameters
//!
//! ## Modules
//!
//! - `config` - [`NodeConfig`] and environment overrides
//! - `report` - JSON view of the selected parameters

pub mod config;
pub mod report;

pub use config::NodeConfig;
pub use report::ParamsReport;
