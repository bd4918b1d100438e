//! Domain layer for genesis construction.
//!
//! - encode: consensus serialization trait
//! - script: script builder and script numbers
//! - transaction: outpoints, transactions and merkle roots
//! - header: block header and its hash
//! - block: genesis block value
//! - pow: compact targets

mod block;
mod encode;
mod header;
mod pow;
pub mod script;
mod transaction;

pub use block::*;
pub use encode::*;
pub use header::*;
pub use pow::*;
pub use script::{Script, ScriptBuilder};
pub use transaction::*;
