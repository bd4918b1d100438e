//! # Domain Layer
//!
//! - `storage`: contract storage slots
//! - `layout`: family addresses and checkpoint slot arithmetic
//! - `checkpoints`: checkpoint list decoding and instance selection
//! - `limits`: bounds of the single-value families
//! - `schedule`: VM fee schedule and its storage encoding
//! - `parameters`: the resolved parameter set

mod checkpoints;
mod layout;
mod limits;
mod parameters;
mod schedule;
mod storage;

pub use checkpoints::*;
pub use layout::*;
pub use limits::*;
pub use parameters::*;
pub use schedule::*;
pub use storage::*;
