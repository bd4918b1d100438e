//! # Shared Types Crate
//!
//! Primitive value types used by every Revo consensus-parameter crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: hashes, amounts and heights are defined once.
//! - **Serialized Byte Order**: [`Hash256`] stores bytes exactly as they are
//!   written on the wire and displays them reversed, matching block explorers.
//! - **Const Literals**: pinned hashes and addresses are decoded in `const`
//!   context, so a malformed literal is a compile error rather than a runtime
//!   failure.

pub mod encoding;
pub mod entities;
pub mod errors;

pub use encoding::{encode_compact_size, encode_var_bytes};
pub use entities::*;
pub use errors::*;
