//! # Adapters
//!
//! - `memory`: in-memory contract storage for tests, tools and snapshots

mod memory;

pub use memory::InMemoryStorage;
