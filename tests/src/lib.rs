//! # Revo Consensus Parameter Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/   # Cross-crate flows
//! │   ├── startup.rs     # Registry + overrides + genesis verification
//! │   └── governance.rs  # Profiles driving the governance resolver
//! └── benches/           # Criterion benchmarks
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rv-tests
//! cargo bench -p rv-tests
//! ```

pub mod integration;
