//! Cross-crate integration tests.

mod governance;
mod startup;
