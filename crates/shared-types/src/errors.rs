//! # Error Types
//!
//! Errors raised when decoding primitive values from operator input.

use thiserror::Error;

/// Errors decoding a hex-encoded value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexError {
    /// Input has the wrong number of hex digits.
    #[error("Invalid hex length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input contains characters that are not hex digits.
    #[error("Invalid hex digits: {0}")]
    InvalidDigits(#[from] hex::FromHexError),
}
