//! # Error Types
//!
//! Configuration errors raised while building a network profile. Every
//! variant is reported to the operator and aborts startup.

use thiserror::Error;

/// Result type alias for profile construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Invalid or unsupported operator-supplied configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Network name is not one of the supported identifiers.
    #[error("Unknown chain {0}")]
    UnknownNetwork(String),

    /// `-signetchallenge` was supplied more than once.
    #[error("-signetchallenge cannot be multiple values")]
    MultipleSignetChallenges,

    /// `-signetchallenge` is not valid hex or is empty.
    #[error("Invalid signet challenge: {0}")]
    InvalidSignetChallenge(String),

    /// A `-vbparams` value has the wrong number of fields.
    #[error("Version bits parameters malformed, expecting deployment:start:end[:min_activation_height] (got {0})")]
    MalformedVersionBits(String),

    /// Start time is not an integer or sentinel name.
    #[error("Invalid nStartTime ({0})")]
    InvalidStartTime(String),

    /// Timeout is not an integer or sentinel name.
    #[error("Invalid nTimeout ({0})")]
    InvalidTimeout(String),

    /// Minimum activation height is not a 32-bit integer.
    #[error("Invalid min_activation_height ({0})")]
    InvalidMinActivationHeight(String),

    /// Deployment name does not appear in the deployment table.
    #[error("Invalid deployment ({0}): unknown deployment")]
    UnknownDeployment(String),

    /// A dated window whose start lies after its timeout.
    #[error("Deployment {name} starts at {start} after its timeout {timeout}")]
    InvertedWindow {
        name: String,
        start: i64,
        timeout: i64,
    },

    /// `-segwitheight` is outside `[-1, i32::MAX)`.
    #[error("Activation height {0} for segwit is out of valid range. Use -1 to disable segwit.")]
    SegwitHeightOutOfRange(i64),
}
