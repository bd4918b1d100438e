//! # Network Identifiers
//!
//! The five logical networks a node can run against. The identifier is the
//! runtime tag that selects one of the profile builders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Logical network selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network.
    Main,
    /// Public test network.
    Test,
    /// Signed-block test network.
    Signet,
    /// Local regression test network.
    Regtest,
    /// Regtest with adjustments for the unit-test harness.
    Unittest,
}

impl NetworkId {
    /// Every supported network, in registry order.
    pub const ALL: [NetworkId; 5] = [
        NetworkId::Main,
        NetworkId::Test,
        NetworkId::Signet,
        NetworkId::Regtest,
        NetworkId::Unittest,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::Signet => "signet",
            NetworkId::Regtest => "regtest",
            NetworkId::Unittest => "unittest",
        }
    }

    /// Whether `-vbparams` and `-segwitheight` may rewrite activation rules.
    pub fn accepts_activation_overrides(&self) -> bool {
        matches!(self, NetworkId::Regtest | NetworkId::Unittest)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownNetwork(s.to_string()))
    }
}
