//! # VM Fork Schedule
//!
//! Chain configuration handed to the embedded VM. The Ethereum forks up to
//! Byzantium are live from genesis; Constantinople, the btc_ecrecover
//! precompile and Istanbul/Muir Glacier follow the network's QIP7, QIP6 and
//! Muir Glacier heights.

use serde::Serialize;

use super::consensus::ConsensusRules;

/// VM fork activation heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VmForkSchedule {
    pub homestead_fork_block: i32,
    pub eip150_fork_block: i32,
    pub eip158_fork_block: i32,
    pub byzantium_fork_block: i32,
    pub constantinople_fork_block: i32,
    pub constantinople_fix_fork_block: i32,
    pub qip6_fork_block: i32,
    pub istanbul_fork_block: i32,
    pub muir_glacier_fork_block: i32,
}

impl VmForkSchedule {
    fn with(qip7: i32, qip6: i32, muir: i32) -> Self {
        Self {
            homestead_fork_block: 0,
            eip150_fork_block: 0,
            eip158_fork_block: 0,
            byzantium_fork_block: 0,
            constantinople_fork_block: qip7,
            constantinople_fix_fork_block: qip7,
            qip6_fork_block: qip6,
            istanbul_fork_block: muir,
            muir_glacier_fork_block: muir,
        }
    }

    pub fn from_rules(rules: &ConsensusRules) -> Self {
        Self::with(rules.qip7_height, rules.qip6_height, rules.muir_glacier_height)
    }

    /// Every substituted fork at the same height.
    pub fn uniform(height: i32) -> Self {
        Self::with(height, height, height)
    }

    /// JSON form of the schedule.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sealEngine": "NoProof",
            "params": self,
        })
    }
}
