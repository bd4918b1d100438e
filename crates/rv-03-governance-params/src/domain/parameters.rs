use serde::Serialize;
use shared_types::BlockHeight;

use super::schedule::FeeSchedule;

/// Every governed parameter resolved at one height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceParameterSet {
    pub height: BlockHeight,
    pub fee_schedule: FeeSchedule,
    pub block_size: u64,
    pub min_gas_price: u64,
    pub block_gas_limit: u64,
}
