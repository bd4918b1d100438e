//! JSON view of the parameters a node started with.

use rv_01_network_params::{NetworkId, NetworkProfile, VmForkSchedule};
use rv_02_genesis::{ChainParams, GenesisSummary};
use rv_03_governance_params::{ContractStorage, DgpResolver, GovernanceParameterSet};
use serde::Serialize;
use shared_types::BlockHeight;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamsReport<'a> {
    pub network: NetworkId,
    pub message_start: String,
    pub default_port: u16,
    pub bech32_hrp: &'a str,
    pub genesis: GenesisSummary,
    pub vm_forks: VmForkSchedule,
    pub legacy_vm: bool,
    pub governance: GovernanceParameterSet,
    pub profile: &'a NetworkProfile,
}

impl<'a> ParamsReport<'a> {
    pub fn new<S: ContractStorage>(
        params: &'a ChainParams,
        resolver: &DgpResolver<S>,
        height: BlockHeight,
    ) -> Self {
        let profile = params.profile().as_ref();
        Self {
            network: params.network(),
            message_start: hex::encode(profile.message_start()),
            default_port: profile.default_port(),
            bech32_hrp: profile.bech32_hrp(),
            genesis: params.genesis().summary(),
            vm_forks: profile.vm_fork_schedule(),
            legacy_vm: resolver.is_legacy(),
            governance: resolver.resolve(height),
            profile,
        }
    }
}
