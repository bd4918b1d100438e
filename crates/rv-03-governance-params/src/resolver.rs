//! # Governance Parameter Resolver
//!
//! Resolves the four governed parameter families at a block height:
//!
//! 1. Read the family's checkpoint list from the template contract.
//! 2. Select the instance with the greatest effective height `<= height`.
//! 3. Decode the instance's storage, validating against the bounds.
//!
//! Any missing or invalid piece resolves to the compiled-in default. No path
//! returns an error.
//!
//! ## Legacy Mode
//!
//! A resolver built with [`DgpResolver::legacy`] has no VM state attached
//! and returns the defaults for every family.

use primitive_types::{H160, U256};
use rv_01_network_params::ConsensusRules;
use shared_types::BlockHeight;
use tracing::{debug, trace};

use crate::domain::{
    index_key, read_checkpoints, select_instance, slot_value, FeeSchedule,
    GovernanceParameterSet, ScheduleForks, StorageMap, U64Bounds, BLOCK_GAS_LIMIT_ADDRESS,
    BLOCK_GAS_LIMIT_BOUNDS, BLOCK_SIZE_ADDRESS, BLOCK_SIZE_BOUNDS, GAS_PRICE_ADDRESS,
    GAS_SCHEDULE_ADDRESS, MIN_GAS_PRICE_BOUNDS, TEMPLATE_ADDRESS,
};
use crate::ports::ContractStorage;

/// Reads governed parameters from contract storage.
///
/// Holds no mutable state. With a shared `S` such as `&InMemoryStorage` one
/// resolver may serve many threads at once.
#[derive(Debug, Clone)]
pub struct DgpResolver<S> {
    forks: ScheduleForks,
    storage: Option<S>,
}

impl<S: ContractStorage> DgpResolver<S> {
    /// Resolver reading from `storage`, with fork defaults taken from `rules`.
    pub fn new(rules: &ConsensusRules, storage: S) -> Self {
        Self {
            forks: forks_of(rules),
            storage: Some(storage),
        }
    }

    /// Resolver without VM state: every family resolves to its default.
    pub fn legacy(rules: &ConsensusRules) -> Self {
        Self {
            forks: forks_of(rules),
            storage: None,
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.storage.is_none()
    }

    /// Fee schedule in force at `height`.
    pub fn fee_schedule(&self, height: BlockHeight) -> FeeSchedule {
        let default = self.forks.default_at(height);
        match self.instance_storage(&GAS_SCHEDULE_ADDRESS, height) {
            Some(storage) => default.overlay_storage(&storage),
            None => default,
        }
    }

    /// Maximum serialized block size in bytes.
    pub fn block_size(&self, height: BlockHeight) -> u64 {
        self.resolve_u64(&BLOCK_SIZE_ADDRESS, &BLOCK_SIZE_BOUNDS, height)
    }

    pub fn min_gas_price(&self, height: BlockHeight) -> u64 {
        self.resolve_u64(&GAS_PRICE_ADDRESS, &MIN_GAS_PRICE_BOUNDS, height)
    }

    pub fn block_gas_limit(&self, height: BlockHeight) -> u64 {
        self.resolve_u64(&BLOCK_GAS_LIMIT_ADDRESS, &BLOCK_GAS_LIMIT_BOUNDS, height)
    }

    /// All four families at `height`.
    pub fn resolve(&self, height: BlockHeight) -> GovernanceParameterSet {
        GovernanceParameterSet {
            height,
            fee_schedule: self.fee_schedule(height),
            block_size: self.block_size(height),
            min_gas_price: self.min_gas_price(height),
            block_gas_limit: self.block_gas_limit(height),
        }
    }

    fn resolve_u64(&self, family: &H160, bounds: &U64Bounds, height: BlockHeight) -> u64 {
        let Some(storage) = self.instance_storage(family, height) else {
            return bounds.default;
        };
        let Some(word) = slot_value(&storage, &index_key(U256::zero())) else {
            debug!(%family, height, "Parameter slot empty, using default");
            return bounds.default;
        };
        bounds.check(word).unwrap_or_else(|| {
            debug!(%family, height, %word, "Parameter out of range, using default");
            bounds.default
        })
    }

    /// Storage of the instance selected for `family` at `height`.
    fn instance_storage(&self, family: &H160, height: BlockHeight) -> Option<StorageMap> {
        let storage = self.storage.as_ref()?;
        let template = storage.read_storage(&TEMPLATE_ADDRESS);
        let checkpoints = read_checkpoints(&template, family);
        let Some(instance) = select_instance(&checkpoints, u64::from(height)) else {
            trace!(%family, height, "No parameter instance, using default");
            return None;
        };
        Some(storage.read_storage(&instance))
    }
}

fn forks_of(rules: &ConsensusRules) -> ScheduleForks {
    ScheduleForks::new(rules.qip7_height, rules.muir_glacier_height)
}

// =============================================================================
// TESTS
// =============================================================================
