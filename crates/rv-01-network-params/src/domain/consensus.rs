//! # Consensus Rule Set
//!
//! Every height- and time-indexed threshold that decides which protocol rules
//! apply to a block. Several values switch once the chain passes the reduced
//! block time height; the accessors on [`ConsensusRules`] hide that switch.

use serde::Serialize;
use shared_types::{BlockHeight, Hash256, H160, U256};

use super::deployment::Deployments;

/// Rules activated at a fixed height instead of through version bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuriedRule {
    Bip34,
    Bip65,
    Bip66,
    Csv,
    Segwit,
    /// OP_SENDER.
    Qip5,
    /// btc_ecrecover precompile.
    Qip6,
    /// Constantinople VM rules.
    Qip7,
    /// Difficulty and PoS limit change.
    Qip9,
    OfflineStaking,
    ReduceBlocktime,
    MuirGlacier,
}

/// Full consensus parameter set of one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusRules {
    // -------------------------------------------------------------------------
    // Subsidy
    // -------------------------------------------------------------------------
    pub subsidy_halving_interval: i32,
    /// Halving interval after the reduced block time height.
    pub subsidy_halving_interval_v2: i32,

    // -------------------------------------------------------------------------
    // Buried activations
    // -------------------------------------------------------------------------
    /// Block exempt from P2SH enforcement.
    pub bip16_exception: Hash256,
    pub bip34_height: i32,
    pub bip34_hash: Hash256,
    pub bip65_height: i32,
    pub bip66_height: i32,
    pub csv_height: i32,
    /// [`DISABLED_HEIGHT`] when segwit is disabled.
    pub segwit_height: i32,
    /// Don't warn about unknown version bits below this height.
    pub min_bip9_warning_height: i32,
    pub qip5_height: i32,
    pub qip6_height: i32,
    pub qip7_height: i32,
    pub qip9_height: i32,
    pub offline_stake_height: i32,
    pub reduce_blocktime_height: i32,
    pub muir_glacier_height: i32,

    // -------------------------------------------------------------------------
    // Version bits
    // -------------------------------------------------------------------------
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub deployments: Deployments,

    // -------------------------------------------------------------------------
    // Difficulty
    // -------------------------------------------------------------------------
    pub pow_limit: U256,
    pub pos_limit: U256,
    pub qip9_pos_limit: U256,
    pub rbt_pos_limit: U256,
    pub pow_target_timespan: i64,
    pub pow_target_timespan_v2: i64,
    pub rbt_pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub rbt_pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub pos_no_retargeting: bool,
    pub minimum_chain_work: U256,
    pub default_assume_valid: Hash256,

    // -------------------------------------------------------------------------
    // Staking and rewards
    // -------------------------------------------------------------------------
    pub blocktime_downscale_factor: u32,
    pub coinbase_maturity: i32,
    pub rbt_coinbase_maturity: i32,
    pub last_pow_block: i32,
    pub last_big_reward: i32,
    pub mpos_reward_recipients: i32,
    pub first_mpos_block: i32,
    pub last_mpos_block: i32,
    pub fix_utxo_cache_hf_height: i32,
    pub enable_header_signature_height: i32,
    pub checkpoint_span: i32,
    pub rbt_checkpoint_span: i32,
    /// Delegations contract used by offline staking.
    pub delegations_address: H160,
    pub stake_timestamp_mask: u32,
    pub rbt_stake_timestamp_mask: u32,
}

/// Activation height of a rule that never activates.
pub const DISABLED_HEIGHT: i32 = i32::MAX;

/// Whether a rule activating at `activation` is in force at `height`.
///
/// Negative heights and [`DISABLED_HEIGHT`] never activate.
pub fn activation_reached(height: BlockHeight, activation: i32) -> bool {
    match u32::try_from(activation) {
        Ok(_) if activation == DISABLED_HEIGHT => false,
        Ok(activation) => height >= activation,
        Err(_) => false,
    }
}

impl ConsensusRules {
    /// Activation height of a buried rule.
    pub fn activation_height(&self, rule: BuriedRule) -> i32 {
        match rule {
            BuriedRule::Bip34 => self.bip34_height,
            BuriedRule::Bip65 => self.bip65_height,
            BuriedRule::Bip66 => self.bip66_height,
            BuriedRule::Csv => self.csv_height,
            BuriedRule::Segwit => self.segwit_height,
            BuriedRule::Qip5 => self.qip5_height,
            BuriedRule::Qip6 => self.qip6_height,
            BuriedRule::Qip7 => self.qip7_height,
            BuriedRule::Qip9 => self.qip9_height,
            BuriedRule::OfflineStaking => self.offline_stake_height,
            BuriedRule::ReduceBlocktime => self.reduce_blocktime_height,
            BuriedRule::MuirGlacier => self.muir_glacier_height,
        }
    }

    pub fn is_active(&self, rule: BuriedRule, height: BlockHeight) -> bool {
        activation_reached(height, self.activation_height(rule))
    }

    fn reduced_blocktime(&self, height: BlockHeight) -> bool {
        self.is_active(BuriedRule::ReduceBlocktime, height)
    }

    /// 1 before the reduced block time height, the network factor after.
    pub fn blocktime_downscale_factor_at(&self, height: BlockHeight) -> u32 {
        if self.reduced_blocktime(height) {
            self.blocktime_downscale_factor
        } else {
            1
        }
    }

    pub fn target_spacing(&self, height: BlockHeight) -> i64 {
        if self.reduced_blocktime(height) {
            self.rbt_pow_target_spacing
        } else {
            self.pow_target_spacing
        }
    }

    pub fn target_timespan(&self, height: BlockHeight) -> i64 {
        if !self.is_active(BuriedRule::Qip9, height) {
            self.pow_target_timespan
        } else if !self.reduced_blocktime(height) {
            self.pow_target_timespan_v2
        } else {
            self.rbt_pow_target_timespan
        }
    }

    /// Blocks between difficulty adjustments.
    pub fn difficulty_adjustment_interval(&self, height: BlockHeight) -> i64 {
        self.target_timespan(height) / self.target_spacing(height)
    }

    pub fn subsidy_halving_interval_at(&self, height: BlockHeight) -> i32 {
        if self.reduced_blocktime(height) {
            self.subsidy_halving_interval_v2
        } else {
            self.subsidy_halving_interval
        }
    }

    pub fn coinbase_maturity_at(&self, height: BlockHeight) -> i32 {
        if self.reduced_blocktime(height) {
            self.rbt_coinbase_maturity
        } else {
            self.coinbase_maturity
        }
    }

    pub fn stake_timestamp_mask_at(&self, height: BlockHeight) -> u32 {
        if self.reduced_blocktime(height) {
            self.rbt_stake_timestamp_mask
        } else {
            self.stake_timestamp_mask
        }
    }

    pub fn checkpoint_span_at(&self, height: BlockHeight) -> i32 {
        if self.reduced_blocktime(height) {
            self.rbt_checkpoint_span
        } else {
            self.checkpoint_span
        }
    }

    /// Proof-of-stake target limit: original, QIP9, then reduced block time.
    pub fn pos_limit_at(&self, height: BlockHeight) -> U256 {
        if !self.is_active(BuriedRule::Qip9, height) {
            self.pos_limit
        } else if !self.reduced_blocktime(height) {
            self.qip9_pos_limit
        } else {
            self.rbt_pos_limit
        }
    }
}
