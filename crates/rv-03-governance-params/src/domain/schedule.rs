//! # VM Fee Schedule
//!
//! Gas costs charged by the contract VM. Thirty-nine entries are governed
//! on-chain; the rest are fixed per fork.
//!
//! ## Fork Defaults
//!
//! | Fork             | Activated at             | Changes                                  |
//! |------------------|--------------------------|------------------------------------------|
//! | EIP158           | genesis                  | base table                               |
//! | Constantinople   | QIP7 height              | CREATE2, EXTCODEHASH, bitwise shifting   |
//! | Istanbul         | Muir Glacier height      | SLOAD 800, BALANCE 700, non-zero data 16 |
//!
//! ## Storage Encoding
//!
//! An instance contract packs the entries as eight `u32` per slot in slots
//! `0..=4`, lowest-order bits first. Entry `i` lives in slot `i / 8` at bit
//! offset `32 * (i % 8)`.

use primitive_types::U256;
use rv_01_network_params::activation_reached;
use serde::Serialize;
use shared_types::BlockHeight;
use tracing::trace;

use super::storage::{index_key, slot_value, StorageMap};

/// Number of governed entries.
pub const SCHEDULE_ENTRIES: usize = 39;

/// Entries packed into one storage word.
pub const ENTRIES_PER_SLOT: usize = 8;

/// Storage slots spanned by the packed schedule.
pub const SCHEDULE_SLOTS: usize = SCHEDULE_ENTRIES.div_ceil(ENTRIES_PER_SLOT);

/// Activation heights of the forks that change the default schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleForks {
    pub constantinople_height: i32,
    pub istanbul_height: i32,
}

impl ScheduleForks {
    pub fn new(constantinople_height: i32, istanbul_height: i32) -> Self {
        Self {
            constantinople_height,
            istanbul_height,
        }
    }

    /// Default schedule in force at `height`.
    pub fn default_at(&self, height: BlockHeight) -> FeeSchedule {
        if activation_reached(height, self.istanbul_height) {
            FeeSchedule::istanbul()
        } else if activation_reached(height, self.constantinople_height) {
            FeeSchedule::constantinople()
        } else {
            FeeSchedule::eip158()
        }
    }
}

/// Full fee schedule: governed entries, fixed constants and fork flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSchedule {
    // Governed entries, in storage order.
    pub tier_step_gas: [u32; 8],
    pub exp_gas: u32,
    pub exp_byte_gas: u32,
    pub sha3_gas: u32,
    pub sha3_word_gas: u32,
    pub sload_gas: u32,
    pub sstore_set_gas: u32,
    pub sstore_reset_gas: u32,
    pub sstore_refund_gas: u32,
    pub jumpdest_gas: u32,
    pub log_gas: u32,
    pub log_data_gas: u32,
    pub log_topic_gas: u32,
    pub create_gas: u32,
    pub call_gas: u32,
    pub call_stipend: u32,
    pub call_value_transfer_gas: u32,
    pub call_new_account_gas: u32,
    pub suicide_refund_gas: u32,
    pub memory_gas: u32,
    pub quad_coeff_div: u32,
    pub create_data_gas: u32,
    pub tx_gas: u32,
    pub tx_create_gas: u32,
    pub tx_data_zero_gas: u32,
    pub tx_data_non_zero_gas: u32,
    pub copy_gas: u32,
    pub extcodesize_gas: u32,
    pub extcodecopy_gas: u32,
    pub balance_gas: u32,
    pub suicide_gas: u32,
    pub max_code_size: u32,

    // Fixed per fork.
    pub stack_limit: u32,
    pub max_call_depth: u32,
    pub blockhash_gas: u32,
    pub extcodehash_gas: u32,
    pub self_balance_gas: u32,

    pub have_create2: bool,
    pub have_extcodehash: bool,
    pub have_bitwise_shifting: bool,
    pub have_chain_id: bool,
    pub have_self_balance: bool,
    pub eip2200_mode: bool,
}

impl FeeSchedule {
    /// Base table in force from genesis.
    pub const fn eip158() -> Self {
        Self {
            tier_step_gas: [0, 2, 3, 5, 8, 10, 20, 0],
            exp_gas: 10,
            exp_byte_gas: 50,
            sha3_gas: 30,
            sha3_word_gas: 6,
            sload_gas: 200,
            sstore_set_gas: 20_000,
            sstore_reset_gas: 5_000,
            sstore_refund_gas: 15_000,
            jumpdest_gas: 1,
            log_gas: 375,
            log_data_gas: 8,
            log_topic_gas: 375,
            create_gas: 32_000,
            call_gas: 700,
            call_stipend: 2_300,
            call_value_transfer_gas: 9_000,
            call_new_account_gas: 25_000,
            suicide_refund_gas: 24_000,
            memory_gas: 3,
            quad_coeff_div: 512,
            create_data_gas: 200,
            tx_gas: 21_000,
            tx_create_gas: 53_000,
            tx_data_zero_gas: 4,
            tx_data_non_zero_gas: 68,
            copy_gas: 3,
            extcodesize_gas: 700,
            extcodecopy_gas: 700,
            balance_gas: 400,
            suicide_gas: 5_000,
            max_code_size: 24_576,
            stack_limit: 1024,
            max_call_depth: 1024,
            blockhash_gas: 20,
            extcodehash_gas: 400,
            self_balance_gas: 5,
            have_create2: false,
            have_extcodehash: false,
            have_bitwise_shifting: false,
            have_chain_id: false,
            have_self_balance: false,
            eip2200_mode: false,
        }
    }

    pub const fn constantinople() -> Self {
        let mut schedule = Self::eip158();
        schedule.have_create2 = true;
        schedule.have_extcodehash = true;
        schedule.have_bitwise_shifting = true;
        schedule
    }

    pub const fn istanbul() -> Self {
        let mut schedule = Self::constantinople();
        schedule.sload_gas = 800;
        schedule.balance_gas = 700;
        schedule.tx_data_non_zero_gas = 16;
        schedule.extcodehash_gas = 700;
        schedule.have_chain_id = true;
        schedule.have_self_balance = true;
        schedule.eip2200_mode = true;
        schedule
    }

    /// Governed entries in storage order.
    pub fn to_entries(&self) -> [u32; SCHEDULE_ENTRIES] {
        let t = &self.tier_step_gas;
        [
            t[0],
            t[1],
            t[2],
            t[3],
            t[4],
            t[5],
            t[6],
            t[7],
            self.exp_gas,
            self.exp_byte_gas,
            self.sha3_gas,
            self.sha3_word_gas,
            self.sload_gas,
            self.sstore_set_gas,
            self.sstore_reset_gas,
            self.sstore_refund_gas,
            self.jumpdest_gas,
            self.log_gas,
            self.log_data_gas,
            self.log_topic_gas,
            self.create_gas,
            self.call_gas,
            self.call_stipend,
            self.call_value_transfer_gas,
            self.call_new_account_gas,
            self.suicide_refund_gas,
            self.memory_gas,
            self.quad_coeff_div,
            self.create_data_gas,
            self.tx_gas,
            self.tx_create_gas,
            self.tx_data_zero_gas,
            self.tx_data_non_zero_gas,
            self.copy_gas,
            self.extcodesize_gas,
            self.extcodecopy_gas,
            self.balance_gas,
            self.suicide_gas,
            self.max_code_size,
        ]
    }

    /// Copy of `self` with the governed entries replaced by `entries`.
    /// Fixed constants and fork flags are kept.
    pub fn with_entries(&self, entries: &[u32; SCHEDULE_ENTRIES]) -> Self {
        let e = entries;
        Self {
            tier_step_gas: [e[0], e[1], e[2], e[3], e[4], e[5], e[6], e[7]],
            exp_gas: e[8],
            exp_byte_gas: e[9],
            sha3_gas: e[10],
            sha3_word_gas: e[11],
            sload_gas: e[12],
            sstore_set_gas: e[13],
            sstore_reset_gas: e[14],
            sstore_refund_gas: e[15],
            jumpdest_gas: e[16],
            log_gas: e[17],
            log_data_gas: e[18],
            log_topic_gas: e[19],
            create_gas: e[20],
            call_gas: e[21],
            call_stipend: e[22],
            call_value_transfer_gas: e[23],
            call_new_account_gas: e[24],
            suicide_refund_gas: e[25],
            memory_gas: e[26],
            quad_coeff_div: e[27],
            create_data_gas: e[28],
            tx_gas: e[29],
            tx_create_gas: e[30],
            tx_data_zero_gas: e[31],
            tx_data_non_zero_gas: e[32],
            copy_gas: e[33],
            extcodesize_gas: e[34],
            extcodecopy_gas: e[35],
            balance_gas: e[36],
            suicide_gas: e[37],
            max_code_size: e[38],
            ..*self
        }
    }

    /// Decodes governed entries from an instance's storage on top of `self`
    /// as the default.
    ///
    /// Missing slots keep their defaults. Each entry outside
    /// [`entry_bounds`] of its default is replaced by that default alone.
    pub fn overlay_storage(&self, storage: &StorageMap) -> Self {
        let defaults = self.to_entries();
        let mut entries = defaults;

        for slot in 0..SCHEDULE_SLOTS {
            let Some(word) = slot_value(storage, &index_key(U256::from(slot))) else {
                continue;
            };
            for lane in 0..ENTRIES_PER_SLOT {
                let index = slot * ENTRIES_PER_SLOT + lane;
                if index >= SCHEDULE_ENTRIES {
                    break;
                }
                let value = ((word >> (32 * lane)).low_u64() & u64::from(u32::MAX)) as u32;
                let (min, max) = entry_bounds(defaults[index]);
                if (min..=max).contains(&u64::from(value)) {
                    entries[index] = value;
                } else {
                    trace!(index, value, min, max, "Fee schedule entry out of range");
                }
            }
        }

        self.with_entries(&entries)
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self::eip158()
    }
}

/// Inclusive range a governed entry may take, derived from its default:
/// `[default / 100, default * 1000]`, with a floor of 1 and a ceiling of
/// 1000 when those come out as zero.
pub fn entry_bounds(default: u32) -> (u64, u64) {
    let default = u64::from(default);
    let max = match default * 1000 {
        0 => 1000,
        max => max,
    };
    let min = match default / 100 {
        0 => 1,
        min => min,
    };
    (min, max)
}

/// Packs entries into the storage words read by [`FeeSchedule::overlay_storage`].
pub fn pack_entries(entries: &[u32]) -> Vec<U256> {
    entries
        .chunks(ENTRIES_PER_SLOT)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(U256::zero(), |word, (lane, value)| {
                    word | (U256::from(*value) << (32 * lane))
                })
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
