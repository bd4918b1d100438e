//! # Parameter Checkpoints
//!
//! Each family has a list of `(effective_height, instance_address)` entries
//! in the template contract. The instance in force at a height is the one
//! with the greatest effective height not above it.

use std::collections::BTreeMap;

use primitive_types::{H160, U256};
use tracing::trace;

use super::layout::{checkpoint_array_base, checkpoint_list_slot, word_to_address};
use super::storage::{slot_value, StorageMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamsCheckpoint {
    pub effective_height: u64,
    pub instance: H160,
}

/// Reads `family`'s checkpoint list from the template contract's storage,
/// in list order.
///
/// The whole list is read. Entries are located by scanning the populated
/// slots, so the cost is bounded by the storage size rather than the stored
/// length. Entries with a missing slot are skipped and heights above
/// `u64::MAX` saturate.
pub fn read_checkpoints(template: &StorageMap, family: &H160) -> Vec<ParamsCheckpoint> {
    let list_slot = checkpoint_list_slot(family);
    let Some(length) = slot_value(template, &list_slot) else {
        return Vec::new();
    };
    let base = checkpoint_array_base(&list_slot);
    let span = length.saturating_mul(U256::from(2u8));

    let mut entries: BTreeMap<U256, (Option<U256>, Option<U256>)> = BTreeMap::new();
    for (key, slot) in template {
        let offset = U256::from_big_endian(key.as_bytes()).overflowing_sub(base).0;
        if offset >= span {
            continue;
        }
        let entry = entries.entry(offset >> 1).or_default();
        if offset.bit(0) {
            entry.1 = Some(slot.current);
        } else {
            entry.0 = Some(slot.current);
        }
    }

    entries
        .into_iter()
        .filter_map(|(index, entry)| match entry {
            (Some(height), Some(instance)) => Some(ParamsCheckpoint {
                effective_height: if height > U256::from(u64::MAX) {
                    u64::MAX
                } else {
                    height.as_u64()
                },
                instance: word_to_address(instance),
            }),
            _ => {
                trace!(%family, %index, "Incomplete checkpoint skipped");
                None
            }
        })
        .collect()
}

/// Instance whose checkpoint is the greatest effective height `<= height`.
///
/// Later entries win ties. A zero instance address means "no instance".
pub fn select_instance(checkpoints: &[ParamsCheckpoint], height: u64) -> Option<H160> {
    checkpoints
        .iter()
        .enumerate()
        .filter(|(_, cp)| cp.effective_height <= height)
        .max_by_key(|(index, cp)| (cp.effective_height, *index))
        .map(|(_, cp)| cp.instance)
        .filter(|instance| !instance.is_zero())
}
