//! Contract storage values.

use std::collections::BTreeMap;

use primitive_types::{H256, U256};
use serde::{Deserialize, Serialize};

/// One storage slot: the value now and the value at the start of the
/// transaction. The resolver reads `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StorageSlot {
    pub current: U256,
    pub original: U256,
}

impl StorageSlot {
    pub fn new(value: U256) -> Self {
        Self {
            current: value,
            original: value,
        }
    }
}

/// Populated slots of one contract, keyed by raw 256-bit slot key.
pub type StorageMap = BTreeMap<H256, StorageSlot>;

/// Current value of `key`, or `None` when the slot was never written.
pub fn slot_value(storage: &StorageMap, key: &H256) -> Option<U256> {
    storage.get(key).map(|slot| slot.current)
}

/// Slot key of a plain integer index.
pub fn index_key(index: U256) -> H256 {
    let mut bytes = [0u8; 32];
    index.to_big_endian(&mut bytes);
    H256(bytes)
}
