//! # In-Memory Contract Storage
//!
//! Holds storage maps keyed by contract address. Can be loaded from a JSON
//! snapshot of the form
//!
//! ```json
//! { "0x1dec...": { "0x<slot>": { "current": "0x..", "original": "0x.." } } }
//! ```

use std::collections::HashMap;

use primitive_types::{H160, H256, U256};
use serde::{Deserialize, Serialize};

use crate::domain::{
    address_to_word, checkpoint_entry_slots, checkpoint_list_slot, index_key, pack_entries,
    slot_value, StorageMap, StorageSlot, TEMPLATE_ADDRESS,
};
use crate::ports::ContractStorage;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryStorage {
    contracts: HashMap<H160, StorageMap>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Writes `value` to `slot` of `address`, as both current and original.
    pub fn set_slot(&mut self, address: H160, slot: H256, value: U256) {
        self.contracts
            .entry(address)
            .or_default()
            .insert(slot, StorageSlot::new(value));
    }

    /// Appends a checkpoint to `family`'s list in the template contract.
    pub fn push_checkpoint(&mut self, family: &H160, effective_height: u64, instance: H160) {
        let list_slot = checkpoint_list_slot(family);
        let template = self.contracts.entry(TEMPLATE_ADDRESS).or_default();
        let length = slot_value(template, &list_slot).unwrap_or_default();
        let index = if length > U256::from(usize::MAX) {
            usize::MAX
        } else {
            length.as_usize()
        };

        let (height_slot, instance_slot) = checkpoint_entry_slots(&list_slot, index);
        template.insert(height_slot, StorageSlot::new(U256::from(effective_height)));
        template.insert(instance_slot, StorageSlot::new(address_to_word(&instance)));
        template.insert(list_slot, StorageSlot::new(length.saturating_add(U256::one())));
    }

    /// Stores a single-value parameter in slot 0 of `instance`.
    pub fn set_u64_param(&mut self, instance: H160, value: U256) {
        self.set_slot(instance, index_key(U256::zero()), value);
    }

    /// Stores packed fee schedule entries in `instance`.
    pub fn set_schedule_entries(&mut self, instance: H160, entries: &[u32]) {
        for (slot, word) in pack_entries(entries).into_iter().enumerate() {
            self.set_slot(instance, index_key(U256::from(slot)), word);
        }
    }

    pub fn contract_count(&self) -> usize {
        self.contracts.len()
    }
}

impl ContractStorage for InMemoryStorage {
    fn read_storage(&self, address: &H160) -> StorageMap {
        self.contracts.get(address).cloned().unwrap_or_default()
    }
}
