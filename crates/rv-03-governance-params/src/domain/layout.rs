//! # Storage Layout
//!
//! Fixed contract addresses and the slot arithmetic used to locate
//! parameter checkpoints in the template contract.
//!
//! The template stores `mapping(address => Checkpoint[])` at slot 0, keyed by
//! family address, where `Checkpoint { uint256 height; address instance; }`
//! occupies two slots:
//!
//! ```text
//! list    = keccak256(pad32(family) ++ pad32(0))   // holds the length
//! base    = keccak256(list)
//! entry i = base + 2i (height), base + 2i + 1 (instance)
//! ```

use primitive_types::{H160, H256, U256};
use sha3::{Digest, Keccak256};
use shared_types::h160_from_hex;

use super::storage::index_key;

/// VM fee schedule family.
pub const GAS_SCHEDULE_ADDRESS: H160 = h160_from_hex("0000000000000000000000000000000000000080");
/// Maximum block size family.
pub const BLOCK_SIZE_ADDRESS: H160 = h160_from_hex("0000000000000000000000000000000000000081");
/// Minimum gas price family.
pub const GAS_PRICE_ADDRESS: H160 = h160_from_hex("0000000000000000000000000000000000000082");
/// Block gas limit family.
pub const BLOCK_GAS_LIMIT_ADDRESS: H160 = h160_from_hex("0000000000000000000000000000000000000084");
/// Contract holding every family's checkpoint list.
pub const TEMPLATE_ADDRESS: H160 = h160_from_hex("1dec34568a9476915caacee2adccf29c79b58a7f");

/// Slot of the mapping in the template contract.
const CHECKPOINT_MAPPING_SLOT: u64 = 0;

fn keccak(data: &[u8]) -> H256 {
    H256(Keccak256::digest(data).into())
}

/// Slot holding the length of `family`'s checkpoint list.
pub fn checkpoint_list_slot(family: &H160) -> H256 {
    let mut preimage = [0u8; 64];
    preimage[12..32].copy_from_slice(family.as_bytes());
    preimage[32..].copy_from_slice(index_key(U256::from(CHECKPOINT_MAPPING_SLOT)).as_bytes());
    keccak(&preimage)
}

/// First slot of the checkpoint array whose length lives at `list_slot`.
pub fn checkpoint_array_base(list_slot: &H256) -> U256 {
    U256::from_big_endian(keccak(list_slot.as_bytes()).as_bytes())
}

/// Slots of checkpoint `index`: `(height, instance)`.
pub fn checkpoint_entry_slots(list_slot: &H256, index: usize) -> (H256, H256) {
    let base = checkpoint_array_base(list_slot);
    let offset = U256::from(index).overflowing_mul(U256::from(2u8)).0;
    let height = base.overflowing_add(offset).0;
    let instance = height.overflowing_add(U256::one()).0;
    (index_key(height), index_key(instance))
}

/// Low 160 bits of a storage word.
pub fn word_to_address(word: U256) -> H160 {
    let mut bytes = [0u8; 32];
    word.to_big_endian(&mut bytes);
    H160::from_slice(&bytes[12..])
}

pub fn address_to_word(address: &H160) -> U256 {
    U256::from_big_endian(address.as_bytes())
}

/// Every governed family.
pub const FAMILIES: [H160; 4] = [
    GAS_SCHEDULE_ADDRESS,
    BLOCK_SIZE_ADDRESS,
    GAS_PRICE_ADDRESS,
    BLOCK_GAS_LIMIT_ADDRESS,
];
