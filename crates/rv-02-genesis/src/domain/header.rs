//! Block header.
//!
//! Besides the classic fields the header commits to the VM state root and
//! UTXO root, and carries the proof-of-stake prevout and block signature
//! (null and empty for proof-of-work blocks).

use shared_types::{encode_var_bytes, sha256d, Hash256};

use super::encode::Encodable;
use super::transaction::OutPoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    pub state_root: Hash256,
    pub utxo_root: Hash256,
    pub prevout_stake: OutPoint,
    pub block_sig: Vec<u8>,
}

impl BlockHeader {
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.serialize())
    }

    pub fn is_proof_of_stake(&self) -> bool {
        !self.prevout_stake.is_null()
    }
}

impl Encodable for BlockHeader {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        self.prev_block_hash.encode(out);
        self.merkle_root.encode(out);
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
        self.state_root.encode(out);
        self.utxo_root.encode(out);
        self.prevout_stake.encode(out);
        encode_var_bytes(&self.block_sig, out);
    }
}
