//! Genesis block value.

use serde::Serialize;
use shared_types::{Amount, Hash256};

use super::header::BlockHeader;
use super::transaction::{merkle_root, Transaction};

/// A header plus its transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlock {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl GenesisBlock {
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Merkle root recomputed from the transactions.
    pub fn compute_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        merkle_root(&txids)
    }

    pub fn coinbase(&self) -> Option<&Transaction> {
        self.transactions.first().filter(|tx| tx.is_coinbase())
    }

    pub fn summary(&self) -> GenesisSummary {
        GenesisSummary {
            hash: self.hash(),
            merkle_root: self.header.merkle_root,
            time: self.header.time,
            nonce: self.header.nonce,
            bits: self.header.bits,
            version: self.header.version,
            reward: self
                .coinbase()
                .map(|tx| tx.outputs.iter().map(|o| o.value).sum())
                .unwrap_or_default(),
        }
    }
}

/// Printable description of a genesis block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisSummary {
    pub hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: Amount,
}
