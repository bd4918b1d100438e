//! # Genesis Block Builder
//!
//! Assembles the genesis block of a network from its profile and checks it
//! against the pinned hash and merkle root.
//!
//! ## Layout
//!
//! ```text
//! coinbase: 1 input  (null prevout, scriptSig = OP_0 <488804799> <4> <message>)
//!           1 output (reward → <pubkey> OP_CHECKSIG)
//! header:   version | prev = 0 | merkle | time | bits | nonce
//!           | state root | UTXO root | null stake prevout | empty signature
//! ```

use rv_01_network_params::{GenesisSpec, NetworkId, NetworkProfile};
use shared_types::{decode_hex_array, Amount, Hash256};
use tracing::{error, info};

use crate::domain::script::opcodes::OP_0;
use crate::domain::{meets_target, BlockHeader, GenesisBlock, OutPoint, Script, Transaction, TxIn, TxOut};
use crate::errors::{GenesisError, PinnedValue, Result};

/// Headline embedded in the coinbase.
pub const GENESIS_MESSAGE: &str =
    "Mar 19, 2021 Bitcoin is now \u{2018}too important to ignore\u{2019}, Deutsche Bank says";

/// Uncompressed public key receiving the genesis reward.
pub const GENESIS_REWARD_PUBKEY: [u8; 65] = decode_hex_array(
    "040d61d8653448c98731ee5fffd303c15e71ec2057b77f11ab3601979728cdaff2\
     d68afbba14e4fa0bc44f2072b0b23ef63717f8cdfbe58dcd33f32b6afe98741a",
);

/// VM state root committed by the genesis header.
pub const GENESIS_STATE_ROOT: Hash256 =
    Hash256::from_byte_hex("e965ffd002cd6ad0e2dc402b8044de833e06b23127ea8c3d80aec91410771495");

/// Empty Patricia trie root, keccak256(rlp("")).
pub const EMPTY_UTXO_ROOT: Hash256 =
    Hash256::from_byte_hex("56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421");

/// Number pushed first in the coinbase scriptSig.
const COINBASE_SCRIPT_NUM: i64 = 488_804_799;

/// Everything that determines a genesis block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisInputs {
    pub message: Vec<u8>,
    pub reward_script: Script,
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: Amount,
}

impl GenesisInputs {
    /// Standard message and reward script with a network's header fields.
    pub fn from_spec(spec: &GenesisSpec) -> Self {
        Self {
            message: GENESIS_MESSAGE.as_bytes().to_vec(),
            reward_script: Script::pay_to_pubkey(&GENESIS_REWARD_PUBKEY),
            time: spec.time,
            nonce: spec.nonce,
            bits: spec.bits,
            version: spec.version,
            reward: spec.reward,
        }
    }
}

/// Builds genesis blocks from [`GenesisInputs`].
#[derive(Debug, Clone)]
pub struct GenesisBuilder {
    inputs: GenesisInputs,
}

impl GenesisBuilder {
    pub fn new(inputs: GenesisInputs) -> Self {
        Self { inputs }
    }

    pub fn for_profile(profile: &NetworkProfile) -> Self {
        Self::new(GenesisInputs::from_spec(profile.genesis()))
    }

    pub fn inputs(&self) -> &GenesisInputs {
        &self.inputs
    }

    pub fn with_time(mut self, time: u32) -> Self {
        self.inputs.time = time;
        self
    }

    pub fn with_nonce(mut self, nonce: u32) -> Self {
        self.inputs.nonce = nonce;
        self
    }

    pub fn coinbase(&self) -> Transaction {
        let script_sig = Script::builder()
            .push_opcode(OP_0)
            .push_int(COINBASE_SCRIPT_NUM)
            .push_script_num(4)
            .push_slice(&self.inputs.message)
            .into_script();

        Transaction {
            version: 1,
            inputs: vec![TxIn {
                prevout: OutPoint::NULL,
                script_sig,
                sequence: u32::MAX,
            }],
            outputs: vec![TxOut {
                value: self.inputs.reward,
                script_pubkey: self.inputs.reward_script.clone(),
            }],
            lock_time: 0,
        }
    }

    pub fn build(&self) -> GenesisBlock {
        let coinbase = self.coinbase();
        let header = BlockHeader {
            version: self.inputs.version,
            prev_block_hash: Hash256::ZERO,
            // Single leaf: the root is the coinbase txid.
            merkle_root: coinbase.txid(),
            time: self.inputs.time,
            bits: self.inputs.bits,
            nonce: self.inputs.nonce,
            state_root: GENESIS_STATE_ROOT,
            utxo_root: EMPTY_UTXO_ROOT,
            prevout_stake: OutPoint::NULL,
            block_sig: Vec::new(),
        };
        GenesisBlock {
            header,
            transactions: vec![coinbase],
        }
    }
}

/// Rebuilds the genesis block of `profile` and checks it against the pins.
pub fn build_verified(profile: &NetworkProfile) -> Result<GenesisBlock> {
    let block = GenesisBuilder::for_profile(profile).build();
    verify(profile.id(), profile.genesis(), &block)?;
    info!(network = %profile.id(), hash = %block.hash(), "Genesis block verified");
    Ok(block)
}

/// Checks `block` against the merkle root and hash pinned in `spec`, then
/// checks that its hash meets the target in its own header.
pub fn verify(network: NetworkId, spec: &GenesisSpec, block: &GenesisBlock) -> Result<()> {
    check_pin(network, PinnedValue::MerkleRoot, spec.expected_merkle_root, block.header.merkle_root)?;
    let hash = block.hash();
    check_pin(network, PinnedValue::BlockHash, spec.expected_hash, hash)?;
    let bits = block.header.bits;
    if !meets_target(&hash, bits)? {
        error!(%network, %hash, bits, "Genesis block does not meet its target");
        return Err(GenesisError::InsufficientWork { network, hash, bits });
    }
    Ok(())
}

fn check_pin(network: NetworkId, value: PinnedValue, expected: Hash256, actual: Hash256) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    error!(%network, %value, %expected, %actual, "Genesis block does not match pinned value");
    Err(GenesisError::ConsensusFatalMismatch {
        network,
        value,
        expected,
        actual,
    })
}
