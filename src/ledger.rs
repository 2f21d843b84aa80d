//! The chained-hash ledger: blocks, genesis creation, append, validation.
//!
//! A `Ledger` is an in-memory, append-only sequence of blocks. Each block
//! stores the hash of its predecessor, so altering any historical block
//! (payload, timestamp, or link) breaks every digest comparison from that
//! point on. That tamper-evidence is the whole point of the structure;
//! there is no consensus, no persistence, and no networking here.

use crate::crypto::block_digest;
use crate::error::ChainError;

/// Payload of the first block when the caller does not choose one.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Block {
    /// Seconds since the Unix epoch at creation time. Never mutated after
    /// the block is linked.
    pub timestamp: i64,
    /// Arbitrary caller-supplied text. Empty payloads are permitted.
    pub payload: String,
    /// Hex digest of the predecessor block; empty string for genesis.
    pub previous_hash: String,
    /// Hex digest of `(timestamp, payload, previous_hash)`.
    pub hash: String,
}

impl Block {
    /// Creates a block linked to `previous_hash`, stamped with the current
    /// wall-clock time. Hashes are therefore not reproducible across runs
    /// even for identical payload sequences; tests must assert structure,
    /// not literal digests.
    pub fn new(payload: impl Into<String>, previous_hash: impl Into<String>) -> Self {
        let timestamp = chrono::Utc::now().timestamp();
        let payload = payload.into();
        let previous_hash = previous_hash.into();
        let hash = block_digest(timestamp, &payload, &previous_hash);

        Block {
            timestamp,
            payload,
            previous_hash,
            hash,
        }
    }

    /// Recomputes this block's digest from its stored fields. Equal to
    /// `self.hash` for an untampered block.
    pub fn computed_hash(&self) -> String {
        block_digest(self.timestamp, &self.payload, &self.previous_hash)
    }

    /// Whether this block is a genesis block (no predecessor).
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_empty()
    }
}

/// An append-only chain of blocks. Index 0 is always the genesis block;
/// insertion order is chain order.
///
/// Single-writer, single-reader: no internal locking. Callers that need
/// shared access must serialize externally.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Ledger {
    pub blocks: Vec<Block>,
}

impl Ledger {
    /// Creates a ledger containing exactly one genesis block with the
    /// default sentinel payload.
    pub fn new() -> Self {
        Self::with_genesis(GENESIS_PAYLOAD)
    }

    /// Creates a ledger whose genesis block carries a caller-chosen payload.
    pub fn with_genesis(payload: &str) -> Self {
        Ledger {
            blocks: vec![Block::new(payload, "")],
        }
    }

    /// Appends a new block carrying `payload`, linked to the current tip.
    ///
    /// Chain length grows by exactly one. Total over its inputs: empty
    /// payloads are fine and there is nothing to reject.
    pub fn append(&mut self, payload: impl Into<String>) {
        // A ledger always holds at least the genesis block, so the tip
        // exists by construction.
        let previous_hash = self
            .blocks
            .last()
            .map(|block| block.hash.clone())
            .unwrap_or_default();
        self.blocks.push(Block::new(payload, previous_hash));
    }

    /// Full-chain integrity check, reporting the first violation found.
    ///
    /// Walks adjacent pairs from index 1 and fails fast on the first of:
    /// a `previous_hash` that does not match the predecessor's stored
    /// hash, or a stored hash that does not match the digest recomputed
    /// from the block's own fields. The genesis block is never checked
    /// against a predecessor, so a chain of length 1 is trivially intact.
    pub fn check_integrity(&self) -> Result<(), ChainError> {
        for height in 1..self.blocks.len() {
            let previous = &self.blocks[height - 1];
            let current = &self.blocks[height];

            if current.previous_hash != previous.hash {
                return Err(ChainError::BrokenLink {
                    height,
                    expected: previous.hash.clone(),
                    found: current.previous_hash.clone(),
                });
            }

            let recomputed = current.computed_hash();
            if recomputed != current.hash {
                return Err(ChainError::HashMismatch {
                    height,
                    expected: recomputed,
                    found: current.hash.clone(),
                });
            }
        }
        Ok(())
    }

    /// Boolean form of [`check_integrity`](Self::check_integrity): true iff
    /// every block links to its predecessor and matches its own digest.
    pub fn validate(&self) -> bool {
        self.check_integrity().is_ok()
    }

    /// Number of blocks in the chain, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The most recently appended block.
    pub fn tip(&self) -> Option<&Block> {
        self.blocks.last()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
