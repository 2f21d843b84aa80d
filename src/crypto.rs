//! Cryptographic primitives for ChainLedger
//!
//! The ledger binds each block to its contents (and, through
//! `previous_hash`, to the whole chain before it) with a single SHA-256
//! digest. The digest is a pure function of the block fields; all
//! non-determinism in stored hashes comes from wall-clock timestamps.

use crate::error::ChainError;
use sha2::{Digest, Sha256};

/// Number of hex characters in an encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Computes the digest binding a block to its contents.
///
/// The input is the concatenation, in fixed order, of the decimal
/// timestamp, the payload, and the predecessor's hex digest. The order is
/// load-bearing: reordering would produce different (but equally valid)
/// chains, so it must stay stable across versions.
pub fn block_digest(timestamp: i64, payload: &str, previous_hash: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(timestamp.to_string().as_bytes());
    hasher.update(payload.as_bytes());
    hasher.update(previous_hash.as_bytes());
    hex::encode(hasher.finalize())
}

/// Parses a hex digest back into raw bytes, for callers that want to store
/// or compare digests compactly. The chain walk itself compares digests as
/// opaque strings and never needs this.
pub fn parse_digest(hex_str: &str) -> Result<[u8; 32], ChainError> {
    let bytes = hex::decode(hex_str)
        .map_err(|e| ChainError::CryptoError(format!("Invalid hex digest: {}", e)))?;
    if bytes.len() != 32 {
        return Err(ChainError::CryptoError(format!(
            "Digest must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    bytes
        .try_into()
        .map_err(|_| ChainError::CryptoError("Failed to convert bytes into digest".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = block_digest(1_700_000_000, "hello", "");
        let b = block_digest(1_700_000_000, "hello", "");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_shape() {
        let digest = block_digest(1_700_000_000, "hello", "");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_sensitive_to_every_field() {
        let base = block_digest(1_700_000_000, "hello", "abc");
        assert_ne!(base, block_digest(1_700_000_001, "hello", "abc"));
        assert_ne!(base, block_digest(1_700_000_000, "hellO", "abc"));
        assert_ne!(base, block_digest(1_700_000_000, "hello", "abd"));
    }

    #[test]
    fn test_empty_payload_is_hashable() {
        let digest = block_digest(0, "", "");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
    }

    #[test]
    fn test_parse_digest_roundtrip() {
        let digest = block_digest(42, "payload", "");
        let bytes = parse_digest(&digest).unwrap();
        assert_eq!(hex::encode(bytes), digest);
    }

    #[test]
    fn test_parse_digest_rejects_bad_input() {
        assert!(parse_digest("not hex").is_err());
        // Valid hex, wrong length
        let result = parse_digest("abcd");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Digest must be 32 bytes"));
    }
}
