//! Error types for ChainLedger

use std::fmt;

#[derive(Debug, Clone)]
pub enum ChainError {
    /// A block's `previous_hash` does not match the hash stored on the
    /// block before it. Carries the offending height and both digests.
    BrokenLink {
        height: usize,
        expected: String,
        found: String,
    },
    /// A block's stored hash does not match the digest recomputed from
    /// its own fields, i.e. the block contents were altered after linking.
    HashMismatch {
        height: usize,
        expected: String,
        found: String,
    },
    CryptoError(String),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::BrokenLink {
                height,
                expected,
                found,
            } => write!(
                f,
                "Broken link at block {}: expected previous hash {}, but got {}",
                height, expected, found
            ),
            ChainError::HashMismatch {
                height,
                expected,
                found,
            } => write!(
                f,
                "Hash mismatch at block {}: recomputed {}, but stored {}",
                height, expected, found
            ),
            ChainError::CryptoError(msg) => write!(f, "Cryptographic error: {}", msg),
            ChainError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ChainError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;
