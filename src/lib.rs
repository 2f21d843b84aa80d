//! ChainLedger - A minimal tamper-evident chained-hash ledger
//!
//! Every block stores a SHA-256 digest of its own contents and the digest
//! of the block before it, so any after-the-fact edit to a historical
//! block is detectable by a single linear walk. This is the core idea of a
//! blockchain, stripped of consensus, networking, and persistence — the
//! chain lives in memory for one process run.
//!
//! # Architecture
//!
//! The crate is organized into logical modules:
//!
//! ## Core Ledger
//! - [`ledger`] - Block structure, genesis creation, append, validation
//!
//! ## Cryptography
//! - [`crypto`] - The block digest function (SHA-256, hex-encoded)
//!
//! ## Configuration & Utilities
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//! - [`cli`] - Helpers shared by the binaries

#![forbid(unsafe_code)]

// ============================================================================
// Core Ledger
// ============================================================================
pub mod ledger;

// ============================================================================
// Cryptography
// ============================================================================
pub mod crypto;

// ============================================================================
// Configuration & Utilities
// ============================================================================
pub mod cli;
pub mod config;
pub mod error;
