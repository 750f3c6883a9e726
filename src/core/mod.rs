//! Core types and utilities for Merkleseal
//!
//! This module contains the digest type, error handling,
//! and the hash function used throughout the system.

pub mod error;
pub mod hash;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SealError};
pub use hash::{hash_leaf, hash_pair, sha256};
pub use types::{Hash, HASH_HEX_LEN};
