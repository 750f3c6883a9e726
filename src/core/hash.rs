//! Hash utilities for Merkleseal
//!
//! Interior nodes are hashed over the *hex text* of their children, not the
//! raw digest bytes. Existing roots, proofs and signatures depend on this.

use crate::core::types::Hash;
use sha2::{Digest, Sha256};

/// Compute SHA-256 hash of data
pub fn sha256(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Hash::from_bytes(hasher.finalize().into())
}

/// Digest stored for a leaf: `H(data)`
pub fn hash_leaf(data: &[u8]) -> Hash {
    sha256(data)
}

/// Parent of two nodes: `H(hex(left) || hex(right))`
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left.to_hex().as_bytes());
    hasher.update(right.to_hex().as_bytes());
    Hash::from_bytes(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(
            sha256(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_leaf(b"a").to_hex(),
            "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb"
        );
    }

    #[test]
    fn test_hash_pair_hashes_hex_text() {
        let left = hash_leaf(b"a");
        let right = hash_leaf(b"b");
        let text = format!("{}{}", left.to_hex(), right.to_hex());
        assert_eq!(hash_pair(&left, &right), sha256(text.as_bytes()));

        let mut raw = left.as_bytes().to_vec();
        raw.extend_from_slice(right.as_bytes());
        assert_ne!(hash_pair(&left, &right), sha256(&raw));
    }

    #[test]
    fn test_hash_pair_order_matters() {
        let first = sha256(b"first");
        let second = sha256(b"second");
        assert_ne!(hash_pair(&first, &second), hash_pair(&second, &first));
    }
}
