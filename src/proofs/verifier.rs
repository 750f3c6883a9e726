//! Proof verification
//!
//! Verification never fails loudly. Malformed text, unknown tags and digest
//! mismatches all come back as `false`; the cause is only logged.

use crate::core::hash::{hash_leaf, hash_pair};
use crate::proofs::proof::{Proof, ProofPosition};
use tracing::debug;

/// Check that `leaf_data` is committed to by `proof.root`
pub fn verify_proof(leaf_data: &[u8], proof: &Proof) -> bool {
    let mut running = hash_leaf(leaf_data);
    for element in &proof.path {
        running = match element.position {
            ProofPosition::Left => hash_pair(&element.hash, &running),
            ProofPosition::Right => hash_pair(&running, &element.hash),
        };
    }

    let matches = running == proof.root;
    if !matches {
        debug!(expected = %proof.root, computed = %running, "proof does not reach root");
    }
    matches
}

/// Parse a proof in text form and verify it
pub fn verify_proof_text(leaf_data: &[u8], proof_text: &str) -> bool {
    match proof_text.parse::<Proof>() {
        Ok(proof) => verify_proof(leaf_data, &proof),
        Err(e) => {
            debug!(error = %e, "rejecting unparseable proof");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash::hash_leaf;
    use crate::proofs::proof::create_proof;

    const FIVE: [&str; 5] = ["alpha", "beta", "gamma", "delta", "epsilon"];

    fn five_leaves() -> Vec<crate::core::types::Hash> {
        FIVE.iter().map(|v| hash_leaf(v.as_bytes())).collect()
    }

    #[test]
    fn test_known_proof_vectors_verify() {
        let root = "29622a2534633de0dc536eddeac01294dd1f1c06dd976a790a561a6eb1c39d33";
        let last = format!(
            "{root} 0f01118b89fd3e0a850206b08551223f329a0d02a31bdddb0296392123323dbda"
        );
        let middle = format!(
            "{root} 14f4a9410ffcdf895c4adb880659e9b5c0dd1f23a30790684340b3eaacb045398 \
             00cb0309affcf4f994813ec26b8afc7e0b758605a04641de9871e04363de5e6b8 \
             16ebf3c8d63ef6b217bcee69e31f77f3634bbbef1346de27e229c17122974e27b"
        );
        assert!(verify_proof_text(b"epsilon", &last));
        assert!(verify_proof_text(b"gamma", &middle));
        assert_eq!(create_proof(&five_leaves(), 4).unwrap().to_string(), last);
        assert_eq!(create_proof(&five_leaves(), 2).unwrap().to_string(), middle);
    }

    #[test]
    fn test_wrong_leaf_rejected() {
        let proof = create_proof(&five_leaves(), 1).unwrap();
        assert!(verify_proof(b"beta", &proof));
        assert!(!verify_proof(b"delta", &proof));
        assert!(!verify_proof(b"not in tree", &proof));
    }

    #[test]
    fn test_flipped_tag_rejected() {
        let mut proof = create_proof(&five_leaves(), 0).unwrap();
        proof.path[0].position = ProofPosition::Left;
        assert!(!verify_proof(b"alpha", &proof));
    }

    #[test]
    fn test_malformed_text_is_false() {
        assert!(!verify_proof_text(b"alpha", ""));
        assert!(!verify_proof_text(b"alpha", "not-a-proof"));
        let root = create_proof(&five_leaves(), 0).unwrap().root;
        assert!(!verify_proof_text(b"alpha", &format!("{root} x{root}")));
        assert!(!verify_proof_text(b"alpha", &format!("{root} 1")));
    }

    #[test]
    fn test_singleton_text_with_trailing_space() {
        let root = hash_leaf(b"a");
        assert!(verify_proof_text(b"a", &format!("{root} ")));
        assert!(verify_proof_text(b"a", &root.to_hex()));
    }
}
