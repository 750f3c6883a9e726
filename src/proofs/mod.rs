//! Merkle tree, inclusion proofs and proof verification
//!
//! Leaves live in a [`LeafRegister`]. Roots and proofs are pure functions
//! of a snapshot of its leaves, and verification needs only a leaf value
//! and a proof.

pub mod merkle;
pub mod proof;
pub mod register;
pub mod verifier;

// Re-export commonly used items
pub use merkle::{compute_root, fold_level, tree_levels};
pub use proof::{create_proof, Proof, ProofElement, ProofPosition};
pub use register::LeafRegister;
pub use verifier::{verify_proof, verify_proof_text};
