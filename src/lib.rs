//! Merkleseal - Merkle root commitments with signed roots
//!
//! Merkleseal folds an ordered sequence of leaf values into a single SHA-256
//! root, produces compact inclusion proofs for individual leaves, verifies
//! them without the rest of the tree, and binds a root to a key holder with
//! an RSA PKCS#1 v1.5 signature.
//!
//! # Core Features
//!
//! - **Merkle Roots**: interior nodes hash the hex text of their children;
//!   an unpaired node moves up a level unchanged
//! - **Inclusion Proofs**: bottom-up sibling paths with a compact text form
//! - **Fail-Safe Verification**: proof and signature checks return `false`
//!   instead of erroring on malformed input
//! - **Deterministic Signatures**: the same key and root always sign the same
//!
//! # Example Usage
//!
//! ```rust
//! use merkleseal::{verify_proof_text, LeafRegister};
//!
//! let mut tree = LeafRegister::new();
//! tree.add_leaf("a");
//! tree.add_leaf("b");
//! tree.add_leaf("c");
//!
//! let proof = tree.create_proof(2)?;
//! assert!(verify_proof_text(b"c", &proof.to_string()));
//! assert_eq!(Some(proof.root), tree.root());
//! # Ok::<(), merkleseal::SealError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod crypto;
pub mod proofs;

// Re-export commonly used types
pub use crate::core::{
    error::{Result, SealError},
    types::Hash,
};

pub use crypto::{KeyPair, RsaProvider, Signature, SignatureBinder, SignatureProvider};

pub use proofs::{
    compute_root, create_proof, verify_proof, verify_proof_text, LeafRegister, Proof,
    ProofElement, ProofPosition,
};

/// Current version of Merkleseal
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
