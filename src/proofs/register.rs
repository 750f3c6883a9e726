//! Append-only register of leaf digests

use crate::core::{error::*, hash::hash_leaf, types::Hash};
use crate::proofs::merkle::compute_root;
use crate::proofs::proof::{create_proof, Proof};

/// Ordered leaf digests of one tree
///
/// A leaf's identity is its insertion index. Leaves are never removed,
/// deduplicated or reordered. Callers serialize concurrent appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafRegister {
    leaves: Vec<Hash>,
}

impl LeafRegister {
    /// Create an empty register
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash `data` and append it, returning the new leaf's index
    pub fn add_leaf(&mut self, data: impl AsRef<[u8]>) -> usize {
        self.leaves.push(hash_leaf(data.as_ref()));
        self.leaves.len() - 1
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.leaves
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Current root, recomputed from every leaf
    pub fn root(&self) -> Option<Hash> {
        compute_root(&self.leaves)
    }

    /// Root text form, empty string for an empty register
    pub fn root_hex(&self) -> String {
        self.root().map(|root| root.to_hex()).unwrap_or_default()
    }

    /// Inclusion proof for the leaf at `index`
    pub fn create_proof(&self, index: usize) -> Result<Proof> {
        create_proof(&self.leaves, index)
    }

    /// Inclusion proof for a possibly negative index from a text channel
    pub fn create_proof_signed(&self, index: i64) -> Result<Proof> {
        let index = usize::try_from(index)
            .map_err(|_| SealError::index_out_of_range(index, self.leaves.len()))?;
        self.create_proof(index)
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for LeafRegister {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut register = LeafRegister::new();
        register.extend(iter);
        register
    }
}

impl<T: AsRef<[u8]>> Extend<T> for LeafRegister {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.add_leaf(data);
        }
    }
}
