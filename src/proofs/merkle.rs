//! Merkle root computation
//!
//! A level is folded into the next by hashing consecutive pairs. When a level
//! has odd length its last node moves up unchanged: it is never paired with
//! itself. Proof generation replays [`fold_level`], so both always agree.
//!
//! Nothing is cached. Every call recomputes from the leaves.

use crate::core::{hash::hash_pair, types::Hash};
use tracing::debug;

/// Fold one level into the next level up
pub fn fold_level(level: &[Hash]) -> Vec<Hash> {
    let mut next = Vec::with_capacity((level.len() + 1) / 2);
    let mut pairs = level.chunks_exact(2);
    for pair in &mut pairs {
        next.push(hash_pair(&pair[0], &pair[1]));
    }
    // odd tail is promoted as-is
    if let [lonely] = pairs.remainder() {
        next.push(*lonely);
    }
    next
}

/// Compute the root of a sequence of leaf digests
///
/// Returns `None` for an empty sequence.
pub fn compute_root(leaves: &[Hash]) -> Option<Hash> {
    if leaves.is_empty() {
        return None;
    }

    let mut level = leaves.to_vec();
    let mut height = 0usize;
    while level.len() > 1 {
        level = fold_level(&level);
        height += 1;
    }

    debug!(leaves = leaves.len(), height, "computed merkle root");
    level.first().copied()
}

/// Every level of the tree, leaves first and root last
///
/// Empty when there are no leaves.
pub fn tree_levels(leaves: &[Hash]) -> Vec<Vec<Hash>> {
    if leaves.is_empty() {
        return Vec::new();
    }

    let mut levels = vec![leaves.to_vec()];
    while let Some(top) = levels.last() {
        if top.len() <= 1 {
            break;
        }
        let next = fold_level(top);
        levels.push(next);
    }
    levels
}
