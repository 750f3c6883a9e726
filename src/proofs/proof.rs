//! Inclusion proof generation and the proof text format
//!
//! Text form: `<root> <tag><sibling> <tag><sibling> ...` where the tag is `0`
//! when the sibling sits on the left and `1` when it sits on the right.
//! Entries run from the leaf level upward.

use crate::core::{error::*, types::*};
use crate::proofs::merkle::fold_level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which side of the pairwise fold the sibling occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofPosition {
    Left,
    Right,
}

impl ProofPosition {
    /// Single-character tag used in the text form
    pub fn tag(self) -> char {
        match self {
            ProofPosition::Left => '0',
            ProofPosition::Right => '1',
        }
    }

    /// Parse a text tag
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            '0' => Some(ProofPosition::Left),
            '1' => Some(ProofPosition::Right),
            _ => None,
        }
    }
}

/// A single element in a merkle proof path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofElement {
    /// Whether the sibling is on the left or right
    pub position: ProofPosition,
    /// Hash of the sibling node
    pub hash: Hash,
}

impl fmt::Display for ProofElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.position.tag(), self.hash)
    }
}

impl FromStr for ProofElement {
    type Err = SealError;

    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        let tag = chars
            .next()
            .ok_or_else(|| SealError::invalid_proof_format("empty proof entry"))?;
        let position = ProofPosition::from_tag(tag).ok_or_else(|| {
            SealError::invalid_proof_format(format!("unknown side tag {tag:?}"))
        })?;
        let hash = Hash::from_canonical_hex(chars.as_str()).ok_or_else(|| {
            SealError::invalid_proof_format(format!("malformed sibling digest in {token:?}"))
        })?;
        Ok(ProofElement { position, hash })
    }
}

/// Inclusion proof: a bottom-up sibling path anchored to a root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// Root hash the path recomputes to
    pub root: Hash,
    /// Proof path elements, leaf level first
    pub path: Vec<ProofElement>,
}

impl Proof {
    /// Serialize proof to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SealError::JsonSerialization)
    }

    /// Deserialize proof from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SealError::JsonSerialization)
    }
}

// Always "<root> " then the entries, so an empty path keeps its trailing space.
impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.root)?;
        for (i, element) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}

/// Parses the text form strictly
///
/// Root and siblings must be 64-character lowercase hex digests and each tag
/// must be `0` or `1`. Anything else is `InvalidProofFormat`. Interior nodes
/// hash lowercase hex text, so a sibling in any other spelling could never
/// fold to a real root.
impl FromStr for Proof {
    type Err = SealError;

    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = text.split_whitespace();
        let root_token = tokens
            .next()
            .ok_or_else(|| SealError::invalid_proof_format("missing root"))?;
        let root = Hash::from_canonical_hex(root_token)
            .ok_or_else(|| SealError::invalid_proof_format("malformed root digest"))?;
        let path = tokens
            .map(str::parse::<ProofElement>)
            .collect::<Result<Vec<_>>>()?;
        Ok(Proof { root, path })
    }
}

/// Build the inclusion proof for `leaf_index`
///
/// Replays the same fold as [`compute_root`](crate::proofs::merkle::compute_root)
/// while following one node upward. A promoted odd node contributes no entry.
pub fn create_proof(leaves: &[Hash], leaf_index: usize) -> Result<Proof> {
    if leaf_index >= leaves.len() {
        let index = i64::try_from(leaf_index).unwrap_or(i64::MAX);
        return Err(SealError::index_out_of_range(index, leaves.len()));
    }

    let mut path = Vec::new();
    let mut level = leaves.to_vec();
    let mut current = leaf_index;

    while level.len() > 1 {
        if current % 2 == 1 {
            path.push(ProofElement {
                position: ProofPosition::Left,
                hash: level[current - 1],
            });
        } else if let Some(sibling) = level.get(current + 1) {
            path.push(ProofElement {
                position: ProofPosition::Right,
                hash: *sibling,
            });
        }
        level = fold_level(&level);
        current /= 2;
    }

    debug!(leaf_index, entries = path.len(), "created inclusion proof");
    Ok(Proof {
        root: level[0],
        path,
    })
}
