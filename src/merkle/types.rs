use crate::params::MerkleArity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of every digest emitted by the commitment layer.
pub const DIGEST_SIZE: usize = 32;

/// Merkle root or node digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest(pub [u8; DIGEST_SIZE]);

impl Digest {
    /// Creates a digest from raw bytes.
    pub const fn new(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(0x")?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<crate::hash::Hash> for Digest {
    fn from(hash: crate::hash::Hash) -> Self {
        Self(hash.into_bytes())
    }
}

/// Siblings of one node on an authentication path, ordered left to right
/// with the opened child's slot removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofNode {
    /// Binary tree sibling.
    Arity2([Digest; 1]),
    /// Quaternary tree siblings.
    Arity4([Digest; 3]),
}

impl ProofNode {
    /// Returns the siblings stored in the node.
    pub fn siblings(&self) -> &[Digest] {
        match self {
            ProofNode::Arity2(list) => list,
            ProofNode::Arity4(list) => list,
        }
    }

    /// Mutable access to siblings.
    pub fn siblings_mut(&mut self) -> &mut [Digest] {
        match self {
            ProofNode::Arity2(list) => list,
            ProofNode::Arity4(list) => list,
        }
    }

    /// Branching factor of the tree this node belongs to.
    pub fn arity(&self) -> MerkleArity {
        match self {
            ProofNode::Arity2(_) => MerkleArity::Binary,
            ProofNode::Arity4(_) => MerkleArity::Quaternary,
        }
    }
}

/// Errors emitted by the Merkle layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    EmptyLeaves,
    LeafWidthMismatch { expected: usize, got: usize },
    IndexOutOfRange { index: u64, leaf_count: usize },
    ArityMismatch,
    InvalidPathLength { expected: usize, got: usize },
    RootMismatch,
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::EmptyLeaves => write!(f, "no leaves supplied"),
            MerkleError::LeafWidthMismatch { expected, got } => {
                write!(f, "leaf width mismatch: expected {}, got {}", expected, got)
            }
            MerkleError::IndexOutOfRange { index, leaf_count } => {
                write!(f, "index {} out of range ({} leaves)", index, leaf_count)
            }
            MerkleError::ArityMismatch => write!(f, "arity mismatch"),
            MerkleError::InvalidPathLength { expected, got } => {
                write!(f, "invalid path length: expected {}, got {}", expected, got)
            }
            MerkleError::RootMismatch => write!(f, "recomputed root does not match commitment"),
        }
    }
}

impl std::error::Error for MerkleError {}

/// Additional helpers for [`MerkleArity`].
pub trait MerkleArityExt {
    fn as_usize(&self) -> usize;
}

impl MerkleArityExt for MerkleArity {
    fn as_usize(&self) -> usize {
        match self {
            MerkleArity::Binary => 2,
            MerkleArity::Quaternary => 4,
        }
    }
}

/// Number of hashing levels above the leaves for `leaf_count` leaves.
pub fn tree_depth(leaf_count: usize, arity: MerkleArity) -> usize {
    let arity = arity.as_usize();
    let mut width = leaf_count;
    let mut depth = 0;
    while width > 1 {
        width = width.div_ceil(arity);
        depth += 1;
    }
    depth
}
