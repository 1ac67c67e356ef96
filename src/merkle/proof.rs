use serde::{Deserialize, Serialize};

use crate::field::FieldElement;
use crate::params::MerkleParams;

use super::traits::{encode_leaf, MerkleHasher};
use super::types::{tree_depth, Digest, MerkleArityExt, MerkleError, ProofNode};

/// Authentication path from a leaf to the root, leaf level first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerklePath {
    pub nodes: Vec<ProofNode>,
}

impl MerklePath {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Opened leaf together with its authentication path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleOpening {
    pub index: u32,
    pub leaf: Vec<FieldElement>,
    pub path: MerklePath,
}

/// Recomputes the root from `leaf` and `path` and compares it with
/// `commitment`.
///
/// Every structural defect in the (untrusted) path is reported as an error;
/// nothing here indexes out of bounds or panics.
pub fn check_path<H: MerkleHasher>(
    hasher: &H,
    params: &MerkleParams,
    commitment: &Digest,
    leaf_count: usize,
    index: u64,
    leaf: &[FieldElement],
    path: &MerklePath,
) -> Result<(), MerkleError> {
    if leaf_count == 0 {
        return Err(MerkleError::EmptyLeaves);
    }
    if index >= leaf_count as u64 {
        return Err(MerkleError::IndexOutOfRange { index, leaf_count });
    }
    if leaf.is_empty() {
        return Err(MerkleError::LeafWidthMismatch {
            expected: 1,
            got: 0,
        });
    }
    let expected = tree_depth(leaf_count, params.arity);
    if path.nodes.len() != expected {
        return Err(MerkleError::InvalidPathLength {
            expected,
            got: path.nodes.len(),
        });
    }

    let arity = params.arity.as_usize();
    let mut digest = hasher.hash_leaves(params.domain_sep, &encode_leaf(leaf));
    let mut position = index as usize;
    let mut children = Vec::with_capacity(arity);
    for node in &path.nodes {
        if node.arity() != params.arity {
            return Err(MerkleError::ArityMismatch);
        }
        let slot = position % arity;
        let siblings = node.siblings();
        children.clear();
        children.extend_from_slice(&siblings[..slot]);
        children.push(digest);
        children.extend_from_slice(&siblings[slot..]);
        digest = hasher.hash_nodes(params.domain_sep, &children);
        position /= arity;
    }

    if digest == *commitment {
        Ok(())
    } else {
        Err(MerkleError::RootMismatch)
    }
}

/// Boolean form of [`check_path`].
pub fn verify<H: MerkleHasher>(
    hasher: &H,
    params: &MerkleParams,
    commitment: &Digest,
    leaf_count: usize,
    index: u64,
    leaf: &[FieldElement],
    path: &MerklePath,
) -> bool {
    check_path(hasher, params, commitment, leaf_count, index, leaf, path).is_ok()
}

/// Checks an opening produced by [`MerkleTree::open`](super::MerkleTree::open).
pub fn check_opening<H: MerkleHasher>(
    hasher: &H,
    params: &MerkleParams,
    commitment: &Digest,
    leaf_count: usize,
    opening: &MerkleOpening,
) -> Result<(), MerkleError> {
    check_path(
        hasher,
        params,
        commitment,
        leaf_count,
        u64::from(opening.index),
        &opening.leaf,
        &opening.path,
    )
}
