use tracing::trace;

use crate::field::FieldElement;
use crate::params::{HashFamily, MerkleParams};
use crate::utils::map_indexed;

use super::proof::{MerkleOpening, MerklePath};
use super::traits::{encode_leaf, MerkleHasher};
use super::types::{Digest, MerkleArityExt, MerkleError, ProofNode};

/// Prover-side precommitment: the leaves plus every hashed level, kept so
/// later openings need no rehashing. Never serialised.
#[derive(Clone, Debug)]
pub struct MerkleTree<H: MerkleHasher = HashFamily> {
    hasher: H,
    params: MerkleParams,
    leaves: Vec<Vec<FieldElement>>,
    /// `levels[0]` holds leaf digests, the last level holds the root.
    levels: Vec<Vec<Digest>>,
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Commits to `leaves`, all of which must share one non-zero width.
    ///
    /// Partial groups on the right edge are padded by duplicating the last
    /// present child.
    pub fn commit(
        hasher: H,
        params: MerkleParams,
        leaves: Vec<Vec<FieldElement>>,
    ) -> Result<(Digest, Self), MerkleError> {
        let width = leaves.first().map(Vec::len).ok_or(MerkleError::EmptyLeaves)?;
        if width == 0 {
            return Err(MerkleError::LeafWidthMismatch {
                expected: 1,
                got: 0,
            });
        }
        if let Some(bad) = leaves.iter().find(|leaf| leaf.len() != width) {
            return Err(MerkleError::LeafWidthMismatch {
                expected: width,
                got: bad.len(),
            });
        }

        let domain_sep = params.domain_sep;
        let hashed = map_indexed(leaves.len(), |index| {
            hasher.hash_leaves(domain_sep, &encode_leaf(&leaves[index]))
        });

        let arity = params.arity.as_usize();
        let mut levels = vec![hashed];
        while let Some(current) = levels.last().filter(|level| level.len() > 1) {
            let next = map_indexed(current.len().div_ceil(arity), |group| {
                let start = group * arity;
                let end = (start + arity).min(current.len());
                let mut children = current[start..end].to_vec();
                let last = current[end - 1];
                children.resize(arity, last);
                hasher.hash_nodes(domain_sep, &children)
            });
            levels.push(next);
        }

        let tree = Self {
            hasher,
            params,
            leaves,
            levels,
        };
        let root = tree.root();
        trace!(leaves = tree.leaf_count(), width, root = ?root, "merkle commit");
        Ok((root, tree))
    }

    /// Root digest of the committed vector.
    pub fn root(&self) -> Digest {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }

    /// Number of committed leaves.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of field elements per leaf.
    pub fn leaf_width(&self) -> usize {
        self.leaves.first().map(Vec::len).unwrap_or(0)
    }

    /// Committed leaf at `index`.
    pub fn leaf(&self, index: usize) -> Option<&[FieldElement]> {
        self.leaves.get(index).map(Vec::as_slice)
    }

    /// Parameters the tree was built with.
    pub fn params(&self) -> &MerkleParams {
        &self.params
    }

    /// Hasher the tree was built with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Opens a single leaf.
    pub fn open_one(&self, index: usize) -> Result<MerkleOpening, MerkleError> {
        let leaf = self.leaf(index).ok_or(MerkleError::IndexOutOfRange {
            index: index as u64,
            leaf_count: self.leaf_count(),
        })?;
        let arity = self.params.arity.as_usize();
        let mut nodes = Vec::with_capacity(self.levels.len().saturating_sub(1));
        let mut position = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let group_start = position - position % arity;
            let last = level[level.len() - 1];
            let mut node = empty_node(self.params.arity.as_usize());
            let mut slot = 0;
            for child in group_start..group_start + arity {
                if child == position {
                    continue;
                }
                node.siblings_mut()[slot] = level.get(child).copied().unwrap_or(last);
                slot += 1;
            }
            nodes.push(node);
            position /= arity;
        }
        Ok(MerkleOpening {
            index: index as u32,
            leaf: leaf.to_vec(),
            path: MerklePath { nodes },
        })
    }

    /// Opens every requested index, in request order.
    pub fn open(&self, indices: &[usize]) -> Result<Vec<MerkleOpening>, MerkleError> {
        indices.iter().map(|&index| self.open_one(index)).collect()
    }
}

fn empty_node(arity: usize) -> ProofNode {
    if arity == 4 {
        ProofNode::Arity4([Digest::default(); 3])
    } else {
        ProofNode::Arity2([Digest::default(); 1])
    }
}
