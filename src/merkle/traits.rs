use crate::field::{CanonicalSerialize, FieldElement};
use crate::hash::config::{MERKLE_LEAF_TAG, MERKLE_NODE_TAG};
use crate::hash::{FamilyHasher, HashFamily};

use super::types::Digest;

/// Hash abstraction used by the Merkle commitment layer.
///
/// Implementors only supply the tagged primitives; the tags and the
/// `domain_sep` prefix keep leaf and node hashes disjoint.
pub trait MerkleHasher: Sync + Send {
    fn hash_leaves(&self, domain_sep: u64, ordered_leaf_bytes: &[u8]) -> Digest {
        self.hash_leaves_with_tag(MERKLE_LEAF_TAG, domain_sep, ordered_leaf_bytes)
    }

    fn hash_nodes(&self, domain_sep: u64, ordered_children: &[Digest]) -> Digest {
        self.hash_nodes_with_tag(MERKLE_NODE_TAG, domain_sep, ordered_children)
    }

    fn hash_leaves_with_tag(
        &self,
        leaf_domain_tag: u8,
        domain_sep: u64,
        ordered_leaf_bytes: &[u8],
    ) -> Digest;

    fn hash_nodes_with_tag(
        &self,
        node_domain_tag: u8,
        domain_sep: u64,
        ordered_children: &[Digest],
    ) -> Digest;
}

/// Runtime-selected byte hash; the default leaf/node hasher.
impl MerkleHasher for HashFamily {
    fn hash_leaves_with_tag(
        &self,
        leaf_domain_tag: u8,
        domain_sep: u64,
        ordered_leaf_bytes: &[u8],
    ) -> Digest {
        let mut hasher = FamilyHasher::new(*self);
        hasher.update(&[leaf_domain_tag]);
        hasher.update(&domain_sep.to_le_bytes());
        hasher.update(ordered_leaf_bytes);
        hasher.finalize().into()
    }

    fn hash_nodes_with_tag(
        &self,
        node_domain_tag: u8,
        domain_sep: u64,
        ordered_children: &[Digest],
    ) -> Digest {
        let mut hasher = FamilyHasher::new(*self);
        hasher.update(&[node_domain_tag]);
        hasher.update(&domain_sep.to_le_bytes());
        for digest in ordered_children {
            hasher.update(digest.as_bytes());
        }
        hasher.finalize().into()
    }
}

/// Concatenates the little-endian encodings of the leaf's field elements.
pub fn encode_leaf(leaf: &[FieldElement]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(leaf.len() * FieldElement::BYTE_LENGTH);
    for value in leaf {
        bytes.extend_from_slice(&value.to_bytes());
    }
    bytes
}
