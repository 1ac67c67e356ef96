//! Merkle commitment layer.
//!
//! The module fixes the following protocol knobs:
//!
//! * **Arity:** Binary (`2`) and quaternary (`4`) trees are supported.  Missing
//!   children on the rightmost edge are deterministically duplicated from the
//!   last present child (Rightmost-Child Duplication – RMD).
//! * **Leaf layout:** a leaf is a fixed-width tuple of field elements (one
//!   slot per batched column), encoded as the concatenation of their
//!   little-endian bytes.  No length prefix or index tag is added.
//! * **Domain separation:** every hash invocation receives the `domain_sep`
//!   parameter from [`MerkleParams`](crate::params::MerkleParams), preceded by
//!   a one byte node tag (`0x00` for leaves, `0x01` for internal nodes).
//! * **Hash function:** pluggable through [`MerkleHasher`]; the configured
//!   [`HashFamily`](crate::params::HashFamily) implements it.
//!
//! [`MerkleTree::commit`] returns the root together with the tree, which is
//! the prover's precommitment.  [`verify`] is total: malformed paths yield
//! `false` rather than a panic.

mod proof;
mod ser;
mod traits;
mod tree;
mod types;

pub use proof::{check_opening, check_path, verify, MerkleOpening, MerklePath};
pub use ser::{decode_opening, decode_path, encode_opening, encode_path};
pub use traits::{encode_leaf, MerkleHasher};
pub use tree::MerkleTree;
pub use types::{tree_depth, Digest, MerkleArityExt, MerkleError, ProofNode, DIGEST_SIZE};
