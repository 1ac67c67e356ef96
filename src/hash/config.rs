//! Domain separation tags shared across prover and verifier.

/// Prefix applied to the canonical parameter bytes before hashing.
pub const PARAMS_COMMITMENT_DOMAIN_TAG: &[u8] = b"RPP-LPC/PARAMS/V1";

/// Transcript initialisation tag.
pub const TRANSCRIPT_DOMAIN_TAG: &[u8] = b"RPP-LPC/TRANSCRIPT/V1";

/// Prefix for Merkle leaf hashes.
pub const MERKLE_LEAF_TAG: u8 = 0x00;

/// Prefix for Merkle internal-node hashes.
pub const MERKLE_NODE_TAG: u8 = 0x01;
