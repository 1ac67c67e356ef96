//! Canonical byte layout for authentication paths and openings.
//!
//! | Item | Encoding |
//! |------|----------|
//! | path arity | `u8` (2 or 4) |
//! | node count | `u32` little-endian |
//! | nodes | `arity - 1` raw 32-byte digests each, left to right |
//! | opening index | `u32` little-endian |
//! | opening leaf | `u32` count followed by `u64` little-endian field elements |

use crate::params::MerkleArity;
use crate::ser::{
    read_digest, read_felt_vec, read_u32, read_u8, write_digest, write_felt_vec, write_u32,
    write_u8, ByteReader, SerError, SerKind, SerResult, DIGEST_SIZE,
};

use super::proof::{MerkleOpening, MerklePath};
use super::types::{Digest, ProofNode};

const KIND: SerKind = SerKind::MerklePath;

/// Appends the canonical encoding of `path` for a tree of the given arity.
pub fn encode_path(out: &mut Vec<u8>, arity: MerkleArity, path: &MerklePath) -> SerResult<()> {
    write_u8(out, arity.code());
    let count = crate::ser::ensure_u32(path.nodes.len(), KIND, "path.nodes")?;
    write_u32(out, count);
    for node in &path.nodes {
        if node.arity() != arity {
            return Err(SerError::invalid_value(KIND, "path.node.arity"));
        }
        for digest in node.siblings() {
            write_digest(out, &digest.0);
        }
    }
    Ok(())
}

/// Decodes a path written by [`encode_path`].
pub fn decode_path(cursor: &mut ByteReader<'_>) -> SerResult<MerklePath> {
    let code = read_u8(cursor, KIND, "path.arity")?;
    let arity =
        MerkleArity::from_code(code).ok_or(SerError::invalid_value(KIND, "path.arity"))?;
    let count = read_u32(cursor, KIND, "path.nodes")? as usize;
    let per_node = (arity.code() as usize - 1) * DIGEST_SIZE;
    if count.saturating_mul(per_node) > cursor.remaining() {
        return Err(SerError::invalid_length(KIND, "path.nodes"));
    }
    let mut nodes = Vec::with_capacity(count);
    for _ in 0..count {
        let node = match arity {
            MerkleArity::Binary => {
                ProofNode::Arity2([Digest(read_digest(cursor, KIND, "path.sibling")?)])
            }
            MerkleArity::Quaternary => ProofNode::Arity4([
                Digest(read_digest(cursor, KIND, "path.sibling")?),
                Digest(read_digest(cursor, KIND, "path.sibling")?),
                Digest(read_digest(cursor, KIND, "path.sibling")?),
            ]),
        };
        nodes.push(node);
    }
    Ok(MerklePath { nodes })
}

/// Appends index, leaf values and path of an opening.
pub fn encode_opening(
    out: &mut Vec<u8>,
    arity: MerkleArity,
    opening: &MerkleOpening,
) -> SerResult<()> {
    write_u32(out, opening.index);
    write_felt_vec(out, &opening.leaf, KIND, "opening.leaf")?;
    encode_path(out, arity, &opening.path)
}

/// Decodes an opening written by [`encode_opening`].
pub fn decode_opening(cursor: &mut ByteReader<'_>) -> SerResult<MerkleOpening> {
    let index = read_u32(cursor, KIND, "opening.index")?;
    let leaf = read_felt_vec(cursor, KIND, "opening.leaf")?;
    let path = decode_path(cursor)?;
    Ok(MerkleOpening { index, leaf, path })
}
