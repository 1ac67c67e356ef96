//! FRI proof objects and their canonical byte layout.
//!
//! | Section | Encoding |
//! |---------|----------|
//! | layer roots | `u32` count, 32-byte digests in round order (rounds `1..R`) |
//! | queries | `u32` count, then per query: `u32` position, initial pairs (only in [`BasicFriProof`] and LPC proofs), `u32` round count, one pair per committed round |
//! | pair | opening then sibling, each `u32` index, leaf field elements, path |
//! | final values | `u32` count, `u64` field elements, one per column |
//! | grinding nonce | `u64` little-endian |
//!
//! Decoding is total and rejects trailing bytes.

use serde::{Deserialize, Serialize};

use crate::field::FieldElement;
use crate::merkle::{decode_opening, encode_opening, Digest, MerkleOpening, ProofNode};
use crate::params::MerkleArity;
use crate::ser::{
    ensure_consumed, read_digest, read_felt_vec, read_u32, read_u64, read_vec, write_digest,
    write_felt_vec, write_u32, write_u64, write_vec, ByteReader, SerError, SerKind, SerResult,
};

/// Opening of one row and of its folding partner in the same layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriRoundQuery {
    /// Row at the query position.
    pub opening: MerkleOpening,
    /// Row at `(position + n/2) mod n`.
    pub sibling: MerkleOpening,
}

/// Openings of one query across every committed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriQueryProof {
    /// Position in the initial domain.
    pub position: u32,
    /// Pairs for rounds `1..R`, in round order.
    pub rounds: Vec<FriRoundQuery>,
}

/// Batched FRI proof.  The round-0 oracle is opened by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriProof {
    /// Roots of the committed folded layers, rounds `1..R`.
    pub layer_roots: Vec<Digest>,
    /// Constant each column collapsed to.
    pub final_values: Vec<FieldElement>,
    /// Proof-of-work nonce (zero when grinding is disabled).
    pub grinding_nonce: u64,
    /// One entry per query repetition.
    pub queries: Vec<FriQueryProof>,
}

/// Single-oracle FRI proof that also commits and opens round 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicFriProof {
    /// Commitment to the input codeword.
    pub initial_root: Digest,
    /// Round-0 pair for every query.
    pub initial_openings: Vec<FriRoundQuery>,
    /// Folding proof.
    pub fri: FriProof,
}

impl FriProof {
    /// Serialises the proof into its canonical layout.
    pub fn to_bytes(&self) -> SerResult<Vec<u8>> {
        let mut out = Vec::new();
        write_proof(&mut out, self, None, SerKind::Fri)?;
        Ok(out)
    }

    /// Decodes a proof produced by [`FriProof::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> SerResult<Self> {
        let mut cursor = ByteReader::new(bytes);
        let (proof, _) = read_proof(&mut cursor, false, SerKind::Fri)?;
        ensure_consumed(&cursor, SerKind::Fri)?;
        Ok(proof)
    }
}

impl BasicFriProof {
    /// Serialises the proof: initial root, then the FRI layout with the
    /// round-0 pair inlined in every query.
    pub fn to_bytes(&self) -> SerResult<Vec<u8>> {
        let mut out = Vec::new();
        write_digest(&mut out, &self.initial_root.0);
        let initial: Vec<Vec<FriRoundQuery>> = self
            .initial_openings
            .iter()
            .map(|pair| vec![pair.clone()])
            .collect();
        write_proof(&mut out, &self.fri, Some(initial.as_slice()), SerKind::Fri)?;
        Ok(out)
    }

    /// Decodes a proof produced by [`BasicFriProof::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> SerResult<Self> {
        let mut cursor = ByteReader::new(bytes);
        let initial_root = Digest(read_digest(&mut cursor, SerKind::Fri, "initial_root")?);
        let (fri, initial) = read_proof(&mut cursor, true, SerKind::Fri)?;
        ensure_consumed(&cursor, SerKind::Fri)?;
        let initial_openings = initial
            .into_iter()
            .map(|mut pairs| match (pairs.pop(), pairs.is_empty()) {
                (Some(pair), true) => Ok(pair),
                _ => Err(SerError::invalid_length(SerKind::Fri, "initial_openings")),
            })
            .collect::<SerResult<Vec<_>>>()?;
        Ok(Self {
            initial_root,
            initial_openings,
            fri,
        })
    }
}

fn path_arity(opening: &MerkleOpening) -> MerkleArity {
    opening
        .path
        .nodes
        .first()
        .map(ProofNode::arity)
        .unwrap_or_default()
}

pub(crate) fn write_pair(out: &mut Vec<u8>, pair: &FriRoundQuery) -> SerResult<()> {
    encode_opening(out, path_arity(&pair.opening), &pair.opening)?;
    encode_opening(out, path_arity(&pair.sibling), &pair.sibling)
}

pub(crate) fn read_pair(cursor: &mut ByteReader<'_>) -> SerResult<FriRoundQuery> {
    let opening = decode_opening(cursor)?;
    let sibling = decode_opening(cursor)?;
    Ok(FriRoundQuery { opening, sibling })
}

/// Writes `proof`, inlining `initial[q]` right after the position of query
/// `q` when present.
pub(crate) fn write_proof(
    out: &mut Vec<u8>,
    proof: &FriProof,
    initial: Option<&[Vec<FriRoundQuery>]>,
    kind: SerKind,
) -> SerResult<()> {
    write_vec(out, &proof.layer_roots, kind, "layer_roots", |out, root| {
        write_digest(out, &root.0);
        Ok(())
    })?;
    if let Some(initial) = initial {
        if initial.len() != proof.queries.len() {
            return Err(SerError::invalid_length(kind, "initial_openings"));
        }
    }
    let count = crate::ser::ensure_u32(proof.queries.len(), kind, "queries")?;
    write_u32(out, count);
    for (index, query) in proof.queries.iter().enumerate() {
        write_u32(out, query.position);
        if let Some(initial) = initial {
            write_vec(out, &initial[index], kind, "initial_pairs", |out, pair| {
                write_pair(out, pair)
            })?;
        }
        write_vec(out, &query.rounds, kind, "rounds", |out, pair| {
            write_pair(out, pair)
        })?;
    }
    write_felt_vec(out, &proof.final_values, kind, "final_values")?;
    write_u64(out, proof.grinding_nonce);
    Ok(())
}

/// Reads a proof written by [`write_proof`]; the second element holds the
/// inlined initial pairs (empty when `with_initial` is false).
pub(crate) fn read_proof(
    cursor: &mut ByteReader<'_>,
    with_initial: bool,
    kind: SerKind,
) -> SerResult<(FriProof, Vec<Vec<FriRoundQuery>>)> {
    let layer_roots = read_vec(cursor, kind, "layer_roots", |cursor, _| {
        Ok(Digest(read_digest(cursor, kind, "layer_root")?))
    })?;
    let mut initial = Vec::new();
    let queries = read_vec(cursor, kind, "queries", |cursor, _| {
        let position = read_u32(cursor, kind, "position")?;
        if with_initial {
            initial.push(read_vec(cursor, kind, "initial_pairs", |cursor, _| {
                read_pair(cursor)
            })?);
        }
        let rounds = read_vec(cursor, kind, "rounds", |cursor, _| read_pair(cursor))?;
        Ok(FriQueryProof { position, rounds })
    })?;
    let final_values = read_felt_vec(cursor, kind, "final_values")?;
    let grinding_nonce = read_u64(cursor, kind, "grinding_nonce")?;
    Ok((
        FriProof {
            layer_roots,
            final_values,
            grinding_nonce,
            queries,
        },
        initial,
    ))
}
