use serde::{Deserialize, Serialize};

use crate::field::FieldElement;
use crate::fri::{read_proof, write_proof, FriProof, FriRoundQuery};
use crate::ser::{
    ensure_consumed, read_felt, read_felt_vec, read_vec, write_felt, write_felt_vec, write_vec,
    ByteReader, SerKind, SerResult,
};

const KIND: SerKind = SerKind::Lpc;

/// Opening proof for one or more LPC commitments at a common point.
///
/// Wire layout: the FRI layout with, per query, one round-0 pair per batch
/// inlined after the position; then the claimed evaluations (`u32` batch
/// count, each a length-prefixed field element vector) and the evaluation
/// point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpcProof {
    /// Transcript-derived point `z`.
    pub evaluation_point: FieldElement,
    /// `claimed_evaluations[b][t]` is polynomial `t` of batch `b` at `z`.
    pub claimed_evaluations: Vec<Vec<FieldElement>>,
    /// `initial_openings[q][b]` opens batch `b` at query `q` and its sibling.
    pub initial_openings: Vec<Vec<FriRoundQuery>>,
    /// Low-degree proof of the quotient oracle.
    pub fri: FriProof,
}

impl LpcProof {
    /// Serialises the proof into its canonical layout.
    pub fn to_bytes(&self) -> SerResult<Vec<u8>> {
        let mut out = Vec::new();
        write_proof(&mut out, &self.fri, Some(self.initial_openings.as_slice()), KIND)?;
        write_vec(
            &mut out,
            &self.claimed_evaluations,
            KIND,
            "claimed_evaluations",
            |out, values| write_felt_vec(out, values, KIND, "claimed_evaluation"),
        )?;
        write_felt(&mut out, self.evaluation_point);
        Ok(out)
    }

    /// Decodes a proof produced by [`LpcProof::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> SerResult<Self> {
        let mut cursor = ByteReader::new(bytes);
        let (fri, initial_openings) = read_proof(&mut cursor, true, KIND)?;
        let claimed_evaluations = read_vec(&mut cursor, KIND, "claimed_evaluations", |cursor, _| {
            read_felt_vec(cursor, KIND, "claimed_evaluation")
        })?;
        let evaluation_point = read_felt(&mut cursor, KIND, "evaluation_point")?;
        ensure_consumed(&cursor, KIND)?;
        Ok(Self {
            evaluation_point,
            claimed_evaluations,
            initial_openings,
            fri,
        })
    }
}
