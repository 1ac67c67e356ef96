use serde::{Deserialize, Serialize};

use super::hash::params_hash;
use super::types::{
    FriParams, GrindingParams, HashFamily, LpcPolicy, MerkleParams, TranscriptParams,
};
use super::validate::ParamsError;
use crate::field::FieldElement;

/// Canonical parameter set shared by prover and verifier.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `params_version` | `u16` | Version of the parameter schema. |
/// | `hash` | [`HashFamily`] | Hash used for Merkle leaves, nodes and the transcript. |
/// | `fri` | [`FriParams`] | Domain size, folding depth and query count. |
/// | `merkle` | [`MerkleParams`] | Merkle arity and domain separation. |
/// | `grinding` | [`GrindingParams`] | Proof-of-work difficulty. |
/// | `lpc` | [`LpcPolicy`] | Quotient batching policy. |
/// | `transcript` | [`TranscriptParams`] | Fiat–Shamir transcript framing. |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpcParams {
    pub(crate) params_version: u16,
    pub(crate) hash: HashFamily,
    pub(crate) fri: FriParams,
    pub(crate) merkle: MerkleParams,
    pub(crate) grinding: GrindingParams,
    pub(crate) lpc: LpcPolicy,
    pub(crate) transcript: TranscriptParams,
}

impl LpcParams {
    /// Returns the parameter schema version.
    pub const fn params_version(&self) -> u16 {
        self.params_version
    }

    /// Returns the configured hash family.
    pub const fn hash(&self) -> HashFamily {
        self.hash
    }

    /// Returns the FRI configuration.
    pub const fn fri(&self) -> &FriParams {
        &self.fri
    }

    /// Returns the Merkle configuration.
    pub const fn merkle(&self) -> &MerkleParams {
        &self.merkle
    }

    /// Returns the grinding configuration.
    pub const fn grinding(&self) -> &GrindingParams {
        &self.grinding
    }

    /// Returns the list commitment policy.
    pub const fn lpc(&self) -> &LpcPolicy {
        &self.lpc
    }

    /// Returns the transcript configuration.
    pub const fn transcript(&self) -> &TranscriptParams {
        &self.transcript
    }

    /// Coset shift of the initial evaluation domain as a field element.
    pub fn domain_offset(&self) -> FieldElement {
        FieldElement::new(self.fri.domain_offset)
    }

    /// Computes the canonical parameter hash.
    ///
    /// The digest is computed over the canonical byte layout defined in
    /// [`crate::params::serialize_params`].
    pub fn params_hash(&self) -> [u8; 32] {
        params_hash(self)
    }

    /// Produces a human-readable profile identifier.
    ///
    /// The identifier is deterministic and contains only ASCII alphanumeric
    /// characters and underscores.
    pub fn profile_id(&self) -> String {
        format!(
            "LPC_H{}_N{}_F{}_Q{}_A{}_G{}_V{}",
            self.hash.code(),
            self.fri.domain_log2,
            self.fri.final_log2,
            self.fri.queries,
            self.merkle.arity.code(),
            self.grinding.bits,
            self.params_version
        )
    }

    /// Checks whether two parameter sets agree on every soundness-relevant
    /// field; only the grinding search bound may differ.
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.params_version == other.params_version
            && self.hash == other.hash
            && self.fri == other.fri
            && self.merkle == other.merkle
            && self.grinding.bits == other.grinding.bits
            && self.grinding.target == other.grinding.target
            && self.lpc.quotient_batching == other.lpc.quotient_batching
            && self.transcript == other.transcript
    }

    pub(crate) fn try_from_builder(
        builder: &super::builder::LpcParamsBuilder,
    ) -> Result<Self, ParamsError> {
        let params = Self {
            params_version: builder.params_version,
            hash: builder.hash,
            fri: builder.fri,
            merkle: builder.merkle,
            grinding: builder.grinding,
            lpc: builder.lpc,
            transcript: builder.transcript,
        };
        super::validate::validate(&params)?;
        Ok(params)
    }
}
