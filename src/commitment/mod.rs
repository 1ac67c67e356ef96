//! Common interface over the polynomial commitment backends.
//!
//! Higher-level protocols pick a backend at configuration time through
//! [`SchemeKind`] and drive it through [`PolynomialCommitmentScheme`]; both
//! backends share the caller's [`Transcript`].

use rand::RngCore;

use crate::field::FieldElement;
use crate::lpc::{LpcBatch, LpcError, LpcProof, LpcScheme};
use crate::merkle::Digest;
use crate::transcript::Transcript;

/// Available commitment backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// FRI-based list polynomial commitment.
    Lpc,
    /// Pairing-based KZG commitment (feature `kzg`).
    Kzg,
}

/// `commit / prove / verify` contract shared by every backend.
pub trait PolynomialCommitmentScheme {
    /// Representation of the committed polynomials.
    type Polynomial;
    /// Public commitment.
    type Commitment: Clone;
    /// Prover-side data retained between commit and prove.
    type ProverData;
    /// Opening proof.
    type Proof;
    /// Error type for every operation.
    type Error: std::error::Error;

    /// Backend tag.
    fn kind(&self) -> SchemeKind;

    /// Commits to a batch of polynomials.
    fn commit(
        &self,
        polynomials: &[Self::Polynomial],
    ) -> Result<(Self::Commitment, Self::ProverData), Self::Error>;

    /// Opens every committed batch at a transcript-derived point.
    fn prove<R: RngCore>(
        &self,
        data: &[&Self::ProverData],
        transcript: &mut Transcript,
        rng: &mut R,
    ) -> Result<Self::Proof, Self::Error>;

    /// Checks `proof` against `commitments`, replaying the transcript.
    fn verify(
        &self,
        commitments: &[Self::Commitment],
        proof: &Self::Proof,
        transcript: &mut Transcript,
    ) -> Result<(), Self::Error>;
}

/// Polynomials are evaluation columns over the FRI initial domain.
impl PolynomialCommitmentScheme for LpcScheme {
    type Polynomial = Vec<FieldElement>;
    type Commitment = Digest;
    type ProverData = LpcBatch;
    type Proof = LpcProof;
    type Error = LpcError;

    fn kind(&self) -> SchemeKind {
        SchemeKind::Lpc
    }

    fn commit(
        &self,
        polynomials: &[Self::Polynomial],
    ) -> Result<(Self::Commitment, Self::ProverData), Self::Error> {
        LpcScheme::commit(self, polynomials.to_vec())
    }

    fn prove<R: RngCore>(
        &self,
        data: &[&Self::ProverData],
        transcript: &mut Transcript,
        rng: &mut R,
    ) -> Result<Self::Proof, Self::Error> {
        LpcScheme::prove(self, data, transcript, rng)
    }

    fn verify(
        &self,
        commitments: &[Self::Commitment],
        proof: &Self::Proof,
        transcript: &mut Transcript,
    ) -> Result<(), Self::Error> {
        LpcScheme::verify(self, commitments, proof, transcript)
    }
}
