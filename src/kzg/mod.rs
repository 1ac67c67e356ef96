//! KZG commitments over BLS12-381.
//!
//! Implements [`PolynomialCommitmentScheme`] next to the LPC backend.
//! Polynomials are coefficient vectors over the BLS12-381 scalar field.
//! Openings of several polynomials at one transcript-derived point `z` are
//! batched with powers of a challenge `gamma`; the verifier checks
//!
//! ```text
//! e(C - v*G1 + z*W, G2) == e(W, tau*G2)
//! ```
//!
//! where `C` and `v` are the `gamma`-combined commitment and evaluation.

use core::fmt;

use ark_bls12_381::{Bls12_381, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{One, PrimeField, Zero};
use ark_serialize::CanonicalSerialize;
use ark_std::UniformRand;
use rand::RngCore;
use tracing::{debug, instrument};

use crate::commitment::{PolynomialCommitmentScheme, SchemeKind};
use crate::transcript::{ChallengeValue, Transcript, TranscriptLabel};

/// Scalar challenges reduce 64 bytes modulo the group order.
impl ChallengeValue for Fr {
    const BYTE_LEN: usize = 64;

    fn from_challenge_bytes(bytes: &[u8]) -> Self {
        Fr::from_le_bytes_mod_order(bytes)
    }
}

/// Errors raised by the KZG backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KzgError {
    /// No polynomials or commitments were supplied.
    EmptyBatch,
    /// Polynomial does not fit the setup.
    DegreeTooLarge { degree: usize, max: usize },
    /// Proof shape does not match the commitments.
    InvalidStructure(&'static str),
    /// The pairing equation does not hold.
    PairingCheckFailed,
    /// A group element could not be encoded for the transcript.
    Serialization,
}

impl fmt::Display for KzgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KzgError::EmptyBatch => write!(f, "no polynomials to commit or open"),
            KzgError::DegreeTooLarge { degree, max } => {
                write!(f, "degree {degree} exceeds setup maximum {max}")
            }
            KzgError::InvalidStructure(reason) => write!(f, "invalid proof structure: {reason}"),
            KzgError::PairingCheckFailed => write!(f, "pairing check failed"),
            KzgError::Serialization => write!(f, "group element serialization failed"),
        }
    }
}

impl std::error::Error for KzgError {}

/// Powers of `tau` in G1 and `tau` in G2.
#[derive(Debug, Clone)]
pub struct KzgSetup {
    powers: Vec<G1Affine>,
    g2: G2Affine,
    tau_g2: G2Affine,
}

impl KzgSetup {
    /// Samples `tau` from `rng` and keeps it in memory while building the
    /// powers; only suitable for tests.
    pub fn insecure<R: RngCore>(max_degree: usize, rng: &mut R) -> Self {
        let tau = Fr::rand(rng);
        let g1 = G1Affine::generator();
        let mut power = Fr::one();
        let projective: Vec<G1Projective> = (0..=max_degree)
            .map(|_| {
                let point = g1 * power;
                power *= tau;
                point
            })
            .collect();
        let g2 = G2Affine::generator();
        Self {
            powers: G1Projective::normalize_batch(&projective),
            g2,
            tau_g2: (g2 * tau).into_affine(),
        }
    }

    /// Largest supported degree.
    pub fn max_degree(&self) -> usize {
        self.powers.len() - 1
    }

    fn commit_one(&self, coefficients: &[Fr]) -> Result<G1Affine, KzgError> {
        if coefficients.len() > self.powers.len() {
            return Err(KzgError::DegreeTooLarge {
                degree: coefficients.len() - 1,
                max: self.max_degree(),
            });
        }
        G1Projective::msm(&self.powers[..coefficients.len()], coefficients)
            .map(|point| point.into_affine())
            .map_err(|_| KzgError::InvalidStructure("msm length"))
    }
}

/// Commitments to one batch, one point per polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KzgCommitment(pub Vec<G1Affine>);

/// Prover data kept for one batch.
#[derive(Debug, Clone)]
pub struct KzgBatch {
    polynomials: Vec<Vec<Fr>>,
    commitment: KzgCommitment,
}

/// Batched opening proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KzgProof {
    /// Transcript-derived point `z`.
    pub evaluation_point: Fr,
    /// `evaluations[b][t]` is polynomial `t` of batch `b` at `z`.
    pub evaluations: Vec<Vec<Fr>>,
    /// Commitment to the combined witness `(P(X) - P(z)) / (X - z)`.
    pub witness: G1Affine,
}

/// KZG backend bound to a setup.
#[derive(Debug, Clone)]
pub struct KzgScheme {
    setup: KzgSetup,
}

impl KzgScheme {
    /// Wraps `setup`.
    pub fn new(setup: KzgSetup) -> Self {
        Self { setup }
    }

    /// Setup in use.
    pub fn setup(&self) -> &KzgSetup {
        &self.setup
    }
}

impl PolynomialCommitmentScheme for KzgScheme {
    type Polynomial = Vec<Fr>;
    type Commitment = KzgCommitment;
    type ProverData = KzgBatch;
    type Proof = KzgProof;
    type Error = KzgError;

    fn kind(&self) -> SchemeKind {
        SchemeKind::Kzg
    }

    fn commit(
        &self,
        polynomials: &[Self::Polynomial],
    ) -> Result<(Self::Commitment, Self::ProverData), Self::Error> {
        if polynomials.is_empty() {
            return Err(KzgError::EmptyBatch);
        }
        let points = polynomials
            .iter()
            .map(|polynomial| self.setup.commit_one(polynomial))
            .collect::<Result<Vec<_>, _>>()?;
        let commitment = KzgCommitment(points);
        Ok((
            commitment.clone(),
            KzgBatch {
                polynomials: polynomials.to_vec(),
                commitment,
            },
        ))
    }

    #[instrument(skip_all, fields(batches = data.len()))]
    fn prove<R: RngCore>(
        &self,
        data: &[&Self::ProverData],
        transcript: &mut Transcript,
        _rng: &mut R,
    ) -> Result<Self::Proof, Self::Error> {
        if data.is_empty() {
            return Err(KzgError::EmptyBatch);
        }
        for batch in data {
            absorb_commitment(transcript, &batch.commitment)?;
        }
        let z: Fr = transcript.challenge(TranscriptLabel::KzgEvaluationPoint);

        let evaluations: Vec<Vec<Fr>> = data
            .iter()
            .map(|batch| {
                batch
                    .polynomials
                    .iter()
                    .map(|polynomial| evaluate(polynomial, z))
                    .collect()
            })
            .collect();
        absorb_evaluations(transcript, &evaluations)?;
        let gamma: Fr = transcript.challenge(TranscriptLabel::KzgBatching);

        let width = data
            .iter()
            .flat_map(|batch| &batch.polynomials)
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        let mut combined = vec![Fr::zero(); width];
        let mut weight = Fr::one();
        for polynomial in data.iter().flat_map(|batch| &batch.polynomials) {
            for (acc, coefficient) in combined.iter_mut().zip(polynomial) {
                *acc += weight * coefficient;
            }
            weight *= gamma;
        }
        let witness = self.setup.commit_one(&divide_by_linear(&combined, z))?;
        debug!("kzg witness committed");

        Ok(KzgProof {
            evaluation_point: z,
            evaluations,
            witness,
        })
    }

    #[instrument(skip_all, fields(batches = commitments.len()))]
    fn verify(
        &self,
        commitments: &[Self::Commitment],
        proof: &Self::Proof,
        transcript: &mut Transcript,
    ) -> Result<(), Self::Error> {
        if commitments.is_empty() {
            return Err(KzgError::EmptyBatch);
        }
        let shapes_match = commitments.len() == proof.evaluations.len()
            && commitments
                .iter()
                .zip(&proof.evaluations)
                .all(|(commitment, values)| commitment.0.len() == values.len());
        if !shapes_match {
            return Err(KzgError::InvalidStructure("evaluation count"));
        }

        for commitment in commitments {
            absorb_commitment(transcript, commitment)?;
        }
        let z: Fr = transcript.challenge(TranscriptLabel::KzgEvaluationPoint);
        if z != proof.evaluation_point {
            return Err(KzgError::InvalidStructure("evaluation point"));
        }
        absorb_evaluations(transcript, &proof.evaluations)?;
        let gamma: Fr = transcript.challenge(TranscriptLabel::KzgBatching);

        let mut bases = Vec::new();
        let mut scalars = Vec::new();
        let mut value = Fr::zero();
        let mut weight = Fr::one();
        for (commitment, values) in commitments.iter().zip(&proof.evaluations) {
            for (point, evaluation) in commitment.0.iter().zip(values) {
                bases.push(*point);
                scalars.push(weight);
                value += weight * evaluation;
                weight *= gamma;
            }
        }
        let combined = G1Projective::msm(&bases, &scalars)
            .map_err(|_| KzgError::InvalidStructure("msm length"))?;

        let g1 = G1Affine::generator();
        let lhs = combined - g1 * value + proof.witness * z;
        let check = Bls12_381::multi_miller_loop(
            [lhs.into_affine(), (-proof.witness.into_group()).into_affine()],
            [self.setup.g2, self.setup.tau_g2],
        );
        match Bls12_381::final_exponentiation(check) {
            Some(output) if output.0.is_one() => Ok(()),
            _ => Err(KzgError::PairingCheckFailed),
        }
    }
}

fn absorb_commitment(
    transcript: &mut Transcript,
    commitment: &KzgCommitment,
) -> Result<(), KzgError> {
    let mut bytes = Vec::new();
    for point in &commitment.0 {
        point
            .serialize_compressed(&mut bytes)
            .map_err(|_| KzgError::Serialization)?;
    }
    transcript.absorb_bytes(TranscriptLabel::KzgCommitment, &bytes);
    Ok(())
}

fn absorb_evaluations(
    transcript: &mut Transcript,
    evaluations: &[Vec<Fr>],
) -> Result<(), KzgError> {
    for values in evaluations {
        let mut bytes = Vec::new();
        values
            .serialize_compressed(&mut bytes)
            .map_err(|_| KzgError::Serialization)?;
        transcript.absorb_bytes(TranscriptLabel::ClaimedEvaluations, &bytes);
    }
    Ok(())
}

fn evaluate(coefficients: &[Fr], point: Fr) -> Fr {
    coefficients
        .iter()
        .rev()
        .fold(Fr::zero(), |acc, coefficient| acc * point + coefficient)
}

/// Quotient of `p(X) - p(z)` by `X - z` via synthetic division.
fn divide_by_linear(coefficients: &[Fr], z: Fr) -> Vec<Fr> {
    if coefficients.len() < 2 {
        return Vec::new();
    }
    let mut quotient = vec![Fr::zero(); coefficients.len() - 1];
    let mut carry = Fr::zero();
    for index in (1..coefficients.len()).rev() {
        carry = coefficients[index] + carry * z;
        quotient[index - 1] = carry;
    }
    quotient
}
