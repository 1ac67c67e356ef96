use core::fmt;

use crate::fft::DomainError;
use crate::grinding::GrindingError;
use crate::merkle::MerkleError;
use crate::params::ParamsError;
use crate::ser::SerError;
use crate::transcript::TranscriptError;

pub use crate::params::FoldingPolicy;

/// Errors raised by the FRI prover and verifier.
///
/// Variants from `InvalidStructure` downwards describe a rejected proof;
/// everything above them is a configuration or prover-side failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriError {
    /// Parameter set rejected at construction.
    Params(ParamsError),
    /// Evaluation domain could not be built.
    Domain(DomainError),
    /// Grinding configuration or search failure.
    Grinding(GrindingError),
    /// Transcript misuse.
    Transcript(TranscriptError),
    /// Merkle commitment failure on the prover side.
    Merkle(MerkleError),
    /// No columns were provided to the prover.
    EmptyCodeword,
    /// A column does not cover the evaluation domain.
    ColumnLengthMismatch { expected: usize, actual: usize },
    /// Column did not collapse to a constant after the last round.
    NotLowDegree { column: usize },
    /// Missing or superfluous proof components.
    InvalidStructure(&'static str),
    /// Query index in the proof differs from the transcript-derived index.
    QueryPositionMismatch {
        query: usize,
        expected: usize,
        actual: usize,
    },
    /// Merkle opening failed (round `0` is the caller supplied oracle).
    PathInvalid { round: usize, reason: MerkleError },
    /// Folded value disagrees with the opening of the next round.
    FoldMismatch { round: usize, query: usize },
    /// Folded chain disagrees with the declared final constant.
    FinalMismatch { query: usize },
    /// Grinding nonce does not satisfy the difficulty mask.
    GrindingFailed,
    /// Wire decoding failed.
    Serialization(SerError),
}

impl FriError {
    /// Returns `true` for variants caused by a malformed or dishonest proof.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            FriError::InvalidStructure(_)
                | FriError::QueryPositionMismatch { .. }
                | FriError::PathInvalid { .. }
                | FriError::FoldMismatch { .. }
                | FriError::FinalMismatch { .. }
                | FriError::GrindingFailed
                | FriError::Serialization(_)
        )
    }
}

impl fmt::Display for FriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriError::Params(err) => write!(f, "invalid FRI parameters: {err}"),
            FriError::Domain(err) => write!(f, "evaluation domain error: {err}"),
            FriError::Grinding(err) => write!(f, "grinding error: {err}"),
            FriError::Transcript(err) => write!(f, "transcript error: {err}"),
            FriError::Merkle(err) => write!(f, "merkle commitment error: {err}"),
            FriError::EmptyCodeword => write!(f, "codeword is empty"),
            FriError::ColumnLengthMismatch { expected, actual } => {
                write!(f, "column length {actual} does not match domain size {expected}")
            }
            FriError::NotLowDegree { column } => {
                write!(f, "column {column} did not fold to a constant")
            }
            FriError::InvalidStructure(reason) => write!(f, "invalid proof structure: {reason}"),
            FriError::QueryPositionMismatch {
                query,
                expected,
                actual,
            } => write!(
                f,
                "query {query} opened position {actual}, transcript expects {expected}"
            ),
            FriError::PathInvalid { round, reason } => {
                write!(f, "invalid Merkle path at round {round}: {reason}")
            }
            FriError::FoldMismatch { round, query } => {
                write!(f, "folding check failed at round {round} for query {query}")
            }
            FriError::FinalMismatch { query } => {
                write!(f, "final constant mismatch for query {query}")
            }
            FriError::GrindingFailed => write!(f, "grinding nonce rejected"),
            FriError::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for FriError {}

impl From<ParamsError> for FriError {
    fn from(err: ParamsError) -> Self {
        FriError::Params(err)
    }
}

impl From<DomainError> for FriError {
    fn from(err: DomainError) -> Self {
        FriError::Domain(err)
    }
}

impl From<GrindingError> for FriError {
    fn from(err: GrindingError) -> Self {
        FriError::Grinding(err)
    }
}

impl From<TranscriptError> for FriError {
    fn from(err: TranscriptError) -> Self {
        FriError::Transcript(err)
    }
}

impl From<MerkleError> for FriError {
    fn from(err: MerkleError) -> Self {
        FriError::Merkle(err)
    }
}

impl From<SerError> for FriError {
    fn from(err: SerError) -> Self {
        FriError::Serialization(err)
    }
}
