use core::fmt;

use crate::fft::DomainError;
use crate::fri::FriError;
use crate::merkle::MerkleError;
use crate::params::ParamsError;
use crate::ser::SerError;

pub use crate::params::QuotientBatching;

/// Errors raised by the list polynomial commitment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LpcError {
    /// Parameter set rejected at construction.
    Params(ParamsError),
    /// Interpolation or extension failure.
    Domain(DomainError),
    /// Round-0 commitment failure.
    Merkle(MerkleError),
    /// Failure inside the FRI layer, including FRI rejections.
    Fri(FriError),
    /// The FRI degree bound reaches the domain size, so every quotient
    /// oracle would pass and claimed evaluations would not be binding.
    RateTooHigh {
        degree_bound: usize,
        domain_size: usize,
    },
    /// No polynomials or no batches were supplied.
    EmptyBatch,
    /// More batches than the transcript labels can address.
    TooManyBatches { count: usize },
    /// Polynomial exceeds the degree bound certified by FRI.
    DegreeTooLarge {
        column: usize,
        degree: usize,
        bound: usize,
    },
    /// Every drawn evaluation point fell inside the evaluation domain.
    EvaluationPointInDomain { draws: usize },
    /// The proof carries a different evaluation point than the transcript.
    EvaluationPointMismatch,
    /// Missing or superfluous proof components.
    InvalidStructure(&'static str),
    /// Wire decoding failed.
    Serialization(SerError),
}

impl LpcError {
    /// Returns `true` for variants caused by a malformed or dishonest proof.
    pub fn is_rejection(&self) -> bool {
        match self {
            LpcError::Fri(err) => err.is_rejection(),
            LpcError::EvaluationPointMismatch
            | LpcError::InvalidStructure(_)
            | LpcError::Serialization(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for LpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LpcError::Params(err) => write!(f, "invalid LPC parameters: {err}"),
            LpcError::Domain(err) => write!(f, "evaluation domain error: {err}"),
            LpcError::Merkle(err) => write!(f, "merkle commitment error: {err}"),
            LpcError::Fri(err) => write!(f, "fri: {err}"),
            LpcError::RateTooHigh {
                degree_bound,
                domain_size,
            } => write!(
                f,
                "degree bound {degree_bound} must be below the domain size {domain_size}"
            ),
            LpcError::EmptyBatch => write!(f, "no polynomials to commit or open"),
            LpcError::TooManyBatches { count } => {
                write!(f, "{count} batches exceed the 256 addressable commitments")
            }
            LpcError::DegreeTooLarge {
                column,
                degree,
                bound,
            } => write!(
                f,
                "polynomial {column} has degree {degree}, bound is below {bound}"
            ),
            LpcError::EvaluationPointInDomain { draws } => {
                write!(f, "evaluation point fell inside the domain on all {draws} draws")
            }
            LpcError::EvaluationPointMismatch => {
                write!(f, "evaluation point does not match the transcript")
            }
            LpcError::InvalidStructure(reason) => write!(f, "invalid proof structure: {reason}"),
            LpcError::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for LpcError {}

impl From<ParamsError> for LpcError {
    fn from(err: ParamsError) -> Self {
        LpcError::Params(err)
    }
}

impl From<DomainError> for LpcError {
    fn from(err: DomainError) -> Self {
        LpcError::Domain(err)
    }
}

impl From<MerkleError> for LpcError {
    fn from(err: MerkleError) -> Self {
        LpcError::Merkle(err)
    }
}

impl From<FriError> for LpcError {
    fn from(err: FriError) -> Self {
        LpcError::Fri(err)
    }
}

impl From<SerError> for LpcError {
    fn from(err: SerError) -> Self {
        LpcError::Serialization(err)
    }
}
