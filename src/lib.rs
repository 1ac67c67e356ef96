//! Polynomial commitment engine for the `rpp-lpc` proof stack.
//!
//! The crate provides a Merkle-authenticated FRI low-degree test, a list
//! polynomial commitment (LPC) built on top of it, the Fiat–Shamir
//! transcript that derives every challenge and a transcript-bound proof of
//! work.  A pairing-based KZG backend (feature `kzg`) implements the same
//! [`commitment::PolynomialCommitmentScheme`] interface.
//!
//! Everything is configured through one [`params::LpcParams`] value.  A
//! typical flow:
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rpp_lpc::field::Polynomial;
//! use rpp_lpc::lpc::LpcScheme;
//! use rpp_lpc::params::{BuiltinProfile, LpcParamsBuilder};
//! use rpp_lpc::transcript::Transcript;
//!
//! let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
//! builder.fri.final_log2 = 1;
//! let params = builder.build().unwrap();
//! let scheme = LpcScheme::new(&params).unwrap();
//! let (root, batch) = scheme
//!     .commit_coefficients(&[Polynomial::from_u64s(&[1, 2, 3])])
//!     .unwrap();
//!
//! let mut transcript = Transcript::from_params(&params, b"doc");
//! let proof = scheme
//!     .prove(&[&batch], &mut transcript, &mut StdRng::seed_from_u64(0))
//!     .unwrap();
//!
//! let mut transcript = Transcript::from_params(&params, b"doc");
//! assert!(scheme.is_valid(&[root], &proof, &mut transcript));
//! ```

pub mod commitment;
pub mod fft;
pub mod field;
pub mod fri;
pub mod grinding;
pub mod hash;
#[cfg(feature = "kzg")]
pub mod kzg;
pub mod lpc;
pub mod merkle;
pub mod params;
pub mod ser;
pub mod transcript;
pub mod utils;

use core::fmt;

use fft::DomainError;
use fri::FriError;
use grinding::GrindingError;
use lpc::LpcError;
use merkle::MerkleError;
use params::ParamsError;
use ser::SerError;
use transcript::TranscriptError;

/// Result type used by callers that mix several subsystems.
pub type RppResult<T> = core::result::Result<T, RppError>;

/// Aggregate of the per-module errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RppError {
    Params(ParamsError),
    Domain(DomainError),
    Merkle(MerkleError),
    Transcript(TranscriptError),
    Grinding(GrindingError),
    Fri(FriError),
    Lpc(LpcError),
    Serialization(SerError),
    #[cfg(feature = "kzg")]
    Kzg(kzg::KzgError),
}

impl RppError {
    /// Returns `true` when the error rejects an untrusted proof rather than
    /// reporting a configuration or prover failure.
    pub fn is_rejection(&self) -> bool {
        match self {
            RppError::Fri(err) => err.is_rejection(),
            RppError::Lpc(err) => err.is_rejection(),
            RppError::Serialization(_) => true,
            #[cfg(feature = "kzg")]
            RppError::Kzg(err) => !matches!(err, kzg::KzgError::EmptyBatch),
            _ => false,
        }
    }
}

impl fmt::Display for RppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RppError::Params(err) => write!(f, "params: {err}"),
            RppError::Domain(err) => write!(f, "domain: {err}"),
            RppError::Merkle(err) => write!(f, "merkle: {err}"),
            RppError::Transcript(err) => write!(f, "transcript: {err}"),
            RppError::Grinding(err) => write!(f, "grinding: {err}"),
            RppError::Fri(err) => write!(f, "fri: {err}"),
            RppError::Lpc(err) => write!(f, "lpc: {err}"),
            RppError::Serialization(err) => write!(f, "serialization: {err}"),
            #[cfg(feature = "kzg")]
            RppError::Kzg(err) => write!(f, "kzg: {err}"),
        }
    }
}

impl std::error::Error for RppError {}

macro_rules! impl_from_error {
    ($($source:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for RppError {
                fn from(err: $source) -> Self {
                    RppError::$variant(err)
                }
            }
        )*
    };
}

impl_from_error! {
    ParamsError => Params,
    DomainError => Domain,
    MerkleError => Merkle,
    TranscriptError => Transcript,
    GrindingError => Grinding,
    FriError => Fri,
    LpcError => Lpc,
    SerError => Serialization,
}

#[cfg(feature = "kzg")]
impl_from_error! {
    kzg::KzgError => Kzg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_compose_with_question_mark() {
        fn decode(bytes: &[u8]) -> RppResult<lpc::LpcProof> {
            Ok(lpc::LpcProof::from_bytes(bytes)?)
        }
        let err = decode(&[1, 2, 3]).unwrap_err();
        assert!(err.is_rejection());
        assert!(err.to_string().starts_with("serialization: lpc"));
    }

    #[test]
    fn configuration_errors_are_not_rejections() {
        let err = RppError::from(ParamsError::GrindingAttemptsZero);
        assert!(!err.is_rejection());
    }
}
