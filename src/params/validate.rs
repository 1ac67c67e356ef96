use std::fmt;

use super::hash::params_hash;
use super::types::{FriParams, GrindingParams, TranscriptParams};
use super::LpcParams;
use crate::field::FieldElement;

/// Parameter schema versions understood by this build.
pub const SUPPORTED_PARAMS_VERSION: u16 = 1;

/// Result of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Canonical parameter hash derived during validation.
    pub params_hash: [u8; 32],
}

/// Error enumeration for parameter validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// Parameter schema version is not understood.
    UnsupportedVersion { supported: u16, got: u16 },
    /// Evaluation domain exceeds the two-adicity of the field.
    DomainTooLarge { max: u8, got: u8 },
    /// Folding must run at least one round.
    InvalidFinalSize { domain_log2: u8, final_log2: u8 },
    /// Number of FRI queries was below the allowed threshold.
    InvalidQueries { min: u16, got: u16 },
    /// Coset shift must be a non-zero canonical field element.
    InvalidDomainOffset { got: u64 },
    /// Grinding difficulty must be strictly below the challenge width.
    GrindingTooHard { bits: u8, width: u32 },
    /// Grinding is enabled but the search bound is zero.
    GrindingAttemptsZero,
    /// Transcript protocol tag must be non-zero.
    InvalidProtocolTag,
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::UnsupportedVersion { supported, got } => {
                write!(f, "unsupported params version {got} (supported: {supported})")
            }
            ParamsError::DomainTooLarge { max, got } => {
                write!(f, "domain log2 {got} exceeds field two-adicity {max}")
            }
            ParamsError::InvalidFinalSize {
                domain_log2,
                final_log2,
            } => write!(
                f,
                "final log2 {final_log2} must be smaller than domain log2 {domain_log2}"
            ),
            ParamsError::InvalidQueries { min, got } => {
                write!(f, "query count {got} below minimum {min}")
            }
            ParamsError::InvalidDomainOffset { got } => {
                write!(f, "domain offset {got:#x} is not a non-zero field element")
            }
            ParamsError::GrindingTooHard { bits, width } => {
                write!(f, "grinding bits {bits} must be below challenge width {width}")
            }
            ParamsError::GrindingAttemptsZero => {
                write!(f, "grinding enabled with a zero attempt budget")
            }
            ParamsError::InvalidProtocolTag => write!(f, "transcript protocol tag must be non-zero"),
        }
    }
}

impl std::error::Error for ParamsError {}

/// Validates all parameter invariants and returns a [`ValidationReport`].
pub fn validate(params: &LpcParams) -> Result<ValidationReport, ParamsError> {
    if params.params_version != SUPPORTED_PARAMS_VERSION {
        return Err(ParamsError::UnsupportedVersion {
            supported: SUPPORTED_PARAMS_VERSION,
            got: params.params_version,
        });
    }
    validate_fri(&params.fri)?;
    validate_grinding(&params.grinding)?;
    validate_transcript(&params.transcript)?;
    Ok(ValidationReport {
        params_hash: params_hash(params),
    })
}

fn validate_fri(fri: &FriParams) -> Result<(), ParamsError> {
    let max = FieldElement::MODULUS.two_adicity as u8;
    if fri.domain_log2 > max {
        return Err(ParamsError::DomainTooLarge {
            max,
            got: fri.domain_log2,
        });
    }
    if fri.final_log2 >= fri.domain_log2 {
        return Err(ParamsError::InvalidFinalSize {
            domain_log2: fri.domain_log2,
            final_log2: fri.final_log2,
        });
    }
    if fri.queries < 1 {
        return Err(ParamsError::InvalidQueries {
            min: 1,
            got: fri.queries,
        });
    }
    if fri.domain_offset == 0 || fri.domain_offset >= FieldElement::MODULUS.value {
        return Err(ParamsError::InvalidDomainOffset {
            got: fri.domain_offset,
        });
    }
    Ok(())
}

fn validate_grinding(grinding: &GrindingParams) -> Result<(), ParamsError> {
    let width = grinding.target.width();
    if u32::from(grinding.bits) >= width {
        return Err(ParamsError::GrindingTooHard {
            bits: grinding.bits,
            width,
        });
    }
    if grinding.bits > 0 && grinding.max_attempts == 0 {
        return Err(ParamsError::GrindingAttemptsZero);
    }
    Ok(())
}

fn validate_transcript(transcript: &TranscriptParams) -> Result<(), ParamsError> {
    if transcript.protocol_tag == 0 {
        return Err(ParamsError::InvalidProtocolTag);
    }
    Ok(())
}
