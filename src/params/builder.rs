use super::types::{
    FoldingPolicy, FriParams, GrindingParams, GrindingTarget, HashFamily, LpcPolicy, MerkleArity,
    MerkleParams, QuotientBatching, TranscriptParams,
};
use super::{LpcParams, ParamsError};

/// Builder used to assemble [`LpcParams`] with validation.
///
/// Every field is public so callers can start from a profile and adjust
/// individual knobs before calling [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct LpcParamsBuilder {
    pub params_version: u16,
    pub hash: HashFamily,
    pub fri: FriParams,
    pub merkle: MerkleParams,
    pub grinding: GrindingParams,
    pub lpc: LpcPolicy,
    pub transcript: TranscriptParams,
}

impl LpcParamsBuilder {
    /// Returns a builder initialised with the standard profile.
    pub fn new() -> Self {
        Self::from_profile(BuiltinProfile::PROFILE_STANDARD)
    }

    /// Loads one of the built-in profiles.
    ///
    /// | Profile | Hash | Domain | Final | Queries | Arity | Grinding bits |
    /// |---------|------|--------|-------|---------|-------|---------------|
    /// | `PROFILE_STANDARD` | Blake2s | 2<sup>16</sup> | 2<sup>3</sup> | 40 | Binary | 16 |
    /// | `PROFILE_HISEC` | Blake3 | 2<sup>20</sup> | 2<sup>4</sup> | 64 | Quaternary | 20 |
    /// | `PROFILE_TEST` | Blake2s | 2<sup>4</sup> | 1 | 3 | Binary | 0 |
    pub fn from_profile(profile: BuiltinProfile) -> Self {
        match profile {
            BuiltinProfile::PROFILE_STANDARD => LpcParamsBuilder {
                params_version: 1,
                hash: HashFamily::Blake2s,
                fri: FriParams {
                    domain_log2: 16,
                    final_log2: 3,
                    queries: 40,
                    domain_offset: 7,
                    folding: FoldingPolicy::Shared,
                },
                merkle: MerkleParams {
                    arity: MerkleArity::Binary,
                    domain_sep: 0x4d4b_4c5f_4c50_4331,
                },
                grinding: GrindingParams {
                    bits: 16,
                    target: GrindingTarget::Integer,
                    max_attempts: 1 << 26,
                },
                lpc: LpcPolicy {
                    quotient_batching: QuotientBatching::LinearCombination,
                    max_evaluation_redraws: 8,
                },
                transcript: TranscriptParams {
                    protocol_tag: 0x4c50_435f_5354_4431,
                    seed: *b"RPP-LPC-PROFILE-STANDARD_______0",
                },
            },
            BuiltinProfile::PROFILE_HISEC => LpcParamsBuilder {
                params_version: 1,
                hash: HashFamily::Blake3,
                fri: FriParams {
                    domain_log2: 20,
                    final_log2: 4,
                    queries: 64,
                    domain_offset: 7,
                    folding: FoldingPolicy::PerColumn,
                },
                merkle: MerkleParams {
                    arity: MerkleArity::Quaternary,
                    domain_sep: 0x484d_524b_5f48_4953,
                },
                grinding: GrindingParams {
                    bits: 20,
                    target: GrindingTarget::FieldElement,
                    max_attempts: 1 << 30,
                },
                lpc: LpcPolicy {
                    quotient_batching: QuotientBatching::PerPolynomial,
                    max_evaluation_redraws: 8,
                },
                transcript: TranscriptParams {
                    protocol_tag: 0x4c50_435f_4849_5345,
                    seed: *b"RPP-LPC-PROFILE-HISEC__________0",
                },
            },
            BuiltinProfile::PROFILE_TEST => LpcParamsBuilder {
                params_version: 1,
                hash: HashFamily::Blake2s,
                fri: FriParams {
                    domain_log2: 4,
                    final_log2: 0,
                    queries: 3,
                    domain_offset: 1,
                    folding: FoldingPolicy::Shared,
                },
                merkle: MerkleParams {
                    arity: MerkleArity::Binary,
                    domain_sep: 0x5445_5354_5f4d_4b4c,
                },
                grinding: GrindingParams {
                    bits: 0,
                    target: GrindingTarget::Integer,
                    max_attempts: 1,
                },
                lpc: LpcPolicy {
                    quotient_batching: QuotientBatching::LinearCombination,
                    max_evaluation_redraws: 8,
                },
                transcript: TranscriptParams {
                    protocol_tag: 0x4c50_435f_5445_5354,
                    seed: *b"RPP-LPC-PROFILE-TEST___________0",
                },
            },
        }
    }

    /// Validates the builder fields and emits an [`LpcParams`] instance.
    pub fn build(&self) -> Result<LpcParams, ParamsError> {
        LpcParams::try_from_builder(self)
    }
}

/// Supported built-in profiles.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinProfile {
    /// Balanced profile: binary Blake2s trees and 16 grinding bits.
    PROFILE_STANDARD,
    /// High security profile with quaternary Blake3 trees.
    PROFILE_HISEC,
    /// Tiny 16-point domain for tests and examples.
    PROFILE_TEST,
}

impl Default for LpcParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
