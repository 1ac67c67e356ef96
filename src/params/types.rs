use serde::{Deserialize, Serialize};

/// Hash families used for Merkle commitments and the transcript.
///
/// | Variant | Digest Bits | Notes |
/// |---------|-------------|-------|
/// | `Blake2s` | 256 | Default byte hash. |
/// | `Blake3` | 256 | Faster on wide SIMD targets. |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HashFamily {
    /// Blake2s-256.
    #[default]
    Blake2s,
    /// BLAKE3 with 32-byte output.
    Blake3,
}

impl HashFamily {
    pub(crate) const fn code(self) -> u8 {
        match self {
            HashFamily::Blake2s => 3,
            HashFamily::Blake3 => 4,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(HashFamily::Blake2s),
            4 => Some(HashFamily::Blake3),
            _ => None,
        }
    }
}

/// How folding challenges are drawn when one FRI instance carries several
/// columns.
///
/// | Variant | Challenges per round | Soundness accounting |
/// |---------|----------------------|----------------------|
/// | `Shared` | 1 | Columns fold with one `alpha`; the error bound grows with the batch width. |
/// | `PerColumn` | one per column | Independent `alpha` per column. |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FoldingPolicy {
    /// One challenge per round shared by every column.
    #[default]
    Shared,
    /// An independent challenge per column and round.
    PerColumn,
}

impl FoldingPolicy {
    pub(crate) const fn code(self) -> u8 {
        match self {
            FoldingPolicy::Shared => 1,
            FoldingPolicy::PerColumn => 2,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(FoldingPolicy::Shared),
            2 => Some(FoldingPolicy::PerColumn),
            _ => None,
        }
    }
}

/// Parameters for the FRI proof system.
///
/// | Field | Type | Endianness |
/// |-------|------|------------|
/// | `domain_log2` | `u8` | - |
/// | `final_log2` | `u8` | - |
/// | `queries` | `u16` | Little-endian |
/// | `domain_offset` | `u64` | Little-endian |
/// | `folding` | [`FoldingPolicy`] | `u8` discriminant |
///
/// The number of folding rounds is `domain_log2 - final_log2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriParams {
    /// Log<sub>2</sub> of the initial evaluation domain size.
    pub domain_log2: u8,
    /// Log<sub>2</sub> of the size at which folding stops.
    pub final_log2: u8,
    /// Number of query repetitions (Λ).
    pub queries: u16,
    /// Coset shift of the initial domain (`1` selects the plain subgroup).
    pub domain_offset: u64,
    /// Challenge policy for batched columns.
    pub folding: FoldingPolicy,
}

impl FriParams {
    /// Number of folding rounds.
    pub const fn rounds(&self) -> usize {
        self.domain_log2.saturating_sub(self.final_log2) as usize
    }

    /// Size of the initial evaluation domain.
    pub const fn domain_size(&self) -> usize {
        1usize << self.domain_log2
    }

    /// Size of the fully folded layer.
    pub const fn final_size(&self) -> usize {
        1usize << self.final_log2
    }
}

/// Merkle arity options supported by the commitment scheme.
///
/// | Variant | Branching |
/// |---------|-----------|
/// | `Binary` | 2 |
/// | `Quaternary` | 4 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MerkleArity {
    /// Binary Merkle tree.
    #[default]
    Binary,
    /// Quaternary Merkle tree.
    Quaternary,
}

impl MerkleArity {
    pub(crate) const fn code(self) -> u8 {
        match self {
            MerkleArity::Binary => 2,
            MerkleArity::Quaternary => 4,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(MerkleArity::Binary),
            4 => Some(MerkleArity::Quaternary),
            _ => None,
        }
    }
}

/// Merkle commitment parameters.
///
/// | Field | Type | Endianness |
/// |-------|------|------------|
/// | `arity` | [`MerkleArity`] | Branching encoded as `u8` |
/// | `domain_sep` | `u64` | Little-endian |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MerkleParams {
    /// Tree branching factor.
    pub arity: MerkleArity,
    /// Domain separation tag mixed into every leaf and node hash.
    pub domain_sep: u64,
}

/// Which part of a challenge the grinding mask inspects.
///
/// | Variant | Challenge domain | Mask |
/// |---------|------------------|------|
/// | `Integer` | `u64` | low `bits` bits must be zero |
/// | `FieldElement` | canonical `u64` of a field element | high `bits` bits must be zero |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GrindingTarget {
    /// Fixed-width unsigned integer, low bits masked.
    #[default]
    Integer,
    /// Field element, high bits of the canonical representative masked.
    FieldElement,
}

impl GrindingTarget {
    pub(crate) const fn code(self) -> u8 {
        match self {
            GrindingTarget::Integer => 1,
            GrindingTarget::FieldElement => 2,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(GrindingTarget::Integer),
            2 => Some(GrindingTarget::FieldElement),
            _ => None,
        }
    }

    /// Bit width of the masked challenge.
    pub const fn width(self) -> u32 {
        match self {
            GrindingTarget::Integer => u64::BITS,
            GrindingTarget::FieldElement => crate::field::FieldElement::BITS,
        }
    }
}

/// Proof-of-work configuration.
///
/// | Field | Type | Endianness |
/// |-------|------|------------|
/// | `bits` | `u8` | - |
/// | `target` | [`GrindingTarget`] | `u8` discriminant |
/// | `max_attempts` | `u64` | Little-endian |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrindingParams {
    /// Difficulty; `0` disables grinding.
    pub bits: u8,
    /// Mask placement.
    pub target: GrindingTarget,
    /// Upper bound on candidate nonces before the prover gives up.
    pub max_attempts: u64,
}

/// Policy for combining per-polynomial quotients before FRI.
///
/// | Variant | FRI columns | Extra challenge |
/// |---------|-------------|-----------------|
/// | `LinearCombination` | 1 | `theta`, quotient `i` weighted by `theta^i` |
/// | `PerPolynomial` | one per polynomial | none |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum QuotientBatching {
    /// Random linear combination into a single column.
    #[default]
    LinearCombination,
    /// Each quotient is its own FRI column.
    PerPolynomial,
}

impl QuotientBatching {
    pub(crate) const fn code(self) -> u8 {
        match self {
            QuotientBatching::LinearCombination => 1,
            QuotientBatching::PerPolynomial => 2,
        }
    }

    pub(crate) const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(QuotientBatching::LinearCombination),
            2 => Some(QuotientBatching::PerPolynomial),
            _ => None,
        }
    }
}

/// List polynomial commitment policy.
///
/// | Field | Type | Endianness |
/// |-------|------|------------|
/// | `quotient_batching` | [`QuotientBatching`] | `u8` discriminant |
/// | `max_evaluation_redraws` | `u8` | - |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LpcPolicy {
    /// Quotient combination policy.
    pub quotient_batching: QuotientBatching,
    /// How many times `z` may be redrawn when it lands inside the domain.
    pub max_evaluation_redraws: u8,
}

/// Transcript configuration for Fiat–Shamir.
///
/// | Field | Type | Endianness |
/// |-------|------|------------|
/// | `protocol_tag` | `u64` | Little-endian |
/// | `seed` | `[u8; 32]` | Native order |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptParams {
    /// Non-zero domain separation tag.
    pub protocol_tag: u64,
    /// Seed for deterministic transcript initialisation.
    pub seed: [u8; 32],
}
