use core::fmt;

use crate::field::FieldElement;

/// Canonical field element type absorbed by the transcript.
pub type Felt = FieldElement;

/// Canonical transcript labels.
///
/// Every absorb and challenge is tagged with a label whose 16-byte domain
/// tag is mixed into the state, so two call sequences that differ only in
/// labelling never collide.  Indexed variants carry the round or batch
/// number in the last byte of the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptLabel {
    /// Initialisation marker mixed into the empty state.
    Init,
    /// Caller supplied context bytes (circuit id, application tag, ...).
    Context,
    /// Canonical parameter hash absorbed during initialisation.
    ParamsHash,
    /// Protocol tag separating transcript families.
    ProtocolTag,
    /// Deterministic seed provided by the parameter set.
    Seed,
    /// Merkle root of committed batch `i`.
    Commitment(u8),
    /// Evaluation point `z` drawn after all commitments.
    EvaluationPoint,
    /// Claimed evaluations at `z`.
    ClaimedEvaluations,
    /// Challenge combining quotients into one FRI column.
    QuotientBatching,
    /// Merkle root of FRI layer `i`.
    FriRoot(u8),
    /// Folding challenge for FRI round `i`.
    FriFoldChallenge(u8),
    /// Constants of the fully folded layer.
    FriFinal,
    /// Proof-of-work nonce and the challenge it is checked against.
    GrindingNonce,
    /// Challenge stream used to derive query indices.
    QueryIndex,
    /// KZG group commitment.
    KzgCommitment,
    /// KZG opening point.
    KzgEvaluationPoint,
    /// KZG batching challenge.
    KzgBatching,
    /// Fork label used when creating domain separated sub transcripts.
    Fork,
}

impl TranscriptLabel {
    pub(crate) fn domain_tag(self) -> [u8; 16] {
        match self {
            TranscriptLabel::Init => *b"TR_LABEL_INIT___",
            TranscriptLabel::Context => *b"TR_LABEL_CTX____",
            TranscriptLabel::ParamsHash => *b"TR_LABEL_PARAMSH",
            TranscriptLabel::ProtocolTag => *b"TR_LABEL_PROTO__",
            TranscriptLabel::Seed => *b"TR_LABEL_SEED___",
            TranscriptLabel::Commitment(idx) => indexed(*b"TR_LABEL_COMMIT_", idx),
            TranscriptLabel::EvaluationPoint => *b"TR_LABEL_EVALPT_",
            TranscriptLabel::ClaimedEvaluations => *b"TR_LABEL_CLAIMS_",
            TranscriptLabel::QuotientBatching => *b"TR_LABEL_QBATCH_",
            TranscriptLabel::FriRoot(idx) => indexed(*b"TR_LABEL_FRROOT_", idx),
            TranscriptLabel::FriFoldChallenge(idx) => indexed(*b"TR_LABEL_FRCHAL_", idx),
            TranscriptLabel::FriFinal => *b"TR_LABEL_FRFINAL",
            TranscriptLabel::GrindingNonce => *b"TR_LABEL_GRIND__",
            TranscriptLabel::QueryIndex => *b"TR_LABEL_QINDXS_",
            TranscriptLabel::KzgCommitment => *b"TR_LABEL_KZGCOM_",
            TranscriptLabel::KzgEvaluationPoint => *b"TR_LABEL_KZGPT__",
            TranscriptLabel::KzgBatching => *b"TR_LABEL_KZGBAT_",
            TranscriptLabel::Fork => *b"TR_LABEL_FORK___",
        }
    }
}

fn indexed(mut tag: [u8; 16], idx: u8) -> [u8; 16] {
    tag[15] = idx;
    tag
}

/// Error type returned by the transcript API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptError {
    /// Range exclusive argument was zero during `challenge_index`.
    RangeZero,
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::RangeZero => write!(f, "challenge range must be non-zero"),
        }
    }
}

impl std::error::Error for TranscriptError {}

/// Largest challenge, in bytes, any [`ChallengeValue`] may request.
pub const MAX_CHALLENGE_BYTES: usize = 64;

/// Values that can be drawn from the transcript.
///
/// Implementors declare how many uniformly random bytes they consume and how
/// those bytes map onto the value; integers read little-endian, field
/// elements reduce a wide integer so the bias is negligible.
pub trait ChallengeValue: Sized {
    /// Number of bytes consumed, at most [`MAX_CHALLENGE_BYTES`].
    const BYTE_LEN: usize;

    /// Maps exactly `BYTE_LEN` challenge bytes onto a value.
    fn from_challenge_bytes(bytes: &[u8]) -> Self;
}

impl ChallengeValue for u32 {
    const BYTE_LEN: usize = 4;

    fn from_challenge_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[..4]);
        u32::from_le_bytes(buf)
    }
}

impl ChallengeValue for u64 {
    const BYTE_LEN: usize = 8;

    fn from_challenge_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes[..8]);
        u64::from_le_bytes(buf)
    }
}

impl ChallengeValue for FieldElement {
    const BYTE_LEN: usize = 32;

    fn from_challenge_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(&bytes[..32]);
        FieldElement::from_transcript_bytes(&buf)
    }
}

impl ChallengeValue for [u8; 32] {
    const BYTE_LEN: usize = 32;

    fn from_challenge_bytes(bytes: &[u8]) -> Self {
        let mut buf = [0u8; 32];
        buf.copy_from_slice(&bytes[..32]);
        buf
    }
}
