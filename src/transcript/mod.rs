//! Fiat–Shamir transcript shared by every commitment scheme in the crate.
//!
//! The transcript is a deterministic state machine over the configured byte
//! hash.  It only guarantees that identical call sequences give identical
//! challenges; the order itself belongs to the protocol driving it.  The
//! list commitment uses the following order:
//!
//! | Phase | Label | Source | Purpose |
//! |-------|-------|--------|---------|
//! | Init | [`TranscriptLabel::ParamsHash`] | [`LpcParams::params_hash`](crate::params::LpcParams::params_hash) | Binds parameter framing. |
//! | Init | [`TranscriptLabel::ProtocolTag`] | `LpcParams::transcript().protocol_tag` | Separates transcript families. |
//! | Init | [`TranscriptLabel::Seed`] | `LpcParams::transcript().seed` | Seeds the state. |
//! | Init | [`TranscriptLabel::Context`] | caller bytes | Application separation. |
//! | Commit | [`TranscriptLabel::Commitment(b)`](TranscriptLabel::Commitment) | batch `b` Merkle root | Pins every committed batch. |
//! | Evaluate | [`TranscriptLabel::EvaluationPoint`] | challenge | Opening point `z`. |
//! | Evaluate | [`TranscriptLabel::ClaimedEvaluations`] | prover values | Binds `p(z)`. |
//! | Evaluate | [`TranscriptLabel::QuotientBatching`] | challenge | Quotient combiner `theta`. |
//! | FRI | [`TranscriptLabel::FriFoldChallenge(i)`](TranscriptLabel::FriFoldChallenge) | challenge | Folding randomness for round `i`. |
//! | FRI | [`TranscriptLabel::FriRoot(i)`](TranscriptLabel::FriRoot) | layer `i` root | Commits each folded layer. |
//! | FRI | [`TranscriptLabel::FriFinal`] | final constants | Binds the collapsed layer. |
//! | Grinding | [`TranscriptLabel::GrindingNonce`] | nonce, then challenge | Proof of work. |
//! | Queries | [`TranscriptLabel::QueryIndex`] | challenges | Query positions. |
//!
//! Determinism guarantee: identical parameters, context, label ordering and
//! payloads yield identical challenge sequences and state digests for both
//! prover and verifier.

mod core;
mod types;

pub use self::core::Transcript;
pub use types::{ChallengeValue, Felt, TranscriptError, TranscriptLabel, MAX_CHALLENGE_BYTES};
