//! Transcript-bound proof of work.
//!
//! A candidate nonce is absorbed under [`TranscriptLabel::GrindingNonce`]
//! and a challenge is drawn under the same label.  The nonce is accepted when
//! the masked challenge is zero:
//!
//! | Target | Challenge | Accepted when |
//! |--------|-----------|---------------|
//! | [`GrindingTarget::Integer`] | `u64` | low `bits` bits are zero |
//! | [`GrindingTarget::FieldElement`] | canonical value of a field element | high `bits` bits are zero |
//!
//! Candidates are checked on forks of the transcript.  Only the winner is
//! replayed on the caller's transcript, so prover and verifier transcripts
//! advance identically.  With `bits == 0` neither side touches the
//! transcript.

use core::fmt;

use rand::RngCore;
use tracing::{debug, instrument};

use crate::params::{GrindingParams, GrindingTarget};
use crate::transcript::{Transcript, TranscriptLabel};

/// Number of candidates handed to the worker pool per search step.
#[cfg(feature = "parallel")]
const PARALLEL_BATCH: u64 = 1 << 12;

/// Errors raised by the proof-of-work layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrindingError {
    /// Difficulty must be strictly below the challenge width.
    DifficultyTooHigh { bits: u8, width: u32 },
    /// No nonce satisfied the mask within the search bound.
    Exhausted { attempts: u64 },
}

impl fmt::Display for GrindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrindingError::DifficultyTooHigh { bits, width } => {
                write!(f, "grinding difficulty {bits} must be below {width} bits")
            }
            GrindingError::Exhausted { attempts } => {
                write!(f, "no grinding nonce found after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for GrindingError {}

/// Accepted nonce together with the challenge it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrindingWitness {
    /// Nonce absorbed into the transcript.
    pub nonce: u64,
    /// Integer view of the challenge; its masked bits are zero.
    pub challenge: u64,
}

/// Proof-of-work engine for one difficulty setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofOfWork {
    params: GrindingParams,
}

impl ProofOfWork {
    /// Validates the difficulty against the challenge width.
    pub fn new(params: GrindingParams) -> Result<Self, GrindingError> {
        let width = params.target.width();
        if u32::from(params.bits) >= width {
            return Err(GrindingError::DifficultyTooHigh {
                bits: params.bits,
                width,
            });
        }
        Ok(Self { params })
    }

    /// Difficulty in bits.
    pub fn bits(&self) -> u8 {
        self.params.bits
    }

    /// Whether any work is required.
    pub fn is_enabled(&self) -> bool {
        self.params.bits > 0
    }

    /// Searches for a nonce and advances `transcript` past it.
    ///
    /// The search starts at a nonce drawn from `rng` and increments from
    /// there, trying at most `max_attempts` candidates.  When several
    /// workers succeed, the candidate closest to the start wins, so the
    /// result only depends on the transcript and the RNG.
    #[instrument(skip_all, fields(bits = self.params.bits))]
    pub fn generate<R: RngCore + ?Sized>(
        &self,
        transcript: &mut Transcript,
        rng: &mut R,
    ) -> Result<GrindingWitness, GrindingError> {
        if !self.is_enabled() {
            return Ok(GrindingWitness {
                nonce: 0,
                challenge: 0,
            });
        }
        let start = rng.next_u64();
        let attempt = self
            .search(transcript, start)
            .ok_or(GrindingError::Exhausted {
                attempts: self.params.max_attempts,
            })?;
        let nonce = start.wrapping_add(attempt);
        let (accepted, challenge) = self.try_nonce(transcript, nonce);
        debug_assert!(accepted);
        debug!(nonce, attempts = attempt + 1, "grinding nonce found");
        Ok(GrindingWitness { nonce, challenge })
    }

    /// Replays `nonce` on `transcript` and checks the mask.
    ///
    /// The transcript advances exactly as on the prover side whether or not
    /// the nonce is accepted.
    pub fn verify(&self, transcript: &mut Transcript, nonce: u64) -> bool {
        if !self.is_enabled() {
            return true;
        }
        self.try_nonce(transcript, nonce).0
    }

    fn try_nonce(&self, transcript: &mut Transcript, nonce: u64) -> (bool, u64) {
        transcript.absorb_u64(TranscriptLabel::GrindingNonce, nonce);
        let bits = u32::from(self.params.bits);
        match self.params.target {
            GrindingTarget::Integer => {
                let challenge: u64 = transcript.challenge(TranscriptLabel::GrindingNonce);
                let mask = (1u64 << bits) - 1;
                (challenge & mask == 0, challenge)
            }
            GrindingTarget::FieldElement => {
                let challenge = transcript
                    .challenge_field(TranscriptLabel::GrindingNonce)
                    .as_u64();
                (challenge >> (u64::BITS - bits) == 0, challenge)
            }
        }
    }

    fn accepts(&self, transcript: &Transcript, nonce: u64) -> bool {
        self.try_nonce(&mut transcript.fork(), nonce).0
    }

    /// Returns the offset from `start` of the first accepted nonce.
    fn search(&self, transcript: &Transcript, start: u64) -> Option<u64> {
        let max_attempts = self.params.max_attempts;

        #[cfg(feature = "parallel")]
        if crate::utils::parallelism_enabled() {
            use rayon::prelude::*;
            let mut base = 0u64;
            while base < max_attempts {
                let len = PARALLEL_BATCH.min(max_attempts - base) as usize;
                let found = (0..len).into_par_iter().find_first(|offset| {
                    self.accepts(transcript, start.wrapping_add(base + *offset as u64))
                });
                if let Some(offset) = found {
                    return Some(base + offset as u64);
                }
                base += len as u64;
            }
            return None;
        }

        (0..max_attempts).find(|attempt| self.accepts(transcript, start.wrapping_add(*attempt)))
    }
}
