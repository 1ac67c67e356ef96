use crate::field::CanonicalSerialize;
use crate::hash::config::TRANSCRIPT_DOMAIN_TAG;
use crate::hash::{squeeze_with_family, FamilyHasher, HashFamily};
use crate::merkle::Digest;
use crate::params::LpcParams;

use super::types::{ChallengeValue, Felt, TranscriptError, TranscriptLabel, MAX_CHALLENGE_BYTES};

/// Deterministic, domain-separated Fiat–Shamir transcript.
///
/// The state is a 32-byte chaining value.  Absorbing hashes
/// `state || label_tag || len_le || data` into the next state.  A challenge
/// increments the counter, keys the XOF of the configured hash family with
/// `H(state || label_tag || counter_le)`, squeezes the output and then mixes
/// that output back into the state.
///
/// Cloning duplicates the state without sharing it; see [`Transcript::fork`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    hash: HashFamily,
    state: [u8; 32],
    challenge_counter: u64,
}

impl Transcript {
    /// Initialises a transcript for `hash` bound to `context`.
    pub fn new(hash: HashFamily, context: &[u8]) -> Self {
        let mut transcript = Self::empty(hash);
        transcript.absorb_bytes(TranscriptLabel::Context, context);
        transcript
    }

    /// Initialises a transcript bound to a parameter set and a caller context.
    ///
    /// | Order | Label | Payload |
    /// |-------|-------|---------|
    /// | 1 | [`TranscriptLabel::ParamsHash`] | [`LpcParams::params_hash`] |
    /// | 2 | [`TranscriptLabel::ProtocolTag`] | `protocol_tag` little-endian |
    /// | 3 | [`TranscriptLabel::Seed`] | transcript seed |
    /// | 4 | [`TranscriptLabel::Context`] | `context` |
    pub fn from_params(params: &LpcParams, context: &[u8]) -> Self {
        let mut transcript = Self::empty(params.hash());
        transcript.absorb_bytes(TranscriptLabel::ParamsHash, &params.params_hash());
        transcript.absorb_u64(
            TranscriptLabel::ProtocolTag,
            params.transcript().protocol_tag,
        );
        transcript.absorb_bytes(TranscriptLabel::Seed, &params.transcript().seed);
        transcript.absorb_bytes(TranscriptLabel::Context, context);
        transcript
    }

    fn empty(hash: HashFamily) -> Self {
        let mut hasher = FamilyHasher::new(hash);
        hasher.update(TRANSCRIPT_DOMAIN_TAG);
        hasher.update(&TranscriptLabel::Init.domain_tag());
        Self {
            hash,
            state: hasher.finalize().into_bytes(),
            challenge_counter: 0,
        }
    }

    /// Hash family driving the transcript.
    pub fn hash_family(&self) -> HashFamily {
        self.hash
    }

    /// Absorbs canonical bytes under the supplied label.
    pub fn absorb_bytes(&mut self, label: TranscriptLabel, data: &[u8]) {
        self.state = mix(self.hash, self.state, label, data);
    }

    /// Absorbs a single field element in canonical little-endian form.
    pub fn absorb_field(&mut self, label: TranscriptLabel, felt: Felt) {
        self.absorb_bytes(label, &felt.to_bytes());
    }

    /// Absorbs canonical field elements as one message.
    pub fn absorb_field_elements(&mut self, label: TranscriptLabel, felts: &[Felt]) {
        let mut buffer = Vec::with_capacity(felts.len() * Felt::BYTE_LENGTH);
        for felt in felts {
            buffer.extend_from_slice(&felt.to_bytes());
        }
        self.absorb_bytes(label, &buffer);
    }

    /// Absorbs a Merkle digest.
    pub fn absorb_digest(&mut self, label: TranscriptLabel, digest: &Digest) {
        self.absorb_bytes(label, digest.as_bytes());
    }

    /// Absorbs a little-endian `u64`.
    pub fn absorb_u64(&mut self, label: TranscriptLabel, value: u64) {
        self.absorb_bytes(label, &value.to_le_bytes());
    }

    fn derive_challenge(&mut self, label: TranscriptLabel, output: &mut [u8]) {
        self.challenge_counter = match self.challenge_counter.checked_add(1) {
            Some(next) => next,
            None => panic!("transcript challenge counter exhausted"),
        };
        let mut hasher = FamilyHasher::new(self.hash);
        hasher.update(&self.state);
        hasher.update(&label.domain_tag());
        hasher.update(&self.challenge_counter.to_le_bytes());
        squeeze_with_family(self.hash, hasher.finalize().into_bytes(), output);
        self.state = mix(self.hash, self.state, label, output);
    }

    /// Draws a typed challenge.
    pub fn challenge<T: ChallengeValue>(&mut self, label: TranscriptLabel) -> T {
        assert!(T::BYTE_LEN <= MAX_CHALLENGE_BYTES);
        let mut buffer = [0u8; MAX_CHALLENGE_BYTES];
        let bytes = &mut buffer[..T::BYTE_LEN];
        self.derive_challenge(label, bytes);
        T::from_challenge_bytes(bytes)
    }

    /// Draws a field element challenge.
    pub fn challenge_field(&mut self, label: TranscriptLabel) -> Felt {
        self.challenge(label)
    }

    /// Draws an index in `0..range_exclusive`.
    pub fn challenge_index(
        &mut self,
        label: TranscriptLabel,
        range_exclusive: usize,
    ) -> Result<usize, TranscriptError> {
        if range_exclusive == 0 {
            return Err(TranscriptError::RangeZero);
        }
        let value: u64 = self.challenge(label);
        Ok((value % range_exclusive as u64) as usize)
    }

    /// Emits `n` pseudorandom bytes from the transcript.
    pub fn challenge_bytes(&mut self, label: TranscriptLabel, n: usize) -> Vec<u8> {
        let mut output = vec![0u8; n];
        self.derive_challenge(label, &mut output);
        output
    }

    /// Duplicates the transcript without aliasing.
    ///
    /// The copy evolves independently; nothing done to it is visible in
    /// `self`.  Grinding uses this to try candidate nonces.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    /// Creates a domain separated sub transcript.
    ///
    /// Unlike [`fork`](Self::fork), the child diverges from the parent
    /// immediately and its counter restarts at zero.
    pub fn fork_with_context(&self, context: &[u8]) -> Self {
        Self {
            hash: self.hash,
            state: mix(self.hash, self.state, TranscriptLabel::Fork, context),
            challenge_counter: 0,
        }
    }

    /// Returns the digest of the current transcript state.
    pub fn state_digest(&self) -> [u8; 32] {
        self.state
    }

    /// Number of challenges drawn so far.
    pub fn challenge_counter(&self) -> u64 {
        self.challenge_counter
    }
}

fn mix(hash: HashFamily, state: [u8; 32], label: TranscriptLabel, data: &[u8]) -> [u8; 32] {
    let mut hasher = FamilyHasher::new(hash);
    hasher.update(&state);
    hasher.update(&label.domain_tag());
    hasher.update(&(data.len() as u64).to_le_bytes());
    hasher.update(data);
    hasher.finalize().into_bytes()
}
