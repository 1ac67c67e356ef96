//! Byte hashing used for Merkle commitments and the Fiat–Shamir transcript.
//!
//! The concrete function is a configuration choice ([`HashFamily`]) resolved
//! at runtime, so a single compiled prover can serve every parameter profile.
//!
//! * [`deterministic`] – Blake2s backend, shared [`Hash`] type and the
//!   counter-mode XOF used to squeeze challenges.
//! * [`blake3`] – BLAKE3 backend with the same framing.
//! * [`config`] – domain separation tags.

pub mod blake3;
pub mod config;
pub mod deterministic;

pub use self::blake3::{Blake3Backend, Blake3Xof};
pub use deterministic::{
    hash, Blake2sBackend, Blake2sXof, CounterXof, DeterministicHasherBackend, Hash, Hasher,
    HexOutput,
};

pub use crate::params::HashFamily;

/// Streaming hasher for a runtime-selected [`HashFamily`].
#[derive(Clone)]
pub enum FamilyHasher {
    /// Blake2s-256 state.
    Blake2s(Hasher<Blake2sBackend>),
    /// BLAKE3 state.
    Blake3(Hasher<Blake3Backend>),
}

impl FamilyHasher {
    /// Creates an empty hasher for `family`.
    pub fn new(family: HashFamily) -> Self {
        match family {
            HashFamily::Blake2s => FamilyHasher::Blake2s(Hasher::with_backend()),
            HashFamily::Blake3 => FamilyHasher::Blake3(Hasher::with_backend()),
        }
    }

    /// Absorbs additional bytes.
    pub fn update(&mut self, bytes: &[u8]) {
        match self {
            FamilyHasher::Blake2s(inner) => inner.update(bytes),
            FamilyHasher::Blake3(inner) => inner.update(bytes),
        }
    }

    /// Finalises into a 32-byte digest.
    pub fn finalize(self) -> Hash {
        match self {
            FamilyHasher::Blake2s(inner) => inner.finalize(),
            FamilyHasher::Blake3(inner) => inner.finalize(),
        }
    }
}

/// One-shot hash of `input` with the selected family.
pub fn hash_with_family(family: HashFamily, input: &[u8]) -> Hash {
    let mut hasher = FamilyHasher::new(family);
    hasher.update(input);
    hasher.finalize()
}

/// Fills `output` from the counter-mode XOF of `family` keyed by `state`.
pub fn squeeze_with_family(family: HashFamily, state: [u8; 32], output: &mut [u8]) {
    match family {
        HashFamily::Blake2s => Blake2sXof::from_state(state).squeeze(output),
        HashFamily::Blake3 => Blake3Xof::from_state(state).squeeze(output),
    }
}
