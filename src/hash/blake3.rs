//! BLAKE3 backend for commitments and transcripts.

use super::deterministic::{CounterXof, DeterministicHasherBackend};

/// BLAKE3 (32-byte output) backend.
#[derive(Clone, Default)]
pub struct Blake3Backend {
    state: ::blake3::Hasher,
}

impl DeterministicHasherBackend for Blake3Backend {
    fn new() -> Self {
        Self {
            state: ::blake3::Hasher::new(),
        }
    }

    fn update(&mut self, bytes: &[u8]) {
        self.state.update(bytes);
    }

    fn finalize(self) -> [u8; 32] {
        *self.state.finalize().as_bytes()
    }
}

/// BLAKE3 counter-mode XOF, framed identically to the Blake2s variant.
pub type Blake3Xof = CounterXof<Blake3Backend>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Hasher;

    #[test]
    fn matches_reference_blake3() {
        let mut hasher = Hasher::<Blake3Backend>::with_backend();
        hasher.update(b"rpp-lpc");
        assert_eq!(hasher.finalize().as_bytes(), ::blake3::hash(b"rpp-lpc").as_bytes());
    }
}
