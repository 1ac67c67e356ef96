use core::fmt;

use blake2::{Blake2s256, Digest};

/// 32-byte digest produced by every hash family supported by the engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash {
    bytes: [u8; 32],
}

impl Hash {
    /// Constructs a hash value from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Returns the canonical byte representation of the digest.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Consumes the hash and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 32] {
        self.bytes
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.bytes)
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; 32] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", self.to_hex())
    }
}

/// Hexadecimal representation of a deterministic digest.
#[derive(Clone, Copy)]
pub struct HexOutput(pub(crate) [u8; 32]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Backend interface implemented by deterministic hashers.
pub trait DeterministicHasherBackend: Sized + Clone {
    /// Creates a new hasher instance.
    fn new() -> Self;

    /// Absorbs additional bytes into the hasher state.
    fn update(&mut self, bytes: &[u8]);

    /// Finalises the hasher and returns a 32-byte digest.
    fn finalize(self) -> [u8; 32];
}

/// Streaming helper mirroring the `blake3::Hasher` interface.
#[derive(Clone)]
pub struct Hasher<B: DeterministicHasherBackend = Blake2sBackend> {
    backend: B,
}

impl<B: DeterministicHasherBackend> Hasher<B> {
    /// Creates a new hasher with an explicit backend.
    pub fn with_backend() -> Self {
        Self { backend: B::new() }
    }

    /// Absorbs additional bytes into the hasher state.
    pub fn update(&mut self, bytes: &[u8]) {
        self.backend.update(bytes);
    }

    /// Finalises the hasher and returns a 32-byte digest.
    pub fn finalize(self) -> Hash {
        Hash::from(self.backend.finalize())
    }
}

/// Computes a 32-byte Blake2s hash of the provided payload.
pub fn hash(input: &[u8]) -> Hash {
    let mut hasher = Hasher::<Blake2sBackend>::with_backend();
    hasher.update(input);
    hasher.finalize()
}

/// Blake2s-256 backend.
#[derive(Clone)]
pub struct Blake2sBackend {
    state: Blake2s256,
}

impl DeterministicHasherBackend for Blake2sBackend {
    fn new() -> Self {
        Self {
            state: Blake2s256::new(),
        }
    }

    fn update(&mut self, bytes: &[u8]) {
        Digest::update(&mut self.state, bytes);
    }

    fn finalize(self) -> [u8; 32] {
        self.state.finalize().into()
    }
}

impl Default for Blake2sBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter-mode extendable output built on top of a 32-byte hash.
///
/// Block `i` is `H(state || i_le)`; the state is ratcheted to the emitted
/// block so earlier output cannot be recomputed from later state.
#[derive(Debug, Clone)]
pub struct CounterXof<B: DeterministicHasherBackend = Blake2sBackend> {
    state: [u8; 32],
    counter: u64,
    _backend: core::marker::PhantomData<B>,
}

impl<B: DeterministicHasherBackend> CounterXof<B> {
    /// Creates a new XOF starting from an existing 32-byte hash state.
    pub fn from_state(state: [u8; 32]) -> Self {
        Self {
            state,
            counter: 0,
            _backend: core::marker::PhantomData,
        }
    }

    /// Returns the next 32-byte block.
    pub fn squeeze_block(&mut self) -> [u8; 32] {
        let mut hasher = Hasher::<B>::with_backend();
        hasher.update(&self.state);
        hasher.update(&self.counter.to_le_bytes());
        let block = hasher.finalize().into_bytes();
        self.state = block;
        self.counter = self.counter.wrapping_add(1);
        block
    }

    /// Fills the provided buffer with bytes from the stream.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        let mut remaining = output;
        while !remaining.is_empty() {
            let block = self.squeeze_block();
            let take = remaining.len().min(block.len());
            let (dst, rest) = remaining.split_at_mut(take);
            dst.copy_from_slice(&block[..take]);
            remaining = rest;
        }
    }
}

/// Blake2s counter-mode XOF.
pub type Blake2sXof = CounterXof<Blake2sBackend>;
