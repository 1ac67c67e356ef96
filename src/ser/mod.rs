//! Canonical little-endian byte layouts for proofs and parameters.
//!
//! Decoding is total: truncated, oversized or non-canonical input yields a
//! [`SerError`] naming the structure and field, never a panic.

mod error;
mod framing;
mod primitives;
mod reader;

pub use error::{SerError, SerKind, SerResult};
pub use framing::{read_vec, write_vec};
pub use primitives::{
    ensure_u32, read_digest, read_felt, read_felt_vec, read_u16, read_u32, read_u64, read_u8,
    write_bytes, write_digest, write_felt, write_felt_vec, write_u16, write_u32, write_u64,
    write_u8, DIGEST_SIZE,
};
pub use reader::{ensure_consumed, ByteReader};
