//! Goldilocks prime field used by every layer of the commitment engine.
//!
//! Elements are stored in canonical (non-Montgomery) form: the wrapped `u64`
//! is always strictly below [`FieldElement::MODULUS`].  Every constructor
//! reduces its input, and every arithmetic routine returns a canonical
//! representative, so the integer view returned by
//! [`FieldElement::as_u64`] can be masked directly (grinding relies on this).
//!
//! Serialization uses **little-endian** byte order.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Metadata describing the underlying field modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    /// Prime modulus value in canonical representation.
    pub value: u64,
    /// Largest `k` such that `2^k` divides `value - 1`.
    pub two_adicity: u32,
}

impl Modulus {
    /// Creates a new modulus descriptor.
    pub const fn new(value: u64, two_adicity: u32) -> Self {
        Self { value, two_adicity }
    }
}

/// Goldilocks modulus `2^64 - 2^32 + 1`.
pub const DEFAULT_MODULUS: Modulus = Modulus::new(0xffff_ffff_0000_0001, 32);

const P: u64 = DEFAULT_MODULUS.value;
/// `2^64 mod P`, added back when a 64-bit addition wraps.
const EPSILON: u64 = 0xffff_ffff;

/// Errors surfaced when decoding field elements from bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDeserializeError {
    /// The encoded integer was not below the modulus.
    FieldDeserializeNonCanonical,
}

impl fmt::Display for FieldDeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldDeserializeError::FieldDeserializeNonCanonical => {
                write!(f, "field element deserialization failed: non-canonical input")
            }
        }
    }
}

impl std::error::Error for FieldDeserializeError {}

/// Field element represented as a canonical value modulo the prime.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct FieldElement(pub(crate) u64);

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldElement").field(&self.0).finish()
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FieldElement {
    /// Canonical prime modulus associated with this field.
    pub const MODULUS: Modulus = DEFAULT_MODULUS;
    /// Generator of the full multiplicative group.
    pub const GENERATOR: FieldElement = FieldElement(7);
    /// Additive identity in canonical form.
    pub const ZERO: FieldElement = FieldElement(0);
    /// Multiplicative identity in canonical form.
    pub const ONE: FieldElement = FieldElement(1);
    /// Bit width of the canonical integer view.
    pub const BITS: u32 = 64;
    /// Number of bytes in the canonical encoding.
    pub const BYTE_LENGTH: usize = 8;

    /// Reduces an arbitrary `u64` into the field.
    pub const fn new(value: u64) -> Self {
        if value >= P {
            FieldElement(value - P)
        } else {
            FieldElement(value)
        }
    }

    /// Reduces a 128-bit integer into the field.
    pub const fn from_u128(value: u128) -> Self {
        FieldElement((value % P as u128) as u64)
    }

    /// Returns the canonical integer representative in `[0, p)`.
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns `true` for the additive identity.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Maps 32 bytes of transcript output into the field.
    ///
    /// The first 16 bytes are read as a little-endian `u128` and reduced, which
    /// keeps the statistical distance from uniform below `2^-64`.
    pub fn from_transcript_bytes(bytes: &[u8; 32]) -> Self {
        let mut wide = [0u8; 16];
        wide.copy_from_slice(&bytes[..16]);
        Self::from_u128(u128::from_le_bytes(wide))
    }

    /// Raises the element to `exponent` with square-and-multiply.
    pub fn pow(self, mut exponent: u64) -> Self {
        let mut base = self;
        let mut acc = FieldElement::ONE;
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = FieldElementOps::mul(&acc, &base);
            }
            base = base.square();
            exponent >>= 1;
        }
        acc
    }

    /// Returns a primitive `2^log_size`-th root of unity, if the field has one.
    pub fn root_of_unity(log_size: u32) -> Option<Self> {
        if log_size > Self::MODULUS.two_adicity {
            return None;
        }
        Some(Self::GENERATOR.pow((P - 1) >> log_size))
    }

    /// Inverts every element of `values` with a single field inversion.
    ///
    /// Zero entries stay zero.
    pub fn batch_inverse(values: &[Self]) -> Vec<Self> {
        let mut prefix = Vec::with_capacity(values.len());
        let mut acc = FieldElement::ONE;
        for value in values {
            prefix.push(acc);
            if !value.is_zero() {
                acc = FieldElementOps::mul(&acc, value);
            }
        }
        let mut inv_acc = acc.inv().unwrap_or(FieldElement::ZERO);
        let mut out = vec![FieldElement::ZERO; values.len()];
        for (idx, value) in values.iter().enumerate().rev() {
            if value.is_zero() {
                continue;
            }
            out[idx] = FieldElementOps::mul(&inv_acc, &prefix[idx]);
            inv_acc = FieldElementOps::mul(&inv_acc, value);
        }
        out
    }
}

/// Trait describing the high-level arithmetic contract for field elements.
pub trait FieldElementOps: Sized {
    /// Adds two canonical field elements, returning the canonical representative.
    fn add(&self, rhs: &Self) -> Self;
    /// Subtracts `rhs` from `self` in canonical form.
    fn sub(&self, rhs: &Self) -> Self;
    /// Computes the additive inverse of `self`.
    fn neg(&self) -> Self;
    /// Multiplies two field elements.
    fn mul(&self, rhs: &Self) -> Self;
    /// Squares the field element.
    fn square(&self) -> Self;
    /// Computes the multiplicative inverse, returning `None` for zero.
    fn inv(&self) -> Option<Self>;
}

impl FieldElementOps for FieldElement {
    fn add(&self, rhs: &Self) -> Self {
        let (sum, overflow) = self.0.overflowing_add(rhs.0);
        if overflow {
            FieldElement(sum.wrapping_add(EPSILON))
        } else if sum >= P {
            FieldElement(sum - P)
        } else {
            FieldElement(sum)
        }
    }

    fn sub(&self, rhs: &Self) -> Self {
        if self.0 >= rhs.0 {
            FieldElement(self.0 - rhs.0)
        } else {
            FieldElement(self.0.wrapping_sub(rhs.0).wrapping_add(P))
        }
    }

    fn neg(&self) -> Self {
        if self.0 == 0 {
            *self
        } else {
            FieldElement(P - self.0)
        }
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::from_u128(self.0 as u128 * rhs.0 as u128)
    }

    fn square(&self) -> Self {
        FieldElementOps::mul(self, self)
    }

    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.pow(P - 2))
        }
    }
}

/// Trait defining serialization requirements for field elements.
pub trait CanonicalSerialize: Sized {
    /// Canonical serialization output type (e.g. `[u8; 8]`).
    type Bytes;

    /// Serializes the element into canonical little-endian bytes.
    fn to_bytes(&self) -> Self::Bytes;

    /// Attempts to deserialize from canonical little-endian bytes.
    fn from_bytes(bytes: &Self::Bytes) -> Result<Self, FieldDeserializeError>;
}

impl CanonicalSerialize for FieldElement {
    type Bytes = [u8; 8];

    fn to_bytes(&self) -> Self::Bytes {
        self.0.to_le_bytes()
    }

    fn from_bytes(bytes: &Self::Bytes) -> Result<Self, FieldDeserializeError> {
        let value = u64::from_le_bytes(*bytes);
        if value >= P {
            return Err(FieldDeserializeError::FieldDeserializeNonCanonical);
        }
        Ok(FieldElement(value))
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        FieldElement::new(value)
    }
}

impl From<u32> for FieldElement {
    fn from(value: u32) -> Self {
        FieldElement(value as u64)
    }
}

impl From<FieldElement> for u64 {
    fn from(value: FieldElement) -> Self {
        value.0
    }
}

impl core::ops::Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        FieldElementOps::add(&self, &rhs)
    }
}

impl core::ops::Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        FieldElementOps::sub(&self, &rhs)
    }
}

impl core::ops::Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        FieldElementOps::mul(&self, &rhs)
    }
}

impl core::ops::Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        FieldElementOps::neg(&self)
    }
}

impl core::ops::AddAssign for FieldElement {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for FieldElement {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign for FieldElement {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl core::iter::Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(FieldElement::ZERO, |acc, value| acc + value)
    }
}
