//! Tagged evaluation-domain variants.

use core::fmt;

use crate::field::{FieldElement, FieldElementOps, Polynomial};

use super::{ntt_in_place, RADIX2_MAX_LOG2_SIZE};

/// Failures raised while constructing or using an evaluation domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Domain sizes must be non-zero powers of two.
    NotPowerOfTwo { size: usize },
    /// The field has no subgroup of the requested order.
    TooLarge { log_size: u32, max: u32 },
    /// Coset offsets must be invertible.
    ZeroOffset,
    /// An input vector did not fit the domain.
    LengthMismatch { expected: usize, actual: usize },
    /// The domain cannot be halved any further.
    CannotHalve,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotPowerOfTwo { size } => {
                write!(f, "domain size {size} is not a power of two")
            }
            DomainError::TooLarge { log_size, max } => {
                write!(f, "domain of size 2^{log_size} exceeds the field two-adicity 2^{max}")
            }
            DomainError::ZeroOffset => write!(f, "coset offset must be non-zero"),
            DomainError::LengthMismatch { expected, actual } => {
                write!(f, "expected at most {expected} values, got {actual}")
            }
            DomainError::CannotHalve => write!(f, "single-point domain cannot be halved"),
        }
    }
}

impl std::error::Error for DomainError {}

pub(crate) fn log2_exact(size: usize) -> Result<u32, DomainError> {
    if size == 0 || !size.is_power_of_two() {
        return Err(DomainError::NotPowerOfTwo { size });
    }
    let log_size = size.trailing_zeros();
    if log_size > RADIX2_MAX_LOG2_SIZE {
        return Err(DomainError::TooLarge {
            log_size,
            max: RADIX2_MAX_LOG2_SIZE,
        });
    }
    Ok(log_size)
}

/// Multiplicative subgroup of order `2^log_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix2Domain {
    log_size: u32,
    generator: FieldElement,
    generator_inv: FieldElement,
}

impl Radix2Domain {
    fn new(size: usize) -> Result<Self, DomainError> {
        let log_size = log2_exact(size)?;
        let generator = FieldElement::root_of_unity(log_size).ok_or(DomainError::TooLarge {
            log_size,
            max: RADIX2_MAX_LOG2_SIZE,
        })?;
        // A root of unity is never zero.
        let generator_inv = generator.inv().unwrap_or(FieldElement::ONE);
        Ok(Self {
            log_size,
            generator,
            generator_inv,
        })
    }

    fn squared(&self) -> Self {
        Self {
            log_size: self.log_size - 1,
            generator: self.generator.square(),
            generator_inv: self.generator_inv.square(),
        }
    }
}

/// Multiplicative coset `offset * H` of a radix-2 subgroup `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosetDomain {
    base: Radix2Domain,
    offset: FieldElement,
    offset_inv: FieldElement,
}

/// Runtime-selected evaluation domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationDomain {
    /// Plain subgroup `{omega^i}`.
    Radix2(Radix2Domain),
    /// Shifted subgroup `{offset * omega^i}`.
    Coset(CosetDomain),
}

impl EvaluationDomain {
    /// Builds the radix-2 subgroup of `size` elements.
    pub fn new(size: usize) -> Result<Self, DomainError> {
        Ok(EvaluationDomain::Radix2(Radix2Domain::new(size)?))
    }

    /// Builds the coset `offset * H` with `|H| = size`.
    pub fn new_coset(size: usize, offset: FieldElement) -> Result<Self, DomainError> {
        let offset_inv = offset.inv().ok_or(DomainError::ZeroOffset)?;
        Ok(EvaluationDomain::Coset(CosetDomain {
            base: Radix2Domain::new(size)?,
            offset,
            offset_inv,
        }))
    }

    fn base(&self) -> &Radix2Domain {
        match self {
            EvaluationDomain::Radix2(base) => base,
            EvaluationDomain::Coset(coset) => &coset.base,
        }
    }

    /// Number of points in the domain.
    pub fn size(&self) -> usize {
        1usize << self.base().log_size
    }

    /// `log2` of the domain size.
    pub fn log_size(&self) -> u32 {
        self.base().log_size
    }

    /// Subgroup generator `omega`.
    pub fn generator(&self) -> FieldElement {
        self.base().generator
    }

    /// Coset shift (one for the plain subgroup).
    pub fn offset(&self) -> FieldElement {
        match self {
            EvaluationDomain::Radix2(_) => FieldElement::ONE,
            EvaluationDomain::Coset(coset) => coset.offset,
        }
    }

    /// Returns `offset * omega^index`; indices wrap modulo the domain size.
    pub fn element_at(&self, index: usize) -> FieldElement {
        let exponent = (index % self.size()) as u64;
        self.offset() * self.generator().pow(exponent)
    }

    /// Returns `(offset * omega^index)^-1`.
    pub fn element_inverse_at(&self, index: usize) -> FieldElement {
        let exponent = (index % self.size()) as u64;
        let base_inv = self.base().generator_inv.pow(exponent);
        match self {
            EvaluationDomain::Radix2(_) => base_inv,
            EvaluationDomain::Coset(coset) => coset.offset_inv * base_inv,
        }
    }

    /// All domain points in natural order.
    pub fn elements(&self) -> Vec<FieldElement> {
        let generator = self.generator();
        let mut current = self.offset();
        let mut out = Vec::with_capacity(self.size());
        for _ in 0..self.size() {
            out.push(current);
            current *= generator;
        }
        out
    }

    /// Returns `true` if `point` lies in the domain, i.e. `point^n == offset^n`.
    pub fn contains(&self, point: FieldElement) -> bool {
        let n = self.size() as u64;
        point.pow(n) == self.offset().pow(n)
    }

    /// Image of the domain under `x -> x^2`: half the size, squared offset.
    pub fn halve(&self) -> Result<Self, DomainError> {
        if self.log_size() == 0 {
            return Err(DomainError::CannotHalve);
        }
        Ok(match self {
            EvaluationDomain::Radix2(base) => EvaluationDomain::Radix2(base.squared()),
            EvaluationDomain::Coset(coset) => EvaluationDomain::Coset(CosetDomain {
                base: coset.base.squared(),
                offset: coset.offset.square(),
                offset_inv: coset.offset_inv.square(),
            }),
        })
    }

    /// Evaluates coefficient vectors on every domain point.
    pub fn evaluate(&self, polynomial: &Polynomial) -> Result<Vec<FieldElement>, DomainError> {
        let size = self.size();
        if polynomial.len() > size {
            return Err(DomainError::LengthMismatch {
                expected: size,
                actual: polynomial.len(),
            });
        }
        let mut values = vec![FieldElement::ZERO; size];
        let offset = self.offset();
        let mut shift = FieldElement::ONE;
        for (slot, coeff) in values.iter_mut().zip(&polynomial.coefficients) {
            *slot = *coeff * shift;
            shift *= offset;
        }
        ntt_in_place(&mut values, self.generator());
        Ok(values)
    }

    /// Recovers the coefficient form of the polynomial of degree `< size`
    /// whose evaluations over the domain are `values`.
    pub fn interpolate(&self, values: &[FieldElement]) -> Result<Polynomial, DomainError> {
        let size = self.size();
        if values.len() != size {
            return Err(DomainError::LengthMismatch {
                expected: size,
                actual: values.len(),
            });
        }
        let mut coefficients = values.to_vec();
        ntt_in_place(&mut coefficients, self.base().generator_inv);
        let size_inv = FieldElement::new(size as u64)
            .inv()
            .unwrap_or(FieldElement::ONE);
        let offset_inv = match self {
            EvaluationDomain::Radix2(_) => FieldElement::ONE,
            EvaluationDomain::Coset(coset) => coset.offset_inv,
        };
        let mut shift = size_inv;
        for coeff in coefficients.iter_mut() {
            *coeff *= shift;
            shift *= offset_inv;
        }
        Ok(Polynomial::new(coefficients))
    }
}
