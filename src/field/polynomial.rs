//! Dense polynomials over the Goldilocks field.

use super::prime_field::FieldElementOps;
use super::FieldElement;

/// Dense polynomial represented by coefficients in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    /// Coefficients starting from the constant term.
    pub coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Constructs a polynomial from raw coefficients.
    pub fn new(coefficients: Vec<FieldElement>) -> Self {
        Self { coefficients }
    }

    /// Builds a polynomial from small integer coefficients.
    pub fn from_u64s(coefficients: &[u64]) -> Self {
        Self::new(coefficients.iter().copied().map(FieldElement::new).collect())
    }

    /// Evaluates the polynomial at the provided point using Horner's method.
    pub fn evaluate(&self, point: FieldElement) -> FieldElement {
        let mut result = FieldElement::ZERO;
        for coeff in self.coefficients.iter().rev() {
            result = result * point + *coeff;
        }
        result
    }

    /// Returns the degree of the polynomial or `None` if the polynomial is zero.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|coeff| !coeff.is_zero())
    }

    /// Number of stored coefficients, including trailing zeros.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Returns `true` when no coefficients are stored.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

/// Evaluates the unique polynomial of degree `< xs.len()` through
/// `(xs[i], ys[i])` at `point`.
///
/// Returns `None` if the lengths differ or two abscissae coincide.
pub fn lagrange_evaluate(
    xs: &[FieldElement],
    ys: &[FieldElement],
    point: FieldElement,
) -> Option<FieldElement> {
    if xs.len() != ys.len() {
        return None;
    }
    let mut acc = FieldElement::ZERO;
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut numerator = FieldElement::ONE;
        let mut denominator = FieldElement::ONE;
        for (j, &xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= point - xj;
            denominator *= xi - xj;
        }
        acc += yi * numerator * denominator.inv()?;
    }
    Some(acc)
}
