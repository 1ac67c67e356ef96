//! Inverse transform used to recover coefficient form from domain evaluations.

use crate::field::{polynomial::Polynomial, FieldElement};

use super::domain::{DomainError, EvaluationDomain};

/// Reconstructs the polynomial of degree `< domain.size()` interpolating
/// `evaluations`, which must hold exactly one value per domain point.
pub fn interpolate(
    evaluations: &[FieldElement],
    domain: &EvaluationDomain,
) -> Result<Polynomial, DomainError> {
    domain.interpolate(evaluations)
}
