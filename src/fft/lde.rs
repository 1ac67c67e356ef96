//! Low-degree extension from coefficient form onto an evaluation domain.

use tracing::trace;

use crate::field::{polynomial::Polynomial, FieldElement};

use super::domain::{DomainError, EvaluationDomain};

/// Evaluates every polynomial on `domain`, one column per polynomial.
///
/// Each polynomial must have at most `domain.size()` coefficients; the
/// ratio between the domain size and the degree bound is the blowup factor
/// the FRI layer later checks.
pub fn low_degree_extend(
    polynomials: &[Polynomial],
    domain: &EvaluationDomain,
) -> Result<Vec<Vec<FieldElement>>, DomainError> {
    trace!(
        columns = polynomials.len(),
        domain_size = domain.size(),
        "low degree extension"
    );
    polynomials
        .iter()
        .map(|polynomial| domain.evaluate(polynomial))
        .collect()
}
