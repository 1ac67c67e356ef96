//! Binary folding arithmetic.
//!
//! Layers use natural order on `x_j = offset * omega^j`, so the points `x_j`
//! and `x_{j + n/2} = -x_j` share the square `x_j^2`, which is point `j` of
//! the halved domain.  With `lo = f(x_j)` and `hi = f(-x_j)` the folded
//! layer is
//!
//! ```text
//! f'(x_j^2) = ((lo + hi) + alpha * (lo - hi) * x_j^-1) / 2
//! ```
//!
//! i.e. `f_even + alpha * f_odd` for `f(X) = f_even(X^2) + X * f_odd(X^2)`.

use crate::fft::EvaluationDomain;
use crate::field::FieldElement;
use crate::utils::map_indexed;

/// `2^-1` in the base field.
pub const INV_TWO: FieldElement = FieldElement::new(0x7fff_ffff_8000_0001);

/// Folds one pair of evaluations.
#[inline]
pub fn fold_pair(
    lo: FieldElement,
    hi: FieldElement,
    alpha: FieldElement,
    x_inv: FieldElement,
) -> FieldElement {
    INV_TWO * ((lo + hi) + alpha * (lo - hi) * x_inv)
}

/// Folds a full column evaluated over `domain` into the halved domain.
pub fn fold_column(
    values: &[FieldElement],
    alpha: FieldElement,
    domain: &EvaluationDomain,
) -> Vec<FieldElement> {
    let half = values.len() / 2;
    let inverses = half_domain_inverses(domain, half);
    map_indexed(half, |j| {
        fold_pair(values[j], values[j + half], alpha, inverses[j])
    })
}

fn half_domain_inverses(domain: &EvaluationDomain, half: usize) -> Vec<FieldElement> {
    let mut points = domain.elements();
    points.truncate(half);
    FieldElement::batch_inverse(&points)
}

/// Index of the folding partner of `position` in a layer of `size` points.
#[inline]
pub fn sibling_index(position: usize, size: usize) -> usize {
    (position + size / 2) % size
}

/// Position of the folded value in the next layer.
#[inline]
pub fn next_index(position: usize, size: usize) -> usize {
    position % (size / 2)
}

/// Orders `(value at position, value at sibling)` into `(lo, hi)` and folds.
///
/// `size` is the size of the layer `position` lives in.
pub fn fold_at(
    position: usize,
    size: usize,
    at_position: FieldElement,
    at_sibling: FieldElement,
    alpha: FieldElement,
    domain: &EvaluationDomain,
) -> FieldElement {
    let half = size / 2;
    let j = position % half;
    let (lo, hi) = if position < half {
        (at_position, at_sibling)
    } else {
        (at_sibling, at_position)
    };
    fold_pair(lo, hi, alpha, domain.element_inverse_at(j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldElementOps, Polynomial};

    #[test]
    fn inv_two_is_inverse() {
        assert_eq!(INV_TWO * FieldElement::new(2), FieldElement::ONE);
        assert_eq!(FieldElement::new(2).inv(), Some(INV_TWO));
    }

    #[test]
    fn folding_matches_even_odd_split() {
        // f(X) = 1 + 2X + 3X^2 + 4X^3 -> f_even = 1 + 3Y, f_odd = 2 + 4Y
        let domain = EvaluationDomain::new_coset(8, FieldElement::GENERATOR).unwrap();
        let poly = Polynomial::from_u64s(&[1, 2, 3, 4]);
        let values = domain.evaluate(&poly).unwrap();
        let alpha = FieldElement::new(5);
        let folded = fold_column(&values, alpha, &domain);

        let expected = Polynomial::from_u64s(&[1 + 5 * 2, 3 + 5 * 4]);
        let halved = domain.halve().unwrap();
        assert_eq!(folded, halved.evaluate(&expected).unwrap());
    }

    #[test]
    fn pointwise_fold_matches_column_fold() {
        let domain = EvaluationDomain::new(16).unwrap();
        let values: Vec<_> = (0..16u64).map(|v| FieldElement::new(v * v + 3)).collect();
        let alpha = FieldElement::new(99);
        let folded = fold_column(&values, alpha, &domain);
        for position in 0..16 {
            let sibling = sibling_index(position, 16);
            let value = fold_at(position, 16, values[position], values[sibling], alpha, &domain);
            assert_eq!(value, folded[next_index(position, 16)]);
        }
    }
}
