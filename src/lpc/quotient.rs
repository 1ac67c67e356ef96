//! Evaluation point sampling and DEEP quotients `(f(X) - f(z)) / (X - z)`.

use tracing::debug;

use crate::fft::EvaluationDomain;
use crate::field::{FieldElement, FieldElementOps};
use crate::transcript::{Transcript, TranscriptLabel};
use crate::utils::map_indexed;

use super::types::{LpcError, QuotientBatching};

/// Draws `z` outside `domain`, redrawing at most `max_redraws` times.
pub fn draw_evaluation_point(
    transcript: &mut Transcript,
    domain: &EvaluationDomain,
    max_redraws: u8,
) -> Result<FieldElement, LpcError> {
    let draws = usize::from(max_redraws) + 1;
    for draw in 0..draws {
        let z = transcript.challenge_field(TranscriptLabel::EvaluationPoint);
        if !domain.contains(z) {
            return Ok(z);
        }
        debug!(draw, "evaluation point inside the domain, redrawing");
    }
    Err(LpcError::EvaluationPointInDomain { draws })
}

/// Divides every `column - claimed` by `X - z` pointwise over `domain`.
pub fn quotient_columns(
    domain: &EvaluationDomain,
    z: FieldElement,
    columns: &[Vec<FieldElement>],
    claimed: &[FieldElement],
) -> Vec<Vec<FieldElement>> {
    let shifted: Vec<FieldElement> = domain.elements().into_iter().map(|x| x - z).collect();
    let inverses = FieldElement::batch_inverse(&shifted);
    columns
        .iter()
        .zip(claimed)
        .map(|(column, &y)| map_indexed(column.len(), |k| (column[k] - y) * inverses[k]))
        .collect()
}

/// Quotient values of one opened row at the point `x`.
///
/// Returns `None` only when `x == z`, which the redraw rule excludes for
/// every domain point.
pub fn quotient_row(
    x: FieldElement,
    z: FieldElement,
    row: &[FieldElement],
    claimed: &[FieldElement],
) -> Option<Vec<FieldElement>> {
    let inverse = (x - z).inv()?;
    Some(
        row.iter()
            .zip(claimed)
            .map(|(&value, &y)| (value - y) * inverse)
            .collect(),
    )
}

/// Draws the combination challenge required by `policy`, if any.
pub fn draw_batching_challenge(
    transcript: &mut Transcript,
    policy: QuotientBatching,
) -> Option<FieldElement> {
    match policy {
        QuotientBatching::LinearCombination => {
            Some(transcript.challenge_field(TranscriptLabel::QuotientBatching))
        }
        QuotientBatching::PerPolynomial => None,
    }
}

/// Collapses quotient columns to `sum theta^t * q_t` when `theta` is set,
/// otherwise returns them unchanged.
pub fn combine_columns(
    quotients: Vec<Vec<FieldElement>>,
    theta: Option<FieldElement>,
) -> Vec<Vec<FieldElement>> {
    let Some(theta) = theta else {
        return quotients;
    };
    let size = quotients.first().map(Vec::len).unwrap_or(0);
    let weights = powers(theta, quotients.len());
    let combined = map_indexed(size, |k| {
        quotients
            .iter()
            .zip(&weights)
            .fold(FieldElement::ZERO, |acc, (column, &weight)| {
                acc + weight * column[k]
            })
    });
    vec![combined]
}

/// Row counterpart of [`combine_columns`].
pub fn combine_row(values: Vec<FieldElement>, theta: Option<FieldElement>) -> Vec<FieldElement> {
    match theta {
        Some(theta) => {
            let weights = powers(theta, values.len());
            vec![values
                .iter()
                .zip(&weights)
                .fold(FieldElement::ZERO, |acc, (&value, &weight)| acc + weight * value)]
        }
        None => values,
    }
}

fn powers(base: FieldElement, count: usize) -> Vec<FieldElement> {
    let mut out = Vec::with_capacity(count);
    let mut current = FieldElement::ONE;
    for _ in 0..count {
        out.push(current);
        current *= base;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Polynomial;
    use crate::hash::HashFamily;

    #[test]
    fn quotient_is_a_polynomial_of_lower_degree() {
        let domain = EvaluationDomain::new_coset(8, FieldElement::new(7)).unwrap();
        let poly = Polynomial::from_u64s(&[3, 1, 4, 1, 5]);
        let column = domain.evaluate(&poly).unwrap();
        let z = FieldElement::new(1_000_003);
        let claimed = poly.evaluate(z);

        let quotient = quotient_columns(&domain, z, &[column], &[claimed]).remove(0);
        let interpolated = domain.interpolate(&quotient).unwrap();
        assert_eq!(interpolated.degree(), Some(3));
    }

    #[test]
    fn row_quotients_match_columns() {
        let domain = EvaluationDomain::new_coset(8, FieldElement::new(7)).unwrap();
        let columns = vec![
            domain.evaluate(&Polynomial::from_u64s(&[1, 2])).unwrap(),
            domain.evaluate(&Polynomial::from_u64s(&[9, 0, 3])).unwrap(),
        ];
        let z = FieldElement::new(12345);
        let claimed = [FieldElement::new(11), FieldElement::new(13)];
        let theta = Some(FieldElement::new(5));
        let full = combine_columns(quotient_columns(&domain, z, &columns, &claimed), theta);
        for k in 0..domain.size() {
            let row = [columns[0][k], columns[1][k]];
            let values = quotient_row(domain.element_at(k), z, &row, &claimed).unwrap();
            assert_eq!(combine_row(values, theta), vec![full[0][k]]);
        }
    }

    #[test]
    fn redraws_are_bounded() {
        // {1} only rejects z == 1.
        let domain = EvaluationDomain::new(1).unwrap();
        let mut transcript = Transcript::new(HashFamily::Blake2s, b"lpc-z");
        let z = draw_evaluation_point(&mut transcript, &domain, 0).unwrap();
        assert!(!domain.contains(z));
        assert_eq!(transcript.challenge_counter(), 1);
    }
}
