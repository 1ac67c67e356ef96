//! List polynomial commitment over FRI.
//!
//! Polynomials are committed as evaluation columns over the FRI initial
//! domain, one Merkle leaf per row.  An opening proves all claimed values
//! `f_t(z)` at once: the prover builds the quotients
//! `q_t(X) = (f_t(X) - f_t(z)) / (X - z)`, optionally collapses them with
//! powers of a challenge `theta` and runs batched FRI on the result.  The
//! verifier never sees the quotient oracle; it rebuilds its round-0 values
//! from the opened commitment rows.
//!
//! Every call shares the caller's transcript, so several commitments made
//! at different protocol steps can be opened together.

mod proof;
mod prover;
mod quotient;
mod scheme;
mod types;
mod verifier;

pub use proof::LpcProof;
pub use quotient::{
    combine_columns, combine_row, draw_batching_challenge, draw_evaluation_point,
    quotient_columns, quotient_row,
};
pub use scheme::{LpcBatch, LpcScheme};
pub use types::{LpcError, QuotientBatching};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldElement, Polynomial};
    use crate::params::{BuiltinProfile, LpcParams, LpcParamsBuilder};
    use crate::transcript::Transcript;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(batching: QuotientBatching) -> LpcParams {
        let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
        builder.fri.final_log2 = 1;
        builder.lpc.quotient_batching = batching;
        builder.build().unwrap()
    }

    fn round_trip(batching: QuotientBatching) {
        let params = params(batching);
        let scheme = LpcScheme::new(&params).unwrap();
        let (first_root, first) = scheme
            .commit_coefficients(&[
                Polynomial::from_u64s(&[1, 2, 3]),
                Polynomial::from_u64s(&[8, 0, 0, 0, 0, 0, 0, 1]),
            ])
            .unwrap();
        let (second_root, second) = scheme
            .commit_coefficients(&[Polynomial::from_u64s(&[5])])
            .unwrap();

        let mut prover = Transcript::from_params(&params, b"lpc-unit");
        let proof = scheme
            .prove(&[&first, &second], &mut prover, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(proof.claimed_evaluations[1], vec![FieldElement::new(5)]);

        let mut verifier = Transcript::from_params(&params, b"lpc-unit");
        scheme
            .verify(&[first_root, second_root], &proof, &mut verifier)
            .unwrap();
        assert_eq!(prover, verifier);
    }

    #[test]
    fn linear_combination_round_trip() {
        round_trip(QuotientBatching::LinearCombination);
    }

    #[test]
    fn per_polynomial_round_trip() {
        round_trip(QuotientBatching::PerPolynomial);
    }

    #[test]
    fn swapped_commitments_are_rejected() {
        let params = params(QuotientBatching::LinearCombination);
        let scheme = LpcScheme::new(&params).unwrap();
        let (a_root, a) = scheme
            .commit_coefficients(&[Polynomial::from_u64s(&[1, 1])])
            .unwrap();
        let (b_root, b) = scheme
            .commit_coefficients(&[Polynomial::from_u64s(&[2, 7])])
            .unwrap();
        let mut prover = Transcript::from_params(&params, b"lpc-unit");
        let proof = scheme
            .prove(&[&a, &b], &mut prover, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let mut verifier = Transcript::from_params(&params, b"lpc-unit");
        let err = scheme
            .verify(&[b_root, a_root], &proof, &mut verifier)
            .unwrap_err();
        assert!(err.is_rejection());
    }
}
