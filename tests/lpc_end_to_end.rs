use rand::rngs::StdRng;
use rand::SeedableRng;
use rpp_lpc::field::{lagrange_evaluate, FieldElement, Polynomial};
use rpp_lpc::lpc::{LpcError, LpcProof, LpcScheme, QuotientBatching};
use rpp_lpc::params::{BuiltinProfile, LpcParams, LpcParamsBuilder};
use rpp_lpc::transcript::Transcript;

fn params_with(domain_log2: u8, final_log2: u8, batching: QuotientBatching) -> LpcParams {
    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.fri.domain_log2 = domain_log2;
    builder.fri.final_log2 = final_log2;
    builder.fri.domain_offset = 7;
    builder.lpc.quotient_batching = batching;
    builder.build().expect("params")
}

fn prove(scheme: &LpcScheme, params: &LpcParams, batches: &[&rpp_lpc::lpc::LpcBatch]) -> LpcProof {
    let mut transcript = Transcript::from_params(params, b"lpc-e2e");
    scheme
        .prove(batches, &mut transcript, &mut StdRng::seed_from_u64(9))
        .expect("prove")
}

fn verify(
    scheme: &LpcScheme,
    params: &LpcParams,
    roots: &[rpp_lpc::merkle::Digest],
    proof: &LpcProof,
) -> Result<(), LpcError> {
    let mut transcript = Transcript::from_params(params, b"lpc-e2e");
    scheme.verify(roots, proof, &mut transcript)
}

/// Degrees 3 and 5 fit under a degree bound of 8: the codeword lives on 16
/// points and the even-indexed ones form the size-8 coset `7 * <omega^2>`.
#[test]
fn claimed_values_match_lagrange_interpolation() {
    let params = params_with(4, 1, QuotientBatching::LinearCombination);
    let scheme = LpcScheme::new(&params).unwrap();
    let polynomials = vec![
        Polynomial::from_u64s(&[2, 0, 5, 1]),
        Polynomial::from_u64s(&[9, 8, 7, 6, 5, 4]),
    ];
    let (root, batch) = scheme.commit_coefficients(&polynomials).unwrap();
    assert_eq!(batch.width(), 2);

    let proof = prove(&scheme, &params, &[&batch]);
    verify(&scheme, &params, &[root], &proof).expect("verify");

    let z = proof.evaluation_point;
    let domain = scheme.fri().initial_domain();
    assert!(!domain.contains(z));
    assert_eq!(scheme.degree_bound(), 8);
    let xs: Vec<FieldElement> = domain.elements().into_iter().step_by(2).collect();
    assert_eq!(xs.len(), 8);
    assert_eq!(proof.claimed_evaluations.len(), 1);
    for (column, claimed) in batch.columns().iter().zip(&proof.claimed_evaluations[0]) {
        let ys: Vec<FieldElement> = column.iter().copied().step_by(2).collect();
        assert_eq!(lagrange_evaluate(&xs, &ys, z), Some(*claimed));
    }
    for (polynomial, claimed) in polynomials.iter().zip(&proof.claimed_evaluations[0]) {
        assert_eq!(polynomial.evaluate(z), *claimed);
    }
}

#[test]
fn evaluation_and_coefficient_commitments_agree() {
    let params = params_with(4, 1, QuotientBatching::LinearCombination);
    let scheme = LpcScheme::new(&params).unwrap();
    let polynomial = Polynomial::from_u64s(&[4, 4, 0, 1]);
    let values = scheme
        .fri()
        .initial_domain()
        .evaluate(&polynomial)
        .unwrap();

    let (from_values, _) = scheme.commit(vec![values]).unwrap();
    let (from_coefficients, _) = scheme.commit_coefficients(&[polynomial]).unwrap();
    assert_eq!(from_values, from_coefficients);
}

#[test]
fn several_batches_per_polynomial_verify() {
    let params = params_with(5, 2, QuotientBatching::PerPolynomial);
    let scheme = LpcScheme::new(&params).unwrap();
    let (root_a, batch_a) = scheme
        .commit_coefficients(&[Polynomial::from_u64s(&[1, 2, 3])])
        .unwrap();
    let (root_b, batch_b) = scheme
        .commit_coefficients(&[
            Polynomial::from_u64s(&[0, 1]),
            Polynomial::from_u64s(&[3, 3, 3, 3, 3, 3, 3]),
            Polynomial::from_u64s(&[8]),
        ])
        .unwrap();

    let proof = prove(&scheme, &params, &[&batch_a, &batch_b]);
    assert_eq!(proof.fri.final_values.len(), 4);
    assert_eq!(proof.initial_openings.len(), scheme.fri().queries());
    assert!(proof.initial_openings.iter().all(|pairs| pairs.len() == 2));
    verify(&scheme, &params, &[root_a, root_b], &proof).expect("verify");

    let err = verify(&scheme, &params, &[root_a], &proof).unwrap_err();
    assert!(err.is_rejection());
}

#[test]
fn proof_survives_wire_round_trip() {
    let params = params_with(4, 1, QuotientBatching::LinearCombination);
    let scheme = LpcScheme::new(&params).unwrap();
    let (root, batch) = scheme
        .commit_coefficients(&[Polynomial::from_u64s(&[7, 0, 0, 0, 0, 2])])
        .unwrap();
    let proof = prove(&scheme, &params, &[&batch]);

    let bytes = proof.to_bytes().unwrap();
    let decoded = LpcProof::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, proof);
    assert_eq!(decoded.to_bytes().unwrap(), bytes);
    verify(&scheme, &params, &[root], &decoded).expect("decoded proof verifies");

    let json = serde_json::to_string(&proof).unwrap();
    let from_json: LpcProof = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, proof);
}

#[test]
fn degree_bound_is_enforced_at_commit() {
    let params = params_with(3, 1, QuotientBatching::LinearCombination);
    let scheme = LpcScheme::new(&params).unwrap();
    assert_eq!(scheme.degree_bound(), 4);

    let err = scheme
        .commit_coefficients(&[Polynomial::from_u64s(&[1, 1, 1, 1, 1])])
        .unwrap_err();
    assert_eq!(
        err,
        LpcError::DegreeTooLarge {
            column: 0,
            degree: 4,
            bound: 4
        }
    );

    let noisy: Vec<FieldElement> = (0..8u64).map(|i| FieldElement::from(i * i * i * i)).collect();
    assert!(matches!(
        scheme.commit(vec![noisy]),
        Err(LpcError::DegreeTooLarge { column: 0, .. })
    ));
    assert_eq!(scheme.commit(Vec::new()).unwrap_err(), LpcError::EmptyBatch);
}

#[test]
fn empty_batch_list_is_refused() {
    let params = params_with(3, 1, QuotientBatching::LinearCombination);
    let scheme = LpcScheme::new(&params).unwrap();
    let mut transcript = Transcript::from_params(&params, b"lpc-e2e");
    assert_eq!(
        scheme
            .prove(&[], &mut transcript, &mut StdRng::seed_from_u64(0))
            .unwrap_err(),
        LpcError::EmptyBatch
    );
}

#[test]
fn full_rate_configuration_is_refused() {
    let params = params_with(3, 0, QuotientBatching::LinearCombination);
    let err = LpcScheme::new(&params).unwrap_err();
    assert_eq!(
        err,
        LpcError::RateTooHigh {
            degree_bound: 8,
            domain_size: 8
        }
    );
    assert_eq!(
        err.to_string(),
        "degree bound 8 must be below the domain size 8"
    );
}
