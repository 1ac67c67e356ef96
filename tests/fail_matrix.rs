use insta::assert_snapshot;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rpp_lpc::field::{FieldElement, Polynomial};
use rpp_lpc::fri::{self, BasicFriProof, FriConfig, FriError};
use rpp_lpc::lpc::{LpcError, LpcProof, LpcScheme};
use rpp_lpc::merkle::{Digest, MerkleError};
use rpp_lpc::params::{BuiltinProfile, LpcParams, LpcParamsBuilder};
use rpp_lpc::transcript::Transcript;

const CONTEXT: &[u8] = b"fail-matrix";

struct FriFixture {
    params: LpcParams,
    config: FriConfig,
    proof: BasicFriProof,
}

impl FriFixture {
    fn new(grinding_bits: u8) -> Self {
        let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
        builder.grinding.bits = grinding_bits;
        builder.grinding.max_attempts = 1 << 20;
        let params = builder.build().expect("params");
        let config = FriConfig::from_params(&params).expect("config");
        let values = config
            .initial_domain()
            .evaluate(&Polynomial::from_u64s(&[3, 1, 4, 1, 5, 9, 2, 6]))
            .expect("evaluate");
        let mut transcript = Transcript::from_params(&params, CONTEXT);
        let proof = fri::prove(
            &config,
            &values,
            &mut transcript,
            &mut StdRng::seed_from_u64(17),
        )
        .expect("prove");
        Self {
            params,
            config,
            proof,
        }
    }

    fn verify(&self, proof: &BasicFriProof) -> Result<(), FriError> {
        let mut transcript = Transcript::from_params(&self.params, CONTEXT);
        fri::verify(&self.config, proof, &mut transcript)
    }
}

fn flip(digest: &mut Digest) {
    digest.0[0] ^= 1;
}

#[test]
fn honest_fixture_verifies() {
    let fixture = FriFixture::new(0);
    fixture.verify(&fixture.proof).expect("honest proof");
    let grinding = FriFixture::new(10);
    grinding.verify(&grinding.proof).expect("honest proof with grinding");
}

#[test]
fn tampered_initial_leaf_is_rejected() {
    let fixture = FriFixture::new(0);
    let mut proof = fixture.proof.clone();
    proof.initial_openings[0].opening.leaf[0] += FieldElement::ONE;
    let err = fixture.verify(&proof).unwrap_err();
    assert_eq!(
        err,
        FriError::PathInvalid {
            round: 0,
            reason: MerkleError::RootMismatch
        }
    );
    assert_snapshot!(
        err.to_string(),
        @"invalid Merkle path at round 0: recomputed root does not match commitment"
    );
}

#[test]
fn tampered_path_node_is_rejected() {
    let fixture = FriFixture::new(0);
    let mut proof = fixture.proof.clone();
    flip(&mut proof.fri.queries[0].rounds[0].opening.path.nodes[0].siblings_mut()[0]);
    assert_eq!(
        fixture.verify(&proof).unwrap_err(),
        FriError::PathInvalid {
            round: 1,
            reason: MerkleError::RootMismatch
        }
    );
}

#[test]
fn tampered_layer_root_is_rejected() {
    let fixture = FriFixture::new(0);
    let mut proof = fixture.proof.clone();
    flip(&mut proof.fri.layer_roots[1]);
    assert!(fixture.verify(&proof).unwrap_err().is_rejection());

    let mut proof = fixture.proof.clone();
    flip(&mut proof.initial_root);
    assert!(fixture.verify(&proof).unwrap_err().is_rejection());
}

#[test]
fn tampered_final_constant_is_rejected() {
    let fixture = FriFixture::new(0);
    let mut proof = fixture.proof.clone();
    proof.fri.final_values[0] += FieldElement::ONE;
    assert!(fixture.verify(&proof).unwrap_err().is_rejection());
}

#[test]
fn tampered_nonce_is_rejected() {
    let fixture = FriFixture::new(10);
    let mut proof = fixture.proof.clone();
    proof.fri.grinding_nonce = proof.fri.grinding_nonce.wrapping_add(1);
    assert!(fixture.verify(&proof).unwrap_err().is_rejection());
}

#[test]
fn shifted_query_position_is_rejected() {
    let fixture = FriFixture::new(0);
    let mut proof = fixture.proof.clone();
    let original = proof.fri.queries[0].position;
    proof.fri.queries[0].position = (original + 1) % 16;
    assert_eq!(
        fixture.verify(&proof).unwrap_err(),
        FriError::QueryPositionMismatch {
            query: 0,
            expected: original as usize,
            actual: ((original + 1) % 16) as usize,
        }
    );
}

#[test]
fn missing_components_are_rejected() {
    let fixture = FriFixture::new(0);

    let mut proof = fixture.proof.clone();
    proof.fri.queries.pop();
    assert_eq!(
        fixture.verify(&proof).unwrap_err(),
        FriError::InvalidStructure("query count")
    );

    let mut proof = fixture.proof.clone();
    proof.fri.layer_roots.pop();
    assert_eq!(
        fixture.verify(&proof).unwrap_err(),
        FriError::InvalidStructure("layer root count")
    );

    let mut proof = fixture.proof.clone();
    proof.fri.final_values.push(FieldElement::ZERO);
    assert_eq!(
        fixture.verify(&proof).unwrap_err(),
        FriError::InvalidStructure("final value count")
    );

    let mut proof = fixture.proof.clone();
    proof.initial_openings.pop();
    assert_eq!(
        fixture.verify(&proof).unwrap_err(),
        FriError::InvalidStructure("initial opening count")
    );
}

#[test]
fn truncated_wire_proof_is_rejected() {
    let fixture = FriFixture::new(0);
    let bytes = fixture.proof.to_bytes().unwrap();
    assert_eq!(BasicFriProof::from_bytes(&bytes).unwrap(), fixture.proof);
    for cut in [0, 1, bytes.len() / 2, bytes.len() - 1] {
        assert!(BasicFriProof::from_bytes(&bytes[..cut]).is_err(), "cut {cut}");
    }
}

fn lpc_fixture() -> (LpcParams, LpcScheme, Vec<Digest>, LpcProof) {
    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.fri.domain_offset = 7;
    builder.fri.final_log2 = 2;
    let params = builder.build().unwrap();
    let scheme = LpcScheme::new(&params).unwrap();
    let (root, batch) = scheme
        .commit_coefficients(&[
            Polynomial::from_u64s(&[1, 2, 3]),
            Polynomial::from_u64s(&[5, 0, 0, 7]),
        ])
        .unwrap();
    let mut transcript = Transcript::from_params(&params, CONTEXT);
    let proof = scheme
        .prove(&[&batch], &mut transcript, &mut StdRng::seed_from_u64(1))
        .unwrap();
    (params, scheme, vec![root], proof)
}

fn lpc_verify(
    params: &LpcParams,
    scheme: &LpcScheme,
    roots: &[Digest],
    proof: &LpcProof,
) -> Result<(), LpcError> {
    let mut transcript = Transcript::from_params(params, CONTEXT);
    scheme.verify(roots, proof, &mut transcript)
}

#[test]
fn lpc_tampering_matrix() {
    let (params, scheme, roots, proof) = lpc_fixture();
    lpc_verify(&params, &scheme, &roots, &proof).expect("honest lpc proof");

    let mut bad = proof.clone();
    bad.evaluation_point += FieldElement::ONE;
    assert_eq!(
        lpc_verify(&params, &scheme, &roots, &bad).unwrap_err(),
        LpcError::EvaluationPointMismatch
    );

    let mut bad = proof.clone();
    bad.claimed_evaluations[0][1] += FieldElement::ONE;
    assert!(lpc_verify(&params, &scheme, &roots, &bad)
        .unwrap_err()
        .is_rejection());

    let mut bad = proof.clone();
    bad.initial_openings[0][0].sibling.leaf[0] += FieldElement::ONE;
    assert_eq!(
        lpc_verify(&params, &scheme, &roots, &bad).unwrap_err(),
        LpcError::Fri(FriError::PathInvalid {
            round: 0,
            reason: MerkleError::RootMismatch
        })
    );

    let mut bad = proof.clone();
    bad.claimed_evaluations[0].pop();
    assert!(lpc_verify(&params, &scheme, &roots, &bad)
        .unwrap_err()
        .is_rejection());

    let mut wrong_roots = roots.clone();
    flip(&mut wrong_roots[0]);
    assert!(lpc_verify(&params, &scheme, &wrong_roots, &proof)
        .unwrap_err()
        .is_rejection());
}

#[test]
fn lpc_wire_defects_are_rejected() {
    let (_, _, _, proof) = lpc_fixture();
    let mut bytes = proof.to_bytes().unwrap();
    bytes.push(0);
    assert!(LpcProof::from_bytes(&bytes).is_err());
    bytes.pop();
    bytes.truncate(bytes.len() - 3);
    assert!(LpcProof::from_bytes(&bytes).is_err());
}
