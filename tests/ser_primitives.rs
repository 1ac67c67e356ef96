use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rpp_lpc::field::{FieldElement, Polynomial};
use rpp_lpc::fri::{self, BasicFriProof, FriConfig};
use rpp_lpc::lpc::{LpcProof, LpcScheme};
use rpp_lpc::params::{BuiltinProfile, LpcParamsBuilder};
use rpp_lpc::ser::{
    read_felt, read_felt_vec, read_u32, read_vec, write_felt_vec, write_u32, write_vec,
    ByteReader, SerError, SerKind,
};
use rpp_lpc::transcript::Transcript;

#[test]
fn non_canonical_field_element_is_rejected() {
    let bytes = FieldElement::MODULUS.value.to_le_bytes();
    let mut cursor = ByteReader::new(&bytes);
    assert_eq!(
        read_felt(&mut cursor, SerKind::Fri, "value"),
        Err(SerError::InvalidValue {
            kind: SerKind::Fri,
            field: "value"
        })
    );

    let below = (FieldElement::MODULUS.value - 1).to_le_bytes();
    let mut cursor = ByteReader::new(&below);
    assert_eq!(
        read_felt(&mut cursor, SerKind::Fri, "value").unwrap().as_u64(),
        FieldElement::MODULUS.value - 1
    );
}

#[test]
fn oversized_counts_fail_before_allocating() {
    let mut out = Vec::new();
    write_u32(&mut out, u32::MAX);
    out.extend_from_slice(&[0u8; 16]);
    let mut cursor = ByteReader::new(&out);
    assert_eq!(
        read_felt_vec(&mut cursor, SerKind::Lpc, "claims"),
        Err(SerError::InvalidLength {
            kind: SerKind::Lpc,
            field: "claims"
        })
    );

    let mut cursor = ByteReader::new(&out);
    let err = read_vec(&mut cursor, SerKind::Lpc, "rows", |cursor, _| {
        read_u32(cursor, SerKind::Lpc, "row")
    })
    .unwrap_err();
    assert_eq!(err.kind(), SerKind::Lpc);
}

#[test]
fn nested_vectors_roundtrip() {
    let rows = vec![
        vec![FieldElement::ONE, FieldElement::from(2u64)],
        vec![],
        vec![FieldElement::from(u64::MAX)],
    ];
    let mut out = Vec::new();
    write_vec(&mut out, &rows, SerKind::Lpc, "rows", |out, row| {
        write_felt_vec(out, row, SerKind::Lpc, "row")
    })
    .unwrap();
    let mut cursor = ByteReader::new(&out);
    let decoded = read_vec(&mut cursor, SerKind::Lpc, "rows", |cursor, _| {
        read_felt_vec(cursor, SerKind::Lpc, "row")
    })
    .unwrap();
    assert_eq!(decoded, rows);
    assert_eq!(cursor.remaining(), 0);
}

fn sample_fri_bytes() -> Vec<u8> {
    let params = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST)
        .build()
        .unwrap();
    let config = FriConfig::from_params(&params).unwrap();
    let values = config
        .initial_domain()
        .evaluate(&Polynomial::from_u64s(&[1, 2, 3]))
        .unwrap();
    let mut transcript = Transcript::from_params(&params, b"ser");
    fri::prove(&config, &values, &mut transcript, &mut StdRng::seed_from_u64(0))
        .unwrap()
        .to_bytes()
        .unwrap()
}

fn sample_lpc_bytes() -> Vec<u8> {
    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.fri.final_log2 = 1;
    let params = builder.build().unwrap();
    let scheme = LpcScheme::new(&params).unwrap();
    let (_, batch) = scheme
        .commit_coefficients(&[Polynomial::from_u64s(&[4, 5])])
        .unwrap();
    let mut transcript = Transcript::from_params(&params, b"ser");
    scheme
        .prove(&[&batch], &mut transcript, &mut StdRng::seed_from_u64(0))
        .unwrap()
        .to_bytes()
        .unwrap()
}

proptest! {
    #[test]
    fn random_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = BasicFriProof::from_bytes(&bytes);
        let _ = LpcProof::from_bytes(&bytes);
    }

    #[test]
    fn single_byte_corruption_never_panics(
        offset in any::<prop::sample::Index>(),
        mask in 1u8..=255,
    ) {
        let mut fri_bytes = sample_fri_bytes();
        let at = offset.index(fri_bytes.len());
        fri_bytes[at] ^= mask;
        let _ = BasicFriProof::from_bytes(&fri_bytes);

        let mut lpc_bytes = sample_lpc_bytes();
        let at = offset.index(lpc_bytes.len());
        lpc_bytes[at] ^= mask;
        let _ = LpcProof::from_bytes(&lpc_bytes);
    }
}
