use insta::assert_snapshot;
use proptest::prelude::*;
use rpp_lpc::params::{
    deserialize_params, serialize_params, BuiltinProfile, FoldingPolicy, GrindingTarget,
    HashFamily, LpcParams, LpcParamsBuilder, MerkleArity, ParamsError, QuotientBatching, SerError,
    SerKind, PARAMS_ENCODED_LEN,
};

fn build_params(
    hash: HashFamily,
    domain_log2: u8,
    final_log2: u8,
    queries: u16,
    arity: MerkleArity,
    bits: u8,
) -> LpcParams {
    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.hash = hash;
    builder.fri.domain_log2 = domain_log2;
    builder.fri.final_log2 = final_log2;
    builder.fri.queries = queries;
    builder.merkle.arity = arity;
    builder.grinding.bits = bits;
    builder.grinding.max_attempts = 1 << 20;
    builder.build().expect("valid params")
}

#[test]
fn roundtrip_builtin_profiles() {
    for profile in [
        BuiltinProfile::PROFILE_STANDARD,
        BuiltinProfile::PROFILE_HISEC,
        BuiltinProfile::PROFILE_TEST,
    ] {
        let params = LpcParamsBuilder::from_profile(profile).build().unwrap();
        let bytes = serialize_params(&params);
        assert_eq!(bytes.len(), PARAMS_ENCODED_LEN);
        let decoded = deserialize_params(&bytes).unwrap();
        assert_eq!(decoded, params);
        assert_eq!(decoded.params_hash(), params.params_hash());
    }
}

#[test]
fn roundtrip_serde_formats() {
    let params = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_HISEC)
        .build()
        .unwrap();

    let encoded = bincode::serialize(&params).unwrap();
    let decoded: LpcParams = bincode::deserialize(&encoded).unwrap();
    assert_eq!(decoded, params);

    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["fri"]["domain_log2"], 20);
    assert_eq!(json["hash"], "Blake3");
    assert_eq!(json["lpc"]["quotient_batching"], "PerPolynomial");
    let decoded: LpcParams = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, params);
}

#[test]
fn canonical_layout_offsets() {
    let params = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST)
        .build()
        .unwrap();
    let bytes = serialize_params(&params);
    assert_eq!(&bytes[0..2], &1u16.to_le_bytes());
    assert_eq!(bytes[2], 3);
    assert_eq!(bytes[3], 4);
    assert_eq!(bytes[4], 0);
    assert_eq!(&bytes[5..7], &3u16.to_le_bytes());
    assert_eq!(&bytes[7..15], &1u64.to_le_bytes());
    assert_eq!(bytes[16], 2);
    assert_eq!(&bytes[45..77], b"RPP-LPC-PROFILE-TEST___________0");
}

#[test]
fn decode_rejects_defects() {
    let params = LpcParamsBuilder::new().build().unwrap();
    let bytes = serialize_params(&params);

    let err = deserialize_params(&bytes[..10]).unwrap_err();
    assert_eq!(err.kind(), SerKind::Params);
    assert_snapshot!(err.to_string(), @"params: input ends inside fri.domain_offset");

    let mut long = bytes.clone();
    long.extend_from_slice(&[0, 0]);
    assert_eq!(
        deserialize_params(&long).unwrap_err(),
        SerError::TrailingBytes {
            kind: SerKind::Params,
            consumed: PARAMS_ENCODED_LEN,
            remaining: 2
        }
    );

    let mut bad_arity = bytes.clone();
    bad_arity[16] = 3;
    assert_snapshot!(
        deserialize_params(&bad_arity).unwrap_err().to_string(),
        @"params: bad value for merkle.arity"
    );
}

#[test]
fn builder_rejects_invalid_settings() {
    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.fri.final_log2 = builder.fri.domain_log2;
    assert_eq!(
        builder.build().unwrap_err(),
        ParamsError::InvalidFinalSize {
            domain_log2: 4,
            final_log2: 4
        }
    );

    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.fri.domain_log2 = 33;
    builder.fri.final_log2 = 1;
    assert_eq!(
        builder.build().unwrap_err(),
        ParamsError::DomainTooLarge { max: 32, got: 33 }
    );

    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.fri.queries = 0;
    assert!(matches!(
        builder.build(),
        Err(ParamsError::InvalidQueries { got: 0, .. })
    ));

    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.grinding.bits = 64;
    assert_eq!(
        builder.build().unwrap_err(),
        ParamsError::GrindingTooHard {
            bits: 64,
            width: 64
        }
    );

    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.grinding.bits = 4;
    builder.grinding.max_attempts = 0;
    assert_eq!(
        builder.build().unwrap_err(),
        ParamsError::GrindingAttemptsZero
    );

    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.transcript.protocol_tag = 0;
    assert_eq!(builder.build().unwrap_err(), ParamsError::InvalidProtocolTag);
}

#[test]
fn params_hash_tracks_soundness_fields() {
    let base = build_params(HashFamily::Blake2s, 6, 1, 8, MerkleArity::Binary, 0);
    let mut builder = LpcParamsBuilder::from_profile(BuiltinProfile::PROFILE_TEST);
    builder.fri.domain_log2 = 6;
    builder.fri.final_log2 = 1;
    builder.fri.queries = 8;
    builder.fri.folding = FoldingPolicy::PerColumn;
    builder.grinding.max_attempts = 1 << 20;
    let per_column = builder.build().unwrap();
    assert_ne!(base.params_hash(), per_column.params_hash());
    assert!(!base.is_compatible_with(&per_column));

    builder.fri.folding = FoldingPolicy::Shared;
    builder.lpc.quotient_batching = QuotientBatching::PerPolynomial;
    let per_polynomial = builder.build().unwrap();
    assert_ne!(base.params_hash(), per_polynomial.params_hash());

    builder.lpc.quotient_batching = QuotientBatching::LinearCombination;
    builder.grinding.target = GrindingTarget::FieldElement;
    assert_ne!(base.params_hash(), builder.build().unwrap().params_hash());
}

proptest! {
    #[test]
    fn roundtrip_arbitrary_valid_params(
        blake3 in any::<bool>(),
        domain_log2 in 2u8..=24,
        final_gap in 1u8..=8,
        queries in 1u16..=128,
        quaternary in any::<bool>(),
        bits in 0u8..=30,
    ) {
        let hash = if blake3 { HashFamily::Blake3 } else { HashFamily::Blake2s };
        let arity = if quaternary { MerkleArity::Quaternary } else { MerkleArity::Binary };
        let final_log2 = domain_log2.saturating_sub(final_gap);
        let params = build_params(hash, domain_log2, final_log2, queries, arity, bits);
        let bytes = serialize_params(&params);
        prop_assert_eq!(bytes.len(), PARAMS_ENCODED_LEN);
        let decoded = deserialize_params(&bytes).unwrap();
        prop_assert_eq!(&decoded, &params);
        prop_assert_eq!(decoded.params_hash(), params.params_hash());
        prop_assert_eq!(decoded.profile_id(), params.profile_id());
    }

    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..96)) {
        let _ = deserialize_params(&bytes);
    }
}
