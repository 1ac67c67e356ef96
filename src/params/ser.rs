use super::types::{
    FoldingPolicy, FriParams, GrindingParams, GrindingTarget, HashFamily, LpcPolicy, MerkleArity,
    MerkleParams, QuotientBatching, TranscriptParams,
};
use super::LpcParams;
use crate::ser::{
    ensure_consumed, read_u16, read_u64, read_u8, write_bytes, write_u16, write_u64, write_u8,
    ByteReader, SerError, SerKind, SerResult,
};

/// Length of the canonical parameter encoding.
pub const PARAMS_ENCODED_LEN: usize = 77;

/// Canonical binary serialisation for [`LpcParams`].
///
/// | Offset | Field | Encoding |
/// |--------|-------|----------|
/// | 0..2 | `params_version` | `u16` little-endian |
/// | 2..3 | `hash` | `u8` discriminant |
/// | 3..4 | `fri.domain_log2` | `u8` |
/// | 4..5 | `fri.final_log2` | `u8` |
/// | 5..7 | `fri.queries` | `u16` little-endian |
/// | 7..15 | `fri.domain_offset` | `u64` little-endian |
/// | 15..16 | `fri.folding` | `u8` discriminant |
/// | 16..17 | `merkle.arity` | `u8` value (2 or 4) |
/// | 17..25 | `merkle.domain_sep` | `u64` little-endian |
/// | 25..26 | `grinding.bits` | `u8` |
/// | 26..27 | `grinding.target` | `u8` discriminant |
/// | 27..35 | `grinding.max_attempts` | `u64` little-endian |
/// | 35..36 | `lpc.quotient_batching` | `u8` discriminant |
/// | 36..37 | `lpc.max_evaluation_redraws` | `u8` |
/// | 37..45 | `transcript.protocol_tag` | `u64` little-endian |
/// | 45..77 | `transcript.seed` | 32 raw bytes |
///
/// The layout has no padding, so byte-for-byte equality implies identical
/// parameter sets.
pub fn serialize_params(params: &LpcParams) -> Vec<u8> {
    let mut out = Vec::with_capacity(PARAMS_ENCODED_LEN);
    write_u16(&mut out, params.params_version);
    write_u8(&mut out, params.hash.code());
    write_u8(&mut out, params.fri.domain_log2);
    write_u8(&mut out, params.fri.final_log2);
    write_u16(&mut out, params.fri.queries);
    write_u64(&mut out, params.fri.domain_offset);
    write_u8(&mut out, params.fri.folding.code());
    write_u8(&mut out, params.merkle.arity.code());
    write_u64(&mut out, params.merkle.domain_sep);
    write_u8(&mut out, params.grinding.bits);
    write_u8(&mut out, params.grinding.target.code());
    write_u64(&mut out, params.grinding.max_attempts);
    write_u8(&mut out, params.lpc.quotient_batching.code());
    write_u8(&mut out, params.lpc.max_evaluation_redraws);
    write_u64(&mut out, params.transcript.protocol_tag);
    write_bytes(&mut out, &params.transcript.seed);
    out
}

const KIND: SerKind = SerKind::Params;

fn read_code<T>(
    cursor: &mut ByteReader<'_>,
    field: &'static str,
    decode: fn(u8) -> Option<T>,
) -> SerResult<T> {
    let code = read_u8(cursor, KIND, field)?;
    decode(code).ok_or(SerError::invalid_value(KIND, field))
}

/// Deserialises a parameter set from canonical bytes.
///
/// Unknown discriminants and trailing bytes are rejected. Semantic checks are
/// left to [`validate`](super::validate).
pub fn deserialize_params(bytes: &[u8]) -> Result<LpcParams, SerError> {
    let mut cursor = ByteReader::new(bytes);
    let params_version = read_u16(&mut cursor, KIND, "params_version")?;
    let hash = read_code(&mut cursor, "hash", HashFamily::from_code)?;
    let domain_log2 = read_u8(&mut cursor, KIND, "fri.domain_log2")?;
    let final_log2 = read_u8(&mut cursor, KIND, "fri.final_log2")?;
    let queries = read_u16(&mut cursor, KIND, "fri.queries")?;
    let domain_offset = read_u64(&mut cursor, KIND, "fri.domain_offset")?;
    let folding = read_code(&mut cursor, "fri.folding", FoldingPolicy::from_code)?;
    let arity = read_code(&mut cursor, "merkle.arity", MerkleArity::from_code)?;
    let domain_sep = read_u64(&mut cursor, KIND, "merkle.domain_sep")?;
    let bits = read_u8(&mut cursor, KIND, "grinding.bits")?;
    let target = read_code(&mut cursor, "grinding.target", GrindingTarget::from_code)?;
    let max_attempts = read_u64(&mut cursor, KIND, "grinding.max_attempts")?;
    let quotient_batching =
        read_code(&mut cursor, "lpc.quotient_batching", QuotientBatching::from_code)?;
    let max_evaluation_redraws = read_u8(&mut cursor, KIND, "lpc.max_evaluation_redraws")?;
    let protocol_tag = read_u64(&mut cursor, KIND, "transcript.protocol_tag")?;
    let seed = cursor.read_array::<32>(KIND, "transcript.seed")?;
    ensure_consumed(&cursor, KIND)?;

    Ok(LpcParams {
        params_version,
        hash,
        fri: FriParams {
            domain_log2,
            final_log2,
            queries,
            domain_offset,
            folding,
        },
        merkle: MerkleParams { arity, domain_sep },
        grinding: GrindingParams {
            bits,
            target,
            max_attempts,
        },
        lpc: LpcPolicy {
            quotient_batching,
            max_evaluation_redraws,
        },
        transcript: TranscriptParams { protocol_tag, seed },
    })
}
