//! Fixed-width little-endian scalars, digests and field elements.

use crate::field::{CanonicalSerialize, FieldElement};

use super::error::{SerError, SerKind, SerResult};
use super::reader::ByteReader;

/// Width of every digest on the wire.
pub const DIGEST_SIZE: usize = 32;

macro_rules! le_integer {
    ($write:ident, $read:ident, $ty:ty) => {
        #[doc = concat!("Appends `value` as a little-endian `", stringify!($ty), "`.")]
        pub fn $write(out: &mut Vec<u8>, value: $ty) {
            out.extend_from_slice(&value.to_le_bytes());
        }

        #[doc = concat!("Reads a little-endian `", stringify!($ty), "`.")]
        pub fn $read(
            cursor: &mut ByteReader<'_>,
            kind: SerKind,
            field: &'static str,
        ) -> SerResult<$ty> {
            cursor
                .read_array::<{ core::mem::size_of::<$ty>() }>(kind, field)
                .map(<$ty>::from_le_bytes)
        }
    };
}

le_integer!(write_u8, read_u8, u8);
le_integer!(write_u16, read_u16, u16);
le_integer!(write_u32, read_u32, u32);
le_integer!(write_u64, read_u64, u64);

/// Narrows a collection length to its `u32` prefix.
pub fn ensure_u32(value: usize, kind: SerKind, field: &'static str) -> SerResult<u32> {
    u32::try_from(value).map_err(|_| SerError::invalid_length(kind, field))
}

/// Appends raw bytes without a prefix.
pub fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes);
}

pub fn write_digest(out: &mut Vec<u8>, digest: &[u8; DIGEST_SIZE]) {
    out.extend_from_slice(digest);
}

pub fn read_digest(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<[u8; DIGEST_SIZE]> {
    cursor.read_array(kind, field)
}

/// Appends the canonical 8-byte encoding of `value`.
pub fn write_felt(out: &mut Vec<u8>, value: FieldElement) {
    out.extend_from_slice(&value.to_bytes());
}

/// Reads a field element, rejecting encodings `>= p`.
pub fn read_felt(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<FieldElement> {
    let bytes = cursor.read_array::<8>(kind, field)?;
    FieldElement::from_bytes(&bytes).map_err(|_| SerError::invalid_value(kind, field))
}

/// Appends a `u32` count followed by the elements.
pub fn write_felt_vec(
    out: &mut Vec<u8>,
    values: &[FieldElement],
    kind: SerKind,
    field: &'static str,
) -> SerResult<()> {
    write_u32(out, ensure_u32(values.len(), kind, field)?);
    values.iter().for_each(|value| write_felt(out, *value));
    Ok(())
}

/// Reads a vector written by [`write_felt_vec`].
///
/// The count is checked against the remaining input before allocating.
pub fn read_felt_vec(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<Vec<FieldElement>> {
    let count = read_u32(cursor, kind, field)? as usize;
    if count.saturating_mul(FieldElement::BYTE_LENGTH) > cursor.remaining() {
        return Err(SerError::invalid_length(kind, field));
    }
    (0..count).map(|_| read_felt(cursor, kind, field)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_little_endian() {
        let mut out = Vec::new();
        write_u16(&mut out, 0x0102);
        write_u64(&mut out, 7);
        assert_eq!(out, [0x02, 0x01, 7, 0, 0, 0, 0, 0, 0, 0]);
        let mut cursor = ByteReader::new(&out);
        assert_eq!(read_u16(&mut cursor, SerKind::Params, "a"), Ok(0x0102));
        assert_eq!(read_u64(&mut cursor, SerKind::Params, "b"), Ok(7));
    }

    #[test]
    fn non_canonical_field_element_is_rejected() {
        let bytes = FieldElement::MODULUS.value.to_le_bytes();
        assert_eq!(
            read_felt(&mut ByteReader::new(&bytes), SerKind::Fri, "value"),
            Err(SerError::invalid_value(SerKind::Fri, "value"))
        );
    }

    #[test]
    fn forged_count_is_rejected_before_allocation() {
        let mut bytes = Vec::new();
        write_u32(&mut bytes, u32::MAX);
        write_felt(&mut bytes, FieldElement::ONE);
        assert_eq!(
            read_felt_vec(&mut ByteReader::new(&bytes), SerKind::Lpc, "values"),
            Err(SerError::invalid_length(SerKind::Lpc, "values"))
        );
    }
}
