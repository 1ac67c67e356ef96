use super::error::{SerKind, SerResult};
use super::primitives::{ensure_u32, read_u32, write_u32};
use super::reader::ByteReader;

/// Writes `items` behind a `u32` count.
pub fn write_vec<T, F>(
    out: &mut Vec<u8>,
    items: &[T],
    kind: SerKind,
    field: &'static str,
    mut write_item: F,
) -> SerResult<()>
where
    F: FnMut(&mut Vec<u8>, &T) -> SerResult<()>,
{
    write_u32(out, ensure_u32(items.len(), kind, field)?);
    items.iter().try_for_each(|item| write_item(out, item))
}

/// Reads a sequence written by [`write_vec`].
///
/// Each item takes at least one byte, so the initial capacity is capped by
/// the remaining input.
pub fn read_vec<T, F>(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
    mut read_item: F,
) -> SerResult<Vec<T>>
where
    F: FnMut(&mut ByteReader<'_>, usize) -> SerResult<T>,
{
    let count = read_u32(cursor, kind, field)? as usize;
    let mut items = Vec::with_capacity(count.min(cursor.remaining()));
    for index in 0..count {
        items.push(read_item(cursor, index)?);
    }
    Ok(items)
}
