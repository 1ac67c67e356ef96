use super::error::{SerError, SerKind, SerResult};

/// Forward-only cursor over untrusted input.
///
/// Every read is bounds checked and reports the structure and field it was
/// decoding, so malformed input surfaces as a [`SerError`].
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Borrows the next `len` bytes.
    pub fn read_exact(
        &mut self,
        len: usize,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(SerError::unexpected_end(kind, field))?;
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    /// Copies the next `N` bytes into an array.
    pub fn read_array<const N: usize>(
        &mut self,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_exact(N, kind, field)?);
        Ok(out)
    }
}

/// Fails with [`SerError::TrailingBytes`] unless `cursor` is exhausted.
pub fn ensure_consumed(cursor: &ByteReader<'_>, kind: SerKind) -> SerResult<()> {
    match cursor.remaining() {
        0 => Ok(()),
        remaining => Err(SerError::trailing_bytes(kind, cursor.position(), remaining)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_and_stop_at_the_end() {
        let mut cursor = ByteReader::new(&[1, 2, 3]);
        assert_eq!(cursor.read_array::<2>(SerKind::Fri, "head"), Ok([1, 2]));
        assert_eq!(cursor.position(), 2);
        assert_eq!(
            cursor.read_exact(2, SerKind::Fri, "tail"),
            Err(SerError::unexpected_end(SerKind::Fri, "tail"))
        );
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(
            ensure_consumed(&cursor, SerKind::Fri),
            Err(SerError::trailing_bytes(SerKind::Fri, 2, 1))
        );
    }

    #[test]
    fn oversized_length_does_not_overflow() {
        let mut cursor = ByteReader::new(&[0; 4]);
        cursor.read_exact(1, SerKind::Lpc, "skip").unwrap();
        assert!(cursor.read_exact(usize::MAX, SerKind::Lpc, "huge").is_err());
    }
}
