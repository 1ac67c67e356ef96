use core::fmt;

/// Structure being encoded or decoded when a [`SerError`] arises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SerKind {
    MerklePath,
    Fri,
    Lpc,
    Params,
}

impl SerKind {
    const fn name(self) -> &'static str {
        match self {
            SerKind::MerklePath => "merkle path",
            SerKind::Fri => "fri",
            SerKind::Lpc => "lpc",
            SerKind::Params => "params",
        }
    }
}

impl fmt::Display for SerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical encoding failure.  `field` names the value being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerError {
    /// Input ended inside a value.
    UnexpectedEnd { kind: SerKind, field: &'static str },
    /// A count does not fit `u32` or exceeds the remaining input.
    InvalidLength { kind: SerKind, field: &'static str },
    /// Unknown discriminant, non-canonical field element or inconsistent
    /// structure.
    InvalidValue { kind: SerKind, field: &'static str },
    /// Input continued past the end of the structure.
    TrailingBytes {
        kind: SerKind,
        consumed: usize,
        remaining: usize,
    },
}

impl SerError {
    pub fn unexpected_end(kind: SerKind, field: &'static str) -> Self {
        SerError::UnexpectedEnd { kind, field }
    }

    pub fn invalid_length(kind: SerKind, field: &'static str) -> Self {
        SerError::InvalidLength { kind, field }
    }

    pub fn invalid_value(kind: SerKind, field: &'static str) -> Self {
        SerError::InvalidValue { kind, field }
    }

    pub fn trailing_bytes(kind: SerKind, consumed: usize, remaining: usize) -> Self {
        SerError::TrailingBytes {
            kind,
            consumed,
            remaining,
        }
    }

    /// Structure that failed.
    pub fn kind(&self) -> SerKind {
        match self {
            SerError::UnexpectedEnd { kind, .. }
            | SerError::InvalidLength { kind, .. }
            | SerError::InvalidValue { kind, .. }
            | SerError::TrailingBytes { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for SerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            SerError::UnexpectedEnd { field, .. } => {
                write!(f, "{kind}: input ends inside {field}")
            }
            SerError::InvalidLength { field, .. } => write!(f, "{kind}: bad length for {field}"),
            SerError::InvalidValue { field, .. } => write!(f, "{kind}: bad value for {field}"),
            SerError::TrailingBytes {
                consumed,
                remaining,
                ..
            } => write!(f, "{kind}: {remaining} bytes left after {consumed}"),
        }
    }
}

impl std::error::Error for SerError {}

pub type SerResult<T> = Result<T, SerError>;
