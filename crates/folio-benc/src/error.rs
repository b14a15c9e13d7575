//! Decode error types.

use thiserror::Error;

/// Error produced when a byte sequence is not a well-formed tree.
///
/// Every variant carries the byte offset at which decoding stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencError {
    /// Input ended in the middle of a value.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },

    /// A byte that cannot start or continue a value.
    #[error("unexpected byte 0x{byte:02x} at offset {offset}")]
    UnexpectedByte { byte: u8, offset: usize },

    /// Malformed integer (`i...e`) payload.
    #[error("invalid integer at offset {offset}")]
    InvalidInteger { offset: usize },

    /// Malformed or oversized string length prefix.
    #[error("invalid string length at offset {offset}")]
    InvalidLength { offset: usize },

    /// Dictionary key that is not a UTF-8 string.
    #[error("dictionary key at offset {offset} is not a UTF-8 string")]
    NonStringKey { offset: usize },

    /// Containers nested deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("nesting deeper than {max} levels at offset {offset}")]
    NestingTooDeep { max: usize, offset: usize },

    /// Bytes left over after the root value.
    #[error("trailing data at offset {offset}")]
    TrailingData { offset: usize },
}

impl BencError {
    /// Byte offset where decoding failed.
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedEof { offset }
            | Self::UnexpectedByte { offset, .. }
            | Self::InvalidInteger { offset }
            | Self::InvalidLength { offset }
            | Self::NonStringKey { offset }
            | Self::NestingTooDeep { offset, .. }
            | Self::TrailingData { offset } => *offset,
        }
    }
}

/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, BencError>;
