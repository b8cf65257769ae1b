use thiserror::Error;

/// Reason a UTF-8 token could not be decoded into a UCS-2 code unit.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The leading byte matches no UTF-8 lead pattern, e.g. a lone
    /// continuation byte (`10xxxxxx`), `0xFE` or `0xFF`.
    #[error("malformed lead byte 0x{byte:02X}")]
    MalformedLeadByte {
        /// The offending byte.
        byte: u8,
    },
    /// A byte following a 2- or 3-byte lead does not match `10xxxxxx`, or is
    /// missing because the input ended.
    #[error("invalid continuation byte at token index {index}")]
    InvalidContinuationByte {
        /// Position of the bad byte within the token (1 or 2).
        index: usize,
    },
    /// The leading byte announces a 4-, 5- or 6-byte token, which encodes a
    /// code point above U+FFFF.
    #[error("{len}-byte token exceeds the UCS-2 range")]
    OutOfRange {
        /// Token length implied by the leading byte.
        len: usize,
    },
    /// The decode offset lies at or past the end of the input.
    #[error("unexpected end of input")]
    EndOfInput,
}

impl DecodeError {
    /// Length of the token the leading byte announced. Only out-of-range
    /// tokens are structurally complete enough to report more than 1.
    #[must_use]
    pub const fn implied_len(&self) -> usize {
        match self {
            Self::OutOfRange { len } => *len,
            _ => 1,
        }
    }

    /// Whether the failure is a well-formed token that UCS-2 cannot hold.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// A [`DecodeError`] located at a byte offset of the converted input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{source} at byte {offset}")]
pub struct ConvertError {
    pub(crate) source: DecodeError,
    pub(crate) offset: usize,
}

impl ConvertError {
    /// Byte offset of the token that failed to decode.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The underlying decode failure.
    #[must_use]
    pub const fn kind(&self) -> DecodeError {
        self.source
    }
}
