//! Character-level translation between one UTF-8 token and one UCS-2 code
//! unit.
//!
//! A token's length is fixed by the high bits of its leading byte:
//!
//! | lead byte  | length | outcome                       |
//! |------------|--------|-------------------------------|
//! | `0xxxxxxx` | 1      | decoded                       |
//! | `110xxxxx` | 2      | decoded                       |
//! | `1110xxxx` | 3      | decoded                       |
//! | `11110xxx` | 4      | [`DecodeError::OutOfRange`]   |
//! | `111110xx` | 5      | [`DecodeError::OutOfRange`]   |
//! | `1111110x` | 6      | [`DecodeError::OutOfRange`]   |
//! | otherwise  | 1      | [`DecodeError::MalformedLeadByte`] |
//!
//! Only continuation bytes are validated. Overlong forms and encoded
//! surrogates decode to whatever value their payload bits spell.

use crate::error::DecodeError;

/// Code unit emitted in place of a token that failed to decode (`?`).
pub const PLACEHOLDER: u16 = b'?' as u16;

/// Longest UTF-8 token any UCS-2 code unit encodes to.
pub const MAX_TOKEN_LEN: usize = 3;

/// A successfully decoded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The UCS-2 code unit.
    pub unit: u16,
    /// Number of bytes the token occupied (1 to 3).
    pub len: usize,
}

/// Outcome of [`decode_utf8_token`].
///
/// On failure `unit` is [`PLACEHOLDER`] and `len` is 1, so a caller can
/// always emit `unit` and advance by `len` to resynchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeResult {
    /// Decoded code unit, or [`PLACEHOLDER`].
    pub unit: u16,
    /// Bytes consumed.
    pub len: usize,
    /// Whether the token decoded.
    pub ok: bool,
}

impl From<Result<Decoded, DecodeError>> for DecodeResult {
    fn from(res: Result<Decoded, DecodeError>) -> Self {
        match res {
            Ok(Decoded { unit, len }) => Self { unit, len, ok: true },
            Err(_) => Self {
                unit: PLACEHOLDER,
                len: 1,
                ok: false,
            },
        }
    }
}

/// Token length announced by a leading byte, or `None` if the byte cannot
/// start a token (continuation bytes, `0xFE`, `0xFF`).
#[must_use]
pub const fn token_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        0xF8..=0xFB => Some(5),
        0xFC..=0xFD => Some(6),
        _ => None,
    }
}

/// Payload bits of the continuation byte at `index` within `token`.
///
/// A byte past the end of `token` fails exactly like a NUL terminator would.
#[inline]
fn continuation(token: &[u8], index: usize) -> Result<u16, DecodeError> {
    match token.get(index) {
        Some(&b) if b & 0xC0 == 0x80 => Ok(u16::from(b & 0x3F)),
        _ => Err(DecodeError::InvalidContinuationByte { index }),
    }
}

/// Decodes the token starting at `bytes[offset]`.
///
/// # Errors
///
/// - [`DecodeError::EndOfInput`] if `offset` is not inside `bytes`.
/// - [`DecodeError::MalformedLeadByte`] if `bytes[offset]` cannot start a
///   token.
/// - [`DecodeError::InvalidContinuationByte`] if a 2- or 3-byte token has a
///   bad or missing continuation byte.
/// - [`DecodeError::OutOfRange`] for 4- to 6-byte tokens.
pub fn try_decode_utf8_token(bytes: &[u8], offset: usize) -> Result<Decoded, DecodeError> {
    let token = match bytes.get(offset..) {
        Some(token) if !token.is_empty() => token,
        _ => return Err(DecodeError::EndOfInput),
    };
    let lead = token[0];

    match token_len(lead) {
        Some(1) => Ok(Decoded {
            unit: u16::from(lead),
            len: 1,
        }),
        Some(2) => {
            let c1 = continuation(token, 1)?;
            Ok(Decoded {
                unit: (u16::from(lead & 0x1F) << 6) | c1,
                len: 2,
            })
        }
        Some(3) => {
            let c1 = continuation(token, 1)?;
            let c2 = continuation(token, 2)?;
            Ok(Decoded {
                unit: (u16::from(lead & 0x0F) << 12) | (c1 << 6) | c2,
                len: 3,
            })
        }
        Some(len) => Err(DecodeError::OutOfRange { len }),
        None => Err(DecodeError::MalformedLeadByte { byte: lead }),
    }
}

/// Decodes the token starting at `bytes[offset]`, folding every failure into
/// the `?`-and-advance-one fallback.
///
/// ```rust
/// use utf8ucs2::decode_utf8_token;
///
/// let delta = decode_utf8_token(&[0xCE, 0x94], 0);
/// assert_eq!((delta.unit, delta.len, delta.ok), (0x394, 2, true));
///
/// let emoji = decode_utf8_token(&[0xF0, 0x9F, 0x98, 0x80], 0);
/// assert_eq!((emoji.unit, emoji.len, emoji.ok), (u16::from(b'?'), 1, false));
/// ```
#[must_use]
pub fn decode_utf8_token(bytes: &[u8], offset: usize) -> DecodeResult {
    try_decode_utf8_token(bytes, offset).into()
}

/// UTF-8 encoding of one UCS-2 code unit.
///
/// Holds up to [`MAX_TOKEN_LEN`] significant bytes followed by a zero
/// terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf8Token {
    buf: [u8; MAX_TOKEN_LEN + 1],
    len: u8,
}

impl Utf8Token {
    pub(crate) const EMPTY: Self = Self {
        buf: [0; MAX_TOKEN_LEN + 1],
        len: 0,
    };

    /// Number of significant bytes (1 to 3).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false` for a token produced by [`encode_ucs2_unit`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The significant bytes, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// The significant bytes followed by the zero terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len()]
    }
}

impl AsRef<[u8]> for Utf8Token {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Number of bytes `unit` occupies in UTF-8.
#[must_use]
pub const fn encoded_len(unit: u16) -> usize {
    match unit {
        0x0000..=0x007F => 1,
        0x0080..=0x07FF => 2,
        _ => 3,
    }
}

/// Encodes one UCS-2 code unit. Every `u16` has a 1- to 3-byte encoding, so
/// this cannot fail.
///
/// ```rust
/// use utf8ucs2::encode_ucs2_unit;
///
/// assert_eq!(encode_ucs2_unit(0x394).as_bytes(), [0xCE, 0x94]);
/// assert_eq!(encode_ucs2_unit(0x20AC).as_bytes_with_nul(), [0xE2, 0x82, 0xAC, 0]);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn encode_ucs2_unit(unit: u16) -> Utf8Token {
    let mut buf = [0u8; MAX_TOKEN_LEN + 1];
    let len = match unit {
        0x0000..=0x007F => {
            buf[0] = unit as u8;
            1
        }
        0x0080..=0x07FF => {
            buf[0] = 0xC0 | (unit >> 6) as u8;
            buf[1] = 0x80 | (unit & 0x3F) as u8;
            2
        }
        _ => {
            buf[0] = 0xE0 | (unit >> 12) as u8;
            buf[1] = 0x80 | ((unit >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (unit & 0x3F) as u8;
            3
        }
    };
    Utf8Token { buf, len }
}
