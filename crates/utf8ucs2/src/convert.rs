//! Sequence-level conversion, driving the codec across a whole input.

use alloc::{string::String, vec::Vec};
use core::{iter::FusedIterator, slice};

use bstr::ByteSlice;

use crate::{
    codec::{Decoded, Utf8Token, encode_ucs2_unit, encoded_len, try_decode_utf8_token},
    error::{ConvertError, DecodeError},
    options::{DecodeOptions, Resync},
};

/// Lazily decodes a UTF-8 byte sequence into UCS-2 code units.
///
/// Every token yields exactly one item: `Ok(unit)` or the positioned decode
/// failure. After a failure the cursor resumes according to the configured
/// [`Resync`] policy, so iteration always runs to the end of the input.
///
/// ```rust
/// use utf8ucs2::Ucs2Units;
///
/// let mut units = Ucs2Units::new(&[0x41, 0x80, 0xCE, 0x94]);
/// assert_eq!(units.next(), Some(Ok(0x41)));
/// let err = units.next().unwrap().unwrap_err();
/// assert_eq!(err.offset(), 1);
/// assert_eq!(units.next(), Some(Ok(0x394)));
/// assert_eq!(units.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Ucs2Units<'a> {
    bytes: &'a [u8],
    offset: usize,
    options: DecodeOptions,
}

impl<'a> Ucs2Units<'a> {
    /// Decodes `bytes` with [`DecodeOptions::default`].
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_options(bytes, DecodeOptions::default())
    }

    /// Decodes `bytes` with the given options.
    #[must_use]
    pub fn with_options(bytes: &'a [u8], options: DecodeOptions) -> Self {
        Self {
            bytes,
            offset: 0,
            options,
        }
    }

    /// Byte offset of the next token to decode.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Replaces each failure with the configured placeholder.
    #[must_use]
    pub fn lossy(self) -> Lossy<'a> {
        Lossy { inner: self }
    }

    /// Bytes to advance past a failed token.
    fn resync_len(&self, err: DecodeError) -> usize {
        match self.options.resync {
            Resync::SkipToken if err.is_out_of_range() => {
                err.implied_len().min(self.bytes.len() - self.offset)
            }
            _ => 1,
        }
    }
}

impl Iterator for Ucs2Units<'_> {
    type Item = Result<u16, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.bytes.len() {
            return None;
        }
        let at = self.offset;

        match try_decode_utf8_token(self.bytes, at) {
            Ok(Decoded { unit, len }) => {
                self.offset += len;
                Some(Ok(unit))
            }
            Err(source) => {
                #[cfg(feature = "log")]
                log::trace!("utf-8 decode failed at byte {at}: {source}");

                self.offset += self.resync_len(source);
                Some(Err(ConvertError { source, offset: at }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.offset;
        // longest advance per item: a 3-byte token, or a skipped 6-byte one
        let widest = match self.options.resync {
            Resync::NextByte => 3,
            Resync::SkipToken => 6,
        };
        (remaining.div_ceil(widest), Some(remaining))
    }
}

impl FusedIterator for Ucs2Units<'_> {}

/// [`Ucs2Units`] with failures replaced by the placeholder code unit.
#[derive(Debug, Clone)]
pub struct Lossy<'a> {
    inner: Ucs2Units<'a>,
}

impl Iterator for Lossy<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let placeholder = self.inner.options.placeholder;
        self.inner.next().map(|res| res.unwrap_or(placeholder))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Lossy<'_> {}

/// Converts a UTF-8 byte sequence to UCS-2.
///
/// Tokens that fail to decode become `?` and decoding resumes at the next
/// byte. The whole input is always consumed; embedded zero bytes are ordinary
/// characters.
#[must_use]
pub fn utf8_to_ucs2(bytes: &[u8]) -> Vec<u16> {
    utf8_to_ucs2_with(bytes, &DecodeOptions::default())
}

/// Converts a UTF-8 byte sequence to UCS-2 with a custom placeholder and
/// resynchronization policy.
#[must_use]
pub fn utf8_to_ucs2_with(bytes: &[u8], options: &DecodeOptions) -> Vec<u16> {
    let mut out = Vec::with_capacity(bytes.len());
    out.extend(Ucs2Units::with_options(bytes, *options).lossy());
    out
}

/// Converts a UTF-8 byte sequence to UCS-2, stopping at the first token that
/// does not decode.
///
/// # Errors
///
/// Returns the first decode failure together with its byte offset.
pub fn try_utf8_to_ucs2(bytes: &[u8]) -> Result<Vec<u16>, ConvertError> {
    Ucs2Units::new(bytes).collect()
}

/// Lazily encodes UCS-2 code units as UTF-8 bytes.
#[derive(Debug, Clone)]
pub struct Utf8Bytes<'a> {
    units: slice::Iter<'a, u16>,
    token: Utf8Token,
    pos: usize,
}

impl<'a> Utf8Bytes<'a> {
    /// Encodes `units`.
    #[must_use]
    pub fn new(units: &'a [u16]) -> Self {
        Self {
            units: units.iter(),
            token: Utf8Token::EMPTY,
            pos: 0,
        }
    }
}

impl Iterator for Utf8Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos >= self.token.len() {
            self.token = encode_ucs2_unit(*self.units.next()?);
            self.pos = 0;
        }
        let byte = self.token.as_bytes()[self.pos];
        self.pos += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.token.len() - self.pos;
        let units = self.units.len();
        (pending + units, Some(pending + units * 3))
    }
}

impl FusedIterator for Utf8Bytes<'_> {}

/// Exact number of bytes [`ucs2_to_utf8`] produces for `units`.
#[must_use]
pub fn ucs2_utf8_len(units: &[u16]) -> usize {
    units.iter().map(|&unit| encoded_len(unit)).sum()
}

/// Converts a UCS-2 sequence to UTF-8 bytes. Never fails.
///
/// Surrogate-range units are encoded as standalone 3-byte tokens, which
/// strict UTF-8 decoders reject; see [`ucs2_to_string`].
#[must_use]
pub fn ucs2_to_utf8(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ucs2_utf8_len(units));
    for &unit in units {
        out.extend_from_slice(encode_ucs2_unit(unit).as_bytes());
    }
    out
}

/// Converts a UCS-2 sequence to a `String`.
///
/// Identical to [`ucs2_to_utf8`] unless the input holds surrogate-range
/// units. Their 3-byte encodings (e.g. `ED A0 80` for `0xD800`) are not valid
/// UTF-8 and each becomes three U+FFFD, one per byte, following the
/// maximal-subpart substitution of [`bstr::ByteSlice::to_str_lossy`].
#[must_use]
pub fn ucs2_to_string(units: &[u16]) -> String {
    match String::from_utf8(ucs2_to_utf8(units)) {
        Ok(s) => s,
        Err(err) => err.as_bytes().to_str_lossy().into_owned(),
    }
}
