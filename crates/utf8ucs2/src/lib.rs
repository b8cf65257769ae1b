//! Conversion between UTF-8 and UCS-2, the fixed-width 16-bit encoding of the
//! Basic Multilingual Plane.
//!
//! The crate has two layers:
//!
//! - a character codec ([`decode_utf8_token`], [`encode_ucs2_unit`]) that
//!   translates one UTF-8 token to or from one UCS-2 code unit, and
//! - sequence converters ([`utf8_to_ucs2`], [`ucs2_to_utf8`]) that drive the
//!   codec across a whole input.
//!
//! Decoding is lossy by default: a token that cannot be represented in UCS-2
//! becomes `?` and the cursor moves on by a single byte, so the converters
//! always consume their entire input.
//!
//! ```rust
//! use utf8ucs2::{ucs2_to_utf8, utf8_to_ucs2};
//!
//! // 'A', a 4-byte token outside the BMP, 'Δ', '1'
//! let utf8 = [0x41, 0xF0, 0xA0, 0x9C, 0x8E, 0xCE, 0x94, 0x31];
//! let ucs2 = utf8_to_ucs2(&utf8);
//! assert_eq!(ucs2, [0x41, 0x3F, 0x3F, 0x3F, 0x3F, 0x394, 0x31]);
//! assert_eq!(ucs2_to_utf8(&ucs2), "A????Δ1".as_bytes());
//! ```
//!
//! UCS-2 has no surrogate pairs. Code units in `0xD800..=0xDFFF` are carried
//! as ordinary values in both directions.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codec;
mod convert;
mod error;
mod options;

#[cfg(test)]
mod tests;

pub use codec::{
    DecodeResult, Decoded, MAX_TOKEN_LEN, PLACEHOLDER, Utf8Token, decode_utf8_token,
    encode_ucs2_unit, encoded_len, token_len, try_decode_utf8_token,
};
pub use convert::{
    Lossy, Ucs2Units, Utf8Bytes, try_utf8_to_ucs2, ucs2_to_string, ucs2_to_utf8, ucs2_utf8_len,
    utf8_to_ucs2, utf8_to_ucs2_with,
};
pub use error::{ConvertError, DecodeError};
pub use options::{DecodeOptions, Resync};
