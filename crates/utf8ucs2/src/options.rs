use crate::codec::PLACEHOLDER;

/// Where the decode loop resumes after a token that cannot be represented in
/// UCS-2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resync {
    /// Resume at the byte after the failed lead byte. The continuation bytes
    /// of a 4- to 6-byte token are then examined as lead bytes of their own,
    /// and each fails, so one such token yields one placeholder per byte.
    #[default]
    NextByte,
    /// Skip the whole length announced by a 4-, 5- or 6-byte lead byte
    /// (clamped to the end of input) and emit a single placeholder for it.
    ///
    /// Malformed lead bytes and bad continuation bytes still resume at the
    /// next byte, since their token length was never established.
    SkipToken,
}

/// Configuration for the lossy UTF-8 → UCS-2 conversion.
///
/// # Examples
///
/// ```rust
/// use utf8ucs2::{DecodeOptions, Resync, utf8_to_ucs2_with};
///
/// let options = DecodeOptions {
///     placeholder: 0xFFFD,
///     resync: Resync::SkipToken,
/// };
/// let ucs2 = utf8_to_ucs2_with(&[0x41, 0xF0, 0xA0, 0x9C, 0x8E, 0x31], &options);
/// assert_eq!(ucs2, [0x41, 0xFFFD, 0x31]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Code unit emitted for each token that fails to decode.
    ///
    /// # Default
    ///
    /// `?` (U+003F)
    pub placeholder: u16,

    /// Where decoding resumes after an out-of-range token.
    ///
    /// # Default
    ///
    /// [`Resync::NextByte`]
    pub resync: Resync,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER,
            resync: Resync::NextByte,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::{DecodeOptions, Resync};

    #[test]
    fn missing_fields_take_defaults() {
        let options: DecodeOptions = serde_json::from_str(r#"{"resync":"SkipToken"}"#).unwrap();
        assert_eq!(
            options,
            DecodeOptions {
                resync: Resync::SkipToken,
                ..Default::default()
            }
        );
        assert_eq!(
            serde_json::to_string(&DecodeOptions::default()).unwrap(),
            r#"{"placeholder":63,"resync":"NextByte"}"#
        );
    }
}
