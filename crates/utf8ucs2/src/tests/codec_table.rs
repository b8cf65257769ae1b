use core::time::Duration;

use rstest::*;

use crate::{
    DecodeError, Decoded, PLACEHOLDER, decode_utf8_token, encode_ucs2_unit, encoded_len,
    try_decode_utf8_token,
};

#[rstest]
#[case::ascii(&[0x41], 0x41, 1)]
#[case::nul(&[0x00], 0x00, 1)]
#[case::ascii_max(&[0x7F], 0x7F, 1)]
#[case::two_byte_min(&[0xC2, 0x80], 0x80, 2)]
#[case::greek_delta(&[0xCE, 0x94], 0x394, 2)]
#[case::two_byte_max(&[0xDF, 0xBF], 0x7FF, 2)]
#[case::three_byte_min(&[0xE0, 0xA0, 0x80], 0x800, 3)]
#[case::euro(&[0xE2, 0x82, 0xAC], 0x20AC, 3)]
#[case::bmp_max(&[0xEF, 0xBF, 0xBF], 0xFFFF, 3)]
#[case::trailing_bytes_ignored(&[0xCE, 0x94, 0x31], 0x394, 2)]
// only continuation bytes are validated
#[case::overlong_slash(&[0xC0, 0xAF], 0x2F, 2)]
#[case::encoded_surrogate(&[0xED, 0xA0, 0x80], 0xD800, 3)]
fn decodes_valid_tokens(#[case] bytes: &[u8], #[case] unit: u16, #[case] len: usize) {
    assert_eq!(try_decode_utf8_token(bytes, 0), Ok(Decoded { unit, len }));

    let res = decode_utf8_token(bytes, 0);
    assert!(res.ok);
    assert_eq!((res.unit, res.len), (unit, len));
}

#[rstest]
#[case::lone_continuation(&[0x80], DecodeError::MalformedLeadByte { byte: 0x80 })]
#[case::lone_continuation_max(&[0xBF], DecodeError::MalformedLeadByte { byte: 0xBF })]
#[case::fe(&[0xFE, 0x80], DecodeError::MalformedLeadByte { byte: 0xFE })]
#[case::ff(&[0xFF], DecodeError::MalformedLeadByte { byte: 0xFF })]
#[case::four_byte(&[0xF0, 0x9F, 0x98, 0x80], DecodeError::OutOfRange { len: 4 })]
#[case::five_byte(&[0xF8, 0x88, 0x80, 0x80, 0x80], DecodeError::OutOfRange { len: 5 })]
#[case::six_byte(&[0xFC, 0x84, 0x80, 0x80, 0x80, 0x80], DecodeError::OutOfRange { len: 6 })]
#[case::four_byte_lead_alone(&[0xF4], DecodeError::OutOfRange { len: 4 })]
#[case::bad_second_of_two(&[0xCE, 0x41], DecodeError::InvalidContinuationByte { index: 1 })]
#[case::lead_as_second(&[0xCE, 0xCE], DecodeError::InvalidContinuationByte { index: 1 })]
#[case::bad_second_of_three(&[0xE2, 0x41, 0xAC], DecodeError::InvalidContinuationByte { index: 1 })]
#[case::bad_third_of_three(&[0xE2, 0x82, 0x41], DecodeError::InvalidContinuationByte { index: 2 })]
#[case::embedded_nul(&[0xE2, 0x82, 0x00], DecodeError::InvalidContinuationByte { index: 2 })]
#[case::truncated_two(&[0xCE], DecodeError::InvalidContinuationByte { index: 1 })]
#[case::truncated_three(&[0xE2, 0x82], DecodeError::InvalidContinuationByte { index: 2 })]
fn rejects_with_placeholder(#[case] bytes: &[u8], #[case] expected: DecodeError) {
    assert_eq!(try_decode_utf8_token(bytes, 0), Err(expected));

    let res = decode_utf8_token(bytes, 0);
    assert!(!res.ok);
    assert_eq!(res.unit, PLACEHOLDER);
    assert_eq!(res.len, 1);
}

#[rstest]
#[case::nul(0x0000, &[0x00])]
#[case::ascii(0x0041, &[0x41])]
#[case::ascii_max(0x007F, &[0x7F])]
#[case::two_byte_min(0x0080, &[0xC2, 0x80])]
#[case::greek_delta(0x0394, &[0xCE, 0x94])]
#[case::two_byte_max(0x07FF, &[0xDF, 0xBF])]
#[case::three_byte_min(0x0800, &[0xE0, 0xA0, 0x80])]
#[case::euro(0x20AC, &[0xE2, 0x82, 0xAC])]
#[case::high_surrogate(0xD800, &[0xED, 0xA0, 0x80])]
#[case::low_surrogate(0xDFFF, &[0xED, 0xBF, 0xBF])]
#[case::bmp_max(0xFFFF, &[0xEF, 0xBF, 0xBF])]
fn encodes_units(#[case] unit: u16, #[case] expected: &[u8]) {
    let token = encode_ucs2_unit(unit);
    assert_eq!(token.as_bytes(), expected);
    assert_eq!(token.len(), encoded_len(unit));
}

#[rstest]
#[timeout(Duration::from_secs(10))]
fn every_unit_round_trips() {
    for unit in 0..=u16::MAX {
        let token = encode_ucs2_unit(unit);
        let decoded = try_decode_utf8_token(token.as_bytes(), 0)
            .unwrap_or_else(|err| panic!("0x{unit:04X} failed to decode: {err}"));
        assert_eq!(decoded.unit, unit);
        assert_eq!(decoded.len, token.len());
    }
}
