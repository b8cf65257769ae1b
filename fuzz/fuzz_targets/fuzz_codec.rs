#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8ucs2::{
    DecodeOptions, Resync, Ucs2Units, Utf8Bytes, decode_utf8_token, try_utf8_to_ucs2,
    ucs2_to_utf8, ucs2_utf8_len, utf8_to_ucs2, utf8_to_ucs2_with,
};

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    placeholder: u16,
    bytes: Vec<u8>,
    units: Vec<u16>,
}

fn codec(input: Input) {
    let options = DecodeOptions {
        placeholder: input.placeholder,
        resync: if input.flags & 1 != 0 {
            Resync::SkipToken
        } else {
            Resync::NextByte
        },
    };

    // Decoding arbitrary bytes is total and never grows the sequence.
    let lossy = utf8_to_ucs2_with(&input.bytes, &options);
    assert!(lossy.len() <= input.bytes.len());

    let lazy: Vec<u16> = Ucs2Units::with_options(&input.bytes, options)
        .lossy()
        .collect();
    assert_eq!(lossy, lazy);

    // Strict decoding succeeds exactly when no token failed.
    let default_lossy = utf8_to_ucs2(&input.bytes);
    match try_utf8_to_ucs2(&input.bytes) {
        Ok(strict) => assert_eq!(strict, default_lossy),
        Err(err) => {
            assert!(err.offset() < input.bytes.len());
            assert!(!decode_utf8_token(&input.bytes, err.offset()).ok);
        }
    }

    // Every unit sequence survives encode then decode.
    let encoded = ucs2_to_utf8(&input.units);
    assert_eq!(encoded.len(), ucs2_utf8_len(&input.units));
    assert_eq!(Utf8Bytes::new(&input.units).collect::<Vec<_>>(), encoded);
    assert_eq!(try_utf8_to_ucs2(&encoded).as_deref(), Ok(&input.units[..]));
}

fuzz_target!(|input: Input| codec(input));
