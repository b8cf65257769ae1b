//! Converts a short UTF-8 sample to UCS-2 and back.
//!
//! The sample holds a character outside the Basic Multilingual Plane
//! (U+2070E, a 4-byte UTF-8 token). UCS-2 cannot represent it, so it comes
//! back as four `?`, one per byte of the original token, while the
//! surrounding characters survive unchanged.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=trace cargo run -p utf8ucs2 --features log --example round_trip
//! ```

use bstr::ByteSlice;
use utf8ucs2::{PLACEHOLDER, Ucs2Units, ucs2_to_utf8};

const SAMPLE: [u8; 8] = [0x41, 0xF0, 0xA0, 0x9C, 0x8E, 0xCE, 0x94, 0x31];

fn main() {
    env_logger::init();

    println!("UTF-8 Origin: {}", SAMPLE.as_bstr());

    let decoded: Vec<_> = Ucs2Units::new(&SAMPLE).collect();
    let failures = decoded.iter().filter(|res| res.is_err()).count();
    for err in decoded.iter().filter_map(|res| res.as_ref().err()) {
        log::debug!("substituted: {err}");
    }
    let ucs2: Vec<u16> = decoded
        .into_iter()
        .map(|res| res.unwrap_or(PLACEHOLDER))
        .collect();
    log::info!(
        "decoded {} bytes into {} UCS-2 units ({failures} substituted)",
        SAMPLE.len(),
        ucs2.len()
    );

    let back = ucs2_to_utf8(&ucs2);
    log::info!("re-encoded {} units into {} bytes", ucs2.len(), back.len());

    println!("UTF-8 Backconv: {}", back.as_bstr());
}
