#![allow(dead_code)]

/// 'A', U+2070E (a 4-byte token outside the BMP), 'Δ', '1'.
pub const SAMPLE: [u8; 8] = [0x41, 0xF0, 0xA0, 0x9C, 0x8E, 0xCE, 0x94, 0x31];

/// Mixed-width text inside the BMP: ASCII, Greek, Cyrillic, CJK and a
/// private-use character.
pub const BMP_TEXT: &str = "Hello, Κόσμε! Привет, 世界 \u{E000}";

/// Renders each decoded item on its own line.
pub fn render_units(bytes: &[u8]) -> String {
    utf8ucs2::Ucs2Units::new(bytes)
        .map(|item| match item {
            Ok(unit) => format!("U+{unit:04X}"),
            Err(err) => format!("error: {err}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
