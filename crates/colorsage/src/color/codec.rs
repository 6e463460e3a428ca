use super::Color;
use crate::error::ColorError;

/// Parse `#rrggbb` or the `#rgb` shorthand. Hex digits are case-insensitive.
pub fn parse_hex(input: &str) -> Result<Color, ColorError> {
    let invalid = || ColorError::InvalidColorFormat(input.to_string());

    let digits = input.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let nibbles: Vec<u8> = digits.bytes().map(hex_value).collect();
    match nibbles.as_slice() {
        &[r1, r0, g1, g0, b1, b0] => Ok(Color::from_rgb(
            (r1 << 4) | r0,
            (g1 << 4) | g0,
            (b1 << 4) | b0,
        )),
        // #abc -> #aabbcc
        &[r, g, b] => Ok(Color::from_rgb((r << 4) | r, (g << 4) | g, (b << 4) | b)),
        _ => Err(invalid()),
    }
}

/// Lowercase `#rrggbb`, each channel zero-padded to two digits.
pub fn format_hex(c: Color) -> String {
    c.to_string()
}

/// Round to the nearest integer and clamp into a channel byte.
pub fn clamp(x: f64) -> u8 {
    // NaN falls through the clamp and casts to 0
    x.round().clamp(0.0, 255.0) as u8
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}
