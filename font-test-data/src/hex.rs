//! hex font snippets for scenarios that are easier to read inline

/// U+0041 LATIN CAPITAL LETTER A as it appears in GNU Unifont.
pub static LATIN_CAPITAL_A: &str = "0041:0000000018242442427E424242000000";

/// Packed rows of [`LATIN_CAPITAL_A`].
#[rustfmt::skip]
pub static LATIN_CAPITAL_A_BITS: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00,
    0x18, // ...XX...
    0x24, // ..X..X..
    0x24, // ..X..X..
    0x42, // .X....X.
    0x42, // .X....X.
    0x7E, // .XXXXXX.
    0x42, // .X....X.
    0x42, // .X....X.
    0x42, // .X....X.
    0x00, 0x00, 0x00,
];

/// Two glyphs in descending order.
pub static DESCENDING: &str = "\
0041:0000000018242442427E424242000000
0040:00000000384482BAAAAAAABA80443800
";

/// A narrow glyph, a combining mark and a wide placeholder.
pub static WITH_COMBINING_MARK: &str = "\
0000:AAAA0001800000018000000180005555
0041:0000000018242442427E424242000000
0300:00003030180C00000000000000000000
FFFD:00007FFE7FFE7FFE7FFE7FFE7FFE7FFE7FFE7FFE7FFE7FFE7FFE7FFE7FFE0000
";

/// Every Private Use Area boundary, interleaved with regular glyphs.
pub static PRIVATE_USE_BOUNDARIES: &str = "\
DFFF:00000000000000000000000000000000
E000:FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
F8FF:FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
F900:00000000000000000000000000000000
EFFFF:00000000000000000000000000000000
F0000:FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
FFFFD:FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
100000:FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
10FFFD:FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF
";

/// Formats a single hex font line.
pub fn line(codepoint: u32, bits: &[u8]) -> String {
    let mut line = format!("{codepoint:04X}:");
    for byte in bits {
        line.push_str(&format!("{byte:02X}"));
    }
    line
}
