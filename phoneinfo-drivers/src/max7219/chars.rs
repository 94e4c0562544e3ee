//! Seven-segment character encoding
//!
//! Segment bits as the MAX7219 expects them with decoding disabled:
//!
//! ```text
//!   bit  7  6  5  4  3  2  1  0
//!        DP A  B  C  D  E  F  G
//! ```

/// Decimal point segment
pub const SEG_DP: u8 = 0b1000_0000;

/// Segment pattern for a character, blank when it cannot be shown
pub fn encode(ch: char) -> u8 {
    match ch {
        '0' | 'O' | 'D' => 0x7E,
        '1' | 'I' => 0x30,
        '2' => 0x6D,
        '3' => 0x79,
        '4' => 0x33,
        '5' | 'S' | 's' => 0x5B,
        '6' => 0x5F,
        '7' => 0x70,
        '8' | 'B' => 0x7F,
        '9' => 0x7B,
        'A' | 'a' => 0x77,
        'b' => 0x1F,
        'C' => 0x4E,
        'c' => 0x0D,
        'd' => 0x3D,
        'E' => 0x4F,
        'e' => 0x6F,
        'F' | 'f' => 0x47,
        'H' => 0x37,
        'h' => 0x17,
        'L' | 'l' => 0x0E,
        'n' | 'N' => 0x15,
        'o' => 0x1D,
        'P' | 'p' => 0x67,
        'r' | 'R' => 0x05,
        't' | 'T' => 0x0F,
        'u' => 0x1C,
        'U' => 0x3E,
        '-' => 0x01,
        '_' => 0x08,
        _ => 0x00,
    }
}
