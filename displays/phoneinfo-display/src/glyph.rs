//! Digit fonts and icons for the LED matrices
//!
//! Every table is indexed by [`Digit`], which can only hold 0-9, so a font
//! lookup can never run past the end of a table.

/// A decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Digit zero
    pub const ZERO: Digit = Digit(0);

    /// Create a digit, or `None` if `value` is above 9
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    /// Numeric value (0-9)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Single digit for values 0-9
    pub fn from_number(value: u16) -> Option<Self> {
        u8::try_from(value).ok().and_then(Digit::new)
    }

    /// Split a number below 100 into (tens, units)
    ///
    /// Values below 10 get a tens digit of zero.
    pub fn split(value: u16) -> Option<(Digit, Digit)> {
        if value >= 100 {
            return None;
        }
        // Both quotient and remainder are below 10
        let tens = Digit((value / 10) as u8);
        let units = Digit((value % 10) as u8);
        Some((tens, units))
    }
}

/// Rows of a large-font glyph
pub const LARGE_ROWS: usize = 7;

/// Rows of a small-font glyph
pub const SMALL_ROWS: usize = 5;

/// Large font: 6 pixels wide, 7 rows, row 0 is the top
pub const LARGE_DIGITS: [[u8; LARGE_ROWS]; 10] = [
    [0b00111100, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b01000010, 0b00111100],
    [0b00011000, 0b00101000, 0b00001000, 0b00001000, 0b00001000, 0b00001000, 0b00011100],
    [0b01111100, 0b00000010, 0b00000010, 0b00111110, 0b01000000, 0b01000000, 0b00111110],
    [0b00111100, 0b01000010, 0b00000010, 0b00111100, 0b00000010, 0b01000010, 0b00111100],
    [0b01000010, 0b01000010, 0b01000010, 0b00111110, 0b00000010, 0b00000010, 0b00000010],
    [0b00111110, 0b01000000, 0b01000000, 0b00111100, 0b00000010, 0b00000010, 0b01111100],
    [0b00111100, 0b01000010, 0b01000000, 0b01111100, 0b01000010, 0b01000010, 0b00111100],
    [0b01111110, 0b00000010, 0b00000010, 0b00000010, 0b00000010, 0b00000010, 0b00000010],
    [0b00111100, 0b01000010, 0b01000010, 0b00111100, 0b01000010, 0b01000010, 0b00111100],
    [0b00111100, 0b01000010, 0b01000010, 0b00111110, 0b00000010, 0b00000010, 0b00111100],
];

/// Small font: 3 pixels wide, 5 rows, row 0 is the top
pub const SMALL_DIGITS: [[u8; SMALL_ROWS]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b110, 0b010, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b001],
];

/// Bit offset of the tens digit in a packed small-font row
pub const TENS_SHIFT: u32 = 4;

/// Empty battery outline, one byte per column
pub const EMPTY_BATTERY: [u8; 8] = [
    0b00111100, 0b00100100, 0b00100100, 0b00100100, 0b00100100, 0b00100100, 0b00111100,
    0b00011000,
];

/// Solid battery, one byte per column
pub const FULL_BATTERY: [u8; 8] = [
    0b00111100, 0b00111100, 0b00111100, 0b00111100, 0b00111100, 0b00111100, 0b00111100,
    0b00011000,
];

/// Disconnected icon drawn on the SMS matrix
pub const DISCONNECTED: [u8; 8] = [0xE7, 0xF3, 0xF9, 0xF3, 0xE7, 0xCF, 0xE7, 0xF3];

/// First column of the connected arrows
pub const CONNECTED_FIRST_COLUMN: u8 = 3;

/// Left-hand arrow, drawn on the battery matrix
pub const CONNECTED_LEFT: [u8; 3] = [0x08, 0x1E, 0x08];

/// Right-hand arrow, drawn on the calls matrix
pub const CONNECTED_RIGHT: [u8; 3] = [0x20, 0x78, 0x20];

/// Large-font glyph for a digit
pub fn large(digit: Digit) -> &'static [u8; LARGE_ROWS] {
    &LARGE_DIGITS[usize::from(digit.value())]
}

/// Small-font glyph for a digit
pub fn small(digit: Digit) -> &'static [u8; SMALL_ROWS] {
    &SMALL_DIGITS[usize::from(digit.value())]
}

/// Two small-font digits packed side by side, one byte per row
///
/// The tens digit occupies bits 4-6, the units digit bits 0-2.
pub fn small_pair(tens: Digit, units: Digit) -> [u8; SMALL_ROWS] {
    let t = small(tens);
    let u = small(units);
    core::array::from_fn(|row| u[row] | (t[row] << TENS_SHIFT))
}
