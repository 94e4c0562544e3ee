//! LED driver chip abstraction
//!
//! One [`LedDriver`] handle drives one physical chip. A chip either scans an
//! 8x8 matrix (addressed by column) or eight seven-segment digits (addressed
//! by position); the same primitives cover both.

/// Columns on one 8x8 matrix
pub const NUM_COLUMNS: u8 = 8;

/// Character positions on one seven-segment module
pub const NUM_POSITIONS: u8 = 8;

/// Highest brightness level accepted by the chip
pub const MAX_INTENSITY: u8 = 15;

/// Driver chip primitives
///
/// All operations are synchronous. Implementations report bus failures
/// through `Error`; renderers propagate them untouched.
pub trait LedDriver {
    /// Error type for bus operations
    type Error;

    /// Light one matrix column
    ///
    /// - `column`: Column index (0-7)
    /// - `bits`: One bit per row, MSB is row 0
    fn set_column(&mut self, column: u8, bits: u8) -> Result<(), Self::Error>;

    /// Draw a character on a seven-segment position
    ///
    /// - `position`: Digit position (0-7), 0 is the first written
    /// - `ch`: Character to encode; unknown characters render blank
    /// - `dot`: Light the decimal point
    fn set_char(&mut self, position: u8, ch: char, dot: bool) -> Result<(), Self::Error>;

    /// Set brightness (0-15)
    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Enter (`true`) or leave (`false`) power-down mode
    ///
    /// Register contents survive shutdown.
    fn shutdown(&mut self, enabled: bool) -> Result<(), Self::Error>;

    /// Blank every column / position
    fn clear(&mut self) -> Result<(), Self::Error>;
}

/// Physical display banks
///
/// The seven-segment head is wired to the battery bank's pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    /// Battery matrix, or the whole seven-segment module
    Battery,
    /// Unread SMS matrix
    Sms,
    /// Missed calls matrix
    Calls,
}

impl Bank {
    /// All banks in wiring order
    pub const ALL: [Bank; 3] = [Bank::Battery, Bank::Sms, Bank::Calls];

    /// Zero-based bank index
    pub const fn index(self) -> usize {
        match self {
            Bank::Battery => 0,
            Bank::Sms => 1,
            Bank::Calls => 2,
        }
    }
}
