//! In-memory LED bank
//!
//! Records what a driver chip would show. Used for host-side previews and
//! as the driver behind the renderer tests.

use core::convert::Infallible;

use heapless::String;
use phoneinfo_hal::{LedDriver, MAX_INTENSITY, NUM_COLUMNS, NUM_POSITIONS};

const COLUMNS: usize = NUM_COLUMNS as usize;
const POSITIONS: usize = NUM_POSITIONS as usize;

/// Room for eight characters of up to four UTF-8 bytes
const TEXT_CAPACITY: usize = POSITIONS * 4;

/// Bank buffer implementing [`LedDriver`]
///
/// Columns and characters are kept separately; a real chip shares the same
/// registers for both, but a display head only ever uses one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankBuffer {
    /// Column bit patterns
    columns: [u8; COLUMNS],
    /// Characters per seven-segment position
    chars: [char; POSITIONS],
    /// Decimal points, one bit per position
    dots: u8,
    /// Current brightness
    intensity: u8,
    /// Power-down state
    shut_down: bool,
    /// Whether anything was written since the last `mark_clean`
    dirty: bool,
}

impl Default for BankBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl BankBuffer {
    /// Create a blank bank in power-down, like a chip after reset
    pub const fn new() -> Self {
        Self {
            columns: [0; COLUMNS],
            chars: [' '; POSITIONS],
            dots: 0,
            intensity: 0,
            shut_down: true,
            dirty: false,
        }
    }

    /// All column patterns
    pub fn columns(&self) -> &[u8; COLUMNS] {
        &self.columns
    }

    /// Pattern of one column
    pub fn column(&self, column: usize) -> Option<u8> {
        self.columns.get(column).copied()
    }

    /// Check if every column is dark
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|c| *c == 0) && self.chars.iter().all(|c| *c == ' ')
    }

    /// Characters on the seven-segment positions
    pub fn text(&self) -> String<TEXT_CAPACITY> {
        self.chars.iter().copied().collect()
    }

    /// Check if the decimal point of a position is lit
    pub fn dot(&self, position: usize) -> bool {
        position < POSITIONS && self.dots & (1 << position) != 0
    }

    /// Current brightness
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Check if the bank is powered down
    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Check if the bank was written since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the bank as clean
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl LedDriver for BankBuffer {
    type Error = Infallible;

    fn set_column(&mut self, column: u8, bits: u8) -> Result<(), Self::Error> {
        if let Some(slot) = self.columns.get_mut(usize::from(column)) {
            *slot = bits;
            self.dirty = true;
        }
        Ok(())
    }

    fn set_char(&mut self, position: u8, ch: char, dot: bool) -> Result<(), Self::Error> {
        let position = usize::from(position);
        if position < POSITIONS {
            self.chars[position] = ch;
            if dot {
                self.dots |= 1 << position;
            } else {
                self.dots &= !(1 << position);
            }
            self.dirty = true;
        }
        Ok(())
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        self.intensity = level.min(MAX_INTENSITY);
        self.dirty = true;
        Ok(())
    }

    fn shutdown(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.shut_down = enabled;
        self.dirty = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.columns = [0; COLUMNS];
        self.chars = [' '; POSITIONS];
        self.dots = 0;
        self.dirty = true;
        Ok(())
    }
}
