//! MAX7219 LED driver (bit-banged serial)
//!
//! The MAX7219 scans eight digit registers, each one byte wide. On an 8x8
//! matrix a digit register is one row; on a seven-segment module it is one
//! character.
//!
//! # Serial Protocol
//!
//! Every write is a 16-bit word shifted in MSB first on the rising edge of
//! CLK while CS is low, then latched by raising CS:
//! - Register address (upper byte)
//! - Data (lower byte)
//!
//! Columns are not addressable on the chip, so the driver keeps a mirror of
//! the digit registers and rewrites every row when a column changes.

pub mod chars;

use embedded_hal::digital::OutputPin;
use phoneinfo_hal::{LedDriver, MAX_INTENSITY, NUM_COLUMNS, NUM_POSITIONS};

/// MAX7219 register addresses
pub mod reg {
    /// No operation (used when daisy-chaining)
    pub const NOOP: u8 = 0x00;
    /// First digit register; digit `n` is `DIGIT0 + n`
    pub const DIGIT0: u8 = 0x01;
    /// BCD decode per digit
    pub const DECODE_MODE: u8 = 0x09;
    /// Brightness (0-15)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits minus one
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// 0 = power-down, 1 = normal operation
    pub const SHUTDOWN: u8 = 0x0C;
    /// 1 = all segments lit
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Digit registers on one chip
const DIGITS: usize = NUM_POSITIONS as usize;

/// MAX7219 on three GPIO lines
///
/// All three pins must share an error type.
pub struct Max7219<DIN, CLK, CS> {
    din: DIN,
    clk: CLK,
    cs: CS,
    /// Last value written to each digit register
    rows: [u8; DIGITS],
}

impl<DIN, CLK, CS> Max7219<DIN, CLK, CS>
where
    DIN: OutputPin,
    CLK: OutputPin<Error = DIN::Error>,
    CS: OutputPin<Error = DIN::Error>,
{
    /// Take the pins and bring the chip up
    ///
    /// After this the chip scans all eight digits without decoding, every
    /// register is blank and the chip is in power-down.
    pub fn new(din: DIN, clk: CLK, cs: CS) -> Result<Self, DIN::Error> {
        let mut chip = Self {
            din,
            clk,
            cs,
            rows: [0; DIGITS],
        };

        chip.cs.set_high()?;
        chip.clk.set_low()?;

        chip.write(reg::DISPLAY_TEST, 0)?;
        chip.write(reg::SCAN_LIMIT, (DIGITS - 1) as u8)?;
        chip.write(reg::DECODE_MODE, 0)?;
        chip.clear()?;
        chip.shutdown(true)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("max7219 ready");

        Ok(chip)
    }

    /// Mirror of the digit registers
    pub fn rows(&self) -> &[u8; DIGITS] {
        &self.rows
    }

    /// Give the pins back
    pub fn release(self) -> (DIN, CLK, CS) {
        (self.din, self.clk, self.cs)
    }

    /// Write one register
    pub fn write(&mut self, register: u8, data: u8) -> Result<(), DIN::Error> {
        self.cs.set_low()?;
        self.shift_out(register)?;
        self.shift_out(data)?;
        self.cs.set_high()
    }

    fn shift_out(&mut self, byte: u8) -> Result<(), DIN::Error> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.din.set_high()?;
            } else {
                self.din.set_low()?;
            }
            self.clk.set_high()?;
            self.clk.set_low()?;
        }
        Ok(())
    }

    fn write_row(&mut self, row: usize) -> Result<(), DIN::Error> {
        // row < DIGITS
        self.write(reg::DIGIT0 + row as u8, self.rows[row])
    }
}

impl<DIN, CLK, CS> LedDriver for Max7219<DIN, CLK, CS>
where
    DIN: OutputPin,
    CLK: OutputPin<Error = DIN::Error>,
    CS: OutputPin<Error = DIN::Error>,
{
    type Error = DIN::Error;

    fn set_column(&mut self, column: u8, bits: u8) -> Result<(), Self::Error> {
        if column >= NUM_COLUMNS {
            return Ok(());
        }
        let mask = 0x80 >> column;
        for row in 0..DIGITS {
            if bits & (0x80 >> row) != 0 {
                self.rows[row] |= mask;
            } else {
                self.rows[row] &= !mask;
            }
            self.write_row(row)?;
        }
        Ok(())
    }

    fn set_char(&mut self, position: u8, ch: char, dot: bool) -> Result<(), Self::Error> {
        let position = usize::from(position);
        if position >= DIGITS {
            return Ok(());
        }
        let mut segments = chars::encode(ch);
        if dot {
            segments |= chars::SEG_DP;
        }
        self.rows[position] = segments;
        self.write_row(position)
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        self.write(reg::INTENSITY, level.min(MAX_INTENSITY))
    }

    fn shutdown(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.write(reg::SHUTDOWN, u8::from(!enabled))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.rows = [0; DIGITS];
        for row in 0..DIGITS {
            self.write_row(row)?;
        }
        Ok(())
    }
}
