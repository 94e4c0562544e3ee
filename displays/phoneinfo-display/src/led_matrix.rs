//! Three 8x8 LED matrices: battery, SMS and calls
//!
//! Each matrix is driven one column at a time. Numbers 0-9 use the large
//! font, 10-99 two packed small-font digits and anything larger lights the
//! whole matrix. The battery matrix always uses the small font and switches
//! to an icon when the battery is low (blinking) or above 99.

use phoneinfo_hal::{Bank, LedDriver, NUM_COLUMNS};
use phoneinfo_protocol::{DisplayInfo, DisplayKind, PhoneStatus};

use crate::device::DisplayDevice;
use crate::glyph::{self, Digit};
use crate::state::{DeviceState, DEFAULT_INTENSITY, MAX_BATTERY_NUMBER};

/// Column pattern shown for numbers that do not fit
pub const OVERFLOW_COLUMN: u8 = 0xFF;

/// Column left dark above a large-font digit
const LARGE_BLANK_COLUMN: u8 = 7;

/// Right-most column of a packed small-font number
const SMALL_LAST_COLUMN: u8 = 5;

/// Draw a large-font digit
///
/// Column 7 is cleared and glyph row `r` lands on column `6 - r`.
fn draw_large<D: LedDriver>(bank: &mut D, digit: Digit) -> Result<(), D::Error> {
    let rows = glyph::large(digit);
    bank.set_column(LARGE_BLANK_COLUMN, 0)?;
    for (row, bits) in rows.iter().enumerate() {
        // `row` is below LARGE_ROWS (7)
        bank.set_column(LARGE_BLANK_COLUMN - 1 - row as u8, *bits)?;
    }
    Ok(())
}

/// Draw a number with two small-font digits, or the overflow pattern
/// from 100 up
///
/// Columns 7, 6 and 0 are cleared; packed row `i` lands on column `5 - i`.
fn draw_small_number<D: LedDriver>(bank: &mut D, value: u16) -> Result<(), D::Error> {
    let Some((tens, units)) = Digit::split(value) else {
        return draw_icon(bank, &[OVERFLOW_COLUMN; NUM_COLUMNS as usize]);
    };

    bank.set_column(7, 0)?;
    bank.set_column(6, 0)?;
    for (row, bits) in glyph::small_pair(tens, units).iter().enumerate() {
        // `row` is below SMALL_ROWS (5)
        bank.set_column(SMALL_LAST_COLUMN - row as u8, *bits)?;
    }
    bank.set_column(0, 0)
}

/// Draw a count: large font for one digit, small font otherwise
fn draw_number<D: LedDriver>(bank: &mut D, value: u16) -> Result<(), D::Error> {
    match Digit::from_number(value) {
        Some(digit) => draw_large(bank, digit),
        None => draw_small_number(bank, value),
    }
}

/// Draw an 8-column icon
fn draw_icon<D: LedDriver>(bank: &mut D, icon: &[u8; NUM_COLUMNS as usize]) -> Result<(), D::Error> {
    for (column, bits) in icon.iter().enumerate() {
        bank.set_column(column as u8, *bits)?;
    }
    Ok(())
}

/// Matrix display over three driver chips
pub struct LedMatrixDisplay<D> {
    battery: D,
    sms: D,
    calls: D,
    state: DeviceState,
    default_intensity: u8,
}

impl<D: LedDriver> LedMatrixDisplay<D> {
    /// Create a display; nothing is written until `init()`
    pub fn new(battery: D, sms: D, calls: D) -> Self {
        Self::with_intensity(battery, sms, calls, DEFAULT_INTENSITY)
    }

    /// Create a display whose `init()` applies `intensity`
    pub fn with_intensity(battery: D, sms: D, calls: D, intensity: u8) -> Self {
        let mut state = DeviceState::new();
        let default_intensity = state.set_intensity(intensity);
        Self {
            battery,
            sms,
            calls,
            state,
            default_intensity,
        }
    }

    /// Get access to one bank's driver
    pub fn bank(&self, bank: Bank) -> &D {
        match bank {
            Bank::Battery => &self.battery,
            Bank::Sms => &self.sms,
            Bank::Calls => &self.calls,
        }
    }

    /// Get mutable access to one bank's driver
    pub fn bank_mut(&mut self, bank: Bank) -> &mut D {
        match bank {
            Bank::Battery => &mut self.battery,
            Bank::Sms => &mut self.sms,
            Bank::Calls => &mut self.calls,
        }
    }

    /// Get the display state
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Release the drivers in battery, SMS, calls order
    pub fn into_banks(self) -> [D; 3] {
        [self.battery, self.sms, self.calls]
    }

    fn banks_mut(&mut self) -> [&mut D; 3] {
        [&mut self.battery, &mut self.sms, &mut self.calls]
    }

    /// Redraw the battery matrix from the last known level
    fn draw_battery(&mut self) -> Result<(), D::Error> {
        let Some(level) = self.state.last_battery() else {
            return Ok(());
        };

        if self.state.is_low_battery() {
            if self.state.blink_on() {
                draw_icon(&mut self.battery, &glyph::EMPTY_BATTERY)
            } else {
                draw_small_number(&mut self.battery, u16::from(level))
            }
        } else if level > MAX_BATTERY_NUMBER {
            draw_icon(&mut self.battery, &glyph::FULL_BATTERY)
        } else {
            draw_small_number(&mut self.battery, u16::from(level))
        }
    }
}

impl<D: LedDriver> DisplayDevice for LedMatrixDisplay<D> {
    type Error = D::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.shutdown(false)?;
        self.set_intensity(self.default_intensity)?;
        self.clear()?;
        self.show_disconnected()
    }

    fn render(&mut self, status: PhoneStatus) -> Result<(), Self::Error> {
        self.state.set_battery(status.battery);
        self.draw_battery()?;
        draw_number(&mut self.sms, status.unread_sms)?;
        draw_number(&mut self.calls, status.missed_calls)
    }

    fn show_connected(&mut self) -> Result<(), Self::Error> {
        self.clear()?;
        let columns = glyph::CONNECTED_FIRST_COLUMN..;
        for (column, bits) in columns.clone().zip(glyph::CONNECTED_LEFT) {
            self.battery.set_column(column, bits)?;
        }
        for (column, bits) in columns.zip(glyph::CONNECTED_RIGHT) {
            self.calls.set_column(column, bits)?;
        }
        Ok(())
    }

    fn show_disconnected(&mut self) -> Result<(), Self::Error> {
        self.state.mark_disconnected();
        self.clear()?;
        draw_icon(&mut self.sms, &glyph::DISCONNECTED)
    }

    fn shutdown(&mut self, enabled: bool) -> Result<(), Self::Error> {
        for bank in self.banks_mut() {
            bank.shutdown(enabled)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        for bank in self.banks_mut() {
            bank.clear()?;
        }
        Ok(())
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        let level = self.state.set_intensity(level);
        for bank in self.banks_mut() {
            bank.set_intensity(level)?;
        }
        Ok(())
    }

    fn display_info(&self) -> DisplayInfo {
        DisplayInfo::new(DisplayKind::LedMatrix, self.state.intensity())
    }

    fn tick(&mut self, now_ms: u64) -> Result<(), Self::Error> {
        if self.state.advance_blink(now_ms) && self.state.is_low_battery() {
            self.draw_battery()?;
        }
        Ok(())
    }
}
