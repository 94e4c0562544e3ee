//! 8-digit seven-segment display head
//!
//! The three values share one line of eight characters:
//!
//! ```text
//! position  0 1 2 3 4 5 6 7
//!           B B _ S S _ C C     battery, SMS, calls
//!           1 0 0 S S _ C C     100% with single-digit SMS
//!           1 0 0 _ S S C C     100% with single-digit calls
//!           F _ _ S S _ C C     battery full
//! ```

use core::fmt::Write;

use heapless::String;
use phoneinfo_hal::{LedDriver, NUM_POSITIONS};
use phoneinfo_protocol::{DisplayInfo, DisplayKind, PhoneStatus};

use crate::device::DisplayDevice;
use crate::state::{DeviceState, DEFAULT_INTENSITY};

/// Characters on the display
pub const LINE_LEN: usize = NUM_POSITIONS as usize;

/// Text shown once the phone connects
pub const CONNECTED_TEXT: &str = "connectd";

/// Text shown while no phone is connected
pub const DISCONNECTED_TEXT: &str = "dcon";

/// Largest value a two-character field can show
const FIELD_MAX: u16 = 99;

/// Seven-segment display on a single driver chip
pub struct SevenSegmentDisplay<D> {
    driver: D,
    state: DeviceState,
    default_intensity: u8,
}

impl<D: LedDriver> SevenSegmentDisplay<D> {
    /// Create a display; nothing is written until `init()`
    pub fn new(driver: D) -> Self {
        Self::with_intensity(driver, DEFAULT_INTENSITY)
    }

    /// Create a display whose `init()` applies `intensity`
    pub fn with_intensity(driver: D, intensity: u8) -> Self {
        let mut state = DeviceState::new();
        let default_intensity = state.set_intensity(intensity);
        Self {
            driver,
            state,
            default_intensity,
        }
    }

    /// Get access to the underlying driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get mutable access to the underlying driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Get the display state
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Release the driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Write text from position 0; positions past its end keep their content
    fn print(&mut self, text: &str) -> Result<(), D::Error> {
        for (position, ch) in (0..NUM_POSITIONS).zip(text.chars()) {
            self.driver.set_char(position, ch, false)?;
        }
        Ok(())
    }
}

/// Lay out a status on the eight character positions
///
/// SMS and calls are capped at 99. A 100% battery borrows the separator of a
/// single-digit SMS or calls field to show all three digits; otherwise the
/// battery is capped at 99 too, or replaced by `F` when the charger reports
/// full.
pub fn format_status(status: &PhoneStatus) -> String<LINE_LEN> {
    let battery = u16::from(status.battery);
    let sms = status.unread_sms.min(FIELD_MAX);
    let calls = status.missed_calls.min(FIELD_MAX);

    let mut line = String::new();
    // Every layout is exactly eight characters once fields are capped
    let _ = if battery == 100 && (status.unread_sms < 10 || status.missed_calls < 10) {
        if status.unread_sms < 10 {
            write!(line, "{:3}{:2} {:2}", battery, sms, calls)
        } else {
            write!(line, "{:3} {:2}{:2}", battery, sms, calls)
        }
    } else if status.battery_full {
        write!(line, "F  {:2} {:2}", sms, calls)
    } else {
        write!(line, "{:2} {:2} {:2}", battery.min(FIELD_MAX), sms, calls)
    };
    line
}

impl<D: LedDriver> DisplayDevice for SevenSegmentDisplay<D> {
    type Error = D::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.shutdown(false)?;
        self.set_intensity(self.default_intensity)?;
        self.clear()?;
        self.show_disconnected()
    }

    fn render(&mut self, status: PhoneStatus) -> Result<(), Self::Error> {
        self.state.set_battery(status.battery);
        let line = format_status(&status);
        self.print(&line)
    }

    fn show_connected(&mut self) -> Result<(), Self::Error> {
        self.print(CONNECTED_TEXT)
    }

    fn show_disconnected(&mut self) -> Result<(), Self::Error> {
        self.state.mark_disconnected();
        self.print(DISCONNECTED_TEXT)
    }

    fn shutdown(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.driver.shutdown(enabled)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.driver.clear()
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        let level = self.state.set_intensity(level);
        self.driver.set_intensity(level)
    }

    fn display_info(&self) -> DisplayInfo {
        DisplayInfo::new(DisplayKind::SevenSegment, self.state.intensity())
    }

    fn tick(&mut self, _now_ms: u64) -> Result<(), Self::Error> {
        // Nothing animates on this head
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BankBuffer;

    fn status(battery: u8, full: bool, sms: u16, calls: u16) -> PhoneStatus {
        PhoneStatus::new(battery, full, sms, calls)
    }

    fn fmt(battery: u8, full: bool, sms: u16, calls: u16) -> String<LINE_LEN> {
        format_status(&status(battery, full, sms, calls))
    }

    fn display() -> SevenSegmentDisplay<BankBuffer> {
        let mut display = SevenSegmentDisplay::new(BankBuffer::new());
        display.init().unwrap();
        display
    }

    #[test]
    fn test_small_values() {
        assert_eq!(fmt(5, false, 3, 7).as_str(), " 5  3  7");
        assert_eq!(fmt(0, false, 0, 0).as_str(), " 0  0  0");
        assert_eq!(fmt(9, false, 9, 9).as_str(), " 9  9  9");
    }

    #[test]
    fn test_battery_full_flag() {
        assert_eq!(fmt(5, true, 3, 7).as_str(), "F   3  7");
        assert_eq!(fmt(98, true, 12, 45).as_str(), "F  12 45");
    }

    #[test]
    fn test_full_battery_borrows_sms_separator() {
        assert_eq!(fmt(100, false, 5, 23).as_str(), "100 5 23");
        assert_eq!(fmt(100, false, 5, 150).as_str(), "100 5 99");
    }

    #[test]
    fn test_full_battery_borrows_calls_separator() {
        assert_eq!(fmt(100, false, 12, 3).as_str(), "100 12 3");
        assert_eq!(fmt(100, false, 250, 3).as_str(), "100 99 3");
    }

    #[test]
    fn test_full_battery_without_room() {
        assert_eq!(fmt(100, false, 12, 34).as_str(), "99 12 34");
        assert_eq!(fmt(100, true, 12, 34).as_str(), "F  12 34");
    }

    #[test]
    fn test_hundred_wins_over_full_flag() {
        assert_eq!(fmt(100, true, 1, 2).as_str(), "100 1  2");
    }

    #[test]
    fn test_calls_clamped() {
        assert_eq!(fmt(45, false, 3, 150).as_str(), "45  3 99");
    }

    #[test]
    fn test_battery_above_hundred_clamped() {
        assert_eq!(fmt(120, false, 1, 2).as_str(), "99  1  2");
    }

    #[test]
    fn test_init_shows_disconnected() {
        let display = display();
        let bank = display.driver();
        assert_eq!(bank.text().as_str(), "dcon    ");
        assert!(!bank.is_shut_down());
        assert_eq!(bank.intensity(), DEFAULT_INTENSITY);
        assert!(!display.state().is_connected());
    }

    #[test]
    fn test_init_idempotent() {
        let once = display();
        let mut twice = display();
        twice.init().unwrap();
        assert_eq!(once.driver(), twice.driver());
    }

    #[test]
    fn test_render_writes_line() {
        let mut display = display();
        display.render(status(45, false, 3, 150)).unwrap();
        assert_eq!(display.driver().text().as_str(), "45  3 99");
        assert_eq!(display.state().last_battery(), Some(45));
    }

    #[test]
    fn test_connection_texts() {
        let mut display = display();
        display.show_connected().unwrap();
        assert_eq!(display.driver().text().as_str(), "connectd");

        // Shorter text leaves the tail untouched
        display.show_disconnected().unwrap();
        assert_eq!(display.driver().text().as_str(), "dconectd");
        assert!(!display.state().is_connected());
    }

    #[test]
    fn test_intensity_and_info() {
        let mut display = display();
        display.set_intensity(42).unwrap();
        assert_eq!(display.driver().intensity(), 15);
        let info = display.display_info();
        assert_eq!(info.kind, DisplayKind::SevenSegment);
        assert_eq!(info.intensity, 15);
        assert_eq!((info.height, info.width), (1, 8));
    }

    #[test]
    fn test_tick_is_noop() {
        let mut display = display();
        display.render(status(5, false, 0, 0)).unwrap();
        display.driver_mut().mark_clean();
        display.tick(10_000).unwrap();
        display.tick(20_000).unwrap();
        assert!(!display.driver().is_dirty());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_line_always_eight_chars(
                battery in any::<u8>(),
                full in any::<bool>(),
                sms in any::<u16>(),
                calls in any::<u16>(),
            ) {
                let line = fmt(battery, full, sms, calls);
                prop_assert_eq!(line.len(), LINE_LEN);
            }

            #[test]
            fn test_single_digits_layout(
                battery in 0u8..=9,
                sms in 0u16..=9,
                calls in 0u16..=9,
            ) {
                let line = fmt(battery, false, sms, calls);
                let expected = std::format!("{:2} {:2} {:2}", battery, sms, calls);
                prop_assert_eq!(line.as_str(), expected.as_str());
            }
        }
    }
}
