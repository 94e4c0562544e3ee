//! Configuration types

use phoneinfo_display::{AnyDisplay, DEFAULT_INTENSITY};
use phoneinfo_hal::{Bank, LedDriver};
use phoneinfo_protocol::DisplayKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default battery (and seven-segment) bank wiring
pub const DEFAULT_BATTERY_PINS: BankPins = BankPins::new(4, 6, 5);

/// Default SMS bank wiring
pub const DEFAULT_SMS_PINS: BankPins = BankPins::new(7, 9, 8);

/// Default calls bank wiring
pub const DEFAULT_CALLS_PINS: BankPins = BankPins::new(10, 12, 11);

/// GPIO numbers of one driver chip's serial lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BankPins {
    /// Serial data (DIN)
    pub data: u8,
    /// Serial clock (CLK)
    pub clk: u8,
    /// Chip select / load (CS)
    pub cs: u8,
}

impl BankPins {
    /// Create a pin set
    pub const fn new(data: u8, clk: u8, cs: u8) -> Self {
        Self { data, clk, cs }
    }
}

/// Complete accessory configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccessoryConfig {
    /// Which display head is fitted
    pub display: DisplayKind,
    /// Brightness applied at start-up (0-15)
    pub intensity: u8,
    /// Battery matrix, or the seven-segment module
    pub battery: BankPins,
    /// SMS matrix
    pub sms: BankPins,
    /// Calls matrix
    pub calls: BankPins,
}

impl Default for AccessoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessoryConfig {
    /// Three matrices on the stock wiring
    pub const fn new() -> Self {
        Self {
            display: DisplayKind::LedMatrix,
            intensity: DEFAULT_INTENSITY,
            battery: DEFAULT_BATTERY_PINS,
            sms: DEFAULT_SMS_PINS,
            calls: DEFAULT_CALLS_PINS,
        }
    }

    /// Wiring of one bank
    pub fn pins(&self, bank: Bank) -> BankPins {
        match bank {
            Bank::Battery => self.battery,
            Bank::Sms => self.sms,
            Bank::Calls => self.calls,
        }
    }

    /// Mutable wiring of one bank
    pub fn pins_mut(&mut self, bank: Bank) -> &mut BankPins {
        match bank {
            Bank::Battery => &mut self.battery,
            Bank::Sms => &mut self.sms,
            Bank::Calls => &mut self.calls,
        }
    }
}

/// Build the configured display head
///
/// `open` is called once per bank the head uses, with that bank's wiring.
/// The head's `init()` applies the configured intensity.
pub fn build_display<D, E, F>(config: &AccessoryConfig, mut open: F) -> Result<AnyDisplay<D>, E>
where
    D: LedDriver,
    F: FnMut(Bank, BankPins) -> Result<D, E>,
{
    AnyDisplay::try_build(config.display, config.intensity, |bank| {
        open(bank, config.pins(bank))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use phoneinfo_display::{BankBuffer, DisplayDevice};
    use std::vec::Vec;

    #[test]
    fn test_defaults_match_stock_wiring() {
        let config = AccessoryConfig::default();
        assert_eq!(config.display, DisplayKind::LedMatrix);
        assert_eq!(config.intensity, 8);
        assert_eq!(config.pins(Bank::Battery), BankPins::new(4, 6, 5));
        assert_eq!(config.pins(Bank::Sms), BankPins::new(7, 9, 8));
        assert_eq!(config.pins(Bank::Calls), BankPins::new(10, 12, 11));
    }

    #[test]
    fn test_build_matrix_opens_every_bank() {
        let config = AccessoryConfig::new();
        let mut opened = Vec::new();
        let display = build_display(&config, |bank, pins| {
            opened.push((bank, pins));
            Ok::<_, ()>(BankBuffer::new())
        })
        .unwrap();

        assert_eq!(display.kind(), DisplayKind::LedMatrix);
        assert_eq!(
            opened,
            [
                (Bank::Battery, DEFAULT_BATTERY_PINS),
                (Bank::Sms, DEFAULT_SMS_PINS),
                (Bank::Calls, DEFAULT_CALLS_PINS),
            ]
        );
    }

    #[test]
    fn test_build_seven_segment_uses_configured_intensity() {
        let config = AccessoryConfig {
            display: DisplayKind::SevenSegment,
            intensity: 3,
            ..AccessoryConfig::new()
        };
        let mut display = build_display(&config, |_, _| Ok::<_, ()>(BankBuffer::new())).unwrap();
        display.init().unwrap();
        assert_eq!(display.display_info().intensity, 3);
        assert_eq!(display.kind(), DisplayKind::SevenSegment);
    }
}
