//! Per-display runtime state

use phoneinfo_hal::MAX_INTENSITY;

/// Brightness applied by `init()` unless configured otherwise
pub const DEFAULT_INTENSITY: u8 = 8;

/// Time between low-battery blink phase changes
pub const BLINK_INTERVAL_MS: u64 = 2000;

/// Battery levels below this blink the empty-battery icon
pub const LOW_BATTERY_THRESHOLD: u8 = 15;

/// Highest battery level drawn as a number on the matrix
pub const MAX_BATTERY_NUMBER: u8 = 99;

/// State owned by one display
///
/// `last_battery` is `None` while the phone is disconnected, which also
/// stops the low-battery blink from drawing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// Battery level of the last rendered status
    last_battery: Option<u8>,
    /// Low-battery blink phase: `true` shows the empty icon
    blink_on: bool,
    /// Time of the last blink phase change
    last_blink_ms: u64,
    /// Current brightness (0-15)
    intensity: u8,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceState {
    /// Create a disconnected state
    pub const fn new() -> Self {
        Self {
            last_battery: None,
            blink_on: false,
            last_blink_ms: 0,
            intensity: DEFAULT_INTENSITY,
        }
    }

    /// Battery level of the last render, `None` when disconnected
    pub fn last_battery(&self) -> Option<u8> {
        self.last_battery
    }

    /// Remember the battery level of a render
    pub fn set_battery(&mut self, battery: u8) {
        self.last_battery = Some(battery);
    }

    /// Forget the battery level (phone disconnected)
    pub fn mark_disconnected(&mut self) {
        self.last_battery = None;
    }

    /// Check if a battery level is known
    pub fn is_connected(&self) -> bool {
        self.last_battery.is_some()
    }

    /// Check if the last battery level is in the blinking range
    pub fn is_low_battery(&self) -> bool {
        matches!(self.last_battery, Some(b) if b < LOW_BATTERY_THRESHOLD)
    }

    /// Current blink phase
    pub fn blink_on(&self) -> bool {
        self.blink_on
    }

    /// Advance the blink timer
    ///
    /// Flips the phase and returns `true` once at least
    /// [`BLINK_INTERVAL_MS`] passed since the previous flip. Calling it more
    /// often is harmless.
    pub fn advance_blink(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_blink_ms) < BLINK_INTERVAL_MS {
            return false;
        }
        self.last_blink_ms = now_ms;
        self.blink_on = !self.blink_on;
        true
    }

    /// Current brightness
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    /// Store a brightness, clamped to the chip's range
    ///
    /// Returns the stored value.
    pub fn set_intensity(&mut self, level: u8) -> u8 {
        self.intensity = level.min(MAX_INTENSITY);
        self.intensity
    }
}
