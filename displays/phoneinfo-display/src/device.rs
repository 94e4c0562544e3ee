//! Display device contract
//!
//! Both display heads implement [`DisplayDevice`]; the accessory code only
//! sees this trait.

use phoneinfo_protocol::{DisplayInfo, PhoneStatus};

/// Operations every display head supports
///
/// Calls are strictly sequential: one caller drives `render`, `tick` and
/// the connection icons. `Error` is the driver's bus error; the rendering
/// rules themselves never fail.
pub trait DisplayDevice {
    /// Error type of the underlying driver
    type Error;

    /// Power on, apply the default intensity, blank and show the
    /// disconnected icon
    ///
    /// Calling it again yields the same picture.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Draw a phone status
    fn render(&mut self, status: PhoneStatus) -> Result<(), Self::Error>;

    /// Show the "phone connected" picture
    fn show_connected(&mut self) -> Result<(), Self::Error>;

    /// Show the "phone disconnected" picture and forget the battery level
    fn show_disconnected(&mut self) -> Result<(), Self::Error>;

    /// Enter (`true`) or leave (`false`) power-down on every chip
    fn shutdown(&mut self, enabled: bool) -> Result<(), Self::Error>;

    /// Blank every chip
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Set brightness on every chip (clamped to 0-15)
    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Describe the display for the phone
    fn display_info(&self) -> DisplayInfo;

    /// Advance animations
    ///
    /// `now_ms` is a monotonic timestamp. Call it well inside the blink
    /// interval; extra calls are harmless.
    fn tick(&mut self, now_ms: u64) -> Result<(), Self::Error>;
}
