//! Display heads for the PhoneInfo accessory
//!
//! This crate provides:
//! - `DisplayDevice` trait implemented by every display head
//! - `SevenSegmentDisplay` for an 8-digit seven-segment module
//! - `LedMatrixDisplay` for three 8x8 matrices (battery, SMS, calls)
//! - Digit fonts and icons used by the matrices
//! - `BankBuffer`, an in-memory driver for previews and tests
//!
//! # Architecture
//!
//! A head owns its driver handles (see `phoneinfo_hal::LedDriver`) and a
//! `DeviceState`. The caller constructs one head, calls `init()` once, then
//! alternates `render()` with periodic `tick()` calls. Connection changes go
//! through `show_connected()` / `show_disconnected()` instead of `render()`.
//!
//! Time is never read from a clock here: `tick()` takes a monotonic
//! millisecond timestamp, so the low-battery blink can be driven from any
//! time source.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod any;
pub mod buffer;
pub mod device;
pub mod glyph;
pub mod led_matrix;
pub mod seven_segment;
pub mod state;

// Re-export key types
pub use any::AnyDisplay;
pub use buffer::BankBuffer;
pub use device::DisplayDevice;
pub use glyph::Digit;
pub use led_matrix::LedMatrixDisplay;
pub use seven_segment::{format_status, SevenSegmentDisplay};
pub use state::{DeviceState, BLINK_INTERVAL_MS, DEFAULT_INTENSITY, LOW_BATTERY_THRESHOLD};
