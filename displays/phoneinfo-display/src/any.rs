//! Display head chosen at runtime

use core::convert::Infallible;

use phoneinfo_hal::{Bank, LedDriver};
use phoneinfo_protocol::{DisplayInfo, DisplayKind, PhoneStatus};

use crate::device::DisplayDevice;
use crate::led_matrix::LedMatrixDisplay;
use crate::seven_segment::SevenSegmentDisplay;

/// Either display head over the same driver type
pub enum AnyDisplay<D> {
    SevenSegment(SevenSegmentDisplay<D>),
    LedMatrix(LedMatrixDisplay<D>),
}

impl<D: LedDriver> AnyDisplay<D> {
    /// Build the head for `kind`, opening one driver per bank it uses
    ///
    /// The seven-segment head only opens [`Bank::Battery`]. The first
    /// error from `open` is returned.
    pub fn try_build<E, F>(kind: DisplayKind, intensity: u8, mut open: F) -> Result<Self, E>
    where
        F: FnMut(Bank) -> Result<D, E>,
    {
        let display = match kind {
            DisplayKind::SevenSegment => AnyDisplay::SevenSegment(
                SevenSegmentDisplay::with_intensity(open(Bank::Battery)?, intensity),
            ),
            DisplayKind::LedMatrix => AnyDisplay::LedMatrix(LedMatrixDisplay::with_intensity(
                open(Bank::Battery)?,
                open(Bank::Sms)?,
                open(Bank::Calls)?,
                intensity,
            )),
        };
        Ok(display)
    }

    /// Build the head for `kind` from an infallible driver source
    pub fn build<F>(kind: DisplayKind, intensity: u8, mut open: F) -> Self
    where
        F: FnMut(Bank) -> D,
    {
        match Self::try_build(kind, intensity, |bank| Ok::<_, Infallible>(open(bank))) {
            Ok(display) => display,
            Err(never) => match never {},
        }
    }

    /// Which head this is
    pub fn kind(&self) -> DisplayKind {
        match self {
            AnyDisplay::SevenSegment(_) => DisplayKind::SevenSegment,
            AnyDisplay::LedMatrix(_) => DisplayKind::LedMatrix,
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $display:ident => $call:expr) => {
        match $self {
            AnyDisplay::SevenSegment($display) => $call,
            AnyDisplay::LedMatrix($display) => $call,
        }
    };
}

impl<D: LedDriver> DisplayDevice for AnyDisplay<D> {
    type Error = D::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        dispatch!(self, d => d.init())
    }

    fn render(&mut self, status: PhoneStatus) -> Result<(), Self::Error> {
        dispatch!(self, d => d.render(status))
    }

    fn show_connected(&mut self) -> Result<(), Self::Error> {
        dispatch!(self, d => d.show_connected())
    }

    fn show_disconnected(&mut self) -> Result<(), Self::Error> {
        dispatch!(self, d => d.show_disconnected())
    }

    fn shutdown(&mut self, enabled: bool) -> Result<(), Self::Error> {
        dispatch!(self, d => d.shutdown(enabled))
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        dispatch!(self, d => d.clear())
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), Self::Error> {
        dispatch!(self, d => d.set_intensity(level))
    }

    fn display_info(&self) -> DisplayInfo {
        dispatch!(self, d => d.display_info())
    }

    fn tick(&mut self, now_ms: u64) -> Result<(), Self::Error> {
        dispatch!(self, d => d.tick(now_ms))
    }
}
