//! Accessory session
//!
//! Glues the serial link to a display head: bytes from the phone go in
//! through [`Accessory::feed`], commands are applied to the display and the
//! info query produces a [`Reply`] for the caller to send back.

use phoneinfo_display::DisplayDevice;
use phoneinfo_protocol::{Command, LineError, LineParser, ProtocolError, Reply};

use crate::state::{LinkEvent, LinkState};

/// Error from feeding the accessory
///
/// Line and protocol errors only drop the offending line; the session
/// keeps going. Display errors come from the driver bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccessoryError<E> {
    /// Line framing failed
    Line(LineError),
    /// Line was not a valid command
    Protocol(ProtocolError),
    /// Display driver failed
    Display(E),
}

/// One accessory: a display head plus its serial session
pub struct Accessory<D> {
    display: D,
    parser: LineParser,
    link: LinkState,
}

impl<D: DisplayDevice> Accessory<D> {
    /// Wrap a display head; call [`Accessory::start`] before use
    pub fn new(display: D) -> Self {
        Self {
            display,
            parser: LineParser::new(),
            link: LinkState::Disconnected,
        }
    }

    /// Get access to the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get mutable access to the display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Current link state
    pub fn link(&self) -> LinkState {
        self.link
    }

    /// Release the display
    pub fn into_display(self) -> D {
        self.display
    }

    /// Bring the display up showing "disconnected"
    pub fn start(&mut self) -> Result<(), D::Error> {
        self.parser.reset();
        self.link = LinkState::Disconnected;
        self.display.init()
    }

    /// A phone connected to the serial port
    pub fn connect(&mut self) -> Result<(), D::Error> {
        self.parser.reset();
        self.update_link(LinkEvent::Connected);
        self.display.show_connected()
    }

    /// The phone went away
    pub fn disconnect(&mut self) -> Result<(), D::Error> {
        self.parser.reset();
        self.update_link(LinkEvent::Disconnected);
        self.display.show_disconnected()
    }

    /// Feed one byte from the serial port
    ///
    /// Returns a reply when a completed line asked for one.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Reply>, AccessoryError<D::Error>> {
        let line = match self.parser.feed(byte) {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(None),
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("dropping line: {}", e);
                return Err(AccessoryError::Line(e));
            }
        };

        let command = Command::parse(&line).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("bad command {=str}: {}", line.as_str(), e);
            AccessoryError::Protocol(e)
        })?;

        self.apply(command).map_err(AccessoryError::Display)
    }

    /// Apply a decoded command
    pub fn apply(&mut self, command: Command) -> Result<Option<Reply>, D::Error> {
        match command {
            Command::Status(status) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("status: {}", status);
                self.update_link(LinkEvent::StatusReceived);
                self.display.render(status)?;
                Ok(None)
            }
            Command::Intensity(level) => {
                #[cfg(feature = "defmt")]
                defmt::info!("intensity -> {}", level);
                self.display.set_intensity(level)?;
                Ok(None)
            }
            Command::QueryInfo => Ok(Some(Reply::Info(self.display.display_info()))),
        }
    }

    /// Advance display animations
    pub fn tick(&mut self, now_ms: u64) -> Result<(), D::Error> {
        self.display.tick(now_ms)
    }

    fn update_link(&mut self, event: LinkEvent) {
        let next = self.link.transition(event);
        if next != self.link {
            #[cfg(feature = "defmt")]
            defmt::info!("link {} -> {}", self.link, next);
            self.link = next;
        }
    }
}
