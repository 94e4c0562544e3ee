//! Link state definition

use super::events::LinkEvent;

/// Whether a phone is connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No phone; the display shows the disconnected icon
    #[default]
    Disconnected,
    /// A phone is connected and may send status lines
    Connected,
}

impl LinkState {
    /// Check if a phone is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, LinkState::Connected)
    }

    /// Process an event and return the next state
    ///
    /// A status line proves a phone is there even if the connect
    /// notification was missed.
    pub fn transition(self, event: LinkEvent) -> Self {
        match event {
            LinkEvent::Connected | LinkEvent::StatusReceived => LinkState::Connected,
            LinkEvent::Disconnected => LinkState::Disconnected,
        }
    }
}
