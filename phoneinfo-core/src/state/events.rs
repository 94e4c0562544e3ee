//! Events that move the link state

/// Events seen by the accessory link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// Serial port reported a connection
    Connected,
    /// Serial port reported the connection dropped
    Disconnected,
    /// A status line arrived
    StatusReceived,
}
