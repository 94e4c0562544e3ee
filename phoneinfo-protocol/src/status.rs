//! Phone status snapshot

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The phone information shown on the accessory
///
/// A fresh snapshot is sent on every change; displays copy it and never keep
/// a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhoneStatus {
    /// Battery level in percent (nominally 0-100)
    pub battery: u8,
    /// Charger reports the battery as full
    pub battery_full: bool,
    /// Unread SMS count
    pub unread_sms: u16,
    /// Missed call count
    pub missed_calls: u16,
}

impl PhoneStatus {
    /// Create a status snapshot
    pub const fn new(battery: u8, battery_full: bool, unread_sms: u16, missed_calls: u16) -> Self {
        Self {
            battery,
            battery_full,
            unread_sms,
            missed_calls,
        }
    }
}
