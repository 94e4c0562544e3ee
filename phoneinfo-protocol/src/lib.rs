//! Phone to accessory line protocol
//!
//! This crate defines the serial protocol between the phone application and
//! the LED accessory, plus the data records both sides exchange. The link
//! is a Bluetooth SPP serial port carrying short ASCII lines.
//!
//! # Protocol Overview
//!
//! Every message is one line terminated by `\r`:
//! ```text
//! Phone → Accessory
//!   B<battery>/<full>S<sms>C<calls>   status update     B45/0S3C12
//!   I<hex>                            set intensity     If
//!   i                                 query info        i
//!
//! Accessory → Phone
//!   {"type":"8x8", "intensity":8, "height":1, "width":3 }
//! ```
//!
//! The accessory is a passive display - it only answers the info query.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod info;
pub mod line;
pub mod messages;
pub mod status;

pub use info::{DisplayInfo, DisplayKind, MAX_INFO_LEN};
pub use line::{Line, LineError, LineParser, LINE_TERMINATOR, MAX_LINE_LEN};
pub use messages::{Command, ProtocolError, Reply, MAX_REPLY_LEN};
pub use status::PhoneStatus;
