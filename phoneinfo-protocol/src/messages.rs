//! Message types for the accessory line protocol
//!
//! Message types are divided into two categories:
//! - Phone → Accessory: status updates, intensity changes, info queries
//! - Accessory → Phone: the info reply

use core::fmt::Write;

use heapless::String;

use crate::info::{DisplayInfo, MAX_INFO_LEN};
use crate::line::MAX_LINE_LEN;
use crate::status::PhoneStatus;

// Command prefixes: Phone → Accessory
pub const CMD_STATUS: char = 'B';
pub const CMD_INTENSITY: char = 'I';
pub const CMD_QUERY_INFO: char = 'i';

// Field separators inside a status line
const SEP_FULL: char = '/';
const SEP_SMS: char = 'S';
const SEP_CALLS: char = 'C';

/// Capacity of an encoded reply line
pub const MAX_REPLY_LEN: usize = MAX_INFO_LEN + 2;

/// Errors that can occur while decoding or encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Line does not start with a known command letter
    UnknownCommand,
    /// A numeric field contains a non-digit
    InvalidNumber,
    /// A required field or separator is absent
    MissingField,
    /// Encoded command does not fit in a line
    LineTooLong,
}

/// Commands sent by the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// New phone status to display
    Status(PhoneStatus),
    /// New display brightness
    Intensity(u8),
    /// Request for the accessory information packet
    QueryInfo,
}

impl Command {
    /// Parse a command from a line (terminator already stripped)
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let mut chars = line.chars();
        match chars.next() {
            Some(CMD_STATUS) => parse_status(chars.as_str()).map(Command::Status),
            Some(CMD_INTENSITY) => {
                let level = parse_number(chars.as_str(), 16)?;
                Ok(Command::Intensity(saturate_u8(level)))
            }
            Some(CMD_QUERY_INFO) if chars.as_str().is_empty() => Ok(Command::QueryInfo),
            _ => Err(ProtocolError::UnknownCommand),
        }
    }

    /// Encode this command as a terminated line (phone side, or tests)
    pub fn encode(&self) -> Result<String<MAX_LINE_LEN>, ProtocolError> {
        let mut out = String::new();
        let result = match self {
            Command::Status(status) => write!(
                out,
                "{}{}{}{}{}{}{}{}\r",
                CMD_STATUS,
                status.battery,
                SEP_FULL,
                u8::from(status.battery_full),
                SEP_SMS,
                status.unread_sms,
                SEP_CALLS,
                status.missed_calls
            ),
            Command::Intensity(level) => write!(out, "{}{:x}\r", CMD_INTENSITY, level),
            Command::QueryInfo => write!(out, "{}\r", CMD_QUERY_INFO),
        };
        result.map_err(|_| ProtocolError::LineTooLong)?;
        Ok(out)
    }
}

/// Replies sent by the accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    /// Answer to [`Command::QueryInfo`]
    Info(DisplayInfo),
}

impl Reply {
    /// Encode this reply as a `\r\n` terminated line
    pub fn encode(&self) -> String<MAX_REPLY_LEN> {
        let mut out = String::new();
        match self {
            Reply::Info(info) => {
                // Capacity covers the longest info document plus terminator
                let _ = out.push_str(info.to_json().as_str());
                let _ = out.push_str("\r\n");
            }
        }
        out
    }
}

/// Parse `<battery>/<full>S<sms>C<calls>`
fn parse_status(body: &str) -> Result<PhoneStatus, ProtocolError> {
    let (battery, rest) = body.split_once(SEP_FULL).ok_or(ProtocolError::MissingField)?;
    let (full, rest) = rest.split_once(SEP_SMS).ok_or(ProtocolError::MissingField)?;
    let (sms, calls) = rest.split_once(SEP_CALLS).ok_or(ProtocolError::MissingField)?;

    let battery_full = match full {
        "0" => false,
        "1" => true,
        "" => return Err(ProtocolError::MissingField),
        _ => return Err(ProtocolError::InvalidNumber),
    };

    Ok(PhoneStatus {
        battery: saturate_u8(parse_number(battery, 10)?),
        battery_full,
        unread_sms: saturate_u16(parse_number(sms, 10)?),
        missed_calls: saturate_u16(parse_number(calls, 10)?),
    })
}

/// Parse an unsigned number, saturating instead of overflowing
fn parse_number(field: &str, radix: u32) -> Result<u32, ProtocolError> {
    if field.is_empty() {
        return Err(ProtocolError::MissingField);
    }
    field.chars().try_fold(0u32, |acc, c| {
        let digit = c.to_digit(radix).ok_or(ProtocolError::InvalidNumber)?;
        Ok(acc.saturating_mul(radix).saturating_add(digit))
    })
}

fn saturate_u8(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

fn saturate_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::DisplayKind;

    #[test]
    fn test_parse_status() {
        let cmd = Command::parse("B45/0S3C12").unwrap();
        assert_eq!(cmd, Command::Status(PhoneStatus::new(45, false, 3, 12)));
    }

    #[test]
    fn test_parse_status_full() {
        let cmd = Command::parse("B100/1S0C0").unwrap();
        assert_eq!(cmd, Command::Status(PhoneStatus::new(100, true, 0, 0)));
    }

    #[test]
    fn test_parse_status_saturates() {
        let cmd = Command::parse("B300/0S70000C99999999999").unwrap();
        assert_eq!(
            cmd,
            Command::Status(PhoneStatus::new(u8::MAX, false, u16::MAX, u16::MAX))
        );
    }

    #[test]
    fn test_parse_status_errors() {
        assert_eq!(Command::parse("B45"), Err(ProtocolError::MissingField));
        assert_eq!(Command::parse("B45/0S3"), Err(ProtocolError::MissingField));
        assert_eq!(Command::parse("B/0S3C1"), Err(ProtocolError::MissingField));
        assert_eq!(Command::parse("B4x/0S3C1"), Err(ProtocolError::InvalidNumber));
        assert_eq!(Command::parse("B45/2S3C1"), Err(ProtocolError::InvalidNumber));
        assert_eq!(Command::parse("B-5/0S3C1"), Err(ProtocolError::InvalidNumber));
    }

    #[test]
    fn test_parse_intensity_hex() {
        assert_eq!(Command::parse("If"), Ok(Command::Intensity(15)));
        assert_eq!(Command::parse("I8"), Ok(Command::Intensity(8)));
        assert_eq!(Command::parse("I"), Err(ProtocolError::MissingField));
        assert_eq!(Command::parse("Ig"), Err(ProtocolError::InvalidNumber));
    }

    #[test]
    fn test_parse_query() {
        assert_eq!(Command::parse("i"), Ok(Command::QueryInfo));
        assert_eq!(Command::parse("ix"), Err(ProtocolError::UnknownCommand));
        assert_eq!(Command::parse("X1"), Err(ProtocolError::UnknownCommand));
        assert_eq!(Command::parse(""), Err(ProtocolError::UnknownCommand));
    }

    #[test]
    fn test_encode_matches_phone_format() {
        let cmd = Command::Status(PhoneStatus::new(45, true, 3, 12));
        assert_eq!(cmd.encode().unwrap().as_str(), "B45/1S3C12\r");
        assert_eq!(Command::Intensity(12).encode().unwrap().as_str(), "Ic\r");
        assert_eq!(Command::QueryInfo.encode().unwrap().as_str(), "i\r");
    }

    #[test]
    fn test_command_roundtrip() {
        let original = Command::Status(PhoneStatus::new(7, false, 65535, 123));
        let line = original.encode().unwrap();
        let parsed = Command::parse(line.trim_end_matches('\r')).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_reply_info() {
        let reply = Reply::Info(DisplayInfo::new(DisplayKind::SevenSegment, 8));
        let line = reply.encode();
        assert!(line.starts_with("{\"type\":\"7seg\""));
        assert!(line.ends_with(" }\r\n"));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_parse_never_panics(line in "[ -~]{0,32}") {
                let _ = Command::parse(&line);
            }
        }
    }
}
