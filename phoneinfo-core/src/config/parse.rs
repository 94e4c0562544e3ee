//! TOML subset parser for the accessory configuration
//!
//! Only what the configuration needs is understood:
//! - `key = value` pairs with integer or string values
//! - `[display]`, `[bank.battery]`, `[bank.sms]` and `[bank.calls]` headers
//! - Comments (`# ...`), whole-line or after a value
//!
//! Keys that are not written keep their default. Unknown sections and keys
//! are errors so a typo does not silently fall back to the stock wiring.

use phoneinfo_hal::{Bank, MAX_INTENSITY};
use phoneinfo_protocol::DisplayKind;

use super::types::AccessoryConfig;

/// Configuration parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Unknown key, key outside a section, or a line that is not `key = value`
    InvalidKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
}

/// Current parsing context
#[derive(Debug, Clone, Copy)]
enum Section {
    Root,
    Display,
    Bank(Bank),
}

/// Parse a configuration document
///
/// Starts from [`AccessoryConfig::default`] and overrides what the document
/// sets.
pub fn parse_config(input: &str) -> Result<AccessoryConfig, ConfigError> {
    let mut config = AccessoryConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = strip_comment(header);
            let header = header.strip_suffix(']').ok_or(ConfigError::InvalidSection)?;
            section = parse_section_header(header)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidKey)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse a section header like "display" or "bank.sms"
fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "bank.battery" => Ok(Section::Bank(Bank::Battery)),
        "bank.sms" => Ok(Section::Bank(Bank::Sms)),
        "bank.calls" => Ok(Section::Bank(Bank::Calls)),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Drop a trailing comment that is not inside a string
fn strip_comment(text: &str) -> &str {
    match text.find('#') {
        Some(hash_pos) if text[..hash_pos].matches('"').count() % 2 == 0 => {
            text[..hash_pos].trim()
        }
        _ => text.trim(),
    }
}

/// Split "key = value"
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = strip_comment(value.trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut AccessoryConfig,
) -> Result<(), ConfigError> {
    match section {
        Section::Root => return Err(ConfigError::InvalidKey),
        Section::Display => match key {
            "type" => {
                config.display =
                    DisplayKind::from_name(parse_string(value)).ok_or(ConfigError::InvalidValue)?;
            }
            "intensity" => {
                let level: u8 = parse_int(value)?;
                if level > MAX_INTENSITY {
                    return Err(ConfigError::InvalidValue);
                }
                config.intensity = level;
            }
            _ => return Err(ConfigError::InvalidKey),
        },
        Section::Bank(bank) => {
            let pins = config.pins_mut(bank);
            match key {
                "data" => pins.data = parse_int(value)?,
                "clk" => pins.clk = parse_int(value)?,
                "cs" => pins.cs = parse_int(value)?,
                _ => return Err(ConfigError::InvalidKey),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{BankPins, DEFAULT_CALLS_PINS};

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), AccessoryConfig::default());
        assert_eq!(
            parse_config("# nothing here\n\n").unwrap(),
            AccessoryConfig::default()
        );
    }

    #[test]
    fn test_full_document() {
        let input = r#"
# Seven-segment head on custom pins
[display]
type = "7seg"
intensity = 12   # brighter

[bank.battery]
data = 2
clk = 3
cs = 4
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.display, DisplayKind::SevenSegment);
        assert_eq!(config.intensity, 12);
        assert_eq!(config.battery, BankPins::new(2, 3, 4));
        assert_eq!(config.calls, DEFAULT_CALLS_PINS);
    }

    #[test]
    fn test_partial_bank_keeps_other_pins() {
        let config = parse_config("[bank.sms]\ncs = 20\n").unwrap();
        assert_eq!(config.sms, BankPins::new(7, 9, 20));
    }

    #[test]
    fn test_unquoted_type() {
        let config = parse_config("[display]\ntype = 8x8").unwrap();
        assert_eq!(config.display, DisplayKind::LedMatrix);
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(parse_config("[bank.mail]"), Err(ConfigError::InvalidSection));
        assert_eq!(parse_config("[display"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[display]\ncolor = 1"),
            Err(ConfigError::InvalidKey)
        );
        assert_eq!(parse_config("intensity = 3"), Err(ConfigError::InvalidKey));
        assert_eq!(parse_config("[display]\njunk"), Err(ConfigError::InvalidKey));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[display]\ntype = \"lcd\""),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nintensity = 16"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[bank.calls]\ndata = 300"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[bank.calls]\ndata = -1"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_header_with_comment() {
        let config = parse_config("[bank.calls] # right matrix\nclk = 1").unwrap();
        assert_eq!(config.calls.clk, 1);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_parser_never_panics(input in "[\\[\\]a-z0-9=#\" .\n]{0,80}") {
                let _ = parse_config(&input);
            }

            #[test]
            fn test_pins_round_trip(data in any::<u8>(), clk in any::<u8>(), cs in any::<u8>()) {
                let input = std::format!("[bank.sms]\ndata = {}\nclk = {}\ncs = {}\n", data, clk, cs);
                let config = parse_config(&input).unwrap();
                prop_assert_eq!(config.sms, BankPins::new(data, clk, cs));
            }
        }
    }
}
