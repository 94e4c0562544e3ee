//! Accessory configuration
//!
//! Board wiring and display choice, read from a small TOML document.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ConfigError};
pub use types::*;
