//! Accessory information packet
//!
//! Answer to the `i` query. The phone uses it to learn which display head is
//! attached and its current brightness.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capacity of an encoded info packet
pub const MAX_INFO_LEN: usize = 64;

/// Display head type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayKind {
    /// 8-digit seven-segment module
    #[cfg_attr(feature = "serde", serde(rename = "7seg"))]
    SevenSegment,
    /// Three 8x8 LED matrices
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "8x8"))]
    LedMatrix,
}

impl DisplayKind {
    /// Wire name of the display type
    pub const fn as_str(self) -> &'static str {
        match self {
            DisplayKind::SevenSegment => "7seg",
            DisplayKind::LedMatrix => "8x8",
        }
    }

    /// Parse a wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "7seg" => Some(DisplayKind::SevenSegment),
            "8x8" => Some(DisplayKind::LedMatrix),
            _ => None,
        }
    }

    /// Display geometry as (height, width) in numeric fields
    pub const fn geometry(self) -> (u8, u8) {
        match self {
            DisplayKind::SevenSegment => (1, 8),
            DisplayKind::LedMatrix => (1, 3),
        }
    }
}

/// Display description reported to the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayInfo {
    /// Display head type
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: DisplayKind,
    /// Current brightness (0-15)
    pub intensity: u8,
    /// Rows of numbers
    pub height: u8,
    /// Positions per row
    pub width: u8,
}

impl DisplayInfo {
    /// Describe a display of the given kind
    pub const fn new(kind: DisplayKind, intensity: u8) -> Self {
        let (height, width) = kind.geometry();
        Self {
            kind,
            intensity,
            height,
            width,
        }
    }

    /// Encode as the JSON document the phone application parses
    pub fn to_json(&self) -> String<MAX_INFO_LEN> {
        let mut out = String::new();
        // Longest document (all fields 255) is 60 bytes
        let _ = write!(
            out,
            "{{\"type\":\"{}\", \"intensity\":{}, \"height\":{}, \"width\":{} }}",
            self.kind.as_str(),
            self.intensity,
            self.height,
            self.width
        );
        out
    }
}
