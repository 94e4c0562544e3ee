//! Board-agnostic logic for the PhoneInfo accessory
//!
//! This crate contains everything between the serial link and the display
//! heads that does not depend on a specific board:
//!
//! - Link state machine (phone connected or not)
//! - Accessory session: feeds serial bytes, applies commands, drives the display
//! - Configuration types, TOML subset parser and display factory

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod accessory;
pub mod config;
pub mod state;

pub use accessory::{Accessory, AccessoryError};
