//! LED driver chip implementations
//!
//! This crate provides concrete implementations of
//! `phoneinfo_hal::LedDriver`:
//!
//! - MAX7219 over three GPIO lines (bit-banged serial)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod max7219;

pub use max7219::Max7219;
