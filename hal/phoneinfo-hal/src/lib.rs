//! PhoneInfo Hardware Abstraction Layer
//!
//! This crate defines the contract between the display renderers and the
//! LED driver chips that light the segments and pixels. Renderers only ever
//! talk to a [`LedDriver`]; chip drivers (MAX7219 and friends) implement it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  phoneinfo-display (renderers)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  phoneinfo-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  phoneinfo-   │       │  BankBuffer   │
//! │  drivers      │       │  (in memory)  │
//! └───────────────┘       └───────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod led;

pub use led::{Bank, LedDriver, MAX_INTENSITY, NUM_COLUMNS, NUM_POSITIONS};
