//! Link state machine
//!
//! Tracks whether a phone is talking to the accessory. The state is a pure
//! function of the previous state and an event.

pub mod events;
pub mod machine;

pub use events::LinkEvent;
pub use machine::LinkState;
