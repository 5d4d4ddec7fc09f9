//! Board-agnostic core logic for rotary encoder knobs
//!
//! This crate contains the decision logic that does not depend on pins or
//! clocks:
//!
//! - Quadrature decoding (edge detection and direction classification)
//! - Encoder value accumulation
//! - Push-button debounce and press timing state machine
//! - Knob events
//! - Configuration types and parsing

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod config;
pub mod events;
pub mod quadrature;

pub use button::{ButtonState, Debouncer, PressDetector};
pub use config::{ButtonConfig, EncoderConfig, KnobConfig, PinConfig, PressTiming, Pull};
pub use events::{ButtonEvent, ButtonEvents, KnobEvent, KnobEvents};
pub use quadrature::{Direction, Edge, QuadratureDecoder, RotaryState};
