//! Rotary encoder and push-button drivers
//!
//! This crate binds the decision logic in `detent-core` to pins, a clock and
//! user callbacks:
//!
//! - [`RotaryEncoder`]: polled quadrature decoder with value accumulator,
//!   change callbacks and an optional owned push button
//! - [`PushButton`]: debounced button with short/long press detection
//!
//! # Usage
//!
//! ```ignore
//! let mut knob = RotaryEncoder::with_button(pin_a, pin_b, pin_sw, clock);
//! knob.set_step(5);
//! knob.on_push_button_long_press(|| reset_menu())?;
//! knob.begin();
//!
//! loop {
//!     for event in knob.poll() {
//!         handle(event);
//!     }
//! }
//! ```
//!
//! Callbacks are boxed closures, so a global allocator is required.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod log;

pub mod button;
pub mod encoder;
pub mod error;

pub use button::{ButtonCallback, PushButton};
pub use encoder::{NoPin, RotaryCallback, RotaryEncoder};
pub use error::ButtonError;

// Re-export the types that appear in driver signatures
pub use detent_core::{
    ButtonEvent, ButtonEvents, ButtonState, Direction, KnobEvent, KnobEvents, PressTiming, Pull,
    RotaryState,
};
