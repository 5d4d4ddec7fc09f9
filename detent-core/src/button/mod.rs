//! Push-button logic
//!
//! Debouncing and press-duration classification, independent of pins and
//! clocks. The driver feeds raw "is pressed" samples with timestamps.

pub mod debounce;
pub mod detector;

pub use debounce::{Change, Debouncer};
pub use detector::{ButtonState, PressDetector};
