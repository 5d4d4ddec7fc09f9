//! Detent Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the encoder and
//! button drivers consume. Chip-specific code (or a test harness) implements
//! them; the drivers never touch a register directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (detent-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-drivers (encoder, push button)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  detent-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input sampling
//! - [`clock::Clock`] - Monotonic millisecond time source
//! - [`serial::SerialTx`], [`serial::ValueSink`] - Diagnostic output

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use clock::Clock;
pub use gpio::{HalInput, InputPin, Level};
pub use serial::{SerialLine, SerialTx, ValueSink};
