//! Configuration types
//!
//! Board-agnostic knob configuration plus a small TOML-subset parser for
//! configuration embedded in firmware.

pub mod parser;
pub mod types;

pub use parser::{parse_config, parse_pin, ParseError};
pub use types::*;
