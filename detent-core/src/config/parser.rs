//! Minimal TOML parser for knob configuration
//!
//! Handles only the subset needed here and allocates nothing.
//!
//! Supported:
//! - `[encoder]` and `[button]` section headers
//! - Key = value pairs (string, integer, boolean)
//! - Integers in any TOML form (`1_000`, `0x10`, `0o17`, `0b11`)
//! - Comments (# ...)
//!
//! Keys: `pin_a`/`clk_pin`, `pin_b`/`dt_pin`, `step` in `[encoder]`;
//! `pin`/`sw_pin`, `pull`, `pulled_up`, `debounce_ms`, `short_press_ms`,
//! `long_press_ms` in `[button]`.
//!
//! A `[button]` section enables the push button; without it the knob is
//! rotation only. Unknown keys are ignored.
//!
//! ```toml
//! [encoder]
//! pin_a = "^gpio2"
//! pin_b = "^gpio3"
//! step = 1
//!
//! [button]
//! pin = "^gpio4"
//! pull = "up"
//! short_press_ms = 50
//! long_press_ms = 500
//! ```

use core::fmt;

use super::types::{ButtonConfig, KnobConfig, PinConfig, Pull};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Invalid value type or out of range
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
    /// Long press threshold below the short press threshold
    InvalidThresholds,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidSection => write!(f, "invalid section header"),
            ParseError::InvalidValue => write!(f, "invalid value"),
            ParseError::InvalidPin => write!(f, "invalid pin (expected e.g. \"^gpio4\")"),
            ParseError::InvalidThresholds => {
                write!(f, "long_press_ms must not be below short_press_ms")
            }
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Encoder,
    Button,
}

/// Parse TOML configuration into a [`KnobConfig`]
///
/// Missing keys keep their defaults.
pub fn parse_config(input: &str) -> Result<KnobConfig, ParseError> {
    let mut config = KnobConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            if section == Section::Button && config.button.is_none() {
                config.button = Some(ButtonConfig::default());
            }
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Parse section header like "encoder" or "button"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match parse_string(header.trim()) {
        "encoder" => Ok(Section::Encoder),
        "button" => Ok(Section::Button),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = parse_string(line[..eq_pos].trim());
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = match value.find('#') {
        // Make sure # is not inside a string
        Some(hash_pos) if value[..hash_pos].matches('"').count() % 2 == 0 => {
            value[..hash_pos].trim()
        }
        _ => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut KnobConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {}
        Section::Encoder => {
            let e = &mut config.encoder;
            match key {
                "pin_a" | "clk_pin" => e.pin_a = parse_pin(value)?,
                "pin_b" | "dt_pin" => e.pin_b = parse_pin(value)?,
                "step" => e.step = parse_int(value)?,
                _ => {} // Ignore unknown keys
            }
        }
        Section::Button => {
            let b = config.button.as_mut().ok_or(ParseError::InvalidSection)?;
            match key {
                "pin" | "sw_pin" => b.pin = parse_pin(value)?,
                "pull" => b.pull = parse_pull(value)?,
                "debounce_ms" => b.timing.debounce_ms = parse_int(value)?,
                "short_press_ms" => b.timing.short_press_ms = parse_int(value)?,
                "long_press_ms" => b.timing.long_press_ms = parse_int(value)?,
                "pulled_up" => {
                    b.pull = if parse_bool(value)? { Pull::Up } else { Pull::Down };
                }
                _ => {} // Ignore unknown keys
            }
        }
    }
    Ok(())
}

/// Reject configurations the drivers cannot use sensibly
fn validate(config: &KnobConfig) -> Result<(), ParseError> {
    if config.encoder.step == 0 {
        return Err(ParseError::InvalidValue);
    }
    if config.encoder.pin_a.pin == config.encoder.pin_b.pin {
        return Err(ParseError::InvalidPin);
    }
    if let Some(button) = &config.button {
        if !button.timing.is_ordered() {
            return Err(ParseError::InvalidThresholds);
        }
        if button.pin.pin == config.encoder.pin_a.pin || button.pin.pin == config.encoder.pin_b.pin
        {
            return Err(ParseError::InvalidPin);
        }
    }
    Ok(())
}

/// Parse a string value (removes basic or literal quotes)
fn parse_string(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    // Allow unquoted strings for simple values
    value
}

/// Parse an integer value
///
/// Accepts the TOML integer forms: an optional sign, `_` between digits,
/// and unsigned `0x`, `0o` and `0b` prefixes.
fn parse_int<T: TryFrom<i64>>(value: &str) -> Result<T, ParseError> {
    let (negative, unsigned) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x") => (16, &unsigned[2..]),
        Some("0o") => (8, &unsigned[2..]),
        Some("0b") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };
    if radix != 10 && unsigned.len() != value.len() {
        return Err(ParseError::InvalidValue);
    }
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return Err(ParseError::InvalidValue);
    }

    let mut magnitude: i64 = 0;
    for c in digits.chars().filter(|&c| c != '_') {
        let digit = c.to_digit(radix).ok_or(ParseError::InvalidValue)?;
        magnitude = magnitude
            .checked_mul(i64::from(radix))
            .and_then(|m| m.checked_add(i64::from(digit)))
            .ok_or(ParseError::InvalidValue)?;
    }

    let number = if negative { -magnitude } else { magnitude };
    T::try_from(number).map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse button wiring
fn parse_pull(value: &str) -> Result<Pull, ParseError> {
    match parse_string(value) {
        "up" | "Up" | "pull_up" => Ok(Pull::Up),
        "down" | "Down" | "pull_down" => Ok(Pull::Down),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a pin string like "gpio11", "!gpio12", "^gpio4"
pub fn parse_pin(value: &str) -> Result<PinConfig, ParseError> {
    let mut s = parse_string(value).trim();
    let mut inverted = false;
    let mut pull_up = false;

    // Check for modifiers
    loop {
        if let Some(rest) = s.strip_prefix('!') {
            inverted = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('^') {
            pull_up = true;
            s = rest;
        } else {
            break;
        }
    }

    let number = s.strip_prefix("gpio").ok_or(ParseError::InvalidPin)?;
    let pin: u8 = number.parse().map_err(|_| ParseError::InvalidPin)?;

    Ok(PinConfig {
        pin,
        inverted,
        pull_up,
    })
}
