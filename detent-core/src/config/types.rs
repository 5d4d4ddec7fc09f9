//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use detent_hal::Level;

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 20;

/// Default minimum hold for a short press in milliseconds
pub const DEFAULT_SHORT_PRESS_MS: u32 = 50;

/// Default minimum hold for a long press in milliseconds
pub const DEFAULT_LONG_PRESS_MS: u32 = 500;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: true,
        }
    }
}

/// How the push button is wired
///
/// A pulled-up button reads low while pressed; a pulled-down button reads
/// high while pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pull {
    /// Resistor to supply, switch to ground
    #[default]
    Up,
    /// Resistor to ground, switch to supply
    Down,
}

impl Pull {
    /// Line level while the button is pressed
    pub const fn pressed_level(self) -> Level {
        match self {
            Pull::Up => Level::Low,
            Pull::Down => Level::High,
        }
    }

    /// Check whether a sampled level means "pressed"
    pub fn is_pressed(self, level: Level) -> bool {
        level == self.pressed_level()
    }
}

/// Push-button timing thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressTiming {
    /// A raw reading must be stable this long before it is accepted
    pub debounce_ms: u32,
    /// Minimum hold for a short press
    pub short_press_ms: u32,
    /// Minimum hold for a long press
    pub long_press_ms: u32,
}

impl Default for PressTiming {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            short_press_ms: DEFAULT_SHORT_PRESS_MS,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
        }
    }
}

impl PressTiming {
    /// Check that the long press threshold is not below the short one
    pub fn is_ordered(&self) -> bool {
        self.long_press_ms >= self.short_press_ms
    }
}

/// Rotary encoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EncoderConfig {
    /// Line A (CLK)
    pub pin_a: PinConfig,
    /// Line B (DT)
    pub pin_b: PinConfig,
    /// Value change per detent
    pub step: i32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            pin_a: PinConfig::with_pullup(2),
            pin_b: PinConfig::with_pullup(3),
            step: 1,
        }
    }
}

/// Push-button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Button input (SW)
    pub pin: PinConfig,
    /// Button wiring
    pub pull: Pull,
    /// Debounce and press thresholds
    pub timing: PressTiming,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            pin: PinConfig::with_pullup(4),
            pull: Pull::Up,
            timing: PressTiming::default(),
        }
    }
}

/// Complete knob configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnobConfig {
    /// Rotary encoder
    pub encoder: EncoderConfig,
    /// Push button, if the knob has one
    pub button: Option<ButtonConfig>,
}

impl KnobConfig {
    /// Check if a push button is configured
    pub fn has_button(&self) -> bool {
        self.button.is_some()
    }
}
