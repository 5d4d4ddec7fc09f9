//! GPIO pin abstractions
//!
//! Provides the digital input trait used for the quadrature lines and the
//! push button, plus an adapter for `embedded-hal` 1.0 pins.

use core::convert::Infallible;

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    #[default]
    High,
}

impl Level {
    /// Build a level from a "pin is high" flag
    pub const fn from_high(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }

    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if this is the low level
    pub const fn is_low(self) -> bool {
        matches!(self, Level::Low)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        Level::from_high(high)
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Digital input pin
///
/// Reads are assumed infallible at this layer. Sampling takes `&mut self`
/// so that implementations wrapping `embedded-hal` pins fit directly.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }

    /// Sample the pin as a [`Level`]
    fn level(&mut self) -> Level {
        Level::from_high(self.is_high())
    }
}

/// Adapter from an `embedded-hal` input pin
///
/// Only pins whose error type is [`Infallible`] are accepted, which covers
/// plain GPIO inputs on embassy and most other HALs. The adapter can also
/// invert the logic level for lines wired through an inverting buffer.
pub struct HalInput<P> {
    pin: P,
    inverted: bool,
}

impl<P> HalInput<P>
where
    P: embedded_hal::digital::InputPin<Error = Infallible>,
{
    /// Wrap a pin without inversion
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Wrap a pin whose logic level should be inverted
    pub fn inverted(pin: P) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> InputPin for HalInput<P>
where
    P: embedded_hal::digital::InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        let high = match self.pin.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        };
        high != self.inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock embedded-hal pin for testing
    struct MockPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    #[test]
    fn test_level_conversions() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert_eq!(!Level::High, Level::Low);
        assert!(Level::Low.is_low());
        assert!(!Level::Low.is_high());
    }

    #[test]
    fn test_hal_input_passthrough() {
        let mut input = HalInput::new(MockPin { high: true });
        assert!(input.is_high());
        assert_eq!(input.level(), Level::High);

        let mut input = HalInput::new(MockPin { high: false });
        assert!(input.is_low());
    }

    #[test]
    fn test_hal_input_inverted() {
        let mut input = HalInput::inverted(MockPin { high: true });
        assert!(input.is_low());
        assert_eq!(input.level(), Level::Low);

        let pin = input.into_inner();
        assert!(pin.high);
    }
}
