//! RP2040 bindings for the knob drivers

use embassy_rp::gpio::{Input, Pull};
use embassy_rp::uart::{self, Blocking, UartTx};
use embassy_time::Instant;

use detent_core::PinConfig;
use detent_drivers::RotaryEncoder;
use detent_hal::{Clock, HalInput, SerialTx};

/// Encoder line or button input
pub type KnobInput = HalInput<Input<'static>>;

/// The knob as wired on this board
pub type Knob = RotaryEncoder<KnobInput, KnobInput, EmbassyClock, KnobInput>;

/// The knob with its switch left unused
pub type RotationKnob = RotaryEncoder<KnobInput, KnobInput, EmbassyClock>;

/// Millisecond clock backed by the embassy time driver
///
/// Wraps after about 49.7 days; all consumers use wrapping arithmetic.
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Wrap an embassy input as configured
pub fn knob_input(pin: Input<'static>, config: &PinConfig) -> KnobInput {
    if config.inverted {
        HalInput::inverted(pin)
    } else {
        HalInput::new(pin)
    }
}

/// Internal resistor for a configured pin
pub fn pull_for(config: &PinConfig) -> Pull {
    if config.pull_up {
        Pull::Up
    } else {
        Pull::None
    }
}

/// Blocking UART transmitter for value reports
pub struct UartSink {
    tx: UartTx<'static, Blocking>,
}

impl UartSink {
    pub fn new(tx: UartTx<'static, Blocking>) -> Self {
        Self { tx }
    }
}

impl SerialTx for UartSink {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()
    }
}
