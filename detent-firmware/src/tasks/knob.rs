//! Knob polling task
//!
//! Polls the encoder and its push button at a fixed rate and forwards what
//! happened to the reporting tasks.

use defmt::*;
use embassy_time::{Duration, Ticker};

use detent_core::{ButtonEvent, KnobEvent};
use detent_drivers::RotaryEncoder;
use detent_hal::InputPin;

use crate::board::{EmbassyClock, Knob, KnobInput, RotationKnob};
use crate::channels::{KNOB_EVENTS, KNOB_VALUE};

/// Poll interval in milliseconds
///
/// Fast enough to see every quadrature edge of a hand-turned knob.
pub const POLL_INTERVAL_MS: u64 = 1;

/// Knob task - runs the polling loop for a knob with a push button
///
/// Expects a knob on which `begin()` has already been called.
#[embassy_executor::task]
pub async fn knob_task(knob: Knob) {
    info!("Knob task started");
    run(knob).await
}

/// Rotation task - runs the polling loop for a knob without a push button
///
/// Expects a knob on which `begin()` has already been called.
#[embassy_executor::task]
pub async fn rotation_task(knob: RotationKnob) {
    info!("Rotation task started");
    run(knob).await
}

async fn run<P: InputPin>(mut knob: RotaryEncoder<KnobInput, KnobInput, EmbassyClock, P>) {
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        ticker.next().await;

        for event in knob.poll() {
            // A long press returns the value to zero
            if event == KnobEvent::Button(ButtonEvent::LongPress) {
                knob.set_value(0);
                KNOB_VALUE.signal(0);
            }

            if KNOB_EVENTS.try_send(event).is_err() {
                warn!("Knob event dropped: channel full");
            }
        }
    }
}
