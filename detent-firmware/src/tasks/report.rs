//! Event reporting tasks

use defmt::*;

use detent_core::KnobEvent;

use crate::channels::{KNOB_EVENTS, KNOB_VALUE};

/// Log knob events as they arrive
#[embassy_executor::task]
pub async fn report_task() {
    info!("Report task started");

    loop {
        match KNOB_EVENTS.receive().await {
            KnobEvent::Rotated(direction) => debug!("Rotated {}", direction),
            KnobEvent::Button(event) => info!("Button: {}", event),
        }
    }
}

/// Log the encoder value whenever it changes
#[embassy_executor::task]
pub async fn value_task() {
    loop {
        let value = KNOB_VALUE.wait().await;
        info!("Value: {}", value);
    }
}
