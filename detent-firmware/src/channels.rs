//! Inter-task communication channels

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use detent_core::KnobEvent;

/// Channel capacity for knob events
const KNOB_CHANNEL_SIZE: usize = 16;

/// Rotation and button events from the knob task
pub static KNOB_EVENTS: Channel<CriticalSectionRawMutex, KnobEvent, KNOB_CHANNEL_SIZE> =
    Channel::new();

/// Latest encoder value (updated from the after-change callback)
pub static KNOB_VALUE: Signal<CriticalSectionRawMutex, i32> = Signal::new();
