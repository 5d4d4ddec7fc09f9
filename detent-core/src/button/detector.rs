//! Press timing state machine
//!
//! ```text
//!            debounced press                 debounced release
//!  Released ─────────────────▶ Pressed ─────────────────────────▶ Released
//!              emit Press        │  held ≥ short: ShortPressReached (once)
//!                                │  held ≥ long:  LongPressReached  (once)
//!                                ▼
//!                        on release, by hold time:
//!                          ≥ long  → LongPress
//!                          ≥ short → ShortPress
//!                          else    → nothing
//! ```
//!
//! Hold time runs from the raw edge that started the press to the raw edge
//! that ended it, so the debounce window does not inflate it.

use detent_hal::clock::elapsed_ms;

use super::debounce::Debouncer;
use crate::config::PressTiming;
use crate::events::{ButtonEvent, ButtonEvents};

/// Debounced button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Not pressed
    #[default]
    Released,
    /// Held down
    Pressed,
}

impl ButtonState {
    /// Check if the button is held down
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

/// Debounce and press classification for one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressDetector {
    timing: PressTiming,
    debouncer: Debouncer,
    press_started_ms: u32,
    short_reached: bool,
    long_reached: bool,
}

impl Default for PressDetector {
    fn default() -> Self {
        Self::new(PressTiming::default())
    }
}

impl PressDetector {
    /// Create a released detector
    pub const fn new(timing: PressTiming) -> Self {
        Self {
            timing,
            debouncer: Debouncer::new(timing.debounce_ms),
            press_started_ms: 0,
            short_reached: false,
            long_reached: false,
        }
    }

    /// Return to the released state
    pub fn reset(&mut self, now_ms: u32) {
        self.debouncer.reset(now_ms);
        self.press_started_ms = now_ms;
        self.short_reached = false;
        self.long_reached = false;
    }

    /// Current thresholds
    pub fn timing(&self) -> PressTiming {
        self.timing
    }

    /// Replace all thresholds
    pub fn set_timing(&mut self, timing: PressTiming) {
        self.timing = timing;
        self.debouncer.set_delay_ms(timing.debounce_ms);
    }

    /// Minimum hold for a short press
    pub fn short_press_ms(&self) -> u32 {
        self.timing.short_press_ms
    }

    /// Set the minimum hold for a short press
    pub fn set_short_press_ms(&mut self, ms: u32) {
        self.timing.short_press_ms = ms;
    }

    /// Minimum hold for a long press
    pub fn long_press_ms(&self) -> u32 {
        self.timing.long_press_ms
    }

    /// Set the minimum hold for a long press
    pub fn set_long_press_ms(&mut self, ms: u32) {
        self.timing.long_press_ms = ms;
    }

    /// Debounced state
    pub fn state(&self) -> ButtonState {
        if self.debouncer.is_active() {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }

    /// How long the current press has lasted, if pressed
    pub fn held_ms(&self, now_ms: u32) -> Option<u32> {
        self.debouncer
            .is_active()
            .then(|| elapsed_ms(now_ms, self.press_started_ms))
    }

    /// Classify a completed press by its hold time
    pub fn classify(&self, held_ms: u32) -> Option<ButtonEvent> {
        if held_ms >= self.timing.long_press_ms {
            Some(ButtonEvent::LongPress)
        } else if held_ms >= self.timing.short_press_ms {
            Some(ButtonEvent::ShortPress)
        } else {
            None
        }
    }

    /// Feed a raw "is pressed" reading
    ///
    /// Returns the events raised by this sample, in order.
    pub fn update(&mut self, raw_pressed: bool, now_ms: u32) -> ButtonEvents {
        let mut events = ButtonEvents::new();

        if let Some(change) = self.debouncer.update(raw_pressed, now_ms) {
            if change.active {
                self.press_started_ms = change.at_ms;
                self.short_reached = false;
                self.long_reached = false;
                push(&mut events, ButtonEvent::Press);
            } else {
                let held = elapsed_ms(change.at_ms, self.press_started_ms);
                if let Some(event) = self.classify(held) {
                    push(&mut events, event);
                }
            }
        }

        // Thresholds only count while the contact is physically closed
        if raw_pressed && self.debouncer.is_active() {
            let held = elapsed_ms(now_ms, self.press_started_ms);
            if !self.short_reached && held >= self.timing.short_press_ms {
                self.short_reached = true;
                push(&mut events, ButtonEvent::ShortPressReached);
            }
            if !self.long_reached && held >= self.timing.long_press_ms {
                self.long_reached = true;
                push(&mut events, ButtonEvent::LongPressReached);
            }
        }

        events
    }
}

fn push(events: &mut ButtonEvents, event: ButtonEvent) {
    // At most three events per sample fit in the capacity of four
    let _ = events.push(event);
}
