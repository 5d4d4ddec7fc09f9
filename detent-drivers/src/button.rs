//! Push-button driver
//!
//! Samples a button pin, runs it through the press detector and dispatches
//! the matching callbacks.
//!
//! # Usage
//!
//! ```ignore
//! let mut button = PushButton::new(pin, clock);
//! button.on_short_press(|| select());
//! button.on_long_press(|| back());
//! button.begin();
//!
//! // In the main loop:
//! button.poll();
//! ```

use alloc::boxed::Box;

use detent_core::{ButtonEvent, ButtonEvents, ButtonState, PressDetector, PressTiming, Pull};
use detent_hal::{Clock, InputPin};

use crate::log::{debug, trace};

/// Button event callback
pub type ButtonCallback = Box<dyn FnMut()>;

/// Registered callbacks, one per event kind
#[derive(Default)]
struct Callbacks {
    press: Option<ButtonCallback>,
    short_press: Option<ButtonCallback>,
    long_press: Option<ButtonCallback>,
    short_press_reached: Option<ButtonCallback>,
    long_press_reached: Option<ButtonCallback>,
}

impl Callbacks {
    fn slot(&mut self, event: ButtonEvent) -> &mut Option<ButtonCallback> {
        match event {
            ButtonEvent::Press => &mut self.press,
            ButtonEvent::ShortPress => &mut self.short_press,
            ButtonEvent::LongPress => &mut self.long_press,
            ButtonEvent::ShortPressReached => &mut self.short_press_reached,
            ButtonEvent::LongPressReached => &mut self.long_press_reached,
        }
    }

    fn dispatch(&mut self, event: ButtonEvent) {
        if let Some(callback) = self.slot(event).as_mut() {
            callback();
        }
    }
}

/// Debounced push button
pub struct PushButton<P, C> {
    pin: P,
    clock: C,
    pull: Pull,
    detector: PressDetector,
    callbacks: Callbacks,
}

impl<P: InputPin, C: Clock> PushButton<P, C> {
    /// Create a pulled-up button with default timing
    pub fn new(pin: P, clock: C) -> Self {
        Self::with_config(pin, clock, Pull::Up, PressTiming::default())
    }

    /// Create a button with explicit wiring and timing
    pub fn with_config(pin: P, clock: C, pull: Pull, timing: PressTiming) -> Self {
        Self {
            pin,
            clock,
            pull,
            detector: PressDetector::new(timing),
            callbacks: Callbacks::default(),
        }
    }

    /// Initial setup
    ///
    /// Starts from the released state; a button already held at this point
    /// is reported once it has been stable for the debounce window.
    pub fn begin(&mut self) {
        self.detector.reset(self.clock.now_ms());
        debug!("push button ready, pulled up: {}", self.is_pulled_up());
    }

    /// Sample the pin and process press timing
    ///
    /// Registered callbacks run before this returns, in event order.
    pub fn poll(&mut self) -> ButtonEvents {
        let pressed = self.pull.is_pressed(self.pin.level());
        let events = self.detector.update(pressed, self.clock.now_ms());

        for &event in events.iter() {
            trace!("button event: {}", event);
            self.callbacks.dispatch(event);
        }

        events
    }

    /// Debounced state
    pub fn state(&self) -> ButtonState {
        self.detector.state()
    }

    /// Check if the button is currently held down (debounced)
    pub fn is_pressed(&self) -> bool {
        self.detector.state().is_pressed()
    }

    /// How long the current press has lasted, if pressed
    pub fn held_ms(&self) -> Option<u32> {
        self.detector.held_ms(self.clock.now_ms())
    }

    /// Button wiring
    pub fn pull(&self) -> Pull {
        self.pull
    }

    /// Change the button wiring
    pub fn set_pull(&mut self, pull: Pull) {
        self.pull = pull;
    }

    /// True if the button is pulled up (pressed reads low)
    pub fn is_pulled_up(&self) -> bool {
        self.pull == Pull::Up
    }

    /// Define the button as pulled up
    pub fn set_pulled_up(&mut self) {
        self.set_pull(Pull::Up);
    }

    /// Define the button as pulled down
    pub fn set_pulled_down(&mut self) {
        self.set_pull(Pull::Down);
    }

    /// All timing thresholds
    pub fn timing(&self) -> PressTiming {
        self.detector.timing()
    }

    /// Replace all timing thresholds
    pub fn set_timing(&mut self, timing: PressTiming) {
        self.detector.set_timing(timing);
    }

    /// Minimum hold in ms for the short press callback
    pub fn short_press_ms(&self) -> u32 {
        self.detector.short_press_ms()
    }

    /// Define the minimum hold in ms for the short press callback
    pub fn set_short_press_ms(&mut self, ms: u32) {
        self.detector.set_short_press_ms(ms);
    }

    /// Minimum hold in ms for the long press callback
    pub fn long_press_ms(&self) -> u32 {
        self.detector.long_press_ms()
    }

    /// Define the minimum hold in ms for the long press callback
    pub fn set_long_press_ms(&mut self, ms: u32) {
        self.detector.set_long_press_ms(ms);
    }

    /// Call `f` when a debounced press is detected
    pub fn on_press(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.press = Some(Box::new(f));
    }

    /// Call `f` on release after a short press
    pub fn on_short_press(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.short_press = Some(Box::new(f));
    }

    /// Call `f` on release after a long press
    pub fn on_long_press(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.long_press = Some(Box::new(f));
    }

    /// Call `f` once while held, when the short press time is reached
    pub fn on_short_press_reached(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.short_press_reached = Some(Box::new(f));
    }

    /// Call `f` once while held, when the long press time is reached
    pub fn on_long_press_reached(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.long_press_reached = Some(Box::new(f));
    }

    /// Remove every registered callback
    pub fn clear_callbacks(&mut self) {
        self.callbacks = Callbacks::default();
    }
}
