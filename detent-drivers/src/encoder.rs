//! Rotary encoder driver
//!
//! Polls the two quadrature lines, accumulates a value and optionally owns
//! the encoder's push button.
//!
//! Line A is sampled on every poll; a change of its level is a transition.
//! Each transition records a timestamp, snapshots the value and runs the
//! before/after callbacks. Only a falling A moves the value, by `step`, in
//! the direction given by line B.

use alloc::boxed::Box;

use detent_core::{
    ButtonEvents, ButtonState, Direction, KnobEvent, KnobEvents, PressTiming, Pull,
    QuadratureDecoder, RotaryState,
};
use detent_hal::{Clock, InputPin, ValueSink};

use crate::button::PushButton;
use crate::error::ButtonError;
use crate::log::{debug, trace};

/// Encoder change callback, called with a snapshot of the encoder state
pub type RotaryCallback = Box<dyn FnMut(&RotaryState)>;

/// Placeholder button pin for encoders built without a push button
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl InputPin for NoPin {
    fn is_high(&mut self) -> bool {
        true
    }
}

/// Polled rotary encoder with an optional push button
pub struct RotaryEncoder<A, B, C, P = NoPin> {
    pin_a: A,
    pin_b: B,
    clock: C,
    decoder: QuadratureDecoder,
    state: RotaryState,
    before_change: Option<RotaryCallback>,
    after_change: Option<RotaryCallback>,
    sink: Option<Box<dyn ValueSink>>,
    button: Option<PushButton<P, C>>,
}

impl<A: InputPin, B: InputPin, C: Clock> RotaryEncoder<A, B, C, NoPin> {
    /// Create an encoder on two lines, without a push button
    pub fn new(pin_a: A, pin_b: B, clock: C) -> Self {
        Self::build(pin_a, pin_b, clock, None)
    }
}

impl<A: InputPin, B: InputPin, C: Clock + Clone, P: InputPin> RotaryEncoder<A, B, C, P> {
    /// Create an encoder with a push button on `pin_sw`
    ///
    /// The button shares the encoder's clock and starts with default timing.
    pub fn with_button(pin_a: A, pin_b: B, pin_sw: P, clock: C) -> Self {
        let button = PushButton::new(pin_sw, clock.clone());
        Self::build(pin_a, pin_b, clock, Some(button))
    }
}

impl<A: InputPin, B: InputPin, C: Clock, P: InputPin> RotaryEncoder<A, B, C, P> {
    fn build(pin_a: A, pin_b: B, clock: C, button: Option<PushButton<P, C>>) -> Self {
        Self {
            pin_a,
            pin_b,
            clock,
            decoder: QuadratureDecoder::default(),
            state: RotaryState::default(),
            before_change: None,
            after_change: None,
            sink: None,
            button,
        }
    }

    /// Initial setup
    ///
    /// Takes the first sample of line A so that the idle level is not seen
    /// as a transition. The push button, if any, is set up pulled up.
    pub fn begin(&mut self) {
        self.decoder.reset(self.pin_a.level());

        if let Some(button) = self.button.as_mut() {
            button.begin();
            button.set_pulled_up();
        }

        debug!(
            "encoder ready, step {}, button: {}",
            self.state.step,
            self.button.is_some()
        );
    }

    /// Poll rotation and the push button
    ///
    /// Returns everything that happened on this poll, rotation first.
    pub fn poll(&mut self) -> KnobEvents {
        let mut events = KnobEvents::new();

        if let Some(direction) = self.poll_rotation() {
            push(&mut events, KnobEvent::Rotated(direction));
        }

        if let Some(button) = self.button.as_mut() {
            for event in button.poll() {
                push(&mut events, KnobEvent::Button(event));
            }
        }

        events
    }

    /// Sample line A and process a transition
    ///
    /// Returns the rotation applied on this poll, if any. Rising edges on A
    /// still run the callbacks but return `None`.
    pub fn poll_rotation(&mut self) -> Option<Direction> {
        let a = self.pin_a.level();
        self.decoder.detect(a)?;

        self.state.begin_transition(self.clock.now_ms());
        if let Some(callback) = self.before_change.as_mut() {
            callback(&self.state);
        }

        let direction = QuadratureDecoder::classify(a, self.pin_b.level());
        self.state.apply(direction);

        if direction.is_rotation() {
            trace!("rotated {}, value {}", direction, self.state.value);
            if let Some(sink) = self.sink.as_mut() {
                sink.report(self.state.value);
            }
        }

        if let Some(callback) = self.after_change.as_mut() {
            callback(&self.state);
        }

        direction.is_rotation().then_some(direction)
    }

    /// Snapshot of the encoder state
    pub fn state(&self) -> RotaryState {
        self.state
    }

    /// Accumulated value
    pub fn value(&self) -> i32 {
        self.state.value
    }

    /// Overwrite the accumulated value
    ///
    /// Leaves `direction` and `last_value` untouched.
    pub fn set_value(&mut self, value: i32) {
        self.state.value = value;
    }

    /// Value before the most recent transition
    pub fn last_value(&self) -> i32 {
        self.state.last_value
    }

    /// Direction of the most recent step
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Amount added or subtracted per step
    pub fn step(&self) -> i32 {
        self.state.step
    }

    /// Set the amount added or subtracted per step
    pub fn set_step(&mut self, step: i32) {
        self.state.step = step;
    }

    /// Clock time of the most recent transition on line A
    pub fn last_change_ms(&self) -> u32 {
        self.state.last_change_ms
    }

    /// Milliseconds since the most recent transition
    pub fn idle_ms(&self) -> u32 {
        self.state.idle_ms(self.clock.now_ms())
    }

    /// Call `f` at each transition, before the value is updated
    pub fn set_before_change(&mut self, f: impl FnMut(&RotaryState) + 'static) {
        self.before_change = Some(Box::new(f));
    }

    /// Call `f` at each transition, after the value is updated
    pub fn set_after_change(&mut self, f: impl FnMut(&RotaryState) + 'static) {
        self.after_change = Some(Box::new(f));
    }

    /// Report the value to `sink` after every step
    pub fn set_value_sink(&mut self, sink: impl ValueSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    /// Stop reporting values
    pub fn clear_value_sink(&mut self) {
        self.sink = None;
    }

    /// Check if the encoder owns a push button
    pub fn has_push_button(&self) -> bool {
        self.button.is_some()
    }

    /// The owned push button, if any
    pub fn push_button(&self) -> Option<&PushButton<P, C>> {
        self.button.as_ref()
    }

    /// The owned push button, if any
    pub fn push_button_mut(&mut self) -> Option<&mut PushButton<P, C>> {
        self.button.as_mut()
    }

    fn button_mut(&mut self) -> Result<&mut PushButton<P, C>, ButtonError> {
        self.button.as_mut().ok_or(ButtonError::NotConfigured)
    }

    /// Set up the push button
    pub fn push_button_begin(&mut self) -> Result<(), ButtonError> {
        self.button_mut()?.begin();
        Ok(())
    }

    /// Poll the push button alone
    pub fn push_button_poll(&mut self) -> Result<ButtonEvents, ButtonError> {
        Ok(self.button_mut()?.poll())
    }

    /// Debounced push button state
    pub fn push_button_state(&self) -> Option<ButtonState> {
        self.button.as_ref().map(PushButton::state)
    }

    /// True if the push button is pulled up
    pub fn is_push_button_pulled_up(&self) -> Option<bool> {
        self.button.as_ref().map(PushButton::is_pulled_up)
    }

    /// Define the push button as pulled up
    pub fn set_push_button_pulled_up(&mut self) -> Result<(), ButtonError> {
        self.button_mut()?.set_pull(Pull::Up);
        Ok(())
    }

    /// Define the push button as pulled down
    pub fn set_push_button_pulled_down(&mut self) -> Result<(), ButtonError> {
        self.button_mut()?.set_pull(Pull::Down);
        Ok(())
    }

    /// Push button debounce and press thresholds
    pub fn push_button_timing(&self) -> Option<PressTiming> {
        self.button.as_ref().map(PushButton::timing)
    }

    /// Minimum hold in ms for the short press callback
    pub fn push_button_short_press_ms(&self) -> Option<u32> {
        self.button.as_ref().map(PushButton::short_press_ms)
    }

    /// Define the minimum hold in ms for the short press callback
    pub fn set_push_button_short_press_ms(&mut self, ms: u32) -> Result<(), ButtonError> {
        self.button_mut()?.set_short_press_ms(ms);
        Ok(())
    }

    /// Minimum hold in ms for the long press callback
    pub fn push_button_long_press_ms(&self) -> Option<u32> {
        self.button.as_ref().map(PushButton::long_press_ms)
    }

    /// Define the minimum hold in ms for the long press callback
    pub fn set_push_button_long_press_ms(&mut self, ms: u32) -> Result<(), ButtonError> {
        self.button_mut()?.set_long_press_ms(ms);
        Ok(())
    }

    /// Call `f` when a debounced press is detected
    pub fn on_push_button_press(&mut self, f: impl FnMut() + 'static) -> Result<(), ButtonError> {
        self.button_mut()?.on_press(f);
        Ok(())
    }

    /// Call `f` on release after a short press
    pub fn on_push_button_short_press(
        &mut self,
        f: impl FnMut() + 'static,
    ) -> Result<(), ButtonError> {
        self.button_mut()?.on_short_press(f);
        Ok(())
    }

    /// Call `f` on release after a long press
    pub fn on_push_button_long_press(
        &mut self,
        f: impl FnMut() + 'static,
    ) -> Result<(), ButtonError> {
        self.button_mut()?.on_long_press(f);
        Ok(())
    }

    /// Call `f` once while held, when the short press time is reached
    pub fn on_push_button_short_press_reached(
        &mut self,
        f: impl FnMut() + 'static,
    ) -> Result<(), ButtonError> {
        self.button_mut()?.on_short_press_reached(f);
        Ok(())
    }

    /// Call `f` once while held, when the long press time is reached
    pub fn on_push_button_long_press_reached(
        &mut self,
        f: impl FnMut() + 'static,
    ) -> Result<(), ButtonError> {
        self.button_mut()?.on_long_press_reached(f);
        Ok(())
    }
}

fn push(events: &mut KnobEvents, event: KnobEvent) {
    // One rotation plus at most four button events fit in the capacity of five
    let _ = events.push(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::tests::{MockClock, MockPin};
    use core::cell::{Cell, RefCell};
    use detent_core::ButtonEvent;
    use proptest::prelude::*;
    use std::rc::Rc;
    use std::vec::Vec;

    struct Rig {
        a: MockPin,
        b: MockPin,
        clock: MockClock,
        encoder: RotaryEncoder<MockPin, MockPin, MockClock>,
    }

    impl Rig {
        /// Idle encoder: both lines high, `begin()` already called
        fn new() -> Self {
            let a = MockPin::new(true);
            let b = MockPin::new(true);
            let clock = MockClock::new();
            let mut encoder = RotaryEncoder::new(a.clone(), b.clone(), clock.clone());
            encoder.begin();
            Self {
                a,
                b,
                clock,
                encoder,
            }
        }

        /// Drive line A to `a` with line B at `b`, then poll once
        fn edge(&mut self, a: bool, b: bool) -> Option<Direction> {
            self.b.set_high(b);
            self.a.set_high(a);
            self.encoder.poll_rotation()
        }

        /// One full detent clockwise
        fn detent_cw(&mut self) {
            self.edge(false, true);
            self.edge(true, false);
            self.b.set_high(true);
        }

        /// One full detent counter-clockwise
        fn detent_ccw(&mut self) {
            self.edge(false, false);
            self.edge(true, true);
        }
    }

    #[test]
    fn test_initial_state() {
        let rig = Rig::new();
        assert_eq!(rig.encoder.value(), 0);
        assert_eq!(rig.encoder.last_value(), 0);
        assert_eq!(rig.encoder.step(), 1);
        assert_eq!(rig.encoder.direction(), Direction::NoRotation);
        assert!(!rig.encoder.has_push_button());
    }

    #[test]
    fn test_falling_a_with_b_low_counts_down() {
        let mut rig = Rig::new();
        rig.b.set_high(false);

        assert_eq!(rig.edge(false, false), Some(Direction::CounterClockwise));
        assert_eq!(rig.encoder.value(), -1);
        assert_eq!(rig.encoder.direction(), Direction::CounterClockwise);
    }

    #[test]
    fn test_falling_a_with_b_high_counts_up() {
        let mut rig = Rig::new();

        assert_eq!(rig.edge(false, true), Some(Direction::Clockwise));
        assert_eq!(rig.encoder.value(), 1);
        assert_eq!(rig.encoder.direction(), Direction::Clockwise);
    }

    #[test]
    fn test_rising_a_leaves_value() {
        let mut rig = Rig::new();
        rig.edge(false, true);

        assert_eq!(rig.edge(true, false), None);
        assert_eq!(rig.encoder.value(), 1);
        assert_eq!(rig.encoder.direction(), Direction::Clockwise);

        assert_eq!(rig.edge(false, false), Some(Direction::CounterClockwise));
        assert_eq!(rig.edge(true, true), None);
        assert_eq!(rig.encoder.value(), 0);
        assert_eq!(rig.encoder.direction(), Direction::CounterClockwise);
    }

    #[test]
    fn test_unchanged_a_is_ignored() {
        let mut rig = Rig::new();
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        rig.encoder.set_before_change(move |_| c.set(c.get() + 1));

        // B moving alone is not a transition
        for _ in 0..10 {
            rig.b.set_high(false);
            assert_eq!(rig.encoder.poll_rotation(), None);
            rig.b.set_high(true);
            assert_eq!(rig.encoder.poll_rotation(), None);
        }
        assert_eq!(calls.get(), 0);
        assert_eq!(rig.encoder.value(), 0);
    }

    #[test]
    fn test_begin_samples_idle_level() {
        let a = MockPin::new(false);
        let b = MockPin::new(false);
        let mut encoder = RotaryEncoder::new(a.clone(), b.clone(), MockClock::new());
        encoder.begin();

        // A already low at begin: no transition until it moves
        assert_eq!(encoder.poll_rotation(), None);
        a.set_high(true);
        assert_eq!(encoder.poll_rotation(), None);
        a.set_high(false);
        assert_eq!(encoder.poll_rotation(), Some(Direction::CounterClockwise));
    }

    #[test]
    fn test_callbacks_once_per_transition() {
        let mut rig = Rig::new();
        let before = Rc::new(RefCell::new(Vec::new()));
        let after = Rc::new(RefCell::new(Vec::new()));

        let log = before.clone();
        rig.encoder
            .set_before_change(move |s| log.borrow_mut().push((s.value, s.last_value)));
        let log = after.clone();
        rig.encoder
            .set_after_change(move |s| log.borrow_mut().push((s.value, s.last_value)));

        rig.detent_cw();
        rig.detent_cw();

        // Four A transitions, two of them falling
        assert_eq!(*before.borrow(), [(0, 0), (1, 1), (1, 1), (2, 2)]);
        assert_eq!(*after.borrow(), [(1, 0), (1, 1), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_last_value_and_timestamp() {
        let mut rig = Rig::new();
        rig.encoder.set_step(5);

        rig.clock.set(120);
        rig.edge(false, true);
        assert_eq!(rig.encoder.value(), 5);
        assert_eq!(rig.encoder.last_value(), 0);
        assert_eq!(rig.encoder.last_change_ms(), 120);

        rig.clock.set(135);
        rig.edge(true, false);
        assert_eq!(rig.encoder.last_value(), 5);
        assert_eq!(rig.encoder.last_change_ms(), 135);

        rig.clock.set(200);
        assert_eq!(rig.encoder.idle_ms(), 65);
    }

    #[test]
    fn test_set_value_keeps_direction_and_last_value() {
        let mut rig = Rig::new();
        rig.detent_ccw();
        rig.detent_ccw();
        let before = rig.encoder.state();

        rig.encoder.set_value(100);
        assert_eq!(rig.encoder.value(), 100);
        assert_eq!(rig.encoder.direction(), before.direction);
        assert_eq!(rig.encoder.last_value(), before.last_value);

        rig.detent_cw();
        assert_eq!(rig.encoder.value(), 101);
    }

    #[test]
    fn test_negative_step() {
        let mut rig = Rig::new();
        rig.encoder.set_step(-3);
        rig.detent_cw();
        assert_eq!(rig.encoder.value(), -3);
        assert_eq!(rig.encoder.direction(), Direction::Clockwise);
    }

    #[test]
    fn test_value_wraps() {
        let mut rig = Rig::new();
        rig.encoder.set_value(i32::MAX);
        rig.detent_cw();
        assert_eq!(rig.encoder.value(), i32::MIN);
    }

    #[test]
    fn test_value_sink_reports_steps() {
        let mut rig = Rig::new();
        let reported = Rc::new(RefCell::new(Vec::new()));
        let log = reported.clone();
        rig.encoder
            .set_value_sink(move |value: i32| log.borrow_mut().push(value));

        rig.detent_cw();
        rig.detent_cw();
        rig.detent_ccw();
        assert_eq!(*reported.borrow(), [1, 2, 1]);

        rig.encoder.clear_value_sink();
        rig.detent_cw();
        assert_eq!(reported.borrow().len(), 3);
    }

    #[test]
    fn test_facade_without_button() {
        let mut rig = Rig::new();
        let encoder = &mut rig.encoder;

        assert!(encoder.push_button().is_none());
        assert_eq!(encoder.push_button_state(), None);
        assert_eq!(encoder.is_push_button_pulled_up(), None);
        assert_eq!(encoder.push_button_short_press_ms(), None);
        assert_eq!(encoder.push_button_long_press_ms(), None);
        assert_eq!(encoder.push_button_timing(), None);

        let err = Err(ButtonError::NotConfigured);
        assert_eq!(encoder.push_button_begin(), err);
        assert_eq!(encoder.push_button_poll(), Err(ButtonError::NotConfigured));
        assert_eq!(encoder.set_push_button_pulled_up(), err);
        assert_eq!(encoder.set_push_button_pulled_down(), err);
        assert_eq!(encoder.set_push_button_short_press_ms(10), err);
        assert_eq!(encoder.set_push_button_long_press_ms(10), err);
        assert_eq!(encoder.on_push_button_press(|| {}), err);
        assert_eq!(encoder.on_push_button_short_press(|| {}), err);
        assert_eq!(encoder.on_push_button_long_press(|| {}), err);
        assert_eq!(encoder.on_push_button_short_press_reached(|| {}), err);
        assert_eq!(encoder.on_push_button_long_press_reached(|| {}), err);
    }

    struct Knob {
        a: MockPin,
        sw: MockPin,
        clock: MockClock,
        encoder: RotaryEncoder<MockPin, MockPin, MockClock, MockPin>,
    }

    impl Knob {
        fn new() -> Self {
            let a = MockPin::new(true);
            let b = MockPin::new(true);
            let sw = MockPin::new(true);
            let clock = MockClock::new();
            let encoder = RotaryEncoder::with_button(a.clone(), b, sw.clone(), clock.clone());
            Self {
                a,
                sw,
                clock,
                encoder,
            }
        }

        /// Hold the button for `held` ms from `start`, polling every ms
        fn hold(&mut self, start: u32, held: u32) -> Vec<KnobEvent> {
            let mut events = Vec::new();
            self.sw.set_high(false);
            for t in start..start + held {
                self.clock.set(t);
                events.extend(self.encoder.poll());
            }
            self.sw.set_high(true);
            for t in start + held..start + held + 100 {
                self.clock.set(t);
                events.extend(self.encoder.poll());
            }
            events
        }
    }

    #[test]
    fn test_begin_configures_button() {
        let mut knob = Knob::new();
        knob.encoder.set_push_button_pulled_down().unwrap();
        assert_eq!(knob.encoder.is_push_button_pulled_up(), Some(false));

        knob.encoder.begin();
        assert!(knob.encoder.has_push_button());
        assert_eq!(knob.encoder.is_push_button_pulled_up(), Some(true));
        assert_eq!(
            knob.encoder.push_button_state(),
            Some(ButtonState::Released)
        );
        assert_eq!(knob.encoder.push_button_short_press_ms(), Some(50));
        assert_eq!(knob.encoder.push_button_long_press_ms(), Some(500));
    }

    #[test]
    fn test_short_and_long_press_through_encoder() {
        let mut knob = Knob::new();
        let shorts = Rc::new(Cell::new(0));
        let longs = Rc::new(Cell::new(0));

        let c = shorts.clone();
        knob.encoder
            .on_push_button_short_press(move || c.set(c.get() + 1))
            .unwrap();
        let c = longs.clone();
        knob.encoder
            .on_push_button_long_press(move || c.set(c.get() + 1))
            .unwrap();
        knob.encoder.set_push_button_short_press_ms(200).unwrap();
        knob.encoder.set_push_button_long_press_ms(1000).unwrap();
        knob.encoder.begin();

        knob.hold(0, 100);
        assert_eq!((shorts.get(), longs.get()), (0, 0));

        knob.hold(1000, 400);
        assert_eq!((shorts.get(), longs.get()), (1, 0));

        knob.hold(3000, 1500);
        assert_eq!((shorts.get(), longs.get()), (1, 1));
    }

    #[test]
    fn test_facade_callbacks_reach_button() {
        let mut knob = Knob::new();
        let counters: [Rc<Cell<u32>>; 5] = Default::default();
        let counter = |i: usize| {
            let c = counters[i].clone();
            move || c.set(c.get() + 1)
        };

        knob.encoder.on_push_button_press(counter(0)).unwrap();
        knob.encoder.on_push_button_short_press(counter(1)).unwrap();
        knob.encoder.on_push_button_long_press(counter(2)).unwrap();
        knob.encoder
            .on_push_button_short_press_reached(counter(3))
            .unwrap();
        knob.encoder
            .on_push_button_long_press_reached(counter(4))
            .unwrap();
        knob.encoder.set_push_button_short_press_ms(200).unwrap();
        knob.encoder.set_push_button_long_press_ms(1000).unwrap();
        assert_eq!(
            knob.encoder.push_button_timing(),
            Some(PressTiming {
                debounce_ms: 20,
                short_press_ms: 200,
                long_press_ms: 1000,
            })
        );
        knob.encoder.begin();

        let counts = || counters.each_ref().map(|c| c.get());

        // press, short, long, short reached, long reached
        knob.hold(0, 100);
        assert_eq!(counts(), [1, 0, 0, 0, 0]);

        knob.hold(1000, 400);
        assert_eq!(counts(), [2, 1, 0, 1, 0]);

        knob.hold(3000, 1500);
        assert_eq!(counts(), [3, 1, 1, 2, 1]);
    }

    #[test]
    fn test_poll_merges_rotation_and_button() {
        let mut knob = Knob::new();
        knob.encoder.begin();

        let events = knob.hold(0, 300);
        assert_eq!(
            events,
            [
                KnobEvent::Button(ButtonEvent::Press),
                KnobEvent::Button(ButtonEvent::ShortPressReached),
                KnobEvent::Button(ButtonEvent::ShortPress)
            ]
        );

        knob.clock.set(1000);
        knob.a.set_high(false);
        let events = knob.encoder.poll();
        assert_eq!(&events[..], &[KnobEvent::Rotated(Direction::Clockwise)]);
    }

    #[test]
    fn test_push_button_poll_passthrough() {
        let mut knob = Knob::new();
        knob.encoder.push_button_begin().unwrap();

        knob.sw.set_high(false);
        knob.clock.set(0);
        assert!(knob.encoder.push_button_poll().unwrap().is_empty());
        knob.clock.set(20);
        let events = knob.encoder.push_button_poll().unwrap();
        assert_eq!(&events[..], &[ButtonEvent::Press]);
        assert!(knob
            .encoder
            .push_button()
            .is_some_and(|button| button.is_pressed()));
    }

    proptest! {
        #[test]
        fn prop_value_tracks_detents(
            moves in proptest::collection::vec(any::<bool>(), 0..64),
            step in -100i32..100,
        ) {
            let mut rig = Rig::new();
            rig.encoder.set_step(step);
            let mut expected = 0i32;

            for &clockwise in &moves {
                let before = rig.encoder.value();
                if clockwise {
                    rig.detent_cw();
                    expected = expected.wrapping_add(step);
                    prop_assert_eq!(rig.encoder.direction(), Direction::Clockwise);
                } else {
                    rig.detent_ccw();
                    expected = expected.wrapping_sub(step);
                    prop_assert_eq!(rig.encoder.direction(), Direction::CounterClockwise);
                }
                // The rising half of the detent snapshots the stepped value
                prop_assert_eq!(rig.encoder.last_value(), rig.encoder.value());
                prop_assert_eq!(rig.encoder.value().wrapping_sub(before).abs(), step.abs());
            }

            prop_assert_eq!(rig.encoder.value(), expected);
        }
    }
}
