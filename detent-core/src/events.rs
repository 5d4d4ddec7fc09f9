//! Knob events
//!
//! Events produced by one poll of the encoder and its push button.

use heapless::Vec;

use crate::quadrature::Direction;

/// Maximum button events a single poll can produce
///
/// A late poll can confirm a press and cross both thresholds at once.
pub const MAX_BUTTON_EVENTS: usize = 4;

/// Maximum knob events a single poll can produce
pub const MAX_KNOB_EVENTS: usize = MAX_BUTTON_EVENTS + 1;

/// Events from one button poll, in the order they occurred
pub type ButtonEvents = Vec<ButtonEvent, MAX_BUTTON_EVENTS>;

/// Events from one knob poll, rotation first
pub type KnobEvents = Vec<KnobEvent, MAX_KNOB_EVENTS>;

/// Push-button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Debounced press detected
    Press,
    /// Held long enough to count as a short press (fires while held)
    ShortPressReached,
    /// Held long enough to count as a long press (fires while held)
    LongPressReached,
    /// Released after at least the short press time, before the long press time
    ShortPress,
    /// Released after at least the long press time
    LongPress,
}

impl ButtonEvent {
    /// Returns true if this event is raised on release
    pub fn is_release(&self) -> bool {
        matches!(self, ButtonEvent::ShortPress | ButtonEvent::LongPress)
    }
}

/// Anything the knob reports from a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KnobEvent {
    /// Knob rotated one step
    Rotated(Direction),
    /// Push-button event
    Button(ButtonEvent),
}

impl From<ButtonEvent> for KnobEvent {
    fn from(event: ButtonEvent) -> Self {
        KnobEvent::Button(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_button_event() {
        assert_eq!(
            KnobEvent::from(ButtonEvent::LongPress),
            KnobEvent::Button(ButtonEvent::LongPress)
        );
    }

    #[test]
    fn test_button_event_kinds() {
        assert!(ButtonEvent::ShortPress.is_release());
        assert!(ButtonEvent::LongPress.is_release());
        assert!(!ButtonEvent::Press.is_release());
        assert!(!ButtonEvent::ShortPressReached.is_release());
        assert!(!ButtonEvent::LongPressReached.is_release());
    }
}
