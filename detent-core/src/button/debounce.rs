//! Time-based contact debouncing

use detent_hal::clock::elapsed_ms;

/// A change of the debounced state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Change {
    /// New debounced state
    pub active: bool,
    /// Time of the raw edge that led to this change
    pub at_ms: u32,
}

/// Debouncer for a single mechanical contact
///
/// A raw reading has to stay unchanged for the debounce window before the
/// debounced state follows it. Every raw change restarts the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    delay_ms: u32,
    stable: bool,
    raw: bool,
    raw_since_ms: u32,
}

impl Debouncer {
    /// Create an inactive debouncer
    pub const fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            stable: false,
            raw: false,
            raw_since_ms: 0,
        }
    }

    /// Force the inactive state, starting the window at `now_ms`
    pub fn reset(&mut self, now_ms: u32) {
        self.stable = false;
        self.raw = false;
        self.raw_since_ms = now_ms;
    }

    /// Debounce window in milliseconds
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Change the debounce window
    pub fn set_delay_ms(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
    }

    /// Current debounced state
    pub fn is_active(&self) -> bool {
        self.stable
    }

    /// Feed a raw reading
    ///
    /// Returns the change if the debounced state flipped on this sample.
    pub fn update(&mut self, raw: bool, now_ms: u32) -> Option<Change> {
        if raw != self.raw {
            self.raw = raw;
            self.raw_since_ms = now_ms;
        }

        if self.raw != self.stable && elapsed_ms(now_ms, self.raw_since_ms) >= self.delay_ms {
            self.stable = self.raw;
            return Some(Change {
                active: self.stable,
                at_ms: self.raw_since_ms,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_stable_reading() {
        let mut debouncer = Debouncer::new(20);

        assert_eq!(debouncer.update(true, 100), None);
        assert_eq!(debouncer.update(true, 119), None);
        assert_eq!(
            debouncer.update(true, 120),
            Some(Change {
                active: true,
                at_ms: 100
            })
        );
        assert!(debouncer.is_active());
        assert_eq!(debouncer.update(true, 200), None);
    }

    #[test]
    fn test_bounce_restarts_window() {
        let mut debouncer = Debouncer::new(20);

        debouncer.update(true, 0);
        debouncer.update(false, 5);
        debouncer.update(true, 10);
        assert_eq!(debouncer.update(true, 25), None);
        assert_eq!(
            debouncer.update(true, 30),
            Some(Change {
                active: true,
                at_ms: 10
            })
        );
    }

    #[test]
    fn test_glitch_is_ignored() {
        let mut debouncer = Debouncer::new(20);

        debouncer.update(true, 0);
        debouncer.update(false, 10);
        assert_eq!(debouncer.update(false, 100), None);
        assert!(!debouncer.is_active());
    }

    #[test]
    fn test_zero_delay_is_immediate() {
        let mut debouncer = Debouncer::new(0);
        assert_eq!(
            debouncer.update(true, 7),
            Some(Change {
                active: true,
                at_ms: 7
            })
        );
    }

    #[test]
    fn test_window_across_clock_wrap() {
        let mut debouncer = Debouncer::new(20);
        debouncer.update(true, u32::MAX - 5);
        assert_eq!(debouncer.update(true, 10), None);
        assert!(debouncer.update(true, 14).is_some());
    }
}
