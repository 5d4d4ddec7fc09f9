//! Monotonic time source
//!
//! The drivers only need "milliseconds since start" to timestamp encoder
//! transitions and to measure how long the button is held.

/// Monotonic millisecond clock
///
/// The counter is allowed to wrap; consumers compare samples with
/// `wrapping_sub`.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary fixed origin
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed from `since` to `now`, tolerant of counter wrap
#[inline]
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
