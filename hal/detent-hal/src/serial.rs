//! Diagnostic serial output
//!
//! The encoder can report its value after every step. That output goes
//! through a [`ValueSink`] so the decode path stays free of I/O; the common
//! sink is [`SerialLine`], which prints one decimal number per line over a
//! blocking transmitter.

use core::fmt::Write;

use heapless::String;

/// Serial transmitter
///
/// Blocking trait for sending bytes over a UART-like interface.
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the transmitter
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Receiver of encoder value reports
pub trait ValueSink {
    /// Report the accumulated encoder value after a step
    fn report(&mut self, value: i32);
}

impl<F: FnMut(i32)> ValueSink for F {
    fn report(&mut self, value: i32) {
        self(value)
    }
}

/// Longest line [`SerialLine`] writes: sign, ten digits and CRLF
const LINE_CAPACITY: usize = 13;

/// Prints each reported value as a decimal line
///
/// Transmit errors are counted and otherwise dropped; a diagnostic
/// channel must never stall the polling loop.
pub struct SerialLine<T> {
    tx: T,
    errors: u32,
}

impl<T: SerialTx> SerialLine<T> {
    /// Create a line sink over a transmitter
    pub fn new(tx: T) -> Self {
        Self { tx, errors: 0 }
    }

    /// Number of reports that failed to transmit
    pub fn error_count(&self) -> u32 {
        self.errors
    }

    /// Release the transmitter
    pub fn into_inner(self) -> T {
        self.tx
    }

    fn write_line(&mut self, value: i32) -> Result<(), T::Error> {
        let mut line: String<LINE_CAPACITY> = String::new();
        // Always fits: i32::MIN is 11 characters
        let _ = write!(line, "{}\r\n", value);
        self.tx.write_blocking(line.as_bytes())?;
        self.tx.flush()
    }
}

impl<T: SerialTx> ValueSink for SerialLine<T> {
    fn report(&mut self, value: i32) {
        if self.write_line(value).is_err() {
            self.errors = self.errors.saturating_add(1);
        }
    }
}
