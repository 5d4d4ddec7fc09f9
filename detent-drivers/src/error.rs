//! Driver error types

use core::fmt;

/// Errors from push-button operations on an encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonError {
    /// The encoder was built without a push button
    NotConfigured,
}

impl fmt::Display for ButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonError::NotConfigured => write!(f, "no push button configured"),
        }
    }
}
