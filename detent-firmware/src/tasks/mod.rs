//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod knob;
pub mod report;

pub use knob::{knob_task, rotation_task};
pub use report::{report_task, value_task};
