//! Log sink: where load/save report the problems they swallow.
//!
//! Load and save never return errors.  Instead, every skipped line and every
//! I/O failure is sent to a [`LogSink`] that the caller passes in.  Production
//! code uses [`TracingSink`]; tests use [`mock::RecordingSink`] to assert on
//! exactly what was reported.

use tracing::{error, warn};

pub mod mock;

/// Log target used by [`TracingSink`].
pub const LOG_TARGET: &str = "emu_settings";

/// Receives warnings and errors from settings load/save.
pub trait LogSink {
    /// A recoverable problem, such as a skipped line.
    fn warn(&self, message: &str);
    /// A failure that degraded the result, such as an unreadable file.
    fn error(&self, message: &str);
}

/// Forwards messages to `tracing` under the [`LOG_TARGET`] target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn warn(&self, message: &str) {
        warn!(target: LOG_TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{message}");
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }

    fn error(&self, message: &str) {
        (**self).error(message);
    }
}
