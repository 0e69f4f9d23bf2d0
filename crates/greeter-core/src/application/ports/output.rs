//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `greeter-adapters` crate provides implementations.

use crate::error::{Result, Unit};

/// Port for delivering a finished message.
///
/// Implemented by:
/// - `greeter_adapters::ConsoleWriter` (production, stdout)
/// - `greeter_adapters::StreamWriter` (any `io::Write`)
/// - `greeter_adapters::RecordingWriter` (testing)
///
/// ## Contract
///
/// - Returns `Ok(())` once the message has been delivered.
/// - Every runtime fault of the underlying primitive is returned as an
///   `Io` error. Implementations never panic on I/O failure.
/// - `Send + Sync` so a bound service can be shared read-only.
#[cfg_attr(test, mockall::automock)]
pub trait MessageWriter: Send + Sync {
    /// Deliver `message`.
    fn write(&self, message: &str) -> Result<Unit>;
}

impl<W: MessageWriter + ?Sized> MessageWriter for &W {
    fn write(&self, message: &str) -> Result<Unit> {
        (**self).write(message)
    }
}

impl<W: MessageWriter + ?Sized> MessageWriter for Box<W> {
    fn write(&self, message: &str) -> Result<Unit> {
        (**self).write(message)
    }
}
