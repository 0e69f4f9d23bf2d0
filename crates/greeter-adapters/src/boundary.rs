//! The fault-to-error seam.
//!
//! Every call into an I/O primitive made by an adapter goes through
//! [`guard`]. It is the only code in the workspace that converts an
//! `io::Error` into a core [`Error`]; the conversion keeps the original
//! diagnostic text and drops the `io::Error` type itself.
//!
//! Panics are not intercepted anywhere. A panic is a bug.

use std::io;

use greeter_core::{Error, Result};
use tracing::warn;

/// Run `op` and convert its `io::Error`, if any, into an `Io` error.
///
/// `operation` names what was attempted, e.g. `"write greeting"`.
pub fn guard<T>(operation: &str, op: impl FnOnce() -> io::Result<T>) -> Result<T> {
    op().map_err(|err| io_fault(operation, &err))
}

/// Convert one I/O fault. The message reads `"failed to <operation>: <fault>"`.
pub fn io_fault(operation: &str, err: &io::Error) -> Error {
    warn!(operation, kind = ?err.kind(), error = %err, "I/O fault converted at adapter boundary");
    Error::io(format!("failed to {operation}: {err}"))
}
