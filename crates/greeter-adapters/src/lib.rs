//! Infrastructure adapters for the greeter.
//!
//! This crate implements the ports defined in `greeter-core::application::ports`.
//! It contains all I/O and is the only place where an `io::Error` is turned
//! into a core [`Error`](greeter_core::Error) (see [`boundary`]).
//!
//! It also hosts the composition root: the one place where a concrete
//! writer is bound to the greet use case.

#![allow(
    clippy::result_large_err,
    reason = "greeter_core::Error is a fixed-size value carrying a MAX_MESSAGE_LEN buffer"
)]

pub mod boundary;
pub mod composition;
pub mod writer;

// Re-export commonly used adapters
pub use composition::{ConsoleGreeter, bind, create_greet_command, create_person, greet};
pub use writer::{ConsoleWriter, RecordingWriter, StreamWriter};
