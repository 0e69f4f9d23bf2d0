//! Writer adapter over any `std::io::Write`.

use std::io::{self, Write};
use std::sync::Mutex;

use greeter_core::{Error, Result, Unit, application::ports::MessageWriter};
use tracing::trace;

use crate::boundary;

/// Production writer: stdout.
pub type ConsoleWriter = StreamWriter<io::Stdout>;

/// Writes each message on its own line to an `io::Write` stream and
/// flushes.
///
/// The stream sits behind a mutex so the writer is `Sync` and can be
/// shared by a statically bound service.
#[derive(Debug)]
pub struct StreamWriter<S> {
    stream: Mutex<S>,
}

impl<S: Write + Send> StreamWriter<S> {
    /// Wrap an arbitrary stream.
    pub fn new(stream: S) -> Self {
        Self {
            stream: Mutex::new(stream),
        }
    }

    /// Take the stream back out.
    pub fn into_inner(self) -> S {
        self.stream
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StreamWriter<io::Stdout> {
    /// Create a writer on the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<S: Write + Send> MessageWriter for StreamWriter<S> {
    fn write(&self, message: &str) -> Result<Unit> {
        let mut stream = self
            .stream
            .lock()
            .map_err(|_| Error::internal("output stream lock poisoned"))?;

        trace!(bytes = message.len(), "Writing message");
        boundary::guard("write greeting", || {
            stream.write_all(message.as_bytes())?;
            stream.write_all(b"\n")?;
            stream.flush()
        })
    }
}
