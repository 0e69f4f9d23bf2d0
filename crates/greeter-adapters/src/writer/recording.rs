//! In-memory writer for testing.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use greeter_core::{Error, Result, Unit, application::ports::MessageWriter};

/// In-memory writer for testing.
///
/// Records every delivered message. Can be told to fail on demand with a
/// chosen error, which is then returned verbatim from every `write`. Clones
/// share the same recording, so a test can keep a handle after moving one
/// into a service.
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    inner: Arc<RwLock<RecordingWriterInner>>,
}

/// Shared state. A poisoned lock is read through.
#[derive(Debug, Default)]
struct RecordingWriterInner {
    messages: Vec<String>,
    failure: Option<Error>,
}

impl RecordingWriter {
    /// Create a new empty recording writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that fails every `write` with `error`.
    pub fn failing(error: Error) -> Self {
        let writer = Self::new();
        writer.fail_with(error);
        writer
    }

    /// Make subsequent writes fail with `error`.
    pub fn fail_with(&self, error: Error) {
        self.state_mut().failure = Some(error);
    }

    /// Make subsequent writes succeed again.
    pub fn succeed(&self) {
        self.state_mut().failure = None;
    }

    /// All recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.state().messages.clone()
    }

    /// The most recent message.
    pub fn last(&self) -> Option<String> {
        self.state().messages.last().cloned()
    }

    /// Clear all recorded messages.
    pub fn clear(&self) {
        self.state_mut().messages.clear();
    }

    fn state(&self) -> RwLockReadGuard<'_, RecordingWriterInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, RecordingWriterInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageWriter for RecordingWriter {
    fn write(&self, message: &str) -> Result<Unit> {
        let mut inner = self.state_mut();

        if let Some(err) = &inner.failure {
            return Err(err.clone());
        }

        inner.messages.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeter_core::ErrorKind;

    #[test]
    fn records_messages_in_order() {
        let writer = RecordingWriter::new();
        writer.write("one").unwrap();
        writer.write("two").unwrap();

        assert_eq!(writer.messages(), vec!["one", "two"]);
        assert_eq!(writer.last().as_deref(), Some("two"));
    }

    #[test]
    fn clones_share_the_recording() {
        let writer = RecordingWriter::new();
        let handle = writer.clone();

        writer.write("shared").unwrap();

        assert_eq!(handle.messages(), vec!["shared"]);
    }

    #[test]
    fn fails_on_demand_with_the_given_error() {
        let writer = RecordingWriter::failing(Error::new(ErrorKind::Io, "boom"));

        let err = writer.write("lost").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.message(), "boom");
        assert!(writer.messages().is_empty());
    }

    #[test]
    fn can_recover_after_failing() {
        let writer = RecordingWriter::new();
        writer.fail_with(Error::internal("nope"));
        assert!(writer.write("x").is_err());

        writer.succeed();
        assert!(writer.write("y").is_ok());
        assert_eq!(writer.messages(), vec!["y"]);
    }

    #[test]
    fn clear_forgets_messages() {
        let writer = RecordingWriter::new();
        writer.write("x").unwrap();
        writer.clear();
        assert!(writer.last().is_none());
    }

    #[test]
    fn poisoned_lock_is_read_through_everywhere() {
        let writer = RecordingWriter::new();
        writer.write("before").unwrap();

        let holder = writer.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.inner.write().unwrap();
            panic!("poison the recording lock");
        })
        .join();
        assert!(writer.inner.is_poisoned());

        writer.fail_with(Error::internal("nope"));
        assert_eq!(writer.write("x"), Err(Error::internal("nope")));

        writer.succeed();
        writer.write("after").unwrap();
        assert_eq!(writer.messages(), vec!["before", "after"]);

        writer.clear();
        assert!(writer.last().is_none());
    }
}
