//! End-to-end tests: use case + real adapters.

use std::fs::{self, File};
use std::io;

use greeter_adapters::{RecordingWriter, StreamWriter, bind, create_greet_command};
use greeter_core::{Error, ErrorKind, ResultExt};
use tempfile::TempDir;

/// A sink that always refuses writes.
struct FullDisk;

impl io::Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::StorageFull, "no space left on device"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_greeting_lands_in_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("greeting.txt");
    let greeter = bind(StreamWriter::new(File::create(&path).unwrap()));

    greeter.execute(create_greet_command("World")).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Hello, World!\n");
}

#[test]
fn test_adapter_fault_is_converted_not_raised() {
    let greeter = bind(StreamWriter::new(FullDisk));

    let err = greeter.execute(create_greet_command("World")).error_info();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(err.message().contains("no space left on device"));
}

#[test]
fn test_recording_double_sees_identical_messages() {
    let recorder = RecordingWriter::new();
    let greeter = bind(recorder.clone());
    let command = create_greet_command("Alice");

    assert_eq!(greeter.execute(command.clone()), Ok(()));
    assert_eq!(greeter.execute(command), Ok(()));

    assert_eq!(recorder.messages(), vec!["Hello, Alice!", "Hello, Alice!"]);
}

#[test]
fn test_failing_double_error_is_returned_verbatim() {
    let greeter = bind(RecordingWriter::failing(Error::io("boom")));

    let err = greeter.execute(create_greet_command("World")).error_info();

    assert_eq!(err, Error::io("boom"));
}
