//! `MessageWriter` adapters.

mod recording;
mod stream;

pub use recording::RecordingWriter;
pub use stream::{ConsoleWriter, StreamWriter};
