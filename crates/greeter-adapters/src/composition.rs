//! Composition root.
//!
//! This is the only place where a concrete writer is chosen for the greet
//! use case. The choice is made by type, at compile time: `bind` is
//! monomorphized per writer, and the process-wide console binding is created
//! once, on first use, and never replaced.

use std::sync::OnceLock;

use greeter_core::{
    Result, Unit,
    application::{GreetService, ports::MessageWriter},
    domain::{GreetCommand, Person},
};
use tracing::debug;

use crate::writer::{ConsoleWriter, StreamWriter};

/// The greet use case bound to stdout.
pub type ConsoleGreeter = GreetService<ConsoleWriter>;

static CONSOLE_GREETER: OnceLock<ConsoleGreeter> = OnceLock::new();

/// Bind the greet use case to `writer`.
pub fn bind<W: MessageWriter>(writer: W) -> GreetService<W> {
    GreetService::new(writer)
}

/// The process-wide console binding.
pub fn console_greeter() -> &'static ConsoleGreeter {
    CONSOLE_GREETER.get_or_init(|| {
        debug!("Binding greet use case to console writer");
        bind(StreamWriter::stdout())
    })
}

/// Greet on stdout.
///
/// # Errors
///
/// `Validation` for an invalid name, `Io` if stdout cannot be written.
pub fn greet(command: GreetCommand) -> Result<Unit> {
    console_greeter().execute(command)
}

/// Validate `name` into a [`Person`].
///
/// # Errors
///
/// `Validation` when the name is empty or too long.
pub fn create_person(name: &str) -> Result<Person> {
    Person::create(name)
}

/// Wrap a raw name into a [`GreetCommand`]. Never fails.
pub fn create_greet_command(name: impl Into<String>) -> GreetCommand {
    GreetCommand::new(name)
}
