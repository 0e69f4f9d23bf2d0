//! Greet Service - the single use case.
//!
//! This service coordinates the greeting workflow:
//! 1. Validate the requested name into a `Person`
//! 2. Format the greeting
//! 3. Hand it to the writer port
//!
//! It implements the driving port (incoming) and uses the driven
//! `MessageWriter` port (outgoing). Errors from either step are returned
//! exactly as produced.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::MessageWriter,
    domain::{GreetCommand, Person, format_greeting},
    error::{Result, Unit},
};

/// Run the greet use case against `writer`.
///
/// Generic over the writer, so each adapter gets its own monomorphized
/// copy and nothing is dispatched at runtime.
///
/// # Errors
///
/// - `Validation` when the requested name is not a valid [`Person`] name.
/// - Whatever the writer returns, unchanged.
#[instrument(skip_all, fields(name_len = command.name().len()))]
pub fn execute<W>(command: GreetCommand, writer: &W) -> Result<Unit>
where
    W: MessageWriter + ?Sized,
{
    // 1. Validate
    let person = Person::create(command.name()).inspect_err(|e| {
        warn!(error = %e, "Greeting rejected");
    })?;

    // 2. Format
    let greeting = format_greeting(&person);
    debug!(greeting = %greeting, "Greeting formatted");

    // 3. Deliver
    writer.write(&greeting).inspect_err(|e| {
        warn!(error = %e, "Writer failed");
    })?;

    info!("Greeting delivered");
    Ok(())
}

/// The greet use case bound to one writer.
///
/// The writer type is fixed at construction; see
/// `greeter_adapters::composition` for the production binding.
#[derive(Debug, Clone)]
pub struct GreetService<W> {
    writer: W,
}

impl<W: MessageWriter> GreetService<W> {
    /// Create a new greet service with the given adapter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use greeter_core::{Result, Unit, application::{GreetService, ports::MessageWriter}};
    ///
    /// struct Stdout;
    ///
    /// impl MessageWriter for Stdout {
    ///     fn write(&self, message: &str) -> Result<Unit> {
    ///         println!("{message}");
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let service = GreetService::new(Stdout);
    /// ```
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Greet the person named in `command`.
    ///
    /// # Errors
    ///
    /// See [`execute`].
    pub fn execute(&self, command: GreetCommand) -> Result<Unit> {
        execute(command, &self.writer)
    }

    /// Borrow the bound writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}
