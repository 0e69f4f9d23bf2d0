//! Core domain layer for the greeter.
//!
//! This module contains pure business logic with ZERO I/O.
//! Output concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or console calls
//! - **No heap for bounded data**: names and error messages live inline
//! - **Immutable values**: all domain objects are Clone + PartialEq
//! - **Single chokepoint**: a `Person` only exists after validation

pub mod bounded;
pub mod command;
pub mod greeting;
pub mod person;

// Re-exports for convenience
pub use bounded::BoundedText;
pub use command::GreetCommand;
pub use greeting::{GREETING_TEMPLATE, format_greeting};
pub use person::Person;
