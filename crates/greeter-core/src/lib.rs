//! Greeter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the error model, the domain layer and the application
//! layer for the greeter, following hexagonal (ports and adapters)
//! architecture. Nothing in here performs I/O.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           greeter-cli (CLI)             │
//! │      (parses args, installs logging)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    greeter-adapters::composition        │
//! │   (binds GreetService to an adapter)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GreetService - pure orchestration)   │
//! └──────────────────┬──────────────────────┘
//!                    │ depends on
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (MessageWriter)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    greeter-adapters (Infrastructure)    │
//! │   (ConsoleWriter, RecordingWriter)      │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Person, GreetCommand, BoundedText)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use greeter_core::prelude::*;
//!
//! struct Discard;
//!
//! impl MessageWriter for Discard {
//!     fn write(&self, _message: &str) -> Result<Unit> {
//!         Ok(())
//!     }
//! }
//!
//! let service = GreetService::new(Discard);
//! assert!(service.execute(GreetCommand::new("World")).is_ok());
//!
//! let err = service.execute(GreetCommand::new("")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Validation);
//! ```

#![allow(
    clippy::result_large_err,
    reason = "Error is a fixed-size value carrying a MAX_MESSAGE_LEN buffer"
)]

// Compile-time bounds
pub mod config;

// Error model and Result algebra
pub mod error;

// Option algebra
pub mod option;

// Domain layer (value objects, formatting)
pub mod domain;

// Application layer (ports and the use case)
pub mod application;

pub use error::{Error, ErrorKind, Result, ResultExt, Unit};
pub use option::OptionExt;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GreetService, ports::MessageWriter};
    pub use crate::domain::{BoundedText, GreetCommand, Person, format_greeting};
    pub use crate::error::{Error, ErrorKind, Result, ResultExt, Unit};
    pub use crate::option::OptionExt;
}
