//! Application layer for the greeter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GreetService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.
//! Application code never re-kinds an error: whatever the domain or a
//! port returns is what the caller sees.

pub mod ports;
pub mod services;

// Re-export main services
pub use services::{GreetService, execute};

// Re-export port traits (for adapter implementation)
pub use ports::MessageWriter;
