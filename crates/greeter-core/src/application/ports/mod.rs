//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `greeter-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `MessageWriter`: delivers a finished message
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `GreetService::execute`, bound to an adapter by the composition root

pub mod output;

pub use output::MessageWriter;

#[cfg(test)]
pub use output::MockMessageWriter;
