//! Input DTO for the greet use case.

/// A request to greet someone.
///
/// Holds the raw, unvalidated name. Validation happens when the use case
/// builds a [`Person`](super::Person) from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetCommand {
    name: String,
}

impl GreetCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
