//! The `Person` value object.

use std::fmt;

use crate::config::MAX_NAME_LEN;
use crate::domain::BoundedText;
use crate::error::{Error, Result};

/// A person with a validated name.
///
/// Invariants: the name is never empty and never longer than
/// [`MAX_NAME_LEN`] bytes. Enforced by [`Person::create`], the only way to
/// obtain a `Person`.
///
/// Names are stored exactly as given. There is no normalization: no
/// trimming, no case folding. `" "` is a valid name; `""` is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: BoundedText<MAX_NAME_LEN>,
}

impl Person {
    /// Validate `name` and build a `Person`.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error when `name` is empty or longer than
    /// [`MAX_NAME_LEN`] bytes.
    ///
    /// ```
    /// use greeter_core::{domain::Person, ErrorKind};
    ///
    /// let alice = Person::create("Alice").unwrap();
    /// assert_eq!(alice.name(), "Alice");
    ///
    /// let err = Person::create("").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Validation);
    /// ```
    pub fn create(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::validation("person name must not be empty"));
        }

        BoundedText::try_new(name)
            .map(|name| Self { name })
            .ok_or_else(|| {
                Error::validation(format!(
                    "person name exceeds {MAX_NAME_LEN} bytes (got {})",
                    name.len()
                ))
            })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
