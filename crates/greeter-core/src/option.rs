//! Option algebra.
//!
//! Absence is modelled with `std::option::Option`, kept structurally distinct
//! from [`Result`]: `None` means "no value", never "something went wrong".
//! [`OptionExt`] adds the few queries the rest of the workspace needs,
//! including the one explicit bridge from absence to an error.

use crate::error::{Error, Result};

pub trait OptionExt<T> {
    /// The present value.
    ///
    /// # Panics
    /// Panics if the option is `None`.
    fn value(self) -> T;

    /// The present value, or `default`. Total.
    fn or_else_default(self, default: T) -> T;

    /// Turn absence into a `NotFound` error naming `what`.
    fn ok_or_not_found(self, what: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    #[allow(clippy::panic)]
    fn value(self) -> T {
        match self {
            Some(value) => value,
            None => panic!("precondition violated: value() called on None"),
        }
    }

    fn or_else_default(self, default: T) -> T {
        self.unwrap_or(default)
    }

    fn ok_or_not_found(self, what: &str) -> Result<T> {
        self.ok_or_else(|| Error::not_found(format!("{what} not found")))
    }
}
