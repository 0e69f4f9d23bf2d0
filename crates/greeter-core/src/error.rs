//! Error model and Result algebra.
//!
//! Every fallible operation in the workspace returns [`Result<T>`]. An
//! [`Error`] is a closed [`ErrorKind`] plus a bounded message; it is created
//! once, where the failure is detected, and then flows unchanged through
//! every layer. No layer re-kinds an error.

use crate::config::MAX_MESSAGE_LEN;
use crate::domain::BoundedText;

/// Zero-information success marker.
pub type Unit = ();

/// Universal return type for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Closed set of failure kinds.
///
/// Deliberately exhaustive: adding a variant is a breaking change for
/// every consumer that matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input to a value-object factory.
    Validation,
    /// Malformed structured input. Reserved.
    Parse,
    /// Referenced resource absent.
    NotFound,
    /// A runtime fault converted at an adapter boundary.
    Io,
    /// An invariant was violated. Always a defect.
    Internal,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 5] = [
        Self::Validation,
        Self::Parse,
        Self::NotFound,
        Self::Io,
        Self::Internal,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Parse => "parse",
            Self::NotFound => "not found",
            Self::Io => "io",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable failure record.
///
/// The message is stored inline and capped at [`MAX_MESSAGE_LEN`] bytes;
/// longer messages are cut at the last char boundary that fits.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Hash)]
#[error("{kind} error: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: BoundedText<MAX_MESSAGE_LEN>,
}

impl Error {
    /// Build an error, truncating `message` to the bound. Never fails.
    pub fn new(kind: ErrorKind, message: impl AsRef<str>) -> Self {
        Self {
            kind,
            message: BoundedText::truncating(message.as_ref()),
        }
    }

    pub fn validation(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn parse(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn not_found(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn io(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn internal(message: impl AsRef<str>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Get user-actionable suggestions for this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self.kind {
            ErrorKind::Validation => vec![
                format!("Check your input: {}", self.message),
                format!(
                    "Names must be between 1 and {} bytes long",
                    crate::config::MAX_NAME_LEN
                ),
            ],
            ErrorKind::Parse => vec!["Check the format of the provided input".into()],
            ErrorKind::NotFound => vec!["Check that the referenced item exists".into()],
            ErrorKind::Io => vec![
                "Writing the greeting failed".into(),
                "Check that the output stream is open and writable".into(),
            ],
            ErrorKind::Internal => vec![
                "This appears to be a bug in greeter".into(),
                "Please report this issue with the message above".into(),
            ],
        }
    }
}

/// Precondition-checked accessors for [`Result`].
///
/// Production code matches on both arms instead. These accessors exist for
/// tests and for call sites where the arm has already been established; they
/// fail fast when the precondition does not hold.
pub trait ResultExt<T> {
    /// The success value.
    ///
    /// # Panics
    /// Panics if the result is an error.
    fn value(self) -> T;

    /// The error.
    ///
    /// # Panics
    /// Panics if the result is a success.
    fn error_info(self) -> Error;

    /// Re-type an error result, carrying the same [`Error`].
    ///
    /// The success type is never inspected. In ordinary code the `?`
    /// operator performs the same conversion.
    ///
    /// # Panics
    /// Panics if the result is a success.
    fn propagate<B>(self) -> Result<B>;
}

impl<T> ResultExt<T> for Result<T> {
    #[track_caller]
    #[allow(clippy::panic)]
    fn value(self) -> T {
        match self {
            Ok(value) => value,
            Err(err) => panic!("precondition violated: value() called on Err({err})"),
        }
    }

    #[track_caller]
    #[allow(clippy::panic)]
    fn error_info(self) -> Error {
        match self {
            Ok(_) => panic!("precondition violated: error_info() called on Ok"),
            Err(err) => err,
        }
    }

    #[track_caller]
    fn propagate<B>(self) -> Result<B> {
        Err(self.error_info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = ErrorKind> {
        prop_oneof![
            Just(ErrorKind::Validation),
            Just(ErrorKind::Parse),
            Just(ErrorKind::NotFound),
            Just(ErrorKind::Io),
            Just(ErrorKind::Internal),
        ]
    }

    #[test]
    fn error_keeps_kind_and_message() {
        let err = Error::io("boom");
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn shorthands_pick_the_matching_kind() {
        assert_eq!(Error::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(Error::parse("x").kind(), ErrorKind::Parse);
        assert_eq!(Error::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(Error::io("x").kind(), ErrorKind::Io);
        assert_eq!(Error::internal("x").kind(), ErrorKind::Internal);
    }

    #[test]
    fn long_message_is_truncated_to_bound() {
        let long = "x".repeat(MAX_MESSAGE_LEN + 100);
        let err = Error::internal(&long);
        assert_eq!(err.message().len(), MAX_MESSAGE_LEN);
        assert!(long.starts_with(err.message()));
    }

    #[test]
    fn message_at_bound_is_kept_whole() {
        let exact = "y".repeat(MAX_MESSAGE_LEN);
        assert_eq!(Error::parse(&exact).message(), exact);
    }

    #[test]
    fn message_is_stored_inline() {
        assert!(std::mem::size_of::<Error>() >= MAX_MESSAGE_LEN);
        assert!(std::mem::size_of::<Result<Unit>>() >= MAX_MESSAGE_LEN);
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::validation("person name must not be empty");
        assert_eq!(
            err.to_string(),
            "validation error: person name must not be empty"
        );
    }

    #[test]
    fn every_kind_has_suggestions() {
        for kind in ErrorKind::ALL {
            assert!(!Error::new(kind, "m").suggestions().is_empty(), "{kind}");
        }
    }

    #[test]
    fn value_returns_success() {
        let ok: Result<u8> = Ok(7);
        assert_eq!(ok.value(), 7);
    }

    #[test]
    fn error_info_returns_error() {
        let err: Result<u8> = Err(Error::not_found("gone"));
        assert_eq!(err.error_info(), Error::not_found("gone"));
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn value_on_err_fails_fast() {
        let err: Result<u8> = Err(Error::internal("bug"));
        err.value();
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn error_info_on_ok_fails_fast() {
        let ok: Result<u8> = Ok(1);
        ok.error_info();
    }

    #[test]
    fn propagate_keeps_the_same_error() {
        let original: Result<String> = Err(Error::io("boom"));
        let moved: Result<u64> = original.propagate();
        assert_eq!(moved, Err(Error::io("boom")));
    }

    #[test]
    fn question_mark_propagates_unchanged() {
        fn inner() -> Result<&'static str> {
            Err(Error::parse("bad token"))
        }
        fn outer() -> Result<usize> {
            Ok(inner()?.len())
        }
        assert_eq!(outer(), Err(Error::parse("bad token")));
    }

    proptest! {
        #[test]
        fn exactly_one_arm_is_populated(kind in arb_kind(), msg in any::<String>(), ok in any::<bool>()) {
            let result: Result<u32> = if ok { Ok(1) } else { Err(Error::new(kind, &msg)) };
            prop_assert!(result.is_ok() ^ result.is_err());
        }

        #[test]
        fn message_never_exceeds_bound(kind in arb_kind(), msg in any::<String>()) {
            let err = Error::new(kind, &msg);
            prop_assert!(err.message().len() <= MAX_MESSAGE_LEN);
            prop_assert!(msg.starts_with(err.message()));
            prop_assert_eq!(err.kind(), kind);
        }
    }
}
