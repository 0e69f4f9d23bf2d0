//! Compile-time bounds consumed by the core.
//!
//! Both values are deployment-profile constants, selected with cargo
//! features. They are never mutable at runtime.
//!
//! | Feature            | `MAX_NAME_LEN` |
//! |--------------------|----------------|
//! | (none)             | 256            |
//! | `profile-compact`  | 100            |
//! | `profile-extended` | 512            |

#[cfg(all(feature = "profile-compact", feature = "profile-extended"))]
compile_error!("features `profile-compact` and `profile-extended` are mutually exclusive");

/// Maximum length of an [`Error`](crate::Error) message, in UTF-8 bytes.
pub const MAX_MESSAGE_LEN: usize = 512;

/// Maximum length of a [`Person`](crate::domain::Person) name, in UTF-8 bytes.
#[cfg(feature = "profile-compact")]
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a [`Person`](crate::domain::Person) name, in UTF-8 bytes.
#[cfg(feature = "profile-extended")]
pub const MAX_NAME_LEN: usize = 512;

/// Maximum length of a [`Person`](crate::domain::Person) name, in UTF-8 bytes.
#[cfg(not(any(feature = "profile-compact", feature = "profile-extended")))]
pub const MAX_NAME_LEN: usize = 256;
