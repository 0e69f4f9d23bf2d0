//! Fixed-capacity text.
//!
//! [`BoundedText`] stores up to `N` UTF-8 bytes inline, with no heap
//! allocation. It is the storage behind [`Error`](crate::Error) messages and
//! [`Person`](super::Person) names.
//!
//! Invariant: the first `len` bytes of the buffer are always valid UTF-8 and
//! `len <= N`. Every constructor upholds it; there is no way to write into
//! the buffer afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Inline text holding at most `N` UTF-8 bytes.
#[derive(Clone, Copy)]
pub struct BoundedText<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedText<N> {
    /// An empty text.
    pub const fn empty() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }

    /// Store `text` if it fits, `None` otherwise.
    ///
    /// ```
    /// use greeter_core::domain::BoundedText;
    ///
    /// assert!(BoundedText::<5>::try_new("Alice").is_some());
    /// assert!(BoundedText::<4>::try_new("Alice").is_none());
    /// ```
    pub fn try_new(text: &str) -> Option<Self> {
        (text.len() <= N).then(|| Self::copy_prefix(text, text.len()))
    }

    /// Store `text`, cutting it at the last char boundary that fits in `N`
    /// bytes. Never fails.
    ///
    /// ```
    /// use greeter_core::domain::BoundedText;
    ///
    /// assert_eq!(BoundedText::<3>::truncating("Hello").as_str(), "Hel");
    /// // 'é' is two bytes and does not fit after "H".
    /// assert_eq!(BoundedText::<2>::truncating("Hé").as_str(), "H");
    /// ```
    pub fn truncating(text: &str) -> Self {
        Self::copy_prefix(text, floor_char_boundary(text, N))
    }

    fn copy_prefix(text: &str, end: usize) -> Self {
        let mut buf = [0; N];
        buf[..end].copy_from_slice(&text.as_bytes()[..end]);
        Self { buf, len: end }
    }

    /// Borrow the stored text.
    ///
    /// # Panics
    /// Panics if the UTF-8 invariant has been broken, which is a bug.
    #[allow(clippy::expect_used, reason = "constructors only ever copy whole chars")]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).expect("BoundedText holds whole chars")
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Largest `end <= max` such that `text[..end]` is valid.
fn floor_char_boundary(text: &str, max: usize) -> usize {
    if text.len() <= max {
        return text.len();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    end
}

impl<const N: usize> Default for BoundedText<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> Deref for BoundedText<N> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> AsRef<str> for BoundedText<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const N: usize> PartialEq for BoundedText<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<const N: usize> Eq for BoundedText<N> {}

impl<const N: usize> PartialEq<str> for BoundedText<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedText<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> Hash for BoundedText<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<const N: usize> fmt::Debug for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for BoundedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
