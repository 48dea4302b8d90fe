//! Error kinds signaled by [`Optional`] and [`objects`] helpers.
//!
//! [`objects`]: crate::objects
//! [`Optional`]: crate::Optional

use std::{borrow::Cow, fmt};

use derive_more::Error;

/// Message of [`NoSuchElement`] returned by [`Optional::get()`].
///
/// [`Optional::get()`]: crate::Optional::get
pub const NO_VALUE_PRESENT_DOT: &str = "No value present.";

/// Message of [`NoSuchElement`] returned by [`Optional::or_else_throw()`].
///
/// [`Optional::or_else_throw()`]: crate::Optional::or_else_throw
pub const NO_VALUE_PRESENT: &str = "No value present";

/// Null-violation: a value required to be non-null turned out to be absent.
#[derive(Clone, Debug, Default, Eq, Error, PartialEq)]
pub struct NullPointer {
    message: Option<Cow<'static, str>>,
}

impl NullPointer {
    /// Creates a new [`NullPointer`] without any message.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Creates a new [`NullPointer`] carrying the provided `message`.
    #[must_use]
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Returns the message of this [`NullPointer`], if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for NullPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("value is null"))
    }
}

/// Absent-value: an access was attempted on an empty [`Optional`].
///
/// [`Optional`]: crate::Optional
#[derive(Clone, Debug, Default, Eq, Error, PartialEq)]
pub struct NoSuchElement {
    message: Option<Cow<'static, str>>,
}

impl NoSuchElement {
    /// Creates a new [`NoSuchElement`] without any message.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { message: None }
    }

    /// Creates a new [`NoSuchElement`] carrying the provided `message`.
    #[must_use]
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Returns the message of this [`NoSuchElement`], if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for NoSuchElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().unwrap_or("no such element"))
    }
}
