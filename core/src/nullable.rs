//! [`Nullable`] values: the ones which may be "null".

use std::{fmt, marker::PhantomData, sync::atomic::AtomicPtr};

use derive_more::{Deref, DerefMut};
use sealed::sealed;

use crate::Optional;

/// Value which may be absent ("null").
///
/// Plain Rust values can never be null, so this trait is the only way for a
/// "maybe null" input to reach [`Optional::try_of()`],
/// [`Optional::of_nullable()`] and [`objects`] helpers.
///
/// [`objects`]: crate::objects
#[sealed]
pub trait Nullable {
    /// Type of the value, when it's present.
    type Value;

    /// Unpacks this [`Nullable`] into an [`Option`].
    #[must_use]
    fn into_option(self) -> Option<Self::Value>;

    /// Borrows the value of this [`Nullable`], if any.
    #[must_use]
    fn as_option(&self) -> Option<&Self::Value>;

    /// Indicates whether this [`Nullable`] is null.
    #[inline]
    #[must_use]
    fn is_null(&self) -> bool {
        self.as_option().is_none()
    }
}

#[sealed]
impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Self {
        self
    }

    #[inline]
    fn as_option(&self) -> Option<&T> {
        self.as_ref()
    }
}

#[sealed]
impl<T> Nullable for Optional<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        Optional::into_option(self)
    }

    #[inline]
    fn as_option(&self) -> Option<&T> {
        Optional::as_option(self)
    }
}

/// Value which is always present.
#[derive(Clone, Copy, Debug, Deref, DerefMut, Eq, Hash, PartialEq)]
pub struct Just<T>(pub T);

#[sealed]
impl<T> Nullable for Just<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        Some(self.0)
    }

    #[inline]
    fn as_option(&self) -> Option<&T> {
        Some(&self.0)
    }
}

/// Null of type `T`.
pub struct Nothing<T: ?Sized>(PhantomData<AtomicPtr<Box<T>>>);

impl<T: ?Sized> Nothing<T> {
    /// Creates a new [`Nothing`].
    #[inline]
    #[must_use]
    pub const fn here() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Default for Nothing<T> {
    #[inline]
    fn default() -> Self {
        Self::here()
    }
}

impl<T: ?Sized> Clone for Nothing<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Nothing<T> {}

impl<T: ?Sized> fmt::Debug for Nothing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nothing")
    }
}

#[sealed]
impl<T> Nullable for Nothing<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Option<T> {
        None
    }

    #[inline]
    fn as_option(&self) -> Option<&T> {
        None
    }
}
