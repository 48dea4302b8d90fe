//! [`Optional`] container definitions.

use std::{fmt, iter::FusedIterator, option};

use derive_more::{From, Into};
use ref_cast::RefCast;

use crate::{
    error::{NO_VALUE_PRESENT, NO_VALUE_PRESENT_DOT},
    objects::require_non_null,
    NoSuchElement, NullPointer, Nullable,
};

/// Immutable container holding either zero or one value.
///
/// [`Optional`] is a value-based type: two [`Optional`]s are equal whenever
/// both are empty, or both hold equal values. All the transformations consume
/// the container and return a new one, never mutating it in place.
///
/// # Example
///
/// ```rust
/// # use nullsafe_core::Optional;
/// #
/// let doubled = Optional::of(5).map(|x| x * 2);
/// assert_eq!(doubled.get(), Ok(10));
///
/// assert_eq!(Optional::empty().or_else(42), 42);
/// assert!(!Optional::<u8>::of_nullable(None).is_present());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    RefCast,
)]
#[repr(transparent)]
pub struct Optional<T>(Option<T>);

impl<T> Optional<T> {
    /// Shared empty [`Optional`].
    pub const EMPTY: Self = Self(None);

    /// Returns the shared empty [`Optional`].
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Wraps the provided `value` into a present [`Optional`].
    #[inline]
    #[must_use]
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// Wraps the provided [`Nullable`] `value` into a present [`Optional`].
    ///
    /// # Errors
    ///
    /// With a [`NullPointer`] if the `value` is null.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use nullsafe_core::{Just, Optional};
    /// #
    /// assert_eq!(Optional::try_of(Just(1)), Ok(Optional::of(1)));
    /// assert!(Optional::<u8>::try_of(None).is_err());
    /// ```
    pub fn try_of<N>(value: N) -> Result<Self, NullPointer>
    where
        N: Nullable<Value = T>,
    {
        require_non_null(value).map(Self::of)
    }

    /// Wraps the provided [`Nullable`] `value` into an [`Optional`], which is
    /// [`Optional::empty()`] if the `value` is null.
    #[inline]
    #[must_use]
    pub fn of_nullable<N>(value: N) -> Self
    where
        N: Nullable<Value = T>,
    {
        Self(value.into_option())
    }

    /// Views the provided [`Option`] reference as an [`Optional`] one, without
    /// copying.
    #[inline]
    #[must_use]
    pub fn from_option_ref(option: &Option<T>) -> &Self {
        Self::ref_cast(option)
    }

    /// Indicates whether this [`Optional`] holds a value.
    #[inline]
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// Indicates whether this [`Optional`] holds no value.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Returns the held value.
    ///
    /// # Errors
    ///
    /// With a [`NoSuchElement`] (`No value present.`) if this [`Optional`] is
    /// empty.
    pub fn get(self) -> Result<T, NoSuchElement> {
        self.0.ok_or_else(|| absent_value(NO_VALUE_PRESENT_DOT))
    }

    /// Returns the held value, same as [`Optional::get()`].
    ///
    /// # Errors
    ///
    /// With a [`NoSuchElement`] (`No value present`) if this [`Optional`] is
    /// empty.
    pub fn or_else_throw(self) -> Result<T, NoSuchElement> {
        self.0.ok_or_else(|| absent_value(NO_VALUE_PRESENT))
    }

    /// Returns the held value, or the error produced by the `supplier`.
    ///
    /// The `supplier` is invoked only if this [`Optional`] is empty.
    ///
    /// # Errors
    ///
    /// With the error produced by the `supplier` if this [`Optional`] is empty.
    pub fn or_else_throw_with<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.0.ok_or_else(supplier)
    }

    /// Invokes the `action` with the held value, if any.
    pub fn if_present<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.0 {
            action(value);
        }
    }

    /// Invokes the `action` with the held value if it's present, or the
    /// `empty_action` otherwise.
    pub fn if_present_or_else<F, E>(&self, action: F, empty_action: E)
    where
        F: FnOnce(&T),
        E: FnOnce(),
    {
        match &self.0 {
            Some(value) => action(value),
            None => empty_action(),
        }
    }

    /// Keeps this [`Optional`] if its value matches the `predicate`, or
    /// returns [`Optional::empty()`] otherwise.
    ///
    /// The `predicate` is never invoked on an empty [`Optional`].
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self(self.0.filter(predicate))
    }

    /// Transforms the held value with the `callback`.
    ///
    /// The `callback` is never invoked on an empty [`Optional`].
    #[must_use]
    pub fn map<U, F>(self, callback: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional(self.0.map(callback))
    }

    /// Transforms the held value with the `callback` returning a [`Nullable`]
    /// result, which collapses into [`Optional::empty()`] when null.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use nullsafe_core::Optional;
    /// #
    /// let name = Optional::of("")
    ///     .map_nullable(|s: &str| (!s.is_empty()).then(|| s));
    /// assert!(name.is_empty());
    /// ```
    #[must_use]
    pub fn map_nullable<N, F>(self, callback: F) -> Optional<N::Value>
    where
        N: Nullable,
        F: FnOnce(T) -> N,
    {
        match self.0 {
            Some(value) => Optional::of_nullable(callback(value)),
            None => Optional::empty(),
        }
    }

    /// Returns the [`Optional`] produced by the `mapper` from the held value.
    ///
    /// The `mapper` is never invoked on an empty [`Optional`].
    #[must_use]
    pub fn flat_map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.0 {
            Some(value) => mapper(value),
            None => Optional::empty(),
        }
    }

    /// Returns the [`Optional`] produced by the `mapper` from the held value,
    /// requiring the `mapper` to produce a non-null one.
    ///
    /// # Errors
    ///
    /// With a [`NullPointer`] if the `mapper` returns null.
    pub fn try_flat_map<U, N, F>(
        self,
        mapper: F,
    ) -> Result<Optional<U>, NullPointer>
    where
        N: Nullable<Value = Optional<U>>,
        F: FnOnce(T) -> N,
    {
        match self.0 {
            Some(value) => require_non_null(mapper(value)),
            None => Ok(Optional::empty()),
        }
    }

    /// Returns this [`Optional`] if it's present, or the one produced by the
    /// `supplier` otherwise.
    ///
    /// The `supplier` is never invoked on a present [`Optional`].
    #[must_use]
    pub fn or<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self.0 {
            Some(_) => self,
            None => supplier(),
        }
    }

    /// Returns this [`Optional`] if it's present, or the one produced by the
    /// `supplier` otherwise, requiring the `supplier` to produce a non-null
    /// one.
    ///
    /// # Errors
    ///
    /// With a [`NullPointer`] if the `supplier` returns null.
    pub fn try_or<N, F>(self, supplier: F) -> Result<Self, NullPointer>
    where
        N: Nullable<Value = Self>,
        F: FnOnce() -> N,
    {
        match self.0 {
            Some(_) => Ok(self),
            None => require_non_null(supplier()),
        }
    }

    /// Returns the held value, or the `other` one if this [`Optional`] is
    /// empty.
    #[must_use]
    pub fn or_else(self, other: T) -> T {
        self.0.unwrap_or(other)
    }

    /// Returns the held value, or the one produced by the `supplier` if this
    /// [`Optional`] is empty.
    ///
    /// The `supplier` is never invoked on a present [`Optional`].
    #[must_use]
    pub fn or_else_get<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.0.unwrap_or_else(supplier)
    }

    /// Returns the held value, or the one produced by the `supplier` if this
    /// [`Optional`] is empty, requiring the `supplier` to produce a non-null
    /// value.
    ///
    /// # Errors
    ///
    /// With a [`NullPointer`] if the `supplier` returns null.
    pub fn try_or_else_get<N, F>(self, supplier: F) -> Result<T, NullPointer>
    where
        N: Nullable<Value = T>,
        F: FnOnce() -> N,
    {
        match self.0 {
            Some(value) => Ok(value),
            None => require_non_null(supplier()),
        }
    }

    /// Borrows the held value, if any, into a new [`Optional`].
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        Optional(self.0.as_ref())
    }

    /// Borrows the held value, if any.
    #[inline]
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        self.0.as_ref()
    }

    /// Unpacks this [`Optional`] into an [`Option`].
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Returns an [`Iterator`] over the held value, yielding at most one item.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.0.iter())
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Optional[{}]", value),
            None => f.write_str("Optional.empty"),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`Iterator`] over a borrowed value of an [`Optional`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T>(option::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Traces the absent-value failure before handing it out.
fn absent_value(message: &'static str) -> NoSuchElement {
    log::trace!(target: "nullsafe", "absent-value: {}", message);
    NoSuchElement::with_message(message)
}

#[cfg(test)]
mod spec {
    use std::{
        cell::Cell,
        collections::hash_map::DefaultHasher,
        hash::{Hash as _, Hasher as _},
    };

    use crate::{Just, NoSuchElement, Nothing};

    use super::Optional;

    fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn of_is_present() {
        for v in [0, 1, -7, i32::MAX] {
            assert!(Optional::of(v).is_present());
            assert!(!Optional::of(v).is_empty());
            assert_eq!(Optional::of(v).get(), Ok(v));
        }
    }

    #[test]
    fn try_of_rejects_null() {
        assert!(Optional::<u8>::try_of(None).is_err());
        assert!(Optional::<u8>::try_of(Nothing::here()).is_err());
        assert_eq!(Optional::try_of(Some("a")), Ok(Optional::of("a")));
    }

    #[test]
    fn empty_has_no_value() {
        let empty = Optional::<u8>::empty();

        assert!(!empty.is_present());
        assert!(empty.is_empty());
        assert_eq!(
            empty.get(),
            Err(NoSuchElement::with_message("No value present.")),
        );
    }

    #[test]
    fn empty_is_shared_constant() {
        assert_eq!(Optional::<String>::empty(), Optional::EMPTY);
        assert_eq!(Optional::<String>::default(), Optional::EMPTY);

        static SHARED: Optional<&str> = Optional::empty();
        assert!(SHARED.is_empty());
    }

    #[test]
    fn of_nullable_behaves_as_empty_or_of() {
        assert_eq!(Optional::<u8>::of_nullable(None), Optional::empty());
        assert_eq!(
            Optional::<u8>::of_nullable(Nothing::here()),
            Optional::empty(),
        );
        assert_eq!(Optional::of_nullable(Some(3)), Optional::of(3));
        assert_eq!(Optional::of_nullable(Just(3)), Optional::of(3));
        assert_eq!(
            Optional::of_nullable(Optional::of(3)),
            Optional::of(3),
        );
    }

    #[test]
    fn or_else_throw_message_has_no_dot() {
        let err = Optional::<u8>::empty().or_else_throw().unwrap_err();

        assert_eq!(err.message(), Some("No value present"));
        assert_eq!(Optional::of(1).or_else_throw(), Ok(1));
    }

    #[test]
    fn or_else_throw_with_invokes_supplier_lazily() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            "missing"
        };

        assert_eq!(Optional::of(1).or_else_throw_with(supplier), Ok(1));
        assert_eq!(calls.get(), 0);

        assert_eq!(
            Optional::<u8>::empty().or_else_throw_with(supplier),
            Err("missing"),
        );
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn if_present_invokes_action_only_when_present() {
        let seen = Cell::new(None);

        Optional::of(4).if_present(|v| seen.set(Some(*v)));
        assert_eq!(seen.get(), Some(4));

        seen.set(None);
        Optional::<i32>::empty().if_present(|v| seen.set(Some(*v)));
        assert_eq!(seen.get(), None);
    }

    #[test]
    fn if_present_or_else_invokes_exactly_one() {
        let (present, absent) = (Cell::new(0), Cell::new(0));

        Optional::of(1).if_present_or_else(
            |_| present.set(present.get() + 1),
            || absent.set(absent.get() + 1),
        );
        assert_eq!((present.get(), absent.get()), (1, 0));

        Optional::<u8>::empty().if_present_or_else(
            |_| present.set(present.get() + 1),
            || absent.set(absent.get() + 1),
        );
        assert_eq!((present.get(), absent.get()), (1, 1));
    }

    #[test]
    fn filter_keeps_or_drops() {
        assert_eq!(Optional::of(4).filter(|v| v % 2 == 0), Optional::of(4));
        assert_eq!(Optional::of(3).filter(|v| v % 2 == 0), Optional::empty());
        assert_eq!(
            Optional::of("a").filter(|s| s.len() > 1),
            Optional::empty(),
        );
    }

    #[test]
    fn filter_skips_predicate_on_empty() {
        let calls = Cell::new(0);

        let filtered = Optional::<u8>::empty().filter(|_| {
            calls.set(calls.get() + 1);
            true
        });

        assert!(filtered.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn map_transforms_value() {
        assert_eq!(Optional::of(5).map(|x| x * 2).get(), Ok(10));
        assert_eq!(
            Optional::of(String::from("v")).map(|s| s),
            Optional::of(String::from("v")),
        );
    }

    #[test]
    fn map_skips_callback_on_empty() {
        let calls = Cell::new(0);

        let mapped = Optional::<u8>::empty().map(|v| {
            calls.set(calls.get() + 1);
            v
        });

        assert_eq!(mapped, Optional::empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn map_nullable_collapses_null_into_empty() {
        assert_eq!(
            Optional::of(1).map_nullable(|_| None::<u8>),
            Optional::empty(),
        );
        assert_eq!(
            Optional::of(1).map_nullable(|v| Some(v + 1)),
            Optional::of(2),
        );
        assert_eq!(
            Optional::<u8>::empty().map_nullable(Some),
            Optional::empty(),
        );
    }

    #[test]
    fn flat_map_returns_mapper_result() {
        assert_eq!(
            Optional::of(2).flat_map(|v| Optional::of(v * 10)),
            Optional::of(20),
        );
        assert_eq!(
            Optional::of(2).flat_map(|_| Optional::<u8>::empty()),
            Optional::empty(),
        );

        let calls = Cell::new(0);
        let mapped = Optional::<u8>::empty().flat_map(|v| {
            calls.set(calls.get() + 1);
            Optional::of(v)
        });
        assert!(mapped.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn try_flat_map_rejects_null_result() {
        assert!(Optional::of(1)
            .try_flat_map(|_| None::<Optional<u8>>)
            .is_err());
        assert_eq!(
            Optional::of(1).try_flat_map(|v| Some(Optional::of(v))),
            Ok(Optional::of(1)),
        );
        assert_eq!(
            Optional::<u8>::empty().try_flat_map(|_| None::<Optional<u8>>),
            Ok(Optional::empty()),
        );
    }

    #[test]
    fn or_uses_supplier_only_when_empty() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            Optional::of(9)
        };

        assert_eq!(Optional::of(1).or(supplier), Optional::of(1));
        assert_eq!(calls.get(), 0);

        assert_eq!(Optional::empty().or(supplier), Optional::of(9));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn try_or_rejects_null_result() {
        assert!(Optional::<u8>::empty().try_or(|| None).is_err());
        assert_eq!(
            Optional::<u8>::empty().try_or(|| Some(Optional::of(2))),
            Ok(Optional::of(2)),
        );
        assert_eq!(
            Optional::of(1).try_or(|| None),
            Ok(Optional::of(1)),
        );
    }

    #[test]
    fn or_else_returns_fallback() {
        assert_eq!(Optional::of(1).or_else(2), 1);
        assert_eq!(Optional::empty().or_else(42), 42);
    }

    #[test]
    fn or_else_get_invokes_supplier_lazily() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            7
        };

        assert_eq!(Optional::of(1).or_else_get(supplier), 1);
        assert_eq!(calls.get(), 0);
        assert_eq!(Optional::empty().or_else_get(supplier), 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn try_or_else_get_rejects_null_result() {
        assert!(Optional::<u8>::empty().try_or_else_get(|| None).is_err());
        assert_eq!(Optional::empty().try_or_else_get(|| Just(3)), Ok(3));
        assert_eq!(Optional::of(1).try_or_else_get(|| None), Ok(1));
    }

    #[test]
    fn compares_structurally() {
        assert_eq!(Optional::of(String::from("a")), Optional::of("a".into()));
        assert_ne!(Optional::of(1), Optional::of(2));
        assert_ne!(Optional::of(1), Optional::empty());
        assert_eq!(hash_of(&Optional::of(1)), hash_of(&Optional::of(1)));
        assert!(Optional::empty() < Optional::of(0));
    }

    #[test]
    fn displays_like_java() {
        assert_eq!(Optional::of(5).to_string(), "Optional[5]");
        assert_eq!(Optional::<u8>::empty().to_string(), "Optional.empty");
    }

    #[test]
    fn converts_from_and_into_option() {
        let opt: Optional<u8> = Some(1).into();
        assert_eq!(opt, Optional::of(1));

        let raw: Option<u8> = opt.into();
        assert_eq!(raw, Some(1));

        let raw = Some(2);
        assert_eq!(Optional::from_option_ref(&raw).as_option(), Some(&2));
        assert_eq!(Optional::of(3).as_ref(), Optional::of(&3));
    }

    #[test]
    fn iterates_at_most_once() {
        assert_eq!(Optional::of(1).into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(Optional::<u8>::empty().iter().count(), 0);

        let opt = Optional::of(2);
        assert_eq!(opt.iter().len(), 1);
        for v in &opt {
            assert_eq!(*v, 2);
        }
    }
}
