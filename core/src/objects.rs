//! Guards validating [`Nullable`] values.
//!
//! Every guard signals a null-violation as a [`NullPointer`] error, rather than
//! panicking.

use std::borrow::Cow;

use crate::{NullPointer, Nullable};

/// Unwraps the provided [`Nullable`] `value`.
///
/// # Errors
///
/// With a [`NullPointer`] if the `value` is null.
///
/// # Example
///
/// ```rust
/// # use nullsafe_core::objects;
/// #
/// assert_eq!(objects::require_non_null(Some(1)), Ok(1));
/// assert!(objects::require_non_null(None::<u8>).is_err());
/// ```
pub fn require_non_null<N>(value: N) -> Result<N::Value, NullPointer>
where
    N: Nullable,
{
    value.into_option().ok_or_else(|| null_violation(NullPointer::new()))
}

/// Unwraps the provided [`Nullable`] `value`, same as [`require_non_null()`],
/// but attaches the given `message` to the [`NullPointer`] error.
///
/// # Errors
///
/// With a [`NullPointer`] carrying the `message` if the `value` is null.
pub fn require_non_null_with<N, M>(
    value: N,
    message: M,
) -> Result<N::Value, NullPointer>
where
    N: Nullable,
    M: Into<Cow<'static, str>>,
{
    value
        .into_option()
        .ok_or_else(|| null_violation(NullPointer::with_message(message)))
}

/// Unwraps the provided [`Nullable`] `value`, falling back to the `default`
/// one if it's null.
///
/// # Errors
///
/// With a [`NullPointer`] if both the `value` and the `default` are null.
pub fn require_non_null_else<N, D>(
    value: N,
    default: D,
) -> Result<N::Value, NullPointer>
where
    N: Nullable,
    D: Nullable<Value = N::Value>,
{
    match value.into_option() {
        Some(v) => Ok(v),
        None => require_non_null_with(default, "default"),
    }
}

/// Unwraps the provided [`Nullable`] `value`, falling back to the one
/// returned by the `supplier` if it's null.
///
/// The `supplier` is invoked only if the `value` is null.
///
/// # Errors
///
/// With a [`NullPointer`] if both the `value` and the result of `supplier` are
/// null.
pub fn require_non_null_else_get<N, D, F>(
    value: N,
    supplier: F,
) -> Result<N::Value, NullPointer>
where
    N: Nullable,
    D: Nullable<Value = N::Value>,
    F: FnOnce() -> D,
{
    match value.into_option() {
        Some(v) => Ok(v),
        None => require_non_null_with(supplier(), "supplier()"),
    }
}

/// Indicates whether the provided `value` is null.
#[inline]
#[must_use]
pub fn is_null<N: Nullable>(value: &N) -> bool {
    value.is_null()
}

/// Indicates whether the provided `value` is not null.
#[inline]
#[must_use]
pub fn non_null<N: Nullable>(value: &N) -> bool {
    !value.is_null()
}

/// Traces the null-violation before handing it out.
fn null_violation(err: NullPointer) -> NullPointer {
    log::trace!(target: "nullsafe", "null-violation: {}", err);
    err
}
