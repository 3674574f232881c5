//! Closed tagged unions, holding a value of one of a fixed set of types, or nothing.
//!
//! # Purpose
//! A union such as [`Union2<i32, String>`](Union2) is an alternative to dynamic typing for the
//! cases where every type that could be stored is known up front. It is an enum underneath, so
//! it never allocates and the compiler guarantees that at most one value is live at a time.
//!
//! # Method
//! The unions are generic enums, one per arity, all declared by a single macro. Type-based access
//! (`get::<T, _>()`) is provided by the [`Member`] trait, which has an implementation for each
//! alternative. Asking for a type that isn't an alternative doesn't compile.
//!
//! Comparison and display are dispatched on the active alternative through a [`Dispatch`] table,
//! which needs every alternative to implement [`Alternative`]. Values of the same type are
//! compared natively when the type has an ordering, everything else falls back to comparing the
//! string forms, meaning that `5_i32` and `"5"` are considered equal.

mod alternative;
pub mod dispatch;
mod error;
mod member;
mod unions;

pub use alternative::*;
pub use dispatch::{Dispatch, DispatchEntry};
pub use error::*;
pub use member::*;
pub use unions::*;

/// Returns a reference to the `T` stored in `union`. The free form of
/// [`Union2::get`] and friends.
///
/// # Errors
/// Returns [`EmptyAccess`] if the union is empty, or [`TypeMismatch`] if another alternative is
/// active.
///
/// # Examples
/// ```
/// # use closed_union::{get, Union2};
/// let value = Union2::<i32, *const i32>::from_value(5_i32);
/// let five: &i32 = get(&value).unwrap();
/// assert_eq!(*five, 5);
/// assert!(get::<*const i32, _, _>(&value).is_err());
/// ```
pub fn get<T, I, U: Member<T, I>>(union: &U) -> Result<&T, AccessError> {
    union.try_get()
}

/// Returns a mutable reference to the `T` stored in `union`.
///
/// # Errors
/// Returns [`EmptyAccess`] if the union is empty, or [`TypeMismatch`] if another alternative is
/// active.
pub fn get_mut<T, I, U: Member<T, I>>(union: &mut U) -> Result<&mut T, AccessError> {
    union.try_get_mut()
}
