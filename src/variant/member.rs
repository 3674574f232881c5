use std::any;

use super::{AccessError, EmptyAccess, TypeMismatch};

/// A marker for the position of an alternative within a union's type list.
///
/// `Index` only exists to keep the [`Member`] impls of a union from overlapping. It is never
/// named explicitly, instead being inferred at each call site, e.g. `union.get::<i32, _>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Index<const N: usize>;

/// The operations shared by every closed union, regardless of which alternatives it holds.
pub trait ClosedUnion: Default {
    /// The number of alternatives that the union can hold.
    const ARITY: usize;

    /// Returns the position of the active alternative, or [`None`] if the union is empty.
    fn tag(&self) -> Option<usize>;

    /// Returns the name of the active alternative's type, or [`None`] if the union is empty.
    fn type_name(&self) -> Option<&'static str>;
}

/// Proof that `T` is one of the alternatives of a closed union, found at position `I`.
///
/// A type that isn't part of the union has no implementation, so storing or retrieving it is
/// rejected at compile time.
pub trait Member<T, I>: ClosedUnion {
    /// The position of `T` within the union's type list.
    const INDEX: usize;

    /// Creates a union with `T` active.
    fn wrap(value: T) -> Self;

    /// Returns a reference to the stored value if `T` is active.
    fn peek(&self) -> Option<&T>;

    /// Returns a mutable reference to the stored value if `T` is active.
    fn peek_mut(&mut self) -> Option<&mut T>;

    /// Moves the stored value out if `T` is active, leaving the union empty. Otherwise, the
    /// union is left untouched.
    fn extract(&mut self) -> Option<T>;

    /// Returns true if `T` is the active alternative.
    fn holds(&self) -> bool {
        self.tag() == Some(Self::INDEX)
    }

    /// Produces the error describing why `T` couldn't be accessed. Only meaningful when `T`
    /// isn't active.
    fn access_error(&self) -> AccessError {
        match self.type_name() {
            None => EmptyAccess.into(),
            Some(found) => TypeMismatch {
                expected: any::type_name::<T>(),
                found,
            }
            .into(),
        }
    }

    /// Returns a reference to the stored `T`.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if the union is empty or [`TypeMismatch`] if another alternative
    /// is active.
    fn try_get(&self) -> Result<&T, AccessError> {
        match self.peek() {
            Some(value) => Ok(value),
            None => Err(self.access_error()),
        }
    }

    /// Returns a mutable reference to the stored `T`.
    ///
    /// # Errors
    /// Returns [`EmptyAccess`] if the union is empty or [`TypeMismatch`] if another alternative
    /// is active.
    fn try_get_mut(&mut self) -> Result<&mut T, AccessError> {
        let error = self.access_error();
        self.peek_mut().ok_or(error)
    }
}
