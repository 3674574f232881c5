use std::any;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::mem;

use super::dispatch::{self, Dispatch, DispatchEntry};
use super::{AccessError, Alternative, ClosedUnion, EmptyAccess, Index, Member};
use crate::util::result::ResultExtension;

/// Declares a closed union type over the listed type parameters, along with its [`Member`]
/// impls, inherent API and the comparison / display machinery.
///
/// The bracketed list repeats every parameter so that each [`Member`] impl can name the full
/// set of generics.
macro_rules! closed_union {
    (@member $name:ident [$($all:ident),+] $param:ident $variant:ident $index:literal) => {
        impl<$($all),+> Member<$param, Index<$index>> for $name<$($all),+> {
            const INDEX: usize = $index;

            fn wrap(value: $param) -> Self {
                $name::$variant(value)
            }

            fn peek(&self) -> Option<&$param> {
                match self {
                    $name::$variant(value) => Some(value),
                    _ => None,
                }
            }

            fn peek_mut(&mut self) -> Option<&mut $param> {
                match self {
                    $name::$variant(value) => Some(value),
                    _ => None,
                }
            }

            fn extract(&mut self) -> Option<$param> {
                match mem::take(self) {
                    $name::$variant(value) => Some(value),
                    other => {
                        *self = other;
                        None
                    }
                }
            }
        }
    };
    (
        $(#[$attr:meta])*
        $name:ident $all:tt = $arity:literal {
            $($param:ident => $variant:ident @ $index:literal),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name<$($param),+> {
            /// No alternative is active.
            Empty,
            $(
                #[doc = concat!("The alternative `", stringify!($param), "` is active.")]
                $variant($param),
            )+
        }

        impl<$($param),+> Default for $name<$($param),+> {
            fn default() -> Self {
                $name::Empty
            }
        }

        impl<$($param),+> ClosedUnion for $name<$($param),+> {
            const ARITY: usize = $arity;

            fn tag(&self) -> Option<usize> {
                match self {
                    $name::Empty => None,
                    $($name::$variant(_) => Some($index),)+
                }
            }

            fn type_name(&self) -> Option<&'static str> {
                match self {
                    $name::Empty => None,
                    $($name::$variant(_) => Some(any::type_name::<$param>()),)+
                }
            }
        }

        $(closed_union!(@member $name $all $param $variant $index);)+

        impl<$($param),+> $name<$($param),+> {
            /// Creates a new, empty union.
            pub const fn new() -> Self {
                $name::Empty
            }

            /// Creates a union with the alternative `T` active, holding `value`.
            pub fn from_value<T, I>(value: T) -> Self
            where
                Self: Member<T, I>,
            {
                <Self as Member<T, I>>::wrap(value)
            }

            /// Returns true if no alternative is active.
            pub const fn is_empty(&self) -> bool {
                matches!(self, $name::Empty)
            }

            /// Returns true if an alternative is active, the opposite of
            /// [`is_empty`](Self::is_empty).
            pub const fn is_active(&self) -> bool {
                !self.is_empty()
            }

            /// Returns true if `T` is the active alternative. Always false for an empty union.
            pub fn is_same_type<T, I>(&self) -> bool
            where
                Self: Member<T, I>,
            {
                <Self as Member<T, I>>::holds(self)
            }

            /// Drops the stored value, if any, leaving the union empty. Resetting an empty union
            /// does nothing.
            pub fn reset(&mut self) {
                *self = $name::Empty;
            }

            /// Stores `value`, dropping the previously stored value (of any alternative).
            pub fn store<T, I>(&mut self, value: T) -> &mut Self
            where
                Self: Member<T, I>,
            {
                *self = <Self as Member<T, I>>::wrap(value);
                self
            }

            /// Returns a reference to the stored `T`.
            ///
            /// # Errors
            /// Returns [`EmptyAccess`] if the union is empty, or
            /// [`TypeMismatch`](super::TypeMismatch) if another alternative is active.
            pub fn get<T, I>(&self) -> Result<&T, AccessError>
            where
                Self: Member<T, I>,
            {
                <Self as Member<T, I>>::try_get(self)
            }

            /// Returns a mutable reference to the stored `T`.
            ///
            /// # Errors
            /// Returns [`EmptyAccess`] if the union is empty, or
            /// [`TypeMismatch`](super::TypeMismatch) if another alternative is active.
            pub fn get_mut<T, I>(&mut self) -> Result<&mut T, AccessError>
            where
                Self: Member<T, I>,
            {
                <Self as Member<T, I>>::try_get_mut(self)
            }

            /// Moves the stored `T` out, leaving the union empty.
            ///
            /// # Errors
            /// Fails in the same cases as [`get`](Self::get), in which case the union is left
            /// as it was.
            pub fn take<T, I>(&mut self) -> Result<T, AccessError>
            where
                Self: Member<T, I>,
            {
                match <Self as Member<T, I>>::extract(self) {
                    Some(value) => Ok(value),
                    None => Err(<Self as Member<T, I>>::access_error(self)),
                }
            }

            /// Returns a reference to the stored `T`, like [`get`](Self::get).
            ///
            /// # Panics
            /// Panics if the union is empty or another alternative is active.
            pub fn value<T, I>(&self) -> &T
            where
                Self: Member<T, I>,
            {
                self.get::<T, I>().throw()
            }
        }

        impl<$($param: Alternative),+> $name<$($param),+> {
            /// Compares two unions.
            ///
            /// If both unions hold the same alternative and that type has a native ordering, the
            /// values are compared directly. In all other cases, the string forms of the unions
            /// are compared lexicographically, with an empty union having an empty string form.
            pub fn compare(&self, other: &Self) -> Ordering {
                match self.active_entry() {
                    Some(entry) => (entry.compare)(self, other),
                    None => dispatch::compare_rendered(self, other),
                }
            }

            /// Compares two unions, as with [`compare`](Self::compare), but refuses to compare
            /// from an empty union.
            ///
            /// # Errors
            /// Returns [`EmptyAccess`] if `self` is empty.
            pub fn try_compare(&self, other: &Self) -> Result<Ordering, AccessError> {
                match self.active_entry() {
                    Some(entry) => Ok((entry.compare)(self, other)),
                    None => Err(EmptyAccess.into()),
                }
            }

            /// Compares the union to a bare `value`, with the same result as comparing it to a
            /// union holding `value`.
            pub fn compare_value<T, I>(&self, value: &T) -> Ordering
            where
                Self: Member<T, I>,
                T: Alternative,
            {
                <Self as Member<T, I>>::peek(self)
                    .and_then(|stored| stored.native_cmp(value))
                    .unwrap_or_else(|| self.render().cmp(&value.to_variant_string()))
            }

            /// Returns true if the union compares equal to a bare `value`.
            pub fn eq_value<T, I>(&self, value: &T) -> bool
            where
                Self: Member<T, I>,
                T: Alternative,
            {
                self.compare_value::<T, I>(value) == Ordering::Equal
            }
        }

        impl<$($param: Alternative),+> Dispatch for $name<$($param),+> {
            fn entry(tag: usize) -> Option<DispatchEntry<Self>> {
                match tag {
                    $($index => Some(DispatchEntry::of::<$param, Index<$index>>()),)+
                    _ => None,
                }
            }
        }

        impl<$($param: Alternative),+> Display for $name<$($param),+> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.render())
            }
        }

        impl<$($param: Alternative),+> PartialEq for $name<$($param),+> {
            fn eq(&self, other: &Self) -> bool {
                self.compare(other) == Ordering::Equal
            }
        }

        impl<$($param: Alternative),+> PartialOrd for $name<$($param),+> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.compare(other))
            }
        }
    };
}

closed_union! {
    /// A closed union with a single alternative, which behaves like an [`Option`] with the
    /// union's API.
    Union1 [T0] = 1 {
        T0 => V0 @ 0,
    }
}

closed_union! {
    /// A closed union of two alternatives, holding a value of either `T0` or `T1`, or nothing.
    ///
    /// The alternatives need to be distinct types. Retrieving a value requires naming its type,
    /// with the position in the type list being inferred (`_`).
    ///
    /// # Examples
    /// ```
    /// # use closed_union::Union2;
    /// let mut value = Union2::<i32, String>::new();
    /// assert!(value.is_empty());
    ///
    /// value.store(5_i32);
    /// assert_eq!(value.get::<i32, _>(), Ok(&5));
    /// assert!(value.get::<String, _>().unwrap_err().is_type_mismatch());
    /// assert_eq!(value.to_string(), "5");
    ///
    /// // Different alternatives are compared by their string forms.
    /// assert!(value == Union2::from_value(String::from("5")));
    /// ```
    ///
    /// Types outside of the union are rejected at compile time:
    /// ```compile_fail
    /// # use closed_union::Union2;
    /// let mut value = Union2::<i32, String>::new();
    /// value.store(5.0_f32);
    /// ```
    Union2 [T0, T1] = 2 {
        T0 => V0 @ 0,
        T1 => V1 @ 1,
    }
}

closed_union! {
    /// A closed union of three alternatives. See [`Union2`] for usage.
    Union3 [T0, T1, T2] = 3 {
        T0 => V0 @ 0,
        T1 => V1 @ 1,
        T2 => V2 @ 2,
    }
}

closed_union! {
    /// A closed union of four alternatives. See [`Union2`] for usage.
    ///
    /// # Examples
    /// ```
    /// # use closed_union::Union4;
    /// let five = Box::new(5);
    /// let ptr: *const i32 = &*five;
    ///
    /// let mut value = Union4::<i32, f32, String, *const i32>::from_value(5_i32);
    /// value.store(5.54_f32);
    /// assert!(value.eq_value(&5.54_f32));
    ///
    /// value.store(ptr);
    /// assert_eq!(value.get::<*const i32, _>(), Ok(&ptr));
    /// ```
    Union4 [T0, T1, T2, T3] = 4 {
        T0 => V0 @ 0,
        T1 => V1 @ 1,
        T2 => V2 @ 2,
        T3 => V3 @ 3,
    }
}

closed_union! {
    /// A closed union of five alternatives. See [`Union2`] for usage.
    Union5 [T0, T1, T2, T3, T4] = 5 {
        T0 => V0 @ 0,
        T1 => V1 @ 1,
        T2 => V2 @ 2,
        T3 => V3 @ 3,
        T4 => V4 @ 4,
    }
}

closed_union! {
    /// A closed union of six alternatives. See [`Union2`] for usage.
    Union6 [T0, T1, T2, T3, T4, T5] = 6 {
        T0 => V0 @ 0,
        T1 => V1 @ 1,
        T2 => V2 @ 2,
        T3 => V3 @ 3,
        T4 => V4 @ 4,
        T5 => V5 @ 5,
    }
}

closed_union! {
    /// A closed union of seven alternatives. See [`Union2`] for usage.
    Union7 [T0, T1, T2, T3, T4, T5, T6] = 7 {
        T0 => V0 @ 0,
        T1 => V1 @ 1,
        T2 => V2 @ 2,
        T3 => V3 @ 3,
        T4 => V4 @ 4,
        T5 => V5 @ 5,
        T6 => V6 @ 6,
    }
}

closed_union! {
    /// A closed union of eight alternatives, the most supported. See [`Union2`] for usage.
    Union8 [T0, T1, T2, T3, T4, T5, T6, T7] = 8 {
        T0 => V0 @ 0,
        T1 => V1 @ 1,
        T2 => V2 @ 2,
        T3 => V3 @ 3,
        T4 => V4 @ 4,
        T5 => V5 @ 5,
        T6 => V6 @ 6,
        T7 => V7 @ 7,
    }
}
