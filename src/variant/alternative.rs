use std::cmp::Ordering;

/// A type that can be stored as an alternative of a union which is compared or displayed.
///
/// Every alternative needs a string form, because the string form is the common denominator
/// that allows values of different alternatives to be compared. Types that can also be ordered
/// against themselves should return [`Some`] from [`native_cmp`](Alternative::native_cmp), which
/// is then preferred whenever both sides hold that type.
///
/// For user types, [`display_alternative!`](crate::display_alternative) and
/// [`ordered_alternative!`](crate::ordered_alternative) provide implementations based on
/// [`Display`](std::fmt::Display) and [`PartialOrd`].
pub trait Alternative {
    /// Returns the string form of the value.
    fn to_variant_string(&self) -> String;

    /// Compares two values of the same type, or returns [`None`] if the type has no ordering of
    /// its own.
    fn native_cmp(&self, _other: &Self) -> Option<Ordering> {
        None
    }
}

/// Orders two values using only `==` and `<`: equal values are [`Ordering::Equal`], otherwise
/// `a < b` decides between [`Ordering::Less`] and [`Ordering::Greater`].
///
/// Unlike [`PartialOrd::partial_cmp`] this never fails, so incomparable values (NaN) are
/// treated as greater.
pub fn native_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Implements [`Alternative`] for the provided types using their [`Display`](std::fmt::Display)
/// implementation. The types have no native ordering, so unions holding them are always compared
/// by their string forms.
///
/// # Examples
/// ```
/// # use closed_union::{display_alternative, Union2};
/// # use std::fmt;
/// struct Celsius(i32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}C", self.0)
///     }
/// }
///
/// display_alternative!(Celsius);
///
/// let temp = Union2::<Celsius, String>::from_value(Celsius(21));
/// assert_eq!(temp.to_string(), "21C");
/// assert!(temp == Union2::from_value(String::from("21C")));
/// ```
#[macro_export]
macro_rules! display_alternative {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Alternative for $ty {
                fn to_variant_string(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

/// Implements [`Alternative`] for the provided types using their [`Display`](std::fmt::Display)
/// and [`PartialOrd`] implementations.
#[macro_export]
macro_rules! ordered_alternative {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Alternative for $ty {
                fn to_variant_string(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }

                fn native_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                    ::std::option::Option::Some($crate::native_order(self, other))
                }
            }
        )+
    };
}

ordered_alternative!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl Alternative for str {
    fn to_variant_string(&self) -> String {
        self.to_owned()
    }

    fn native_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(native_order(self, other))
    }
}

impl Alternative for () {
    fn to_variant_string(&self) -> String {
        String::new()
    }

    fn native_cmp(&self, _other: &Self) -> Option<Ordering> {
        Some(Ordering::Equal)
    }
}

/// References use the string form and ordering of the value they point to, so a union holding
/// `&5` is equal to one holding `5`.
impl<T: Alternative + ?Sized> Alternative for &T {
    fn to_variant_string(&self) -> String {
        (**self).to_variant_string()
    }

    fn native_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).native_cmp(*other)
    }
}

// Raw pointers are displayed and ordered by address, they are never dereferenced. Store a
// reference instead to use the pointee.
impl<T: ?Sized> Alternative for *const T {
    fn to_variant_string(&self) -> String {
        format!("{:p}", *self)
    }

    fn native_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(native_order(self, other))
    }
}

impl<T: ?Sized> Alternative for *mut T {
    fn to_variant_string(&self) -> String {
        format!("{:p}", *self)
    }

    fn native_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(native_order(self, other))
    }
}

impl<T: Alternative + ?Sized> Alternative for Box<T> {
    fn to_variant_string(&self) -> String {
        (**self).to_variant_string()
    }

    fn native_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).native_cmp(other)
    }
}

/// [`None`] has an empty string form, like an empty union.
impl<T: Alternative> Alternative for Option<T> {
    fn to_variant_string(&self) -> String {
        match self {
            Some(value) => value.to_variant_string(),
            None => String::new(),
        }
    }

    fn native_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Some(a), Some(b)) => a.native_cmp(b),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}
