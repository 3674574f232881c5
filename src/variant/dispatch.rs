use std::cmp::Ordering;

use super::{Alternative, ClosedUnion, Member};

/// The type-specific operations of a single alternative, for a union of type `U`.
///
/// The operations capture no state, only ever reaching the stored value through
/// [`Member::peek`].
pub struct DispatchEntry<U> {
    pub to_string: fn(&U) -> String,
    pub compare: fn(&U, &U) -> Ordering,
}

impl<U> DispatchEntry<U> {
    /// Creates the entry for the alternative `T`.
    pub fn of<T, I>() -> DispatchEntry<U>
    where
        U: Member<T, I> + Dispatch,
        T: Alternative,
    {
        DispatchEntry {
            to_string: stringify::<U, T, I>,
            compare: compare::<U, T, I>,
        }
    }
}

impl<U> Clone for DispatchEntry<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for DispatchEntry<U> {}

/// A closed union whose alternatives all implement [`Alternative`], allowing it to be displayed
/// and compared.
///
/// The entries are resolved at compile time for each union type, so looking one up involves no
/// shared state and no initialization.
pub trait Dispatch: ClosedUnion {
    /// Returns the entry for the alternative at `tag`, or [`None`] if `tag` is out of range.
    fn entry(tag: usize) -> Option<DispatchEntry<Self>>;

    /// Returns the entry for the active alternative, or [`None`] if the union is empty.
    fn active_entry(&self) -> Option<DispatchEntry<Self>> {
        self.tag().and_then(Self::entry)
    }

    /// Returns the string form of the active value, or an empty string if the union is empty.
    fn render(&self) -> String {
        match self.active_entry() {
            Some(entry) => (entry.to_string)(self),
            None => String::new(),
        }
    }
}

/// Returns the dispatch table of `U`: one entry per alternative, in declaration order.
///
/// # Examples
/// ```
/// # use closed_union::{dispatch, Union2};
/// type Value = Union2<i32, String>;
///
/// let value = Value::from_value(String::from("five"));
/// let table: Vec<_> = dispatch::table::<Value>().collect();
/// assert_eq!(table.len(), 2);
/// assert_eq!((table[1].to_string)(&value), "five");
/// assert_eq!((table[0].to_string)(&value), "");
/// ```
pub fn table<U: Dispatch>() -> impl Iterator<Item = DispatchEntry<U>> {
    (0..U::ARITY).filter_map(U::entry)
}

/// Compares the string forms of two unions, which is the fallback whenever the values can't be
/// compared directly.
pub(crate) fn compare_rendered<U: Dispatch>(lhs: &U, rhs: &U) -> Ordering {
    lhs.render().cmp(&rhs.render())
}

fn stringify<U, T, I>(union: &U) -> String
where
    U: Member<T, I>,
    T: Alternative,
{
    union
        .peek()
        .map(Alternative::to_variant_string)
        .unwrap_or_default()
}

fn compare<U, T, I>(lhs: &U, rhs: &U) -> Ordering
where
    U: Member<T, I> + Dispatch,
    T: Alternative,
{
    let native = match (lhs.peek(), rhs.peek()) {
        (Some(a), Some(b)) => a.native_cmp(b),
        _ => None,
    };

    native.unwrap_or_else(|| compare_rendered(lhs, rhs))
}
