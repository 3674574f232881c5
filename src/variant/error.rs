use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("attempted to access an empty value")]
pub struct EmptyAccess;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("attempted to access a value of type {expected} while {found} is active")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

/// The error returned by fallible accessors of a union, when the requested alternative isn't
/// the one that's currently stored.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum AccessError {
    EmptyAccess(EmptyAccess),
    TypeMismatch(TypeMismatch),
}
