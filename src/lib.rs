//! This crate provides closed tagged unions: containers holding a single value whose type is one
//! of a fixed list, or nothing at all.
//!
//! # Purpose
//! Sometimes a value can be one of a handful of types, all of which are known when writing the
//! code, but naming a dedicated enum for every such combination is more ceremony than it's worth.
//! [`Union2<i32, String>`](Union2) (and its siblings, up to [`Union8`]) fill that gap, while
//! keeping the API that a hand-written enum would lack: typed retrieval, comparison across
//! alternatives and stringification.
//!
//! # Error Handling
//! Asking for the wrong type at runtime is a normal occurrence rather than a bug, so accessors
//! return [`Result`]s with an [`AccessError`], which is either an [`EmptyAccess`] or a
//! [`TypeMismatch`]. These are plain structs that implement [`Error`](std::error::Error), with the
//! enum allowing static dispatch over the two. Asking for a type that isn't part of the union
//! at all is caught at compile time instead.
//!
//! Where handling an error would be more ceremony than it's worth, [`Union2::value`] (and its
//! equivalents) panic instead.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types, because writing the same
//! [`Display`](std::fmt::Display) and [`From`] impls for each of them isn't helpful.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod variant;

pub use variant::*;

pub(crate) mod util;
