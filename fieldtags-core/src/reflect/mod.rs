//! Type tokens for field types.
//!
//! This module provides implementations of the [`Reflect`] trait for standard Rust types, so they
//! can occupy slots of a [`Record`](crate::Record).
//!
//! Implementations live in `primitives` (numbers, `bool`, `char`, strings), `collections`
//! (sequences, sets, maps, arrays and slices) and `wrappers` (pointers, cells, locks, `Option`,
//! `Result`, `PhantomData`).
//!
//! Tuples implement it together with [`Record`](crate::Record), annotation markers in
//! [`annotate`](crate::annotate).

use crate::TypeToken;

/// A type that can occupy a record slot.
///
/// Every field type of a `#[derive(Record)]` record must implement this trait. The derive macro
/// implements it for the record itself, so records nest.
///
/// ```
/// use fieldtags_core::{Reflect, TypeToken};
///
/// struct Meters(f64);
///
/// impl Reflect for Meters {
///     const TOKEN: TypeToken = TypeToken::of::<Self>();
/// }
///
/// assert_eq!(Meters::TOKEN, TypeToken::of::<Meters>());
/// assert!(!Meters::TOKEN.is_annotation());
/// ```
pub trait Reflect: 'static {
    /// The token of the slot type.
    const TOKEN: TypeToken;
}

// Macro utilities.
#[macro_use]
mod macros;

// Implementation modules.
mod collections;
mod primitives;
mod wrappers;
