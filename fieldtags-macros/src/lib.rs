#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod record;
mod tag;
mod utils;

/// Derives `Record` (and `Reflect`) for a struct.
///
/// The generated `fill` requests one placeholder per field, in declaration order, and converts it
/// into the declared field type. Named, tuple and unit structs are supported.
///
/// Annotation markers are ordinary fields of type `Annotate<..>` placed right before the field
/// they describe:
///
/// ```rust
/// use fieldtags::{describe, Annotate, Record, Tag};
///
/// #[derive(Tag)]
/// struct Unit<const SCALE: u32>;
///
/// #[derive(Record)]
/// struct Reading {
///     sensor: String,
///     _value: Annotate<Unit<1000>>,
///     value: i64,
/// }
///
/// let description = describe::<Reading>().unwrap();
/// assert_eq!(description.field_count(), 2);
/// assert!(description.field(1).unwrap().has_annotation::<Unit<1000>>());
/// assert!(!description.field(1).unwrap().has_annotation::<Unit<1>>());
/// ```
///
/// # Limitations
///
/// A marker must be followed by a field. For non-generic structs this is checked at compile time:
///
/// ```rust,compile_fail
/// # use fieldtags::{Annotate, Record, Tag};
/// # #[derive(Tag)]
/// # struct Doc;
/// #[derive(Record)]
/// struct Dangling {
///     x: i32,
///     _doc: Annotate<Doc>, // This will fail to compile
/// }
/// ```
///
/// Generic structs are checked when they are described, which then fails with
/// `Error::DanglingAnnotation`.
///
/// Enums and unions are not records:
///
/// ```rust,compile_fail
/// # use fieldtags::Record;
/// #[derive(Record)] // This will fail to compile
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
/// ```
///
/// ```rust,compile_fail
/// # use fieldtags::Record;
/// #[derive(Record)] // This will fail to compile
/// union Bits {
///     int: u32,
///     float: f32,
/// }
/// ```
///
/// Neither are structs with lifetime parameters, since every reflected type is `'static`:
///
/// ```rust,compile_fail
/// # use fieldtags::Record;
/// #[derive(Record)] // This will fail to compile
/// struct Borrowed<'a> {
///     name: &'a str,
/// }
/// ```
#[proc_macro_derive(Record, attributes(fieldtags))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}

/// Derives `Tag` (and `Tags`) for a type.
///
/// The family of the tag is its definition path without generic arguments, together with the
/// source location of the definition. Every instantiation of a generic tag belongs to the same
/// family, while same-named tags declared in different functions do not:
///
/// ```rust
/// use core::marker::PhantomData;
/// use fieldtags::{Tag, TypeToken};
///
/// #[derive(Tag)]
/// struct Range<T>(PhantomData<T>);
///
/// assert_eq!(<Range<u8>>::FAMILY, <Range<String>>::FAMILY);
/// assert_eq!(<Range<u8>>::FAMILY.name(), "Range");
/// assert_ne!(<Range<u8> as Tag>::TOKEN, TypeToken::of::<Range<String>>());
/// ```
///
/// Any kind of type can be a tag, including enums and unions. Lifetime parameters are rejected.
#[proc_macro_derive(Tag, attributes(fieldtags))]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    tag::derive_tag(input)
}
