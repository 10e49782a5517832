//! Tags and annotation markers.
//!
//! A record annotates a field by declaring an [`Annotate`] marker field right before it:
//!
//! ```
//! use fieldtags_core::{describe, Annotate, Record, Tag};
//!
//! #[derive(Tag)]
//! #[fieldtags(crate = "fieldtags_core")]
//! struct Indexed;
//!
//! #[derive(Tag)]
//! #[fieldtags(crate = "fieldtags_core")]
//! struct MaxLen<const N: usize>;
//!
//! #[derive(Record)]
//! #[fieldtags(crate = "fieldtags_core")]
//! struct User {
//!     _id: Annotate<Indexed>,
//!     id: u64,
//!     _name: Annotate<(Indexed, MaxLen<32>)>,
//!     name: String,
//! }
//!
//! let description = describe::<User>().unwrap();
//! assert_eq!(description.field_count(), 2);
//! assert!(description.field(1).unwrap().has_annotation::<MaxLen<32>>());
//! ```

use core::{fmt, marker::PhantomData};

use crate::{Family, Reflect, TypeToken};

/// A type usable as an annotation tag.
///
/// Use `#[derive(Tag)]`, which derives the family from the definition path of the type and also
/// implements [`Tags`] so a single tag can be written as `Annotate<MyTag>`.
pub trait Tag: 'static {
    /// The family every instantiation of this type belongs to.
    const FAMILY: Family;
    /// The token of this tag.
    const TOKEN: TypeToken = TypeToken::tag::<Self>(Self::FAMILY);
}

/// An ordered list of tags.
///
/// Implemented for `()` (no tags), for tuples of up to 12 [`Tag`]s, and by `#[derive(Tag)]` for
/// single tags.
pub trait Tags: 'static {
    /// The tokens of the tags, in order.
    const TOKENS: &'static [TypeToken];
}

impl Tags for () {
    const TOKENS: &'static [TypeToken] = &[];
}

macro_rules! impl_tags {
    ($($tag:ident),+) => {
        impl<$($tag: Tag),+> Tags for ($($tag,)+) {
            const TOKENS: &'static [TypeToken] = &[$($tag::TOKEN),+];
        }
    };
}

impl_tags!(A);
impl_tags!(A, B);
impl_tags!(A, B, C);
impl_tags!(A, B, C, D);
impl_tags!(A, B, C, D, E);
impl_tags!(A, B, C, D, E, F);
impl_tags!(A, B, C, D, E, F, G);
impl_tags!(A, B, C, D, E, F, G, H);
impl_tags!(A, B, C, D, E, F, G, H, I);
impl_tags!(A, B, C, D, E, F, G, H, I, J);
impl_tags!(A, B, C, D, E, F, G, H, I, J, K);
impl_tags!(A, B, C, D, E, F, G, H, I, J, K, L);

/// An annotation marker: the tags `L` describe the field declared right after it.
///
/// The marker is zero-sized. It occupies a record slot like any field but is folded into the
/// following field's descriptor by [`describe`](crate::describe). A marker in the last slot is a
/// dangling annotation.
pub struct Annotate<L = ()>(PhantomData<fn() -> L>);

impl<L: Tags> Annotate<L> {
    /// Creates the marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<L: Tags> Reflect for Annotate<L> {
    const TOKEN: TypeToken = TypeToken::annotation::<Self>(L::TOKENS);
}

impl<L: Tags> Default for Annotate<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Tags> Clone for Annotate<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Tags> Copy for Annotate<L> {}

impl<L: Tags> PartialEq for Annotate<L> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<L: Tags> Eq for Annotate<L> {}

impl<L: Tags> fmt::Debug for Annotate<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(L::TOKENS).finish()
    }
}
