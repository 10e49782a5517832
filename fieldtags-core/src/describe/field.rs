//! Field descriptors and annotation queries.

use core::fmt;

use serde::Serialize;

use crate::{Error, Family, Reflect, Result, Seq, Tag, Tags, TypeToken};

/// A field's real type plus the tags of the annotation markers declared before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// The type of the field. Never an annotation marker.
    #[serde(rename = "type")]
    ty: TypeToken,
    /// The tags, in declaration order.
    annotations: Seq<'static, TypeToken>,
}

impl FieldDescriptor {
    /// Creates a descriptor. Fails if `ty` is an annotation marker.
    pub fn new(ty: TypeToken, annotations: Seq<'static, TypeToken>) -> Result<Self> {
        if ty.is_annotation() {
            return Err(Error::AnnotationAsFieldType { ty: ty.name() });
        }

        Ok(Self { ty, annotations })
    }

    /// The descriptor of a `T` field annotated with the tags `L`.
    pub fn of<T: Reflect, L: Tags>() -> Result<Self> {
        Self::new(T::TOKEN, Seq::Borrowed(L::TOKENS))
    }

    /// The type of the field.
    pub fn ty(&self) -> &TypeToken {
        &self.ty
    }

    /// Whether the field is of type `T`.
    pub fn is<T: Reflect + ?Sized>(&self) -> bool {
        self.ty.same_as(&T::TOKEN)
    }

    /// The tags of the field, in declaration order.
    pub fn annotations(&self) -> &Seq<'static, TypeToken> {
        &self.annotations
    }

    /// Whether the tag `T` is attached to the field.
    pub fn has_annotation<T: Tag>(&self) -> bool {
        self.has_annotation_token(&T::TOKEN)
    }

    /// Whether the tag denoted by `tag` is attached to the field.
    pub fn has_annotation_token(&self, tag: &TypeToken) -> bool {
        !self.annotations.filter(|a| a.same_as(tag)).is_empty()
    }

    /// Whether a tag of `family` is attached to the field, whatever its type arguments.
    pub fn has_family(&self, family: Family) -> bool {
        !self.matching(family).is_empty()
    }

    /// Whether a tag of the family of `T` is attached to the field.
    ///
    /// Any instantiation of a generic tag names its family: `has_family_of::<Range<()>>()` also
    /// matches `Range<i64>`.
    pub fn has_family_of<T: Tag>(&self) -> bool {
        self.has_family(T::FAMILY)
    }

    /// The first tag of `family`, in declaration order.
    ///
    /// Fails with [`Error::AnnotationNotFound`] unless [`Self::has_family`] holds.
    pub fn find_family(&self, family: Family) -> Result<TypeToken> {
        self.matching(family)
            .head()
            .copied()
            .map_err(|_| Error::AnnotationNotFound {
                family: family.path(),
            })
    }

    /// The first tag of the family of `T`, in declaration order.
    pub fn find_family_of<T: Tag>(&self) -> Result<TypeToken> {
        self.find_family(T::FAMILY)
    }

    fn matching(&self, family: Family) -> Seq<'static, TypeToken> {
        self.annotations.filter(|a| a.in_family(family))
    }
}

/// Prints the type followed by its tags, e.g. `u64 #[Indexed] #[MaxLen<32>]`.
impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)?;
        for tag in self.annotations.iter() {
            write!(f, " #[{tag}]")?;
        }

        Ok(())
    }
}
