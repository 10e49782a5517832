//! Opaque type identities.

use core::{
    any::{type_name, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

use serde::Serialize;

/// An opaque identity denoting a type.
///
/// Two tokens are equal iff they denote the same type. Tokens are built by `const fn`s so they can
/// live in associated consts ([`Reflect::TOKEN`](crate::Reflect::TOKEN),
/// [`Tag::TOKEN`](crate::Tag::TOKEN)).
///
/// A token may additionally carry:
///
/// - a [`Family`], if it denotes a tag type, and
/// - an annotation payload (the tokens of the tags it wraps), if it denotes an
///   [`Annotate`](crate::Annotate) marker.
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: fn() -> TypeId,
    name: fn() -> &'static str,
    family: Option<Family>,
    annotation: Option<&'static [TypeToken]>,
}

impl TypeToken {
    /// The token of `T`.
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>,
            name: type_name::<T>,
            family: None,
            annotation: None,
        }
    }

    /// The token of the tag type `T`, instantiated from `family`.
    pub const fn tag<T: ?Sized + 'static>(family: Family) -> Self {
        Self {
            family: Some(family),
            ..Self::of::<T>()
        }
    }

    /// The token of the annotation marker type `T`, wrapping `tags`.
    pub const fn annotation<T: ?Sized + 'static>(tags: &'static [TypeToken]) -> Self {
        Self {
            annotation: Some(tags),
            ..Self::of::<T>()
        }
    }

    /// The [`TypeId`] of the denoted type.
    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// The full name of the denoted type.
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    /// The family of the denoted tag type, if any.
    pub const fn family(&self) -> Option<Family> {
        self.family
    }

    /// Whether this token denotes an annotation marker.
    pub const fn is_annotation(&self) -> bool {
        self.annotation.is_some()
    }

    /// The tags wrapped by an annotation marker.
    pub const fn annotation_tags(&self) -> Option<&'static [TypeToken]> {
        self.annotation
    }

    /// Whether both tokens denote the same type.
    pub fn same_as(&self, other: &TypeToken) -> bool {
        self.id() == other.id()
    }

    /// Whether this token denotes a tag instantiated from `family`.
    pub fn in_family(&self, family: Family) -> bool {
        self.family == Some(family)
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({})", self.name())
    }
}

/// Prints the type name with every path stripped, e.g. `Vec<String>`.
impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_short_name(f, self.name())
    }
}

impl Serialize for TypeToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The identity of a generic tag type constructor.
///
/// All instantiations of a generic tag type (`Range<u8>`, `Range<i64>`) share one family. It is
/// keyed by the definition path of the type without its generic arguments and by the source
/// location of the definition. `module_path!()` does not see function scopes, so the location
/// keeps apart same-named tags declared in different functions of one module.
///
/// `#[derive(Tag)]` computes both at the definition site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Family {
    path: &'static str,
    site: &'static str,
}

impl Family {
    /// Creates a family from the definition path and source location of a tag type.
    pub const fn new(path: &'static str, site: &'static str) -> Self {
        Self { path, site }
    }

    /// The definition path.
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// The source location of the definition, as `file:line:column`.
    pub const fn site(&self) -> &'static str {
        self.site
    }

    /// The last segment of the definition path.
    pub fn name(&self) -> &'static str {
        self.path.rsplit("::").next().unwrap_or(self.path)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn write_short_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let mut segment_start = None;
    for (i, c) in name.char_indices() {
        let in_path = c.is_alphanumeric() || c == '_' || c == ':';
        match (in_path, segment_start) {
            (true, None) => segment_start = Some(i),
            (false, Some(start)) => {
                write_last_segment(f, &name[start..i])?;
                segment_start = None;
            }
            _ => {}
        }
        if !in_path {
            write!(f, "{c}")?;
        }
    }
    match segment_start {
        Some(start) => write_last_segment(f, &name[start..]),
        None => Ok(()),
    }
}

fn write_last_segment(f: &mut fmt::Formatter<'_>, path: &str) -> fmt::Result {
    f.write_str(path.rsplit("::").next().unwrap_or(path))
}
