//! Records and their construction from placeholders.
//!
//! A record declares no schema. What it can do is to be constructed, in declaration order, from a
//! sequence of [`Placeholders`], each of which converts into whatever type its slot expects. Field
//! counting and type capture are both expressed as such constructions.

use crate::{RecordDescription, Reflect, Result};

/// A source of placeholder values for aggregate construction.
pub trait Placeholders {
    /// Converts the next placeholder into a value for a slot of type `T`.
    ///
    /// Fails if no placeholder is left.
    fn convert<T: Reflect + ?Sized>(&mut self) -> Result<()>;
}

/// A plain data record.
///
/// Use `#[derive(Record)]`. Tuples up to 12 elements are records too.
///
/// ```
/// use fieldtags_core::{count::count_fields, Record};
///
/// #[derive(Record)]
/// #[fieldtags(crate = "fieldtags_core")]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// assert_eq!(count_fields::<Point>().unwrap(), 2);
/// assert_eq!(count_fields::<(u8, u8, u8)>().unwrap(), 3);
/// ```
pub trait Record: Reflect {
    /// Constructs the record, requesting one placeholder per slot in declaration order.
    fn fill<P: Placeholders>(placeholders: &mut P) -> Result<()>;

    /// The memoized description of this record. See [`describe`](crate::describe()).
    fn describe() -> Result<&'static RecordDescription>
    where
        Self: Sized,
    {
        crate::describe::<Self>()
    }
}

mod tuples;
