//! Field counting by placeholder probing.
//!
//! A record's arity is found without any declared schema: it is constructed from `k = 0, 1, 2, …`
//! placeholders until a construction succeeds. Too few placeholders fail because every slot must
//! be supplied; too many fail because a surplus placeholder is left unused.

use crate::{Error, Placeholders, Record, Reflect, Result};

/// The upper bound of the counting probe.
///
/// Selected with the `probe-bound-*` features; the highest enabled one wins.
#[cfg(feature = "probe-bound-256")]
pub const MAX_FIELDS: usize = 256;
/// The upper bound of the counting probe.
///
/// Selected with the `probe-bound-*` features; the highest enabled one wins.
#[cfg(all(not(feature = "probe-bound-256"), feature = "probe-bound-64"))]
pub const MAX_FIELDS: usize = 64;
/// The upper bound of the counting probe.
///
/// Selected with the `probe-bound-*` features; the highest enabled one wins.
#[cfg(all(
    not(feature = "probe-bound-256"),
    not(feature = "probe-bound-64"),
    feature = "probe-bound-16"
))]
pub const MAX_FIELDS: usize = 16;
/// The upper bound of the counting probe.
///
/// Selected with the `probe-bound-*` features; the highest enabled one wins.
#[cfg(all(
    not(feature = "probe-bound-256"),
    not(feature = "probe-bound-64"),
    not(feature = "probe-bound-16")
))]
pub const MAX_FIELDS: usize = 64;

/// Whether `R` can be constructed from exactly `placeholders` placeholders.
pub fn accepts<R: Record>(placeholders: usize) -> bool {
    let mut budget = Budget::new(placeholders);

    R::fill(&mut budget).is_ok() && budget.remaining == 0
}

/// The number of slots of `R`, markers included.
///
/// Probes in increasing order and returns the smallest accepted placeholder count.
pub fn count_fields<R: Record>() -> Result<usize> {
    let record = R::TOKEN;
    for k in 0..=MAX_FIELDS {
        trace!("Probing `{}` with {} placeholders", record, k);
        if accepts::<R>(k) {
            debug!("`{}` has {} slots", record, k);

            return Ok(k);
        }
    }
    warn!(
        "`{}` is not constructible within {} placeholders",
        record, MAX_FIELDS
    );

    Err(Error::FieldCountNotFound {
        record: record.name(),
        bound: MAX_FIELDS,
    })
}

/// Placeholders that run out after a fixed budget.
#[derive(Debug)]
struct Budget {
    remaining: usize,
    requested: usize,
}

impl Budget {
    fn new(placeholders: usize) -> Self {
        Self {
            remaining: placeholders,
            requested: 0,
        }
    }
}

impl Placeholders for Budget {
    fn convert<T: Reflect + ?Sized>(&mut self) -> Result<()> {
        self.requested += 1;
        self.remaining = self
            .remaining
            .checked_sub(1)
            .ok_or(Error::PlaceholdersExhausted {
                requested: self.requested,
            })?;

        Ok(())
    }
}
