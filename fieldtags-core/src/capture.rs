//! Field type capture through a side-channel registry.
//!
//! A record is constructed exactly once from `count` per-slot placeholders. Each placeholder, when
//! asked to convert into its slot type, registers `(record, slot) -> slot type` in a process-wide
//! registry. The registry is append-only and every key is written at most once; [`type_at`] reads
//! it back.

use std::{
    any::TypeId,
    collections::{hash_map::Entry, HashMap},
    sync::{LazyLock, PoisonError, RwLock},
};

use crate::{Error, Placeholders, Record, Reflect, Result, Seq, TypeToken};

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::new()));

/// Captures the slot types of `R`, constructing it from `count` placeholders.
///
/// Only the first call per record type constructs it; later calls read the registry and must
/// agree on `count`.
pub fn capture_field_types<R: Record>(count: usize) -> Result<Seq<'static, TypeToken>> {
    let record = R::TOKEN;
    // Held across the construction, so a record is never constructed twice.
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(captured) = registry.field_count(&record) {
        if captured != count {
            warn!(
                "`{}` was captured with {} slots, not {}",
                record, captured, count
            );

            return Err(Error::FieldCountMismatch {
                record: record.name(),
                captured,
                requested: count,
            });
        }
        trace!("`{}` already captured", record);

        return registry.types_of(&record);
    }

    let mut capture = Capture::new(count);
    let filled = R::fill(&mut capture);
    if filled.is_err() || capture.slots.len() != count {
        warn!(
            "`{}` can not be constructed from {} placeholders",
            record, count
        );

        return Err(Error::ConstructionFailed {
            record: record.name(),
            placeholders: count,
        });
    }
    registry.commit(record, &capture.slots)?;

    Ok(Seq::from(capture.slots))
}

/// The captured type of slot `index` of `R`.
///
/// Fails if `R` has not been captured yet or `index` is past its field count.
pub fn type_at<R: Record>(index: usize) -> Result<TypeToken> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&R::TOKEN, index)
}

/// Whether `R` has been captured.
pub fn is_captured<R: Record>() -> bool {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .field_count(&R::TOKEN)
        .is_some()
}

/// An append-only map from `(record, slot)` to the slot type.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    slots: HashMap<(TypeId, usize), TypeToken>,
    field_counts: HashMap<TypeId, usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers the type of one slot. Fails if the slot is already registered.
    pub(crate) fn register(
        &mut self,
        record: TypeToken,
        index: usize,
        ty: TypeToken,
    ) -> Result<()> {
        match self.slots.entry((record.id(), index)) {
            Entry::Occupied(_) => Err(Error::SlotAlreadyRegistered {
                record: record.name(),
                index,
            }),
            Entry::Vacant(entry) => {
                trace!("Registered `{}` slot {} as `{}`", record, index, ty);
                entry.insert(ty);

                Ok(())
            }
        }
    }

    /// Registers every slot of a record and marks it as captured.
    pub(crate) fn commit(&mut self, record: TypeToken, slots: &[TypeToken]) -> Result<()> {
        for (index, ty) in slots.iter().enumerate() {
            self.register(record, index, *ty)?;
        }
        self.field_counts.insert(record.id(), slots.len());
        debug!("Captured {} slots of `{}`", slots.len(), record);

        Ok(())
    }

    /// The registered type of a slot.
    pub(crate) fn get(&self, record: &TypeToken, index: usize) -> Result<TypeToken> {
        self.slots
            .get(&(record.id(), index))
            .copied()
            .ok_or(Error::SlotNotCaptured {
                record: record.name(),
                index,
            })
    }

    /// The field count of a captured record.
    pub(crate) fn field_count(&self, record: &TypeToken) -> Option<usize> {
        self.field_counts.get(&record.id()).copied()
    }

    /// All slot types of a captured record, in declaration order.
    pub(crate) fn types_of(&self, record: &TypeToken) -> Result<Seq<'static, TypeToken>> {
        let count = self.field_count(record).unwrap_or_default();

        (0..count).map(|index| self.get(record, index)).collect()
    }
}

/// Placeholders that note the type each slot converts into.
#[derive(Debug)]
struct Capture {
    count: usize,
    slots: Vec<TypeToken>,
}

impl Capture {
    fn new(count: usize) -> Self {
        Self {
            count,
            slots: Vec::with_capacity(count),
        }
    }
}

impl Placeholders for Capture {
    fn convert<T: Reflect + ?Sized>(&mut self) -> Result<()> {
        if self.slots.len() == self.count {
            return Err(Error::PlaceholdersExhausted {
                requested: self.slots.len() + 1,
            });
        }
        self.slots.push(T::TOKEN);

        Ok(())
    }
}
