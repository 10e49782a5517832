//! Record descriptions: grouping annotation markers with the fields they describe.
//!
//! The slots of a record, as captured by [`capture`](crate::capture), interleave annotation
//! markers and real fields. Grouping splits them into runs that keep growing while the newest
//! member is a marker, so every run is zero or more markers followed by one real field. Folding a
//! run collects the tags of its markers and the type of its field into one [`FieldDescriptor`].

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{LazyLock, PoisonError, RwLock},
};

use crate::{
    capture::capture_field_types, count::count_fields, Error, Record, Result, Seq, TypeToken,
};

mod description;
pub use description::RecordDescription;
mod field;
pub use field::FieldDescriptor;

static DESCRIPTIONS: LazyLock<RwLock<HashMap<TypeId, &'static RecordDescription>>> =
    LazyLock::new(Default::default);

/// The description of `R`.
///
/// Elaborated once per record type: counting, capture, grouping and folding. The result is cached
/// for the rest of the process.
pub fn describe<R: Record>() -> Result<&'static RecordDescription> {
    let id = R::TOKEN.id();
    let cached = DESCRIPTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .copied();
    if let Some(description) = cached {
        debug!("Description of `{}` cached", R::TOKEN);

        return Ok(description);
    }

    debug!("Describing `{}`", R::TOKEN);
    let description = elaborate::<R>()?;
    let mut descriptions = DESCRIPTIONS.write().unwrap_or_else(PoisonError::into_inner);
    let description = descriptions
        .entry(id)
        .or_insert_with(|| &*Box::leak(Box::new(description)));

    Ok(*description)
}

fn elaborate<R: Record>() -> Result<RecordDescription> {
    let count = count_fields::<R>()?;
    let slots = capture_field_types::<R>(count)?;
    let fields = group_fields(R::TOKEN, &slots)?;

    Ok(RecordDescription::new(R::TOKEN, fields))
}

/// Groups the slots of `record` into field descriptors.
///
/// Fails with [`Error::DanglingAnnotation`] if the last slot is an annotation marker.
pub fn group_fields(
    record: TypeToken,
    slots: &Seq<'_, TypeToken>,
) -> Result<Seq<'static, FieldDescriptor>> {
    let runs = slots.group_while(TypeToken::is_annotation);
    let pending = runs.fold_each(Pending::default(), Pending::absorb);

    pending
        .iter()
        .map(|pending| pending.finish(record))
        .collect()
}

/// The fold accumulator of one run.
#[derive(Debug, Clone, Default)]
struct Pending {
    ty: Option<TypeToken>,
    annotations: Seq<'static, TypeToken>,
}

impl Pending {
    fn absorb(self, token: &TypeToken) -> Self {
        match token.annotation_tags() {
            Some(tags) => Self {
                annotations: self.annotations.iter().chain(tags).copied().collect(),
                ..self
            },
            None => Self {
                ty: Some(*token),
                ..self
            },
        }
    }

    fn finish(&self, record: TypeToken) -> Result<FieldDescriptor> {
        match self.ty {
            Some(ty) => FieldDescriptor::new(ty, self.annotations.clone()),
            None => {
                warn!("Dangling annotation in `{}`", record);

                Err(Error::DanglingAnnotation {
                    record: record.name(),
                })
            }
        }
    }
}
