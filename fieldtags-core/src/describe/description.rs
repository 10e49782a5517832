//! Record descriptions.

use core::fmt;

use serde::Serialize;

use super::FieldDescriptor;
use crate::{Result, Seq, TypeToken};

/// The ordered field descriptors of one record type.
///
/// Annotation markers are not fields: they only contribute their tags to the field that follows
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDescription {
    /// The record type.
    record: TypeToken,
    /// The fields, in declaration order.
    fields: Seq<'static, FieldDescriptor>,
}

impl RecordDescription {
    /// Creates a description from its fields.
    pub fn new(record: TypeToken, fields: Seq<'static, FieldDescriptor>) -> Self {
        Self { record, fields }
    }

    /// The record type.
    pub fn record(&self) -> &TypeToken {
        &self.record
    }

    /// The number of real fields, markers excluded.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The field at `index`.
    pub fn field(&self, index: usize) -> Result<&FieldDescriptor> {
        self.fields.get(index)
    }

    /// The fields, in declaration order.
    pub fn fields(&self) -> &Seq<'static, FieldDescriptor> {
        &self.fields
    }

    /// The field types, in declaration order.
    pub fn types(&self) -> Seq<'static, TypeToken> {
        self.fields.map(|field| *field.ty())
    }
}

impl fmt::Display for RecordDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.record)?;
        let mut first = true;
        for field in self.fields.iter() {
            if !first {
                write!(f, ",")?;
            }
            first = false;
            write!(f, " {field}")?;
        }
        write!(f, " }}")
    }
}
