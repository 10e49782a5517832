/// The Error type for the fieldtags crates.
///
/// Every variant is a contract violation detected while a record type is elaborated. None of them
/// is recoverable: an elaboration that fails never produces a partial description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index past the end of a sequence.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },
    /// The head of an empty sequence was requested.
    EmptySequence,
    /// A record asked for more placeholders than were supplied.
    PlaceholdersExhausted {
        /// The number of placeholders requested so far, including the failing one.
        requested: usize,
    },
    /// A record could not be constructed from the given number of placeholders.
    ConstructionFailed {
        /// The record type.
        record: &'static str,
        /// The number of placeholders supplied.
        placeholders: usize,
    },
    /// No placeholder count within the probing bound constructs the record.
    FieldCountNotFound {
        /// The record type.
        record: &'static str,
        /// The probing bound.
        bound: usize,
    },
    /// A slot was registered twice.
    SlotAlreadyRegistered {
        /// The record type.
        record: &'static str,
        /// The slot index.
        index: usize,
    },
    /// A slot was looked up before its record was captured, or past its field count.
    SlotNotCaptured {
        /// The record type.
        record: &'static str,
        /// The slot index.
        index: usize,
    },
    /// A record was captured again with a different field count.
    FieldCountMismatch {
        /// The record type.
        record: &'static str,
        /// The field count of the first capture.
        captured: usize,
        /// The field count of this request.
        requested: usize,
    },
    /// An annotation marker is the last slot of a record, with no field to describe.
    DanglingAnnotation {
        /// The record type.
        record: &'static str,
    },
    /// An annotation marker was used as the type of a field descriptor.
    AnnotationAsFieldType {
        /// The marker type.
        ty: &'static str,
    },
    /// No annotation of the requested family is attached to the field.
    AnnotationNotFound {
        /// The family path.
        family: &'static str,
    },
}

/// The Result type for the fieldtags crates.
pub type Result<T> = core::result::Result<T, Error>;

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for a sequence of length {len}")
            }
            Error::EmptySequence => write!(f, "Head of an empty sequence"),
            Error::PlaceholdersExhausted { requested } => {
                write!(f, "Placeholders exhausted at slot {requested}")
            }
            Error::ConstructionFailed {
                record,
                placeholders,
            } => write!(
                f,
                "`{record}` can not be constructed from {placeholders} placeholders"
            ),
            Error::FieldCountNotFound { record, bound } => write!(
                f,
                "Field count of `{record}` not found within the probing bound of {bound}"
            ),
            Error::SlotAlreadyRegistered { record, index } => {
                write!(f, "Slot {index} of `{record}` is already registered")
            }
            Error::SlotNotCaptured { record, index } => {
                write!(f, "Slot {index} of `{record}` has not been captured")
            }
            Error::FieldCountMismatch {
                record,
                captured,
                requested,
            } => write!(
                f,
                "`{record}` was captured with {captured} fields, not {requested}"
            ),
            Error::DanglingAnnotation { record } => write!(
                f,
                "Dangling annotation: the last field of `{record}` is an annotation marker"
            ),
            Error::AnnotationAsFieldType { ty } => {
                write!(f, "Annotation marker `{ty}` can not be a field type")
            }
            Error::AnnotationNotFound { family } => {
                write!(f, "No annotation of family `{family}`")
            }
        }
    }
}
