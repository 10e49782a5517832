#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod log;

mod error;
pub use error::{Error, Result};
mod token;
pub use token::{Family, TypeToken};
mod seq;
pub use seq::Seq;
mod reflect;
pub use reflect::Reflect;
pub mod annotate;
pub use annotate::{Annotate, Tag, Tags};
mod record;
pub use record::{Placeholders, Record};
pub mod capture;
pub mod count;
mod describe;
pub use describe::{describe, group_fields, FieldDescriptor, RecordDescription};

// Re-export the derive macros so they're available alongside the traits.
pub use fieldtags_macros::{Record, Tag};
