//! Tuples as anonymous records.

use super::{Placeholders, Record};
use crate::{Reflect, Result, TypeToken};

macro_rules! impl_tuple_record {
    ($($field:ident),*) => {
        impl<$($field: Reflect),*> Reflect for ($($field,)*) {
            const TOKEN: TypeToken = TypeToken::of::<Self>();
        }

        impl<$($field: Reflect),*> Record for ($($field,)*) {
            #[allow(unused_variables)]
            fn fill<P: Placeholders>(placeholders: &mut P) -> Result<()> {
                $(placeholders.convert::<$field>()?;)*

                Ok(())
            }
        }
    };
}

impl_tuple_record!();
impl_tuple_record!(A);
impl_tuple_record!(A, B);
impl_tuple_record!(A, B, C);
impl_tuple_record!(A, B, C, D);
impl_tuple_record!(A, B, C, D, E);
impl_tuple_record!(A, B, C, D, E, F);
impl_tuple_record!(A, B, C, D, E, F, G);
impl_tuple_record!(A, B, C, D, E, F, G, H);
impl_tuple_record!(A, B, C, D, E, F, G, H, I);
impl_tuple_record!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_record!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_record!(A, B, C, D, E, F, G, H, I, J, K, L);
