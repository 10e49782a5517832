//! Macros for implementing the Reflect trait.

/// Implements the Reflect trait for multiple types at once.
///
/// # Examples
///
/// ```ignore
/// impl_reflect!(bool);
/// impl_reflect!(i8, i16, i32, i64);
/// ```
macro_rules! impl_reflect {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                const TOKEN: $crate::TypeToken = $crate::TypeToken::of::<$ty>();
            }
        )+
    };
}

/// Implements the Reflect trait for generic types whose parameters only need to be `'static`.
///
/// # Examples
///
/// ```ignore
/// impl_generic_reflect!(Vec<T>);
/// impl_generic_reflect!(HashMap<K, V, S>);
/// impl_generic_reflect!(?Sized Box<T>);
/// ```
macro_rules! impl_generic_reflect {
    ($($wrapper:ident)::+ <$($generic:ident),+>) => {
        impl<$($generic: 'static),+> $crate::Reflect for $($wrapper)::+<$($generic),+> {
            const TOKEN: $crate::TypeToken = $crate::TypeToken::of::<Self>();
        }
    };
    // Variant for pointers that accept unsized pointees.
    (?Sized $($wrapper:ident)::+ <$generic:ident>) => {
        impl<$generic: ?Sized + 'static> $crate::Reflect for $($wrapper)::+<$generic> {
            const TOKEN: $crate::TypeToken = $crate::TypeToken::of::<Self>();
        }
    };
}
