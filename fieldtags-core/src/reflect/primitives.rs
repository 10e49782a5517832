//! Reflect implementations for primitive types.

// Boolean type.
impl_reflect!(bool);

// Integer types.
impl_reflect!(i8, i16, i32, i64, i128, isize);
impl_reflect!(u8, u16, u32, u64, u128, usize);

// Floating-point types.
impl_reflect!(f32, f64);

// String types.
impl_reflect!(char, str, &'static str, String);
