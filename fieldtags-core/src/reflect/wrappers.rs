//! Reflect implementations for wrapper types.
//!
//! Unlike a serialization mapping, wrappers are not transparent here: `Box<i32>` and `i32` are
//! different slot types.

use std::{
    cell::{Cell, RefCell},
    marker::PhantomData,
    rc::Rc,
    sync::{Arc, Mutex, RwLock},
};

// ============================================================================
// Optional and fallible types
// ============================================================================

impl_generic_reflect!(Option<T>);
impl_generic_reflect!(Result<T, E>);

// ============================================================================
// Smart pointer types
// ============================================================================

impl_generic_reflect!(?Sized Box<T>);
impl_generic_reflect!(?Sized Rc<T>);
impl_generic_reflect!(?Sized Arc<T>);

// ============================================================================
// Cell and lock types
// ============================================================================

impl_generic_reflect!(?Sized Cell<T>);
impl_generic_reflect!(?Sized RefCell<T>);
impl_generic_reflect!(?Sized Mutex<T>);
impl_generic_reflect!(?Sized RwLock<T>);

// ============================================================================
// Markers
// ============================================================================

impl_generic_reflect!(?Sized PhantomData<T>);
