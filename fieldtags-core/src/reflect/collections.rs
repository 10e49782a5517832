//! Reflect implementations for collection types.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

// ============================================================================
// Sequences
// ============================================================================

impl_generic_reflect!(Vec<T>);
impl_generic_reflect!(VecDeque<T>);
impl_generic_reflect!(LinkedList<T>);
impl_generic_reflect!(BinaryHeap<T>);

impl<T: 'static, const N: usize> crate::Reflect for [T; N] {
    const TOKEN: crate::TypeToken = crate::TypeToken::of::<Self>();
}

impl<T: 'static> crate::Reflect for [T] {
    const TOKEN: crate::TypeToken = crate::TypeToken::of::<Self>();
}

impl<T: 'static> crate::Reflect for &'static [T] {
    const TOKEN: crate::TypeToken = crate::TypeToken::of::<Self>();
}

// ============================================================================
// Sets and maps
// ============================================================================

impl_generic_reflect!(HashSet<T, S>);
impl_generic_reflect!(BTreeSet<T>);
impl_generic_reflect!(HashMap<K, V, S>);
impl_generic_reflect!(BTreeMap<K, V>);
