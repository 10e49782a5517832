//! Immutable ordered sequences and their algebra.

use core::fmt;

use serde::Serialize;

use crate::{Error, Result};

/// An ordered, fixed-length sequence that is either borrowed or owned.
///
/// Borrowed sequences view const tables (e.g. the tags an [`Annotate`](crate::Annotate) marker
/// wraps) without copying them. Every operation leaves `self` untouched and produces a new, owned
/// sequence.
#[derive(Clone, Eq)]
pub enum Seq<'a, T> {
    /// Borrowed slice, useful for const tables.
    Borrowed(&'a [T]),
    /// Owned vector, produced by the algebra.
    Owned(Vec<T>),
}

impl<'a, T> Seq<'a, T> {
    /// The items as a slice.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Seq::Borrowed(slice) => slice,
            Seq::Owned(vec) => vec,
        }
    }

    /// Returns an iterator over references to the items.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the number of items in the sequence.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The item at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// The first item.
    pub fn head(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::EmptySequence)
    }

    /// A copy of this sequence with `item` appended.
    pub fn append(&self, item: T) -> Seq<'a, T>
    where
        T: Clone,
    {
        let mut items = self.as_slice().to_vec();
        items.push(item);

        Seq::Owned(items)
    }

    /// Transforms every item, keeping order and length.
    pub fn map<U: 'a, F>(&self, f: F) -> Seq<'a, U>
    where
        F: FnMut(&T) -> U,
    {
        Seq::Owned(self.iter().map(f).collect())
    }

    /// Left fold in declaration order. An empty sequence returns `seed`.
    pub fn fold<A, F>(&self, seed: A, op: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(seed, op)
    }

    /// Keeps the items satisfying `pred`, in their relative order.
    pub fn filter<F>(&self, mut pred: F) -> Seq<'a, T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        Seq::Owned(self.iter().filter(|item| pred(*item)).cloned().collect())
    }

    /// Splits the sequence into runs of adjacent items.
    ///
    /// The next item joins the current run if `pred(leader, next)` holds, where `leader` is the
    /// most recently absorbed item of the run, not its first one. Otherwise the run is closed and
    /// the next item starts a new one.
    ///
    /// Flattening the result gives back `self`, whatever `pred` is.
    pub fn group_by<F>(&self, mut pred: F) -> Seq<'a, Seq<'a, T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        let Grouping { mut runs, run } = self.fold(Grouping::default(), |mut grouping, item| {
            let joins = grouping.run.last().is_none_or(|leader| pred(leader, item));
            if !joins {
                let closed = core::mem::take(&mut grouping.run);
                grouping.runs.push(Seq::Owned(closed));
            }
            grouping.run.push(item.clone());

            grouping
        });
        if !run.is_empty() {
            runs.push(Seq::Owned(run));
        }

        Seq::Owned(runs)
    }

    /// Splits the sequence into runs that keep growing while their leader satisfies `pred`.
    ///
    /// The item whose test fails is the last member of its run.
    pub fn group_while<F>(&self, mut pred: F) -> Seq<'a, Seq<'a, T>>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.group_by(|leader, _| pred(leader))
    }

    /// Converts into an owned sequence, copying a borrowed one.
    pub fn into_owned(self) -> Seq<'static, T>
    where
        T: Clone + 'static,
    {
        match self {
            Seq::Borrowed(slice) => Seq::Owned(slice.to_vec()),
            Seq::Owned(vec) => Seq::Owned(vec),
        }
    }
}

impl<'a, T: 'a> Seq<'a, Seq<'a, T>> {
    /// Concatenates the runs.
    pub fn flatten(&self) -> Seq<'a, T>
    where
        T: Clone,
    {
        Seq::Owned(self.iter().flat_map(|run| run.iter().cloned()).collect())
    }

    /// Left-folds every run from a copy of `seed`.
    pub fn fold_each<A, F>(&self, seed: A, mut op: F) -> Seq<'a, A>
    where
        A: Clone + 'a,
        F: FnMut(A, &T) -> A,
    {
        self.map(|run| run.fold(seed.clone(), &mut op))
    }
}

struct Grouping<'a, T> {
    runs: Vec<Seq<'a, T>>,
    run: Vec<T>,
}

impl<'a, T> Default for Grouping<'a, T> {
    fn default() -> Self {
        Self {
            runs: Vec::new(),
            run: Vec::new(),
        }
    }
}

impl<'a, T> Default for Seq<'a, T> {
    fn default() -> Self {
        Seq::Borrowed(&[])
    }
}

impl<'a, T> From<Vec<T>> for Seq<'a, T> {
    fn from(vec: Vec<T>) -> Self {
        Seq::Owned(vec)
    }
}

impl<'a, T> From<&'a [T]> for Seq<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Seq::Borrowed(slice)
    }
}

impl<'a, T> FromIterator<T> for Seq<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::Owned(iter.into_iter().collect())
    }
}

impl<'s, 'a, T> IntoIterator for &'s Seq<'a, T> {
    type Item = &'s T;
    type IntoIter = core::slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> PartialEq for Seq<'a, T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Seq<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Serialize> Serialize for Seq<'a, T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
