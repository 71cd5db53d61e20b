//! Lazy filtering, and exclusion defined on top of it.

use crate::nullable::Nullable;

use super::traits::{Cursor, Sequence};

/// Decides whether a filtered traversal keeps an element.
///
/// A named trait rather than a bare `Fn` bound so that exclusion can be a
/// filtered sequence with a nameable predicate type.
pub trait Predicate<T> {
    fn test(&self, item: &T) -> bool;
}

impl<T, P> Predicate<T> for &P
where
    P: Predicate<T> + ?Sized,
{
    fn test(&self, item: &T) -> bool {
        (**self).test(item)
    }
}

/// A predicate backed by a closure.
pub struct FnPredicate<F> {
    f: F,
}

impl<F> FnPredicate<F> {
    pub(crate) fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Predicate<T> for FnPredicate<F>
where
    F: Fn(&T) -> bool,
{
    fn test(&self, item: &T) -> bool {
        (self.f)(item)
    }
}

/// The exclusion predicate: keeps an element when it is null or not equal
/// to the excluded value. Null is never considered equal to a non-null
/// excluded value, so null elements always survive.
#[derive(Debug)]
pub struct NotEqual<T> {
    value: T,
}

impl<T> NotEqual<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Predicate<T> for NotEqual<T>
where
    T: PartialEq + Nullable,
{
    fn test(&self, item: &T) -> bool {
        item.is_null() || item != &self.value
    }
}

/// A lazily filtered view over an upstream sequence.
///
/// Constructed by [`SequenceExt::filtered`](super::SequenceExt::filtered).
#[derive(Debug)]
pub struct Filtered<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filtered<S, P> {
    pub(crate) fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

/// An exclusion view: a filtered sequence with a fixed [`NotEqual`]
/// predicate, so it inherits filtering's laziness wholesale.
///
/// Constructed by [`SequenceExt::excluding`](super::SequenceExt::excluding).
pub type Excluded<S, T> = Filtered<S, NotEqual<T>>;

impl<'a, S, C, P> Sequence<'a, FilteredCursor<C, &'a P>> for Filtered<S, P>
where
    C: Cursor,
    S: Sequence<'a, C, Item = C::Item>,
    P: Predicate<C::Item> + 'a,
{
    type Item = S::Item;

    fn cursor(&'a self) -> FilteredCursor<C, &'a P> {
        FilteredCursor {
            source: self.source.cursor(),
            predicate: &self.predicate,
            matched: None,
        }
    }
}

/// A traversal over a [`Filtered`] sequence.
///
/// Advancing pulls the upstream until the predicate passes, holding the
/// matched element for reading. The predicate runs once per upstream
/// element, only for elements the traversal actually reaches.
pub struct FilteredCursor<C, P>
where
    C: Cursor,
{
    source: C,
    predicate: P,
    matched: Option<C::Item>,
}

impl<C, P> Cursor for FilteredCursor<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        self.matched = None;
        while self.source.advance() {
            let item = self.source.current();
            if self.predicate.test(&item) {
                self.matched = Some(item);
                return true;
            }
        }
        false
    }

    fn current(&mut self) -> C::Item {
        match &self.matched {
            Some(item) => item.clone(),
            None => panic!("cursor is not positioned on an element"),
        }
    }
}
