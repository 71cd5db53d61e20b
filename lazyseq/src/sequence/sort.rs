//! Sorting by a derived key.

use std::marker::PhantomData;

use super::traits::{Cursor, Sequence};

/// Extracts the ordering key for an element.
///
/// A named trait rather than a bare `Fn` bound so that the identity key
/// has a nameable type alongside closure-backed keys.
pub trait KeySelector<T> {
    type Key: Ord;

    fn key(&self, item: &T) -> Self::Key;
}

impl<T, K> KeySelector<T> for &K
where
    K: KeySelector<T> + ?Sized,
{
    type Key = K::Key;

    fn key(&self, item: &T) -> Self::Key {
        (**self).key(item)
    }
}

/// The identity key: elements order by their own value.
pub struct Identity;

impl<T> KeySelector<T> for Identity
where
    T: Clone + Ord,
{
    type Key = T;

    fn key(&self, item: &T) -> T {
        item.clone()
    }
}

/// A key selector backed by a closure.
pub struct KeyFn<F, K> {
    f: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyFn<F, K> {
    pub(crate) fn new(f: F) -> Self {
        Self {
            f,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> KeySelector<T> for KeyFn<F, K>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    type Key = K;

    fn key(&self, item: &T) -> K {
        (self.f)(item)
    }
}

/// A sorted view over an upstream sequence, ordered ascending by the
/// extracted key.
///
/// Constructed by [`SequenceExt::sorted`](super::SequenceExt::sorted) and
/// [`SequenceExt::sorted_by_key`](super::SequenceExt::sorted_by_key).
pub struct Sorted<S, K> {
    source: S,
    key: K,
}

impl<S, K> Sorted<S, K> {
    pub(crate) fn new(source: S, key: K) -> Self {
        Self { source, key }
    }
}

impl<'a, S, C, K> Sequence<'a, SortedCursor<C, &'a K>> for Sorted<S, K>
where
    C: Cursor,
    S: Sequence<'a, C, Item = C::Item>,
    K: KeySelector<C::Item> + 'a,
{
    type Item = S::Item;

    fn cursor(&'a self) -> SortedCursor<C, &'a K> {
        SortedCursor {
            source: Some(self.source.cursor()),
            key: &self.key,
            buffer: Vec::new(),
            position: 0,
            positioned: false,
        }
    }
}

/// A traversal over a [`Sorted`] sequence.
///
/// The first advance drains the upstream, extracts each element's key
/// exactly once, sorts the key/element pairs by key, and drops the keys
/// and the upstream cursor; later advances walk the sorted buffer front
/// to back. The sort is stable, so equal-key elements keep their source
/// order. Creating the cursor alone performs no traversal work.
pub struct SortedCursor<C, K>
where
    C: Cursor,
{
    source: Option<C>,
    key: K,
    buffer: Vec<C::Item>,
    position: usize,
    positioned: bool,
}

impl<C, K> Cursor for SortedCursor<C, K>
where
    C: Cursor,
    K: KeySelector<C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        if let Some(mut source) = self.source.take() {
            let mut decorated: Vec<(K::Key, C::Item)> = Vec::new();
            while source.advance() {
                let item = source.current();
                decorated.push((self.key.key(&item), item));
            }
            decorated.sort_by(|(a, _), (b, _)| a.cmp(b));
            self.buffer = decorated.into_iter().map(|(_, item)| item).collect();
        }
        if self.position < self.buffer.len() {
            self.position += 1;
            self.positioned = true;
            true
        } else {
            self.positioned = false;
            false
        }
    }

    fn current(&mut self) -> C::Item {
        if !self.positioned {
            panic!("cursor is not positioned on an element");
        }
        self.buffer[self.position - 1].clone()
    }
}
