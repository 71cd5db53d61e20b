//! Base sequences: slices, vectors, arrays, and references to other
//! sequences. These are the leaves every pipeline ultimately traverses.

use super::traits::{Cursor, Sequence};

/// A cursor walking a borrowed slice front to back.
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    position: Option<usize>,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Create a cursor positioned before the first element of the slice.
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            position: None,
        }
    }
}

impl<T> Cursor for SliceCursor<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn advance(&mut self) -> bool {
        let next = match self.position {
            None => 0,
            Some(position) => position.saturating_add(1),
        };
        // park at len once exhausted so repeated advances stay false
        self.position = Some(next.min(self.items.len()));
        next < self.items.len()
    }

    fn current(&mut self) -> T {
        match self.position {
            Some(position) if position < self.items.len() => self.items[position].clone(),
            _ => panic!("cursor is not positioned on an element"),
        }
    }
}

impl<'a, T> Sequence<'a, SliceCursor<'a, T>> for [T]
where
    T: Clone + 'a,
{
    type Item = T;

    fn cursor(&'a self) -> SliceCursor<'a, T> {
        SliceCursor::new(self)
    }
}

impl<'a, T> Sequence<'a, SliceCursor<'a, T>> for Vec<T>
where
    T: Clone + 'a,
{
    type Item = T;

    fn cursor(&'a self) -> SliceCursor<'a, T> {
        SliceCursor::new(self)
    }
}

impl<'a, T, const N: usize> Sequence<'a, SliceCursor<'a, T>> for [T; N]
where
    T: Clone + 'a,
{
    type Item = T;

    fn cursor(&'a self) -> SliceCursor<'a, T> {
        SliceCursor::new(self)
    }
}

impl<'a, 'b: 'a, C, S> Sequence<'a, C> for &'b S
where
    C: Cursor,
    S: Sequence<'a, C, Item = C::Item> + ?Sized,
{
    type Item = S::Item;

    fn cursor(&'a self) -> C {
        S::cursor(*self)
    }
}
