//! Reversal.

use super::traits::{Cursor, Sequence};

/// A reversed view over an upstream sequence.
///
/// Constructed by [`SequenceExt::reversed`](super::SequenceExt::reversed).
pub struct Reversed<S> {
    source: S,
}

impl<S> Reversed<S> {
    pub(crate) fn new(source: S) -> Self {
        Self { source }
    }
}

impl<'a, S, C> Sequence<'a, ReversedCursor<C>> for Reversed<S>
where
    C: Cursor,
    S: Sequence<'a, C, Item = C::Item>,
{
    type Item = S::Item;

    fn cursor(&'a self) -> ReversedCursor<C> {
        ReversedCursor {
            source: Some(self.source.cursor()),
            buffer: Vec::new(),
            remaining: 0,
            positioned: false,
        }
    }
}

/// A traversal over a [`Reversed`] sequence.
///
/// Reversal cannot produce its first element without seeing all of the
/// source, so the first advance drains the upstream into a buffer and
/// drops the upstream cursor; later advances walk the buffer back to
/// front. Creating the cursor alone performs no traversal work.
pub struct ReversedCursor<C>
where
    C: Cursor,
{
    source: Option<C>,
    buffer: Vec<C::Item>,
    remaining: usize,
    positioned: bool,
}

impl<C> Cursor for ReversedCursor<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        if let Some(mut source) = self.source.take() {
            while source.advance() {
                self.buffer.push(source.current());
            }
            self.remaining = self.buffer.len();
            // the upstream cursor is released here
        }
        if self.remaining > 0 {
            self.remaining -= 1;
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
        self.buffer[self.remaining].clone()
    }
}
