//! Lazy projection.

use super::traits::{Cursor, Sequence};

/// A lazily mapped view over an upstream sequence.
///
/// Constructed by [`SequenceExt::mapped`](super::SequenceExt::mapped).
pub struct Mapped<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Mapped<S, F> {
    pub(crate) fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<'a, S, C, F> Sequence<'a, MappedCursor<C, &'a F>> for Mapped<S, F>
where
    C: Cursor,
    S: Sequence<'a, C, Item = C::Item>,
    F: Fn(C::Item) -> C::Item + 'a,
{
    type Item = S::Item;

    fn cursor(&'a self) -> MappedCursor<C, &'a F> {
        MappedCursor {
            source: self.source.cursor(),
            selector: &self.selector,
            applied: None,
            positioned: false,
        }
    }
}

/// A traversal over a [`Mapped`] sequence.
///
/// Advancing only moves the upstream cursor; reading is what applies the
/// selector, cached for the position. Advancing past an element without
/// reading it never invokes the selector for it.
pub struct MappedCursor<C, F>
where
    C: Cursor,
{
    source: C,
    selector: F,
    applied: Option<C::Item>,
    positioned: bool,
}

impl<C, F> Cursor for MappedCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> C::Item,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        self.applied = None;
        self.positioned = self.source.advance();
        self.positioned
    }

    fn current(&mut self) -> C::Item {
        if !self.positioned {
            panic!("cursor is not positioned on an element");
        }
        match &self.applied {
            Some(item) => item.clone(),
            None => {
                let item = (self.selector)(self.source.current());
                self.applied = Some(item.clone());
                item
            }
        }
    }
}
