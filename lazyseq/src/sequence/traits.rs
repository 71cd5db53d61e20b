use crate::error;
use crate::nullable::Nullable;

use super::filter::{Excluded, Filtered, FnPredicate, NotEqual};
use super::iter::Items;
use super::map::Mapped;
use super::reverse::Reversed;
use super::sort::{Identity, KeyFn, Sorted};

/// A traversal in progress over a sequence.
///
/// A cursor starts out positioned before the first element. [`advance`]
/// moves it to the next element and reports whether one exists;
/// [`current`] reads the element at the present position. These are two
/// separate observable steps: advancing does only the work needed to find
/// the next element, and reading is what computes its value (projection
/// applies its selector on read, caching it for the position).
///
/// Once `advance` has returned `false` the cursor is exhausted; further
/// `advance` calls keep returning `false`.
///
/// [`advance`]: Cursor::advance
/// [`current`]: Cursor::current
pub trait Cursor {
    type Item: Clone;

    /// Move to the next element. Returns `false` when the sequence is
    /// exhausted.
    fn advance(&mut self) -> bool;

    /// Read the element at the current position.
    ///
    /// May be called any number of times at one position; every call
    /// returns an equal value.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not positioned on an element: before the
    /// first successful `advance`, or after `advance` has returned
    /// `false`.
    fn current(&mut self) -> Self::Item;
}

/// The core sequence interface: something that can be traversed, in
/// order, zero or more times.
///
/// Every call to [`cursor`] produces a fresh, independent traversal;
/// cursors never share mutable state through the sequence object. No
/// element is produced, and no user-supplied function is invoked, until a
/// cursor asks for that specific element.
///
/// If you implement this, [`SequenceExt`] provides the whole operator
/// surface on top of it.
///
/// [`cursor`]: Sequence::cursor
pub trait Sequence<'a, C>
where
    C: Cursor<Item = Self::Item>,
{
    /// The element type. `Clone` because buffering operators and repeated
    /// [`Cursor::current`] reads hand out owned elements.
    type Item: Clone;

    /// Produce a fresh cursor positioned before the first element.
    ///
    /// Creating a cursor performs no traversal work by itself.
    fn cursor(&'a self) -> C;
}

/// Sequence operators, available on anything implementing [`Sequence`].
///
/// All operators except [`to_array`] are lazy: they return a new sequence
/// wrapping their source, and no work happens until a consumer traverses
/// it. The wrapping methods take the source by value; borrow with `&` to
/// keep using the original.
///
/// [`to_array`]: SequenceExt::to_array
pub trait SequenceExt<'a, C>: Sequence<'a, C>
where
    C: Cursor<Item = Self::Item>,
{
    /// Iterate over the elements via a fresh cursor.
    fn items(&'a self) -> Items<C> {
        Items::new(self.cursor())
    }

    /// Eagerly collect the sequence into a fixed-size, indexable
    /// container, draining a single fresh traversal.
    fn to_array(&'a self) -> Box<[Self::Item]> {
        self.items().collect::<Vec<_>>().into_boxed_slice()
    }

    /// A sequence of exactly those elements for which the predicate
    /// holds, in source order.
    ///
    /// The predicate runs once per source element, lazily, in traversal
    /// order, only for elements a traversal actually reaches.
    ///
    /// ```
    /// use lazyseq::SequenceExt;
    ///
    /// let result = vec![1, 2, 3].filtered(|n| *n > 1).to_array();
    /// assert_eq!(&*result, &[2, 3]);
    /// ```
    fn filtered<F>(self, predicate: F) -> Filtered<Self, FnPredicate<F>>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> bool,
    {
        Filtered::new(self, FnPredicate::new(predicate))
    }

    /// A sequence of every element not equal to `value`. Null elements
    /// are always retained; null is never equal to a non-null excluded
    /// value.
    ///
    /// Fails eagerly, before any wrapper is constructed, if the excluded
    /// value is itself null. Equality comparisons happen only at
    /// traversal time, once per element reached.
    ///
    /// ```
    /// use lazyseq::SequenceExt;
    ///
    /// let result = vec![1, 2, 2].excluding(2).unwrap().to_array();
    /// assert_eq!(&*result, &[1]);
    /// ```
    fn excluding(self, value: Self::Item) -> error::Result<Excluded<Self, Self::Item>>
    where
        Self: Sized,
        Self::Item: PartialEq + Nullable,
    {
        if value.is_null() {
            return Err(error::Error::InvalidArgument(
                "excluded value must not be null",
            ));
        }
        Ok(Filtered::new(self, NotEqual::new(value)))
    }

    /// A sequence of `selector(x)` for each source element `x`, in order,
    /// one-to-one.
    ///
    /// The selector is invoked when a traversal reads an element's value,
    /// not when the cursor merely advances past it, and at most once per
    /// position.
    ///
    /// ```
    /// use lazyseq::SequenceExt;
    ///
    /// let result = vec![1, 2, 3].mapped(|n| n * 2).to_array();
    /// assert_eq!(&*result, &[2, 4, 6]);
    /// ```
    fn mapped<F>(self, selector: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Self::Item,
    {
        Mapped::new(self, selector)
    }

    /// A sequence yielding the source elements in reverse order.
    ///
    /// The first advance of a traversal drains the entire source into a
    /// buffer; creating the cursor alone touches nothing.
    ///
    /// ```
    /// use lazyseq::SequenceExt;
    ///
    /// let result = vec![1, 2, 3].reversed().to_array();
    /// assert_eq!(&*result, &[3, 2, 1]);
    /// ```
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed::new(self)
    }

    /// A sequence yielding the source elements in ascending order.
    ///
    /// Equivalent to [`sorted_by_key`] with the identity key.
    ///
    /// ```
    /// use lazyseq::SequenceExt;
    ///
    /// let result = vec![3, 1, 2].sorted().to_array();
    /// assert_eq!(&*result, &[1, 2, 3]);
    /// ```
    ///
    /// [`sorted_by_key`]: SequenceExt::sorted_by_key
    fn sorted(self) -> Sorted<Self, Identity>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        Sorted::new(self, Identity)
    }

    /// A sequence yielding the source elements ordered ascending by the
    /// extracted key.
    ///
    /// The first advance of a traversal drains the entire source,
    /// extracts each element's key exactly once, and sorts. The sort is
    /// stable: elements with equal keys keep their source order.
    ///
    /// ```
    /// use lazyseq::SequenceExt;
    ///
    /// let result = vec!["ccc", "a", "bb"].sorted_by_key(|s| s.len()).to_array();
    /// assert_eq!(&*result, &["a", "bb", "ccc"]);
    /// ```
    fn sorted_by_key<K, F>(self, key: F) -> Sorted<Self, KeyFn<F, K>>
    where
        Self: Sized,
        K: Ord,
        F: Fn(&Self::Item) -> K,
    {
        Sorted::new(self, KeyFn::new(key))
    }
}

impl<'a, C, S> SequenceExt<'a, C> for S
where
    C: Cursor,
    S: Sequence<'a, C, Item = C::Item> + ?Sized,
{
}
