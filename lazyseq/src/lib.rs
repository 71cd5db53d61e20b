//! Lazy sequence combinators with an explicit cursor protocol.
//!
//! A [`Sequence`] is something that can be traversed, in order, any
//! number of times; every traversal gets a fresh, independent [`Cursor`].
//! Operators ([`SequenceExt`]) wrap a sequence and are themselves
//! sequences, so pipelines chain freely; no element is produced, and no
//! user-supplied function runs, until a cursor asks for it. The only
//! eager operation is [`SequenceExt::to_array`], and the two buffering
//! operators (reversal, sorting) drain their source on a traversal's
//! first advance.
//!
//! ```
//! use lazyseq::SequenceExt;
//!
//! let numbers = vec![3, 1, 2];
//! let result = numbers
//!     .filtered(|n| *n > 0)
//!     .mapped(|n| n * 2)
//!     .sorted()
//!     .to_array();
//! assert_eq!(&*result, &[2, 4, 6]);
//! ```
//!
//! Cursors split traversal into two observable steps: [`Cursor::advance`]
//! moves to the next element, [`Cursor::current`] reads its value.
//! Projection does its work on read, not on advance, and caches the
//! result for the position. The std [`Iterator`] bridge is available via
//! [`SequenceExt::items`].

pub mod error;
mod nullable;
mod sequence;

pub use crate::error::{Error, Result};
pub use crate::nullable::Nullable;
pub use crate::sequence::{
    Cursor, Excluded, Filtered, FilteredCursor, FnPredicate, Identity, Items, KeyFn, KeySelector,
    Mapped, MappedCursor, NotEqual, Predicate, Reversed, ReversedCursor, Sequence, SequenceExt,
    SliceCursor, Sorted, SortedCursor,
};
