//! The sequence capability and its operators.
//!
//! A sequence is anything that can produce, on demand, a fresh traversal
//! cursor over its elements. Operators wrap a sequence and are themselves
//! sequences, so they chain without limit.

mod creation;
mod filter;
mod iter;
mod map;
mod reverse;
mod sort;
mod traits;

pub use creation::SliceCursor;
pub use filter::{Excluded, Filtered, FilteredCursor, FnPredicate, NotEqual, Predicate};
pub use iter::Items;
pub use map::{Mapped, MappedCursor};
pub use reverse::{Reversed, ReversedCursor};
pub use sort::{Identity, KeyFn, KeySelector, Sorted, SortedCursor};
pub use traits::{Cursor, Sequence, SequenceExt};
