use std::cell::Cell;
use std::rc::Rc;

use insta::assert_snapshot;
use ordered_float::OrderedFloat;

use lazyseq::{Cursor, Error, Sequence, SequenceExt, SliceCursor};

#[test]
fn test_scenarios() {
    assert_eq!(&*vec![1, 2, 3].filtered(|n| *n > 1).to_array(), &[2, 3]);
    let empty: Vec<i64> = vec![];
    assert!(empty.filtered(|n| *n > 0).to_array().is_empty());
    assert_eq!(&*vec![1, 2, 3].mapped(|n| n * 2).to_array(), &[2, 4, 6]);
    assert_eq!(&*vec![1, 2, 3].reversed().to_array(), &[3, 2, 1]);
    assert_eq!(&*vec![3, 1, 2].sorted().to_array(), &[1, 2, 3]);
    assert_eq!(&*vec![1, 2, 2].excluding(2).unwrap().to_array(), &[1]);
}

#[test]
fn test_chained_pipeline() {
    let words = vec!["grape", "fig", "apricot", "plum"];
    let result = words
        .filtered(|w| w.len() > 3)
        .sorted_by_key(|w| w.len())
        .to_array();
    assert_eq!(&*result, &["plum", "grape", "apricot"]);
}

#[test]
fn test_pipeline_snapshot() {
    let result = vec![3, 1, 2]
        .filtered(|n| *n > 0)
        .mapped(|n| n * 2)
        .sorted()
        .to_array();
    assert_snapshot!(format!("{result:?}"), @"[2, 4, 6]");
}

#[test]
fn test_invalid_argument_message() {
    let source = vec![Some(1), None];
    let error = source.excluding(None).unwrap_err();
    assert_eq!(
        error,
        Error::InvalidArgument("excluded value must not be null")
    );
    assert_snapshot!(error, @"invalid argument: excluded value must not be null");
}

#[test]
fn test_sorted_result_is_a_nondecreasing_permutation() {
    let source = vec![5, 3, 8, 3, 1];
    let result = (&source).sorted().to_array();
    for pair in result.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    let mut expected = source.clone();
    expected.sort();
    assert_eq!(result.to_vec(), expected);
}

#[test]
fn test_sorted_by_float_key() {
    let measurements = vec![2.5_f64, 1.0, 3.25];
    let result = measurements.sorted_by_key(|x| OrderedFloat(*x)).to_array();
    assert_eq!(&*result, &[1.0, 2.5, 3.25]);
}

#[test]
fn test_filtered_count_never_exceeds_source() {
    let source = vec![1, 2, 3, 4];
    let result = (&source).filtered(|n| n % 2 == 0).to_array();
    assert!(result.len() <= source.len());
    assert_eq!(&*result, &[2, 4]);
}

#[test]
fn test_mapped_preserves_length_and_positions() {
    let source = vec![4, 7, 9];
    let result = (&source).mapped(|n| n + 1).to_array();
    assert_eq!(result.len(), source.len());
    for (i, item) in result.iter().enumerate() {
        assert_eq!(*item, source[i] + 1);
    }
}

#[test]
fn test_reverse_involution_through_a_pipeline() {
    let source = vec![1, 2, 3, 4];
    let twice = (&source).reversed().reversed().to_array();
    assert_eq!(twice, (&source).to_array());
}

#[test]
fn test_excluding_retains_nulls_through_a_chain() {
    let source = vec![Some(1), None, Some(2), Some(1)];
    let result = source
        .excluding(Some(1))
        .unwrap()
        .reversed()
        .to_array();
    assert_eq!(&*result, &[Some(2), None]);
}

#[test]
fn test_partial_traversal_invokes_nothing_beyond_what_was_requested() {
    let predicate_calls = Cell::new(0_usize);
    let selector_calls = Cell::new(0_usize);
    let source = vec![1, 2, 3, 4];
    let pipeline = source
        .filtered(|n| {
            predicate_calls.set(predicate_calls.get() + 1);
            *n > 1
        })
        .mapped(|n| {
            selector_calls.set(selector_calls.get() + 1);
            n * 10
        });
    let first = pipeline.items().next();
    assert_eq!(first, Some(20));
    // the filter examined 1 and 2; the selector ran for 2 only
    assert_eq!(predicate_calls.get(), 2);
    assert_eq!(selector_calls.get(), 1);
}

/// A caller-defined sequence: every even number below a limit.
struct Evens {
    limit: u32,
}

struct EvensCursor {
    next: u32,
    limit: u32,
    positioned: bool,
}

impl Cursor for EvensCursor {
    type Item = u32;

    fn advance(&mut self) -> bool {
        if self.next < self.limit {
            self.positioned = true;
            self.next += 2;
            true
        } else {
            self.positioned = false;
            false
        }
    }

    fn current(&mut self) -> u32 {
        if !self.positioned {
            panic!("cursor is not positioned on an element");
        }
        self.next - 2
    }
}

impl<'a> Sequence<'a, EvensCursor> for Evens {
    type Item = u32;

    fn cursor(&'a self) -> EvensCursor {
        EvensCursor {
            next: 0,
            limit: self.limit,
            positioned: false,
        }
    }
}

#[test]
fn test_caller_defined_sequences_compose_with_every_operator() {
    let evens = Evens { limit: 10 };
    let result = evens
        .filtered(|n| *n != 4)
        .mapped(|n| n + 1)
        .reversed()
        .to_array();
    assert_eq!(&*result, &[9, 7, 3, 1]);
    let evens = Evens { limit: 6 };
    assert_eq!(&*evens.sorted_by_key(|n| std::cmp::Reverse(*n)).to_array(), &[
        4, 2, 0
    ]);
}

/// A sequence that counts how often its cursors are advanced.
struct Traced {
    items: Vec<i32>,
    pulls: Rc<Cell<usize>>,
}

struct TracedCursor<'a> {
    inner: SliceCursor<'a, i32>,
    pulls: Rc<Cell<usize>>,
}

impl Cursor for TracedCursor<'_> {
    type Item = i32;

    fn advance(&mut self) -> bool {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.advance()
    }

    fn current(&mut self) -> i32 {
        self.inner.current()
    }
}

impl<'a> Sequence<'a, TracedCursor<'a>> for Traced {
    type Item = i32;

    fn cursor(&'a self) -> TracedCursor<'a> {
        TracedCursor {
            inner: SliceCursor::new(&self.items),
            pulls: self.pulls.clone(),
        }
    }
}

#[test]
fn test_buffering_operators_defer_to_the_first_advance() {
    let pulls = Rc::new(Cell::new(0_usize));
    let traced = Traced {
        items: vec![2, 1, 3],
        pulls: pulls.clone(),
    };
    let sorted = traced.sorted();
    let mut cursor = sorted.cursor();
    assert_eq!(pulls.get(), 0);
    assert!(cursor.advance());
    // draining advances once per element plus the exhausting call
    assert_eq!(pulls.get(), 4);
    assert_eq!(cursor.current(), 1);
}

#[test]
fn test_to_array_drains_exactly_once() {
    let pulls = Rc::new(Cell::new(0_usize));
    let traced = Traced {
        items: vec![1, 2],
        pulls: pulls.clone(),
    };
    let result = traced.to_array();
    assert_eq!(&*result, &[1, 2]);
    assert_eq!(pulls.get(), 3);
}
