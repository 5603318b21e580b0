//! Quicksort driven by an explicit stack of pending ranges.
//!
//! Uses the same partition and pivot choice as [`crate::quicksort`] and produces the same
//! arrangement, equal elements included, since disjoint ranges are sorted independently of each
//! other. Only ranges of two or more elements are pushed, the larger side first, so the smaller
//! side is always handled next. That bounds the stack to `log2(n)` entries regardless of input.

use core::cmp::Ordering;

use crate::partition::partition;
use crate::sequence::Sequence;
use crate::trace::Trace;

sort_impl!("lomuto_last_pivot_work_stack");

/// Sorts the sequence, but might not preserve the order of equal elements.
#[inline]
pub fn sort<S>(seq: &mut S)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let (begin, end) = (seq.begin(), seq.end());
    quicksort(seq, begin, end, &mut |a, b| a.lt(b));
}

/// Sorts the sequence with a comparator function, but might not preserve the order of equal
/// elements.
#[inline]
pub fn sort_by<S, F>(seq: &mut S, mut compare: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let (begin, end) = (seq.begin(), seq.end());
    quicksort(seq, begin, end, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub fn quicksort<S, F>(seq: &mut S, begin: S::Cursor, end: S::Cursor, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    drain(seq, begin, end, is_less, &mut Trace::default());
}

/// Same as [`quicksort`], additionally reporting the peak number of pending ranges, partition
/// calls and predicate evaluations. Ranges shorter than two never enter the stack, so sorting
/// such a range reports a `max_depth` of 0.
pub fn quicksort_traced<S, F>(
    seq: &mut S,
    begin: S::Cursor,
    end: S::Cursor,
    mut is_less: F,
) -> Trace
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let mut trace = Trace::default();
    let mut comparisons = 0;
    let mut counting_is_less = |a: &S::Item, b: &S::Item| {
        comparisons += 1;
        is_less(a, b)
    };

    drain(seq, begin, end, &mut counting_is_less, &mut trace);

    trace.comparisons = comparisons;
    trace
}

struct PendingRange<C> {
    begin: C,
    end: C,
    len: usize,
}

fn drain<S, F>(seq: &mut S, begin: S::Cursor, end: S::Cursor, is_less: &mut F, trace: &mut Trace)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    let len = seq.distance(begin, end);
    if len <= 1 {
        return;
    }

    let mut pending = Vec::with_capacity((len.ilog2() + 1) as usize);
    pending.push(PendingRange { begin, end, len });
    trace.max_depth = trace.max_depth.max(pending.len());

    while let Some(range) = pending.pop() {
        trace.partitions += 1;
        let bound = partition(seq, range.begin, range.end, is_less);

        let left_len = seq.distance(range.begin, bound);
        let left = PendingRange {
            begin: range.begin,
            end: bound,
            len: left_len,
        };
        let right = PendingRange {
            begin: seq.next(bound),
            end: range.end,
            len: range.len - left_len - 1,
        };

        let (larger, smaller) = if left.len >= right.len {
            (left, right)
        } else {
            (right, left)
        };

        for side in [larger, smaller] {
            if side.len > 1 {
                pending.push(side);
            }
        }
        trace.max_depth = trace.max_depth.max(pending.len());
    }
}
