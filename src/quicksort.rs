//! Basic recursive quicksort with a fixed last-element pivot.
//!
//! There is no recursion limit. Already sorted, reverse sorted and constant inputs split off one
//! element per partition, so the recursion goes `n` levels deep and does `O(n^2)` comparisons.
//! Large inputs of that shape can exhaust the call stack. [`crate::work_stack`] runs the same
//! algorithm on an explicit stack.

use core::cmp::Ordering;

use crate::partition::partition;
use crate::sequence::Sequence;
use crate::trace::Trace;

sort_impl!("lomuto_last_pivot_recursive");

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
///
/// Reverse sorting is `sort_by(seq, |a, b| b.cmp(a))`.
#[inline]
pub fn sort_by<S, F>(seq: &mut S, mut compare: F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let (begin, end) = (seq.begin(), seq.end());
    quicksort(seq, begin, end, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `[begin, end)` so that no element `b` following an element `a` satisfies
/// `is_less(b, a)`.
///
/// Each call measures its range by walking it. Ranges of zero or one element return without
/// partitioning.
pub fn quicksort<S, F>(seq: &mut S, begin: S::Cursor, end: S::Cursor, is_less: &mut F)
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if seq.distance(begin, end) <= 1 {
        return;
    }

    let bound = partition(seq, begin, end, is_less);

    // The pivot at `bound` is in its final position and excluded from both sides.
    quicksort(seq, begin, bound, is_less);
    let after = seq.next(bound);
    quicksort(seq, after, end, is_less);
}

/// Same as [`quicksort`], additionally reporting recursion depth, partition calls and predicate
/// evaluations.
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

    quicksort_traced_impl(seq, begin, end, &mut counting_is_less, 1, &mut trace);

    trace.comparisons = comparisons;
    trace
}

fn quicksort_traced_impl<S, F>(
    seq: &mut S,
    begin: S::Cursor,
    end: S::Cursor,
    is_less: &mut F,
    depth: usize,
    trace: &mut Trace,
) where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    trace.max_depth = trace.max_depth.max(depth);

    if seq.distance(begin, end) <= 1 {
        return;
    }

    trace.partitions += 1;
    let bound = partition(seq, begin, end, is_less);

    quicksort_traced_impl(seq, begin, bound, is_less, depth + 1, trace);
    let after = seq.next(bound);
    quicksort_traced_impl(seq, after, end, is_less, depth + 1, trace);
}
