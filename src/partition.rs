use crate::sequence::Sequence;

/// Takes the range `[begin, end)` of `seq` and re-arranges it around the pivot, which is always
/// the last element of the range. Elements that compare true for `is_less(elem, pivot)` end up
/// on the left, followed by the pivot, followed by everything else.
///
/// Returns the final position of the pivot.
///
/// The scan is Lomuto style: a boundary cursor `i` trails the scanning cursor `j`, and every
/// element found to be less than the pivot is exchanged to the boundary. Equal elements may be
/// reordered. Nothing outside `[begin, end)` is read or written, and no memory is allocated.
///
/// Panics if the range is empty.
pub fn partition<S, F>(seq: &mut S, begin: S::Cursor, end: S::Cursor, is_less: &mut F) -> S::Cursor
where
    S: Sequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    assert!(begin != end, "cannot partition an empty range");

    let pivot = seq.prev(end);

    let mut i = begin;
    let mut j = begin;
    while j != pivot {
        // `i` and `j` never reach `pivot` inside the loop, so the pivot value stays put.
        if is_less(seq.get(j), seq.get(pivot)) {
            seq.swap(i, j);
            i = seq.next(i);
        }
        j = seq.next(j);
    }

    // Place the pivot between the two partitions.
    seq.swap(i, pivot);

    i
}
