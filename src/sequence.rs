/// A finite sequence that can be walked one element at a time in either direction and reordered
/// by exchanging elements.
///
/// Cursors are plain handles, every operation goes through the sequence that produced them. A
/// range is the half-open pair `[begin, end)`, where `end` may be the past-the-end cursor.
///
/// No index arithmetic is offered. Moving `k` positions costs `k` steps.
pub trait Sequence {
    type Item;
    type Cursor: Copy + Eq;

    /// Cursor to the first element, equal to `end()` if the sequence is empty.
    fn begin(&self) -> Self::Cursor;

    /// The past-the-end cursor.
    fn end(&self) -> Self::Cursor;

    /// Panics if `cursor` is the past-the-end cursor.
    fn next(&self, cursor: Self::Cursor) -> Self::Cursor;

    /// Panics if `cursor` points at the first element.
    fn prev(&self, cursor: Self::Cursor) -> Self::Cursor;

    /// Panics if `cursor` is the past-the-end cursor.
    fn get(&self, cursor: Self::Cursor) -> &Self::Item;

    /// Exchanges the elements under `a` and `b`. Both cursors keep pointing at the same
    /// positions, it is the values that move.
    fn swap(&mut self, a: Self::Cursor, b: Self::Cursor);

    /// Number of steps from `begin` to `end`. Linear in the length of the range.
    fn distance(&self, begin: Self::Cursor, end: Self::Cursor) -> usize {
        let mut len = 0;
        let mut cursor = begin;
        while cursor != end {
            cursor = self.next(cursor);
            len += 1;
        }

        len
    }
}

// Slices are walked position by position, `distance` keeps the step-counting default.
impl<T> Sequence for [T] {
    type Item = T;
    type Cursor = usize;

    #[inline]
    fn begin(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        self.len()
    }

    #[inline]
    fn next(&self, cursor: usize) -> usize {
        assert!(cursor < self.len(), "cannot advance past the end");
        cursor + 1
    }

    #[inline]
    fn prev(&self, cursor: usize) -> usize {
        assert!(cursor > 0, "cannot retreat before the first element");
        cursor - 1
    }

    #[inline]
    fn get(&self, cursor: usize) -> &T {
        &self[cursor]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}
