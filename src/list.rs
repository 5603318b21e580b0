//! Arena backed doubly-linked list.
//!
//! Nodes live in two parallel vectors, one for values and one for links. Links refer to other
//! nodes by arena slot, so traversal order is decided by the links alone and can differ from the
//! order nodes were allocated in (see [`List::push_front`]). Exchanging two elements swaps their
//! values and leaves every link in place.

use std::fmt;
use std::iter::FusedIterator;

use crate::sequence::Sequence;

#[derive(Clone, Copy, Debug)]
struct Link {
    prev: Option<usize>,
    next: Option<usize>,
}

/// Position in a [`List`]. The past-the-end position holds no slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor(Option<usize>);

impl Cursor {
    /// Returns `true` for the past-the-end cursor.
    #[inline]
    pub fn is_end(self) -> bool {
        self.0.is_none()
    }
}

#[derive(Clone)]
pub struct List<T> {
    values: Vec<T>,
    links: Vec<Link>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            links: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push_back(&mut self, value: T) {
        let slot = self.alloc(value, self.tail, None);
        match self.tail {
            Some(tail) => self.links[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
    }

    pub fn push_front(&mut self, value: T) {
        let slot = self.alloc(value, None, self.head);
        match self.head {
            Some(head) => self.links[head].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|slot| &self.values[slot])
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|slot| &self.values[slot])
    }

    /// Mutable access to the element under `cursor`.
    ///
    /// Panics if `cursor` is the past-the-end cursor.
    pub fn get_mut(&mut self, cursor: Cursor) -> &mut T {
        let slot = Self::slot(cursor);
        &mut self.values[slot]
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len(),
        }
    }

    fn alloc(&mut self, value: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let slot = self.values.len();
        self.values.push(value);
        self.links.push(Link { prev, next });
        slot
    }

    #[inline]
    fn slot(cursor: Cursor) -> usize {
        match cursor.0 {
            Some(slot) => slot,
            None => panic!("dereferenced the past-the-end cursor"),
        }
    }
}

impl<T> Sequence for List<T> {
    type Item = T;
    type Cursor = Cursor;

    #[inline]
    fn begin(&self) -> Cursor {
        Cursor(self.head)
    }

    #[inline]
    fn end(&self) -> Cursor {
        Cursor(None)
    }

    #[inline]
    fn next(&self, cursor: Cursor) -> Cursor {
        match cursor.0 {
            Some(slot) => Cursor(self.links[slot].next),
            None => panic!("cannot advance past the end"),
        }
    }

    #[inline]
    fn prev(&self, cursor: Cursor) -> Cursor {
        let prev = match cursor.0 {
            Some(slot) => self.links[slot].prev,
            None => self.tail,
        };

        match prev {
            Some(slot) => Cursor(Some(slot)),
            None => panic!("cannot retreat before the first element"),
        }
    }

    #[inline]
    fn get(&self, cursor: Cursor) -> &T {
        &self.values[Self::slot(cursor)]
    }

    #[inline]
    fn swap(&mut self, a: Cursor, b: Cursor) {
        self.values.swap(Self::slot(a), Self::slot(b));
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.values.reserve(lower);
        self.links.reserve(lower);

        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// Equality follows traversal order, not arena layout.
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writes every element followed by a single space, e.g. `1 2 3 `.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{value} ")?;
        }
        Ok(())
    }
}

pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.front?;
        self.front = self.list.links[slot].next;
        self.remaining -= 1;
        Some(&self.list.values[slot])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let slot = self.back?;
        self.back = self.list.links[slot].prev;
        self.remaining -= 1;
        Some(&self.list.values[slot])
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
