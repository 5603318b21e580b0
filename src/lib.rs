//! Quicksort over bidirectional sequences, with a fixed last-element pivot.
//!
//! The algorithms only ever step cursors one position forward or backward and exchange the
//! elements under two cursors. That makes them usable on a doubly-linked [`List`] as well as on
//! plain slices.

use core::cmp::Ordering;

// Implements the `Sort` trait for the module it is invoked in, forwarding to the module level
// `sort` and `sort_by` functions.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<S>(seq: &mut S)
            where
                S: $crate::Sequence + ?Sized,
                S::Item: Ord,
            {
                sort(seq);
            }

            fn sort_by<S, F>(seq: &mut S, compare: F)
            where
                S: $crate::Sequence + ?Sized,
                F: FnMut(&S::Item, &S::Item) -> core::cmp::Ordering,
            {
                sort_by(seq, compare);
            }
        }
    };
}

pub mod driver;
pub mod list;
pub mod partition;
pub mod patterns;
pub mod quicksort;
pub mod sequence;
pub mod trace;
pub mod work_stack;

pub use list::{Cursor, List};
pub use partition::partition;
pub use sequence::Sequence;
pub use trace::Trace;

pub trait Sort {
    fn name() -> String;

    fn sort<S>(seq: &mut S)
    where
        S: Sequence + ?Sized,
        S::Item: Ord;

    fn sort_by<S, F>(seq: &mut S, compare: F)
    where
        S: Sequence + ?Sized,
        F: FnMut(&S::Item, &S::Item) -> Ordering;
}

/// The two ordering predicates exercised by the demonstration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Returns `true` if `a` must precede `b` in the final order.
    #[inline]
    pub fn is_less<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }
}
