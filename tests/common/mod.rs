use std::cmp::Ordering;
use std::fmt::Debug;

use list_quicksort::{patterns, List, Sort};

pub fn test_sizes() -> Vec<usize> {
    let mut sizes = vec![0, 1, 2, 3, 4, 5, 7, 8, 10, 15, 16, 17, 20, 24, 33, 50, 100, 257, 500];

    if cfg!(feature = "large_test_sizes") {
        sizes.extend([1_000, 2_000]);
    }

    sizes
}

pub fn ascending(len: usize) -> Vec<i32> {
    patterns::ascending(len)
}

pub fn descending(len: usize) -> Vec<i32> {
    patterns::descending(len)
}

pub fn random(len: usize) -> Vec<i32> {
    patterns::random_uniform(len, 0..(len.max(1) as i32))
}

pub fn random_narrow(len: usize) -> Vec<i32> {
    patterns::random_uniform(len, 0..4)
}

pub fn random_zipf(len: usize) -> Vec<i32> {
    patterns::random_zipf(len, 1.0)
}

pub fn all_equal(len: usize) -> Vec<i32> {
    patterns::all_equal(len, 42)
}

pub fn saw_ascending(len: usize) -> Vec<i32> {
    patterns::saw_ascending(len, 4)
}

pub fn to_list<T: Clone>(values: &[T]) -> List<T> {
    values.iter().cloned().collect()
}

pub fn to_vec<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Sorts `input` as a list and as a slice and compares both against the standard library.
pub fn sort_comp<S: Sort>(input: &[i32]) {
    let mut expected = input.to_vec();
    expected.sort();

    let mut list = to_list(input);
    S::sort(&mut list);
    assert_eq!(to_vec(&list), expected, "list, len {}", input.len());

    let mut slice = input.to_vec();
    S::sort(slice.as_mut_slice());
    assert_eq!(slice, expected, "slice, len {}", input.len());
}

pub fn sort_by_comp<S: Sort, T, F>(input: &[T], mut compare: F)
where
    T: Clone + Debug + PartialEq,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut expected = input.to_vec();
    expected.sort_by(&mut compare);

    let mut list = to_list(input);
    S::sort_by(&mut list, &mut compare);
    assert_eq!(to_vec(&list), expected, "len {}", input.len());
}

/// Sorting output that is already in order must leave it untouched.
pub fn idempotent_comp<S: Sort>(input: &[i32]) {
    let mut list = to_list(input);
    S::sort(&mut list);
    let once = list.clone();

    S::sort(&mut list);
    assert_eq!(list, once, "len {}", input.len());

    S::sort_by(&mut list, |a, b| b.cmp(a));
    let descending = list.clone();
    S::sort_by(&mut list, |a, b| b.cmp(a));
    assert_eq!(list, descending, "len {}", input.len());
}

macro_rules! instantiate_sort_tests {
    (@patterns $sort_impl:ty, [$($pattern:ident),*]) => {
        paste::paste! {
            $(
                #[test]
                fn [<sort_ $pattern>]() {
                    for len in crate::common::test_sizes() {
                        crate::common::sort_comp::<$sort_impl>(&crate::common::$pattern(len));
                    }
                }

                #[test]
                fn [<sort_by_descending_ $pattern>]() {
                    for len in crate::common::test_sizes() {
                        crate::common::sort_by_comp::<$sort_impl, _, _>(
                            &crate::common::$pattern(len),
                            |a: &i32, b: &i32| b.cmp(a),
                        );
                    }
                }

                #[test]
                fn [<idempotent_ $pattern>]() {
                    for len in crate::common::test_sizes() {
                        crate::common::idempotent_comp::<$sort_impl>(&crate::common::$pattern(len));
                    }
                }
            )*
        }
    };
    ($sort_impl:ty) => {
        instantiate_sort_tests!(
            @patterns $sort_impl,
            [ascending, descending, random, random_narrow, random_zipf, all_equal, saw_ascending]
        );

        #[test]
        fn basic() {
            let mut list: list_quicksort::List<i32> = list_quicksort::List::new();
            <$sort_impl as list_quicksort::Sort>::sort(&mut list);
            assert!(list.is_empty());

            let mut list = crate::common::to_list(&[77]);
            <$sort_impl as list_quicksort::Sort>::sort(&mut list);
            assert_eq!(crate::common::to_vec(&list), [77]);

            let mut list = crate::common::to_list(&[2, 1]);
            <$sort_impl as list_quicksort::Sort>::sort(&mut list);
            assert_eq!(crate::common::to_vec(&list), [1, 2]);
        }

        #[test]
        fn demo_input_both_directions() {
            let input = [2, 5, 1, 7, 9, 2, 4, 3, 8, 11];

            let mut list = crate::common::to_list(&input);
            <$sort_impl as list_quicksort::Sort>::sort(&mut list);
            assert_eq!(crate::common::to_vec(&list), [1, 2, 2, 3, 4, 5, 7, 8, 9, 11]);

            let mut list = crate::common::to_list(&input);
            <$sort_impl as list_quicksort::Sort>::sort_by(&mut list, |a, b| b.cmp(a));
            assert_eq!(crate::common::to_vec(&list), [11, 9, 8, 7, 5, 4, 3, 2, 2, 1]);
        }

        #[test]
        fn list_built_from_front() {
            // Arena order is the reverse of traversal order here.
            let mut list = list_quicksort::List::new();
            for value in [3, 9, 1, 4, 1, 5, 9, 2, 6] {
                list.push_front(value);
            }

            <$sort_impl as list_quicksort::Sort>::sort(&mut list);
            assert_eq!(crate::common::to_vec(&list), [1, 1, 2, 3, 4, 5, 6, 9, 9]);
            assert_eq!(list.front(), Some(&1));
            assert_eq!(list.back(), Some(&9));
        }

        #[test]
        fn strings() {
            let input = ["pear", "apple", "fig", "banana", "apple", "cherry"]
                .map(String::from)
                .to_vec();

            crate::common::sort_by_comp::<$sort_impl, _, _>(&input, |a, b| a.cmp(b));
            crate::common::sort_by_comp::<$sort_impl, _, _>(&input, |a, b| {
                a.len().cmp(&b.len()).then(a.cmp(b))
            });
        }

        #[test]
        fn sort_by_key_is_a_permutation() {
            // Only the key is compared, so equal keys may come out in any order.
            let input: Vec<(i32, usize)> = crate::common::random_narrow(300)
                .into_iter()
                .enumerate()
                .map(|(tag, key)| (key, tag))
                .collect();

            let mut list = crate::common::to_list(&input);
            <$sort_impl as list_quicksort::Sort>::sort_by(&mut list, |a, b| a.0.cmp(&b.0));
            let output = crate::common::to_vec(&list);

            assert!(output.windows(2).all(|w| w[0].0 <= w[1].0));

            let mut tags: Vec<usize> = output.iter().map(|&(_, tag)| tag).collect();
            tags.sort_unstable();
            assert_eq!(tags, (0..input.len()).collect::<Vec<_>>());
        }

        #[test]
        fn sub_slice_only() {
            let mut values = crate::common::descending(20);
            <$sort_impl as list_quicksort::Sort>::sort(&mut values[5..15]);

            assert_eq!(&values[..5], &[20, 19, 18, 17, 16]);
            assert_eq!(&values[5..15], &[6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);
            assert_eq!(&values[15..], &[5, 4, 3, 2, 1]);
        }

        #[test]
        fn name_is_set() {
            assert!(!<$sort_impl as list_quicksort::Sort>::name().is_empty());
        }
    };
}
