//! The demonstration and the timing experiments printed by the binary.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::list::List;
use crate::patterns;
use crate::quicksort::quicksort;
use crate::sequence::Sequence;
use crate::Direction;

/// Sorted once ascending and once descending by [`demonstrate`].
pub const DEMO_INPUT: [i32; 10] = [2, 5, 1, 7, 9, 2, 4, 3, 8, 11];

/// Number of elements in each timing experiment.
pub const EXPERIMENT_LEN: usize = 10_000;

/// Value repeated by [`Experiment::AllDuplicates`].
pub const DUPLICATE_VALUE: i32 = 42;

// The random experiment does not depend on OVERRIDE_SEED, the binary reads no configuration.
const RANDOM_ORDER_SEED: u64 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Experiment {
    Sorted,
    ReverseSorted,
    Random,
    AllDuplicates,
}

impl Experiment {
    pub const ALL: [Experiment; 4] = [
        Experiment::Sorted,
        Experiment::ReverseSorted,
        Experiment::Random,
        Experiment::AllDuplicates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Experiment::Sorted => "Experiment 1: Sorted Order",
            Experiment::ReverseSorted => "Experiment 2: Reverse Sorted Order",
            Experiment::Random => "Experiment 3: Random Order",
            Experiment::AllDuplicates => "Experiment 4: All Duplicate Elements",
        }
    }

    /// Builds the input list. Random values are drawn from `[0, len)`.
    pub fn input(self, len: usize) -> List<i32> {
        let values = match self {
            Experiment::Sorted => patterns::ascending(len),
            Experiment::ReverseSorted => patterns::descending(len),
            Experiment::Random => {
                patterns::random_uniform_seeded(len, 0..(len.max(1) as i32), RANDOM_ORDER_SEED)
            }
            Experiment::AllDuplicates => patterns::all_equal(len, DUPLICATE_VALUE),
        };

        values.into_iter().collect()
    }
}

/// Sorts `list` ascending and returns the wall time it took.
pub fn time_sort(list: &mut List<i32>) -> Duration {
    let (begin, end) = (list.begin(), list.end());

    let start = Instant::now();
    quicksort(list, begin, end, &mut |a, b| a < b);
    start.elapsed()
}

/// Runs one timing experiment on `len` elements and writes its label and the elapsed whole
/// milliseconds to `out`.
pub fn run_experiment<W: Write>(
    out: &mut W,
    experiment: Experiment,
    len: usize,
) -> io::Result<Duration> {
    writeln!(out, "{}", experiment.label())?;

    let mut list = experiment.input(len);
    let elapsed = time_sort(&mut list);
    info!("{experiment:?}: sorted {len} elements in {elapsed:?}");

    writeln!(out, "Time taken: {} ms\n", elapsed.as_millis())?;
    Ok(elapsed)
}

/// Sorts [`DEMO_INPUT`] in `direction`, writing the list before and after. Returns the sorted
/// list.
pub fn demonstrate<W: Write>(out: &mut W, direction: Direction) -> io::Result<List<i32>> {
    let mut list: List<i32> = DEMO_INPUT.into_iter().collect();
    writeln!(out, "Before sort: {list}")?;

    let (begin, end) = (list.begin(), list.end());
    quicksort(&mut list, begin, end, &mut |a, b| direction.is_less(a, b));
    debug!("{direction:?}: {list:?}");

    writeln!(out, "After sort: {list}")?;
    Ok(list)
}

/// Writes the full report: both demonstrations, then every timing experiment on
/// `experiment_len` elements.
pub fn run<W: Write>(out: &mut W, experiment_len: usize) -> io::Result<()> {
    writeln!(out, "Test Result: ")?;

    writeln!(out, "Ascending Order:")?;
    demonstrate(out, Direction::Ascending)?;

    writeln!(out, "Descending Order:")?;
    demonstrate(out, Direction::Descending)?;

    writeln!(out)?;

    writeln!(out, "TIMING TESTS: ")?;
    for experiment in Experiment::ALL {
        run_experiment(out, experiment, experiment_len)?;
    }

    Ok(())
}
