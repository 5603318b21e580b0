/// What a traced sort run did.
///
/// For inputs that are already sorted, reverse sorted or constant, every partition peels off a
/// single element. On `n >= 1` such elements the recursive sort reports `max_depth == n`,
/// `partitions == n - 1` and `comparisons == n * (n - 1) / 2`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    /// Recursive sort: deepest nesting of sort calls, the outermost call being 1.
    /// Work stack sort: largest number of pending ranges held at once.
    pub max_depth: usize,
    /// Number of calls to `partition`.
    pub partitions: usize,
    /// Number of times the ordering predicate was evaluated.
    pub comparisons: usize,
}

