//! Shell sort driven by interchangeable gap sequences.
//!
//! A gap sequence is produced from the slice length by one of the
//! [`GapStrategy`] generators and then consumed by [`shell_sort`], which runs
//! one gapped insertion pass per gap. [`shell_sort_with_stats`] and
//! [`shell_sort_traced`] run the same passes while recording how much work
//! each insertion did.

mod error;
mod gaps;
mod sorter;
mod stats;
mod trace;

pub use error::{Result, SortError};
pub use sorter::{shell_sort, shell_sort_by, validate_gaps};
pub use stats::{
    DEFAULT_STATS_CONFIG, PassStats, StatsConfig, StatsReport, shell_sort_with_stats,
    shell_sort_with_stats_config,
};
pub use trace::{PassTrace, shell_sort_traced};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GapStrategy {
    Half,
    Hibbard,
    Sedgewick,
    Pratt,
    Fibonacci,
    Ciura,
}

pub const ALL_STRATEGIES: [GapStrategy; 6] = [
    GapStrategy::Half,
    GapStrategy::Hibbard,
    GapStrategy::Sedgewick,
    GapStrategy::Pratt,
    GapStrategy::Fibonacci,
    GapStrategy::Ciura,
];

pub fn all_strategies() -> &'static [GapStrategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: GapStrategy) -> &'static str {
    match strategy {
        GapStrategy::Half => "half",
        GapStrategy::Hibbard => "hibbard",
        GapStrategy::Sedgewick => "sedgewick",
        GapStrategy::Pratt => "pratt",
        GapStrategy::Fibonacci => "fibonacci",
        GapStrategy::Ciura => "ciura",
    }
}

/// Gaps for a slice of length `n`: strictly decreasing, every gap below `n`,
/// ending in 1. Empty when `n < 2`.
pub fn gap_sequence(strategy: GapStrategy, n: usize) -> Vec<usize> {
    match strategy {
        GapStrategy::Half => gaps::half::generate(n),
        GapStrategy::Hibbard => gaps::hibbard::generate(n),
        GapStrategy::Sedgewick => gaps::sedgewick::generate(n),
        GapStrategy::Pratt => gaps::pratt::generate(n),
        GapStrategy::Fibonacci => gaps::fibonacci::generate(n),
        GapStrategy::Ciura => gaps::ciura::generate(n),
    }
}

/// Generates the gaps for `data.len()` and sorts with them.
pub fn shell_sort_with<T: PartialOrd>(strategy: GapStrategy, data: &mut [T]) -> &mut [T] {
    let gaps = gap_sequence(strategy, data.len());
    debug_assert!(validate_gaps(data.len(), &gaps).is_ok());
    sorter::run_passes(data, &gaps, T::lt);
    data
}
