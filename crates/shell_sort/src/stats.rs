use log::{debug, trace};

use crate::error::{Result, SortError};
use crate::sorter::{gapped_pass, validate_gaps};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatsConfig {
    /// Upper bound on the number of insertions grouped into one window.
    pub max_window: usize,
}

pub const DEFAULT_STATS_CONFIG: StatsConfig = StatsConfig { max_window: 16 };

impl Default for StatsConfig {
    fn default() -> Self {
        DEFAULT_STATS_CONFIG
    }
}

/// Counters for one tracked gap.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PassStats {
    pub gap: usize,
    pub insertions: usize,
    /// Sum of inner-loop lengths over every insertion of the pass.
    pub comparisons: usize,
    /// Sum over consecutive windows of `min(max_window, gap)` insertions of
    /// the longest inner loop in each window. A trailing partial window
    /// counts as well.
    pub windowed_peak: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsReport {
    pub passes: Vec<PassStats>,
}

impl StatsReport {
    pub fn total_comparisons(&self) -> usize {
        self.passes.iter().map(|p| p.comparisons).sum()
    }

    pub fn total_windowed_peak(&self) -> usize {
        self.passes.iter().map(|p| p.windowed_peak).sum()
    }

    /// `total_comparisons / total_windowed_peak`.
    ///
    /// Ranges from 1 (each window dominated by a single insertion) up to the
    /// window size (work spread evenly across every window).
    pub fn efficiency_ratio(&self) -> Result<f64> {
        let peak = self.total_windowed_peak();
        if peak == 0 {
            return Err(SortError::NoStatistics);
        }
        let ratio = self.total_comparisons() as f64 / peak as f64;
        debug!(
            "efficiency ratio {ratio:.3} over {} tracked passes",
            self.passes.len()
        );
        Ok(ratio)
    }
}

/// Running sum of per-window maxima; needs no buffer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WindowedPeak {
    window: usize,
    filled: usize,
    peak: usize,
    total: usize,
}

impl WindowedPeak {
    pub(crate) fn new(window: usize) -> Self {
        debug_assert!(window > 0);
        Self {
            window,
            filled: 0,
            peak: 0,
            total: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, value: usize) {
        self.peak = self.peak.max(value);
        self.filled += 1;
        if self.filled == self.window {
            self.flush();
        }
    }

    #[inline]
    fn flush(&mut self) {
        if self.filled > 0 {
            self.total += self.peak;
            self.filled = 0;
            self.peak = 0;
        }
    }

    pub(crate) fn finish(mut self) -> usize {
        self.flush();
        self.total
    }
}

/// Number of leading passes that are tracked: all of them, except a final
/// gap of 1.
pub(crate) fn tracked_passes(gaps: &[usize]) -> usize {
    match gaps.split_last() {
        Some((&1, rest)) => rest.len(),
        _ => gaps.len(),
    }
}

pub fn shell_sort_with_stats<T: PartialOrd>(data: &mut [T], gaps: &[usize]) -> Result<StatsReport> {
    shell_sort_with_stats_config(data, gaps, &DEFAULT_STATS_CONFIG)
}

/// Sorts like [`shell_sort`](crate::shell_sort) and records [`PassStats`]
/// for every gap except a trailing 1.
pub fn shell_sort_with_stats_config<T: PartialOrd>(
    data: &mut [T],
    gaps: &[usize],
    config: &StatsConfig,
) -> Result<StatsReport> {
    if config.max_window == 0 {
        return Err(SortError::InvalidWindow);
    }
    validate_gaps(data.len(), gaps)?;

    debug!(
        "shell sort with stats: len={} passes={} window<={}",
        data.len(),
        gaps.len(),
        config.max_window
    );

    let tracked = tracked_passes(gaps);
    let mut is_less = T::lt;
    let mut passes = Vec::with_capacity(tracked);

    for (idx, &gap) in gaps.iter().enumerate() {
        if idx >= tracked {
            gapped_pass(data, gap, &mut is_less, |_| {});
            continue;
        }

        let mut stats = PassStats {
            gap,
            ..PassStats::default()
        };
        let mut window = WindowedPeak::new(config.max_window.min(gap));
        gapped_pass(data, gap, &mut is_less, |len| {
            stats.insertions += 1;
            stats.comparisons += len;
            window.push(len);
        });
        stats.windowed_peak = window.finish();

        trace!(
            "gap={} insertions={} comparisons={} windowed_peak={}",
            stats.gap, stats.insertions, stats.comparisons, stats.windowed_peak
        );
        passes.push(stats);
    }

    Ok(StatsReport { passes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windowed_peak_flushes_partial_window() {
        let mut w = WindowedPeak::new(3);
        for v in [1, 5, 2, 4, 1, 1, 7] {
            w.push(v);
        }
        // windows: [1,5,2] [4,1,1] [7]
        assert_eq!(w.finish(), 5 + 4 + 7);

        assert_eq!(WindowedPeak::new(4).finish(), 0);
    }

    #[test]
    fn descending_32_with_gap_16() {
        let mut data: Vec<u32> = (0..32).rev().collect();
        let report = shell_sort_with_stats(&mut data, &[16]).unwrap();

        assert_eq!(
            report.passes,
            vec![PassStats {
                gap: 16,
                insertions: 16,
                comparisons: 16,
                windowed_peak: 1,
            }]
        );
        assert_eq!(report.efficiency_ratio().unwrap(), 16.0);

        let mut expected: Vec<u32> = (0..16).rev().collect();
        expected.extend((16..32).rev());
        assert_eq!(data, expected);
    }

    #[test]
    fn descending_with_unit_gap_is_triangular() {
        let n = 20_usize;
        let mut data: Vec<usize> = (0..n).rev().collect();
        let report = shell_sort_with_stats_config(&mut data, &[4, 1], &StatsConfig { max_window: 2 })
            .unwrap();

        assert_eq!(report.passes.len(), 1);
        let pass = report.passes[0];
        assert_eq!(pass.gap, 4);
        assert_eq!(pass.insertions, n - 4);
        // insertion at index i walks back i / 4 steps on a descending chain
        let comparisons: usize = (4..n).map(|i| i / 4).sum();
        assert_eq!(pass.comparisons, comparisons);
        // windows of two: (4,5) (6,7) (8,9) ... peaks 1,1,2,2,3,3,4,4
        assert_eq!(pass.windowed_peak, 1 + 1 + 2 + 2 + 3 + 3 + 4 + 4);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn window_never_exceeds_gap() {
        let mut data = [5, 4, 3, 2, 1, 0];
        let report = shell_sort_with_stats(&mut data, &[2, 1]).unwrap();
        // gap 2 -> window of 2 insertions: lens [1,1,2,2] -> peaks 1 + 2
        assert_eq!(report.passes[0].comparisons, 6);
        assert_eq!(report.passes[0].windowed_peak, 3);
        assert_eq!(data, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_input_ratio_equals_window() {
        let mut data: Vec<u64> = (0..64).collect();
        let report = shell_sort_with_stats(&mut data, &[32, 16, 1]).unwrap();
        assert_eq!(report.total_comparisons(), 32 + 48);
        assert_eq!(report.total_windowed_peak(), 2 + 3);
        assert_eq!(report.efficiency_ratio().unwrap(), 16.0);
    }

    #[test]
    fn no_tracked_passes_has_no_ratio() {
        let mut single = [1];
        let report = shell_sort_with_stats(&mut single, &[]).unwrap();
        assert!(report.passes.is_empty());
        assert_eq!(report.efficiency_ratio(), Err(SortError::NoStatistics));

        let mut data = [3, 2, 1];
        let report = shell_sort_with_stats(&mut data, &[1]).unwrap();
        assert_eq!(data, [1, 2, 3]);
        assert_eq!(report.efficiency_ratio(), Err(SortError::NoStatistics));
    }

    #[test]
    fn rejects_bad_input() {
        let mut data = [3, 2, 1];
        assert_eq!(
            shell_sort_with_stats(&mut data, &[5, 1]),
            Err(SortError::InvalidGap { gap: 5, len: 3 })
        );
        assert_eq!(
            shell_sort_with_stats_config(&mut data, &[1], &StatsConfig { max_window: 0 }),
            Err(SortError::InvalidWindow)
        );
        assert_eq!(data, [3, 2, 1]);
    }
}
