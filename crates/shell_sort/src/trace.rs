use log::trace;

use crate::error::{Result, SortError};
use crate::sorter::{gapped_pass, validate_gaps};
use crate::stats::{PassStats, StatsConfig, WindowedPeak};

/// Inner-loop length of every insertion made with one gap, in scan order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassTrace {
    pub gap: usize,
    pub inner_lens: Vec<usize>,
}

impl PassTrace {
    /// Recomputes the counters [`shell_sort_with_stats`](crate::shell_sort_with_stats)
    /// would have gathered for this pass.
    pub fn stats(&self, config: &StatsConfig) -> Result<PassStats> {
        if config.max_window == 0 {
            return Err(SortError::InvalidWindow);
        }
        let mut window = WindowedPeak::new(config.max_window.min(self.gap.max(1)));
        for &len in &self.inner_lens {
            window.push(len);
        }
        Ok(PassStats {
            gap: self.gap,
            insertions: self.inner_lens.len(),
            comparisons: self.inner_lens.iter().sum(),
            windowed_peak: window.finish(),
        })
    }
}

/// Sorts like [`shell_sort`](crate::shell_sort) and keeps the full
/// per-insertion record of every pass, the last one included.
pub fn shell_sort_traced<T: PartialOrd>(data: &mut [T], gaps: &[usize]) -> Result<Vec<PassTrace>> {
    validate_gaps(data.len(), gaps)?;

    let mut is_less = T::lt;
    let mut traces = Vec::with_capacity(gaps.len());
    for &gap in gaps {
        let mut inner_lens = Vec::with_capacity(data.len() - gap);
        gapped_pass(data, gap, &mut is_less, |len| inner_lens.push(len));
        trace!("gap={gap} inner_lens={inner_lens:?}");
        traces.push(PassTrace { gap, inner_lens });
    }
    Ok(traces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{DEFAULT_STATS_CONFIG, shell_sort_with_stats};

    #[test]
    fn records_every_pass() {
        let mut data = [5, 3, 4, 1, 2];
        let traces = shell_sort_traced(&mut data, &[2, 1]).unwrap();
        assert_eq!(data, [1, 2, 3, 4, 5]);
        assert_eq!(
            traces,
            vec![
                // [5,3,4,1,2] -> [4,3,5,1,2] -> [4,1,5,3,2] -> [2,1,4,3,5]
                PassTrace {
                    gap: 2,
                    inner_lens: vec![1, 1, 2],
                },
                // [2,1,4,3,5] -> [1,2,4,3,5] -> . -> [1,2,3,4,5] -> .
                PassTrace {
                    gap: 1,
                    inner_lens: vec![1, 1, 2, 1],
                },
            ]
        );
    }

    #[test]
    fn trace_agrees_with_stats() {
        let input: Vec<i64> = (0..200).map(|i| (i * 7919 % 211) - 100).collect();
        let gaps = [57, 23, 10, 4, 1];

        let mut traced = input.clone();
        let traces = shell_sort_traced(&mut traced, &gaps).unwrap();

        let mut counted = input.clone();
        let report = shell_sort_with_stats(&mut counted, &gaps).unwrap();

        assert_eq!(traced, counted);
        assert_eq!(traces.len(), report.passes.len() + 1);
        for (trace, stats) in traces.iter().zip(&report.passes) {
            assert_eq!(trace.stats(&DEFAULT_STATS_CONFIG).unwrap(), *stats);
        }
    }
}
