use log::debug;

use crate::error::{Result, SortError};

/// Checks that every gap lies in `[1, len - 1]` before anything moves.
pub fn validate_gaps(len: usize, gaps: &[usize]) -> Result<()> {
    match gaps.iter().find(|&&gap| gap == 0 || gap >= len) {
        Some(&gap) => Err(SortError::InvalidGap { gap, len }),
        None => Ok(()),
    }
}

/// One gapped insertion pass. `on_insert` receives the inner-loop length of
/// each insertion: every probe of the element `gap` to the left counts,
/// including the one that stops the loop.
#[inline]
pub(crate) fn gapped_pass<T, F, O>(data: &mut [T], gap: usize, is_less: &mut F, mut on_insert: O)
where
    F: FnMut(&T, &T) -> bool,
    O: FnMut(usize),
{
    debug_assert!(gap > 0);
    for i in gap..data.len() {
        let mut j = i;
        let mut probes = 0_usize;
        while j >= gap {
            probes += 1;
            // data[j] holds the element being inserted.
            if !is_less(&data[j], &data[j - gap]) {
                break;
            }
            data.swap(j, j - gap);
            j -= gap;
        }
        on_insert(probes);
    }
}

pub(crate) fn run_passes<T, F>(data: &mut [T], gaps: &[usize], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug!("shell sort: len={} passes={}", data.len(), gaps.len());
    for &gap in gaps {
        gapped_pass(data, gap, &mut is_less, |_| {});
    }
}

/// Sorts `data` in place with one gapped insertion pass per gap, in order.
///
/// An empty `gaps` leaves the slice untouched and `[1]` is plain insertion
/// sort. The result is only guaranteed sorted when the last gap is 1.
pub fn shell_sort<'a, T: PartialOrd>(data: &'a mut [T], gaps: &[usize]) -> Result<&'a mut [T]> {
    shell_sort_by(data, gaps, T::lt)
}

/// [`shell_sort`] with a strict "less than" comparator.
pub fn shell_sort_by<'a, T, F>(data: &'a mut [T], gaps: &[usize], is_less: F) -> Result<&'a mut [T]>
where
    F: FnMut(&T, &T) -> bool,
{
    validate_gaps(data.len(), gaps)?;
    run_passes(data, gaps, is_less);
    Ok(data)
}
