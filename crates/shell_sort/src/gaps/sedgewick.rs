/// `9 * 2^i - 9 * 2^(i/2) + 1` for even `i`, `8 * 2^i - 6 * 2^((i+1)/2) + 1` for odd `i`.
/// `None` once the term no longer fits in a `usize`.
fn term(i: u32) -> Option<usize> {
    let pow = 2_usize.checked_pow(i)?;
    if i % 2 == 0 {
        let half = 2_usize.checked_pow(i / 2)?;
        9_usize.checked_mul(pow)?.checked_sub(9 * half)?.checked_add(1)
    } else {
        let half = 2_usize.checked_pow(i.div_ceil(2))?;
        8_usize.checked_mul(pow)?.checked_sub(6 * half)?.checked_add(1)
    }
}

/// Terms are stacked on top of a seed `1` starting from `i = 2` while three
/// times the newest term still fits in `n`. The newest term, the one that
/// overshot, is then dropped unless only the seed is left.
pub fn generate(n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }

    let mut gaps = vec![1_usize];
    let mut head = 1_usize;
    let mut i = 2_u32;
    loop {
        if head.saturating_mul(3) > n {
            if gaps.len() > 1 {
                gaps.pop();
            }
            break;
        }
        // An unrepresentable term would overshoot and be dropped anyway.
        let Some(next) = term(i) else {
            break;
        };
        gaps.push(next);
        head = next;
        i += 1;
    }

    gaps.reverse();
    gaps
}
