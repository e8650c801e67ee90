/// `2^k - 1, ..., 7, 3, 1`, keeping only terms below `n`.
pub fn generate(n: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut gap = 1_usize;
    while gap < n {
        gaps.push(gap);
        match gap.checked_mul(2).and_then(|g| g.checked_add(1)) {
            Some(next) => gap = next,
            None => break,
        }
    }
    gaps.reverse();
    gaps
}
