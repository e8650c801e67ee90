/// `n / 2, n / 4, ..., 1`.
pub fn generate(n: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut gap = n / 2;
    while gap > 0 {
        gaps.push(gap);
        gap /= 2;
    }
    gaps
}
