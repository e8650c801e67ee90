/// 3-smooth numbers `2^i * 3^j` not exceeding `n / 2`, largest first.
pub fn generate(n: usize) -> Vec<usize> {
    let limit = n / 2;
    let mut gaps = Vec::new();

    let mut pow2 = 1_usize;
    while pow2 <= limit {
        let mut smooth = pow2;
        while smooth <= limit {
            gaps.push(smooth);
            match smooth.checked_mul(3) {
                Some(next) => smooth = next,
                None => break,
            }
        }
        match pow2.checked_mul(2) {
            Some(next) => pow2 = next,
            None => break,
        }
    }

    gaps.sort_unstable_by(|a, b| b.cmp(a));
    gaps.dedup();
    gaps
}
