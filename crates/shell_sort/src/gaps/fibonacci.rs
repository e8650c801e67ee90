/// Fibonacci numbers `1, 2, 3, 5, 8, ...` below `n`, largest first.
pub fn generate(n: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let (mut prev, mut cur) = (1_usize, 1_usize);
    while cur < n {
        gaps.push(cur);
        let Some(next) = prev.checked_add(cur) else {
            break;
        };
        prev = cur;
        cur = next;
    }
    gaps.reverse();
    gaps
}
