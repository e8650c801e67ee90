/// Ciura's measured increments, extended geometrically by a factor of about 2.25.
const GAPS_DESC: [usize; 20] = [
    7_860_916, 3_493_740, 1_552_773, 690_121, 306_720, 136_320, 60_587, 26_928, 11_968, 5_319,
    2_364, 1_051, 701, 301, 132, 57, 23, 10, 4, 1,
];

pub fn generate(n: usize) -> Vec<usize> {
    GAPS_DESC.iter().copied().filter(|&gap| gap < n).collect()
}
