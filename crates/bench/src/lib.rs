use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a preset by input length; the larger sizes switch to flat sampling.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        apply_medium_runtime_config(group);
    } else {
        group.sampling_mode(SamplingMode::Flat);
        apply_large_runtime_config(group);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    NearlySorted1pctSwaps,
    Descending,
    FewDistinct,
}

pub const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomUniform,
    Distribution::NearlySorted1pctSwaps,
    Distribution::Descending,
    Distribution::FewDistinct,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
            Self::Descending => "descending",
            Self::FewDistinct => "few_distinct",
        }
    }

    fn salt(self) -> u64 {
        match self {
            Self::RandomUniform => 11,
            Self::NearlySorted1pctSwaps => 12,
            Self::Descending => 13,
            Self::FewDistinct => 14,
        }
    }
}

pub fn generate_dataset(dist: Distribution, size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size);

    match dist {
        Distribution::RandomUniform => {
            for _ in 0..size {
                data.push(rng.random::<u64>());
            }
        }
        Distribution::NearlySorted1pctSwaps => {
            data.extend(0..size as u64);
            let swaps = if size == 0 { 0 } else { (size / 100).max(1) };
            for _ in 0..swaps {
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                data.swap(a, b);
            }
        }
        Distribution::Descending => data.extend((0..size as u64).rev()),
        Distribution::FewDistinct => {
            for _ in 0..size {
                data.push(rng.random_range(0..16_u64) * 17);
            }
        }
    }

    data
}

#[inline]
pub fn seed_for(dist: Distribution, size: usize, salt: u64) -> u64 {
    mix_seed(RNG_SEED ^ (dist.salt() << 48) ^ (size as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
