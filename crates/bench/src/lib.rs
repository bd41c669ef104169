use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
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

/// Picks the runtime preset for a dataset of `size` elements.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 4096 {
        apply_small_runtime_config(group);
    } else if size <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

pub fn random_u64s<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<u64> {
    (0..size).map(|_| rng.random::<u64>()).collect()
}

/// Ascending `0..size` with roughly one percent of positions swapped.
pub fn nearly_sorted_u64s<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..size as u64).collect();
    if size == 0 {
        return data;
    }
    let swaps = (size / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}

pub fn reversed_u64s(size: usize) -> Vec<u64> {
    (0..size as u64).rev().collect()
}

/// Mixed-case ASCII words of 1..=`max_len` letters.
pub fn random_words<R: Rng + ?Sized>(rng: &mut R, size: usize, max_len: usize) -> Vec<String> {
    (0..size)
        .map(|_| {
            let len = rng.random_range(1..=max_len.max(1));
            (0..len)
                .map(|_| {
                    let letter = rng.random_range(b'a'..=b'z');
                    if rng.random::<bool>() {
                        letter.to_ascii_uppercase() as char
                    } else {
                        letter as char
                    }
                })
                .collect()
        })
        .collect()
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
