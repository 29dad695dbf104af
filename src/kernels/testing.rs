//! Shared helpers for kernel unit tests

use crate::dtype::Element;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Element types that can be drawn at random
pub(crate) trait Random: Element {
    fn random(rng: &mut StdRng) -> Self;
}

impl Random for i8 {
    fn random(rng: &mut StdRng) -> Self {
        rng.random()
    }
}

impl Random for i16 {
    fn random(rng: &mut StdRng) -> Self {
        rng.random()
    }
}

impl Random for i32 {
    fn random(rng: &mut StdRng) -> Self {
        rng.random()
    }
}

impl Random for f32 {
    fn random(rng: &mut StdRng) -> Self {
        rng.random_range(-8.0f32..8.0)
    }
}

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(crate) fn random_vec<T: Random>(rng: &mut StdRng, len: usize) -> Vec<T> {
    (0..len).map(|_| T::random(rng)).collect()
}
