//! Deterministic random draws for tests, benches and demos.
//!
//! Model
//! - A replay token `(seed, index)` is mixed into one `StdRng`, so draw `k` of
//!   a run can be reproduced without replaying draws `0..k`.
//! - Angles are drawn inside the open domains of the n-spherical form: the
//!   inner angles in (0, π), the last one in [-π, π).

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::polar::NSpherical;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    pub fn rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// `count` n-spherical angles; the last one is the azimuth.
pub fn random_angles<R: Rng>(count: usize, rng: &mut R) -> Vec<f64> {
    (0..count)
        .map(|i| {
            if i + 1 == count {
                rng.gen_range(-PI..PI)
            } else {
                // open interval: reject the exact lower bound
                loop {
                    let a = rng.gen_range(0.0..PI);
                    if a > 0.0 {
                        break a;
                    }
                }
            }
        })
        .collect()
}

/// Random n-spherical form with radius `r` for a `dim`-point (`dim >= 2`).
pub fn random_n_spherical<R: Rng>(dim: usize, r: f64, rng: &mut R) -> NSpherical {
    NSpherical::new(r, random_angles(dim.saturating_sub(1).max(1), rng))
}

/// Point with coordinates uniform in `[-extent, extent)`.
pub fn random_point<R: Rng>(dim: usize, extent: f64, rng: &mut R) -> Point {
    (0..dim).map(|_| rng.gen_range(-extent..extent)).collect()
}
