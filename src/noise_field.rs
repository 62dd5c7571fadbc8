//! Seeded 2D gradient noise
//!
//! Each `NoiseField` owns its permutation table, built once from the seed with
//! a ChaCha stream, so sampling never touches global random state and the same
//! seed reproduces the same field on every run and platform.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Largest value `sample` returns; keeps the output inside `[0, 1)`.
const MAX_SAMPLE: f64 = 1.0 - f64::EPSILON;

/// A deterministic, seeded noise sampler. Read-only after construction,
/// so one field can be shared across threads.
#[derive(Clone)]
pub struct NoiseField {
    seed: u64,
    perm: [u8; 512],
}

impl NoiseField {
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255u8).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        table.shuffle(&mut rng);

        // Duplicate to 512 so corner lookups never need wrapping
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }

        Self { seed, perm }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample the field at `(x, y)`. Returns a value in `[0, 1)`.
    /// Integer lattice points always sample to exactly `0.5`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();

        let xi = (x_floor as i64).rem_euclid(256) as usize;
        let yi = (y_floor as i64).rem_euclid(256) as usize;

        let xf = x - x_floor;
        let yf = y - y_floor;

        let u = fade(xf);
        let v = fade(yf);

        let p = &self.perm;
        let a = p[xi] as usize;
        let b = p[xi + 1] as usize;
        let aa = p[a + yi];
        let ab = p[a + yi + 1];
        let ba = p[b + yi];
        let bb = p[b + yi + 1];

        let top = lerp(u, grad(aa, xf, yf), grad(ba, xf - 1.0, yf));
        let bottom = lerp(u, grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0));
        let n = lerp(v, top, bottom);

        ((n + 1.0) * 0.5).clamp(0.0, MAX_SAMPLE)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

/// One-shot sample. Builds the permutation table for `seed` on every call;
/// hold a [`NoiseField`] when sampling many points.
pub fn sample(x: f64, y: f64, seed: u64) -> f64 {
    NoiseField::new(seed).sample(x, y)
}

/// Quintic smoothstep: t³(6t² − 15t + 10)
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the offset with one of 8 lattice gradients.
fn grad(hash: u8, x: f64, y: f64) -> f64 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}
