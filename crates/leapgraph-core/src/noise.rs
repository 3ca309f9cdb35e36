use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, StandardNormal};

/// Seed used in place of 0, which would otherwise select a degenerate
/// generator state shared by every unseeded caller.
const FALLBACK_SEED: u64 = 123_456_789;

pub struct NoiseSource {
    rng: ChaCha20Rng,
}

impl NoiseSource {
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { FALLBACK_SEED } else { seed };
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entity_id(global_seed: u64, entity_id: u64) -> Self {
        // Combine seeds deterministically
        let seed = global_seed.wrapping_add(entity_id.wrapping_mul(0x9e3779b97f4a7c15));
        Self::new(seed)
    }

    pub fn standard_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }

    /// Uniform draw over the half-open interval [0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
