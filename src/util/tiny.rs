use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A rng that always produces the same sequence, for reproducible tests.
pub fn consistent_rng() -> impl Rng {
    seeded_rng(0)
}

/// A small, fast rng seeded with `seed`.
pub fn seeded_rng(seed: u64) -> Xoroshiro64StarStar {
    Xoroshiro64StarStar::seed_from_u64(seed)
}
