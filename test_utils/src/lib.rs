use ark_std::rand::{rngs::StdRng, Rng, SeedableRng};

#[macro_use]
pub mod serialization;

pub use rmp_serde;
pub use serde_json;

/// Rng seeded with a fixed value so that tests are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns a copy of `bytes` with the byte at a random position xor-ed with a random non-zero value
pub fn flip_random_byte<R: Rng>(rng: &mut R, bytes: &[u8]) -> Vec<u8> {
    let mut mutated = bytes.to_vec();
    let i = rng.gen_range(0..mutated.len());
    let mask = rng.gen_range(1..=u8::MAX);
    mutated[i] ^= mask;
    mutated
}
