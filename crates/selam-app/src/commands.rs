use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod assist;
pub mod generate;
pub mod practice;
pub mod vocab;

/// Seeded ChaCha8 when requested, unseeded thread RNG otherwise
pub(crate) fn rng_from_seed(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}
