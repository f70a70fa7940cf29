//! Random number helpers for the series generators.
//!
//! Every generator draws from a caller-owned [`Rng`]. There is no
//! process-wide seed: reproducibility comes from seeding the handle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Build a generator from an optional seed.
///
/// `Some(seed)` gives a deterministic [`StdRng`]; `None` seeds from OS entropy.
///
/// # Example
/// ```
/// use rand::Rng;
/// use tslab::utils::rng::seeded_rng;
///
/// let a: f64 = seeded_rng(Some(7)).gen();
/// let b: f64 = seeded_rng(Some(7)).gen();
/// assert_eq!(a, b);
/// ```
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Draw `len` independent standard-normal values, in index order.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.sample(StandardNormal)).collect()
}
