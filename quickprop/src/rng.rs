//! Random source used by the runners.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// A fresh generator seeded from the operating system; every run draws
/// different values.
pub fn create_rng() -> StdRng {
    StdRng::from_entropy()
}
