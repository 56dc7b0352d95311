//! Command implementations behind the CLI.

pub mod interactive;
pub mod roll;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds the dice RNG: seeded when asked for reproducible output, otherwise
/// seeded from the operating system.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Seeding the dice with {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    }
}
