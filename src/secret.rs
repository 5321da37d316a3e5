use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

pub const SECRET_MIN: i64 = 1;
pub const SECRET_MAX: i64 = 100;

/// Draws secrets from an owned generator, seeded once on construction.
pub struct SecretSelector {
    rng: StdRng,
}

impl SecretSelector {
    pub fn from_seed(seed: u64) -> Self {
        debug!("Seeding secret selector with {}", seed);
        SecretSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeds from the wall clock so that consecutive runs pick different numbers.
    pub fn from_time() -> Self {
        // a clock set before 1970 just gets seed 0
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    pub fn select_secret(&mut self) -> i64 {
        let secret = self.rng.random_range(SECRET_MIN..=SECRET_MAX);
        debug!("Selected secret {}", secret);
        secret
    }
}
