//! Core domain: session-wide configuration and randomness.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Session seed, fixed at startup. Logged so a curious session can be
/// re-run with the same boss rolls.
#[derive(Resource, Debug)]
pub struct SessionConfig {
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Session RNG used for attack selection, movement jitter, and kick spin.
#[derive(Resource, Debug)]
pub struct SimRng(pub ChaCha8Rng);

impl FromWorld for SimRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<SessionConfig>()
            .map(|config| config.seed)
            .unwrap_or(0);
        info!("Session RNG seeded with {}", seed);
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
