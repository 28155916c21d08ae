//! Randomised gate deciding when the next alien appears.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{MAX_SPAWN_DELAY_MS, MIN_SPAWN_DELAY_MS};

/// Fires at most once per randomly drawn delay.
///
/// The delay is rolled uniformly from
/// [`MIN_SPAWN_DELAY_MS`]`..=`[`MAX_SPAWN_DELAY_MS`] at construction and after
/// every successful check. Time is supplied by the caller so the gate never
/// reads a clock itself.
#[derive(Debug, Clone)]
pub struct SpawnTimer<R = StdRng> {
    last_spawn_ms: u64,
    delay_ms: u64,
    rng: R,
}

impl SpawnTimer<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SpawnTimer<R> {
    pub fn new(mut rng: R) -> Self {
        let delay_ms = roll_delay(&mut rng);
        SpawnTimer {
            last_spawn_ms: 0,
            delay_ms,
            rng,
        }
    }

    /// Builds a timer in a known state. `delay_ms` is clamped into the legal range.
    #[cfg(test)]
    pub fn with_state(last_spawn_ms: u64, delay_ms: u64, rng: R) -> Self {
        SpawnTimer {
            last_spawn_ms,
            delay_ms: delay_ms.clamp(MIN_SPAWN_DELAY_MS, MAX_SPAWN_DELAY_MS),
            rng,
        }
    }

    /// Returns true when `delay_ms` has elapsed since the last spawn, and
    /// starts a new window at `now_ms`.
    pub fn should_spawn(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_spawn_ms) < self.delay_ms {
            return false;
        }
        self.restart(now_ms);
        true
    }

    /// Opens a fresh window at `now_ms`, as if a spawn had just fired there.
    pub fn restart(&mut self, now_ms: u64) {
        self.last_spawn_ms = now_ms;
        self.delay_ms = roll_delay(&mut self.rng);
    }

    pub fn last_spawn_ms(&self) -> u64 {
        self.last_spawn_ms
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

fn roll_delay<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(MIN_SPAWN_DELAY_MS..=MAX_SPAWN_DELAY_MS)
}

/// The game's spawn gate, driven by the fixed-step clock.
#[derive(Resource)]
pub struct AlienSpawnTimer(pub SpawnTimer);

impl Default for AlienSpawnTimer {
    fn default() -> Self {
        AlienSpawnTimer(SpawnTimer::from_entropy())
    }
}
