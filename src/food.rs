use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::Cell;
use crate::grid::Grid;

/// Source of food positions.
pub trait Spawner {
    fn spawn(&mut self, grid: &Grid) -> Cell;
}

/// Uniform pick over the whole grid. The snake's body is not consulted, so
/// food can land underneath it.
pub struct RandomSpawner<R> {
    rng: R,
}

impl<R: Rng> RandomSpawner<R> {
    pub fn new(rng: R) -> Self {
        RandomSpawner { rng }
    }
}

impl RandomSpawner<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RandomSpawner::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Spawner for RandomSpawner<R> {
    fn spawn(&mut self, grid: &Grid) -> Cell {
        let x = self.rng.gen_range(0..grid.width());
        let y = self.rng.gen_range(0..grid.height());
        debug!(x, y, "spawned food");
        (x, y)
    }
}

pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
