use std::thread;
use std::time::Duration;

use crate::domain::Grid;

/// Simulation drives a seeded grid through successive generations.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    pub grid: Grid,
    pub generation: u64,
}

impl Simulation {
    /// Wrap an already seeded grid at generation 0
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    /// Step the grid once and bump the generation counter
    pub fn advance(&mut self) {
        self.grid.step();
        self.generation += 1;
    }

    /// Run `iterations` steps, sleeping `pacing` before each one and
    /// handing every new generation to `on_generation`.
    pub fn run<F>(&mut self, iterations: u32, pacing: Duration, mut on_generation: F)
    where
        F: FnMut(u64, &Grid),
    {
        for _ in 0..iterations {
            if !pacing.is_zero() {
                thread::sleep(pacing);
            }
            self.advance();
            tracing::debug!(
                generation = self.generation,
                alive = self.grid.count_alive(),
                "generation computed"
            );
            on_generation(self.generation, &self.grid);
        }
    }
}
