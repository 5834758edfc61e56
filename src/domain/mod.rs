mod cell;
mod grid;
mod patterns;
pub mod graph;
pub mod monte_carlo;

pub use cell::Cell;
pub use grid::{Grid, DEFAULT_ALIVE_PROBABILITY, DEFAULT_SIZE};
pub use patterns::{Pattern, presets};
pub use graph::Graph;
pub use monte_carlo::estimate_pi;
