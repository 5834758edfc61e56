// Domain layer - Core logic (grid, graph, pi estimator)
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

pub mod error;
pub mod logging;

// Re-exports for convenience
pub use domain::{Cell, Graph, Grid, Pattern, estimate_pi, presets};
pub use application::{Config, Menu, Simulation};
pub use error::{EstimateError, GraphError, GridError};
