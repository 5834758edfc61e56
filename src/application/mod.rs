mod config;
mod menu;
mod simulation;

pub use config::Config;
pub use menu::{Menu, DEMO_EDGES};
pub use simulation::Simulation;
