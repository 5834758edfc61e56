//! Interactive console menu.
//!
//! Reads choices line by line from any `BufRead` and writes everything
//! to any `Write`, so the whole loop can be driven from memory in tests.
//! End of input behaves like choosing exit.

use std::io::{self, BufRead, Write};

use rand::Rng;

use super::{Config, Simulation};
use crate::domain::{estimate_pi, presets, Graph, Grid, DEFAULT_ALIVE_PROBABILITY};

const RULE: &str = "=========================================";

/// Edges of the demo graph searched by the third exercise.
pub const DEMO_EDGES: [(i32, i32); 5] = [(1, 2), (3, 4), (1, 5), (5, 6), (6, 4)];

pub struct Menu<R, W, G> {
    config: Config,
    input: R,
    output: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Menu<R, W, G> {
    pub fn new(config: Config, input: R, output: W, rng: G) -> Self {
        Self { config, input, output, rng }
    }

    /// Give back the writer, mostly so tests can inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }

    /// Show the main menu until the user exits or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{RULE}")?;
            writeln!(self.output, "  Pi / Game of Life / Graph exercises")?;
            writeln!(self.output, "{RULE}")?;
            writeln!(self.output, "1) Approximate pi (Monte Carlo)")?;
            writeln!(self.output, "2) Game of Life")?;
            writeln!(self.output, "3) Graph - find a path")?;
            writeln!(self.output, "0) Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.parse::<u32>() {
                Ok(0) => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                Ok(1) => self.pi_exercise()?,
                Ok(2) => self.life_exercise()?,
                Ok(3) => self.graph_exercise()?,
                _ => writeln!(self.output, "Invalid option, try again.")?,
            }
        }
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn pi_exercise(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Pi approximation ===")?;
        let message = format!("Number of points [{}]: ", self.config.default_points);
        let points = match self.prompt(&message)? {
            Some(raw) if raw.is_empty() => self.config.default_points,
            Some(raw) => match raw.parse::<u64>() {
                Ok(points) => points,
                Err(_) => {
                    writeln!(self.output, "Invalid input, a whole number is required.")?;
                    return Ok(());
                }
            },
            None => return Ok(()),
        };

        match estimate_pi(&mut self.rng, points) {
            Ok(estimate) => writeln!(self.output, "Pi is approximately {estimate}")?,
            Err(err) => writeln!(self.output, "Cannot estimate pi: {err}")?,
        }
        writeln!(self.output, "{RULE}")
    }

    fn life_exercise(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Game of Life ===")?;
        writeln!(self.output, "1) Load initial state from '{}'", self.config.seed_path.display())?;
        writeln!(self.output, "2) Random initial state (Monte Carlo)")?;
        writeln!(self.output, "3) Place a preset pattern")?;

        let Some(choice) = self.prompt("Choose 1, 2 or 3: ")? else {
            return Ok(());
        };
        let choice = choice.parse::<u32>().unwrap_or(0);

        let mut grid = Grid::new(self.config.grid_size);
        match choice {
            2 => {
                writeln!(self.output, "Generating random initial state...")?;
                if let Err(err) = grid.seed_random(&mut self.rng, DEFAULT_ALIVE_PROBABILITY) {
                    writeln!(self.output, "Warning: {err}")?;
                }
            }
            3 => {
                let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
                let message = format!("Pattern ({}): ", names.join(", "));
                let Some(name) = self.prompt(&message)? else {
                    return Ok(());
                };
                match presets::by_name(&name) {
                    Some(pattern) => pattern.place_centered(&mut grid),
                    None => writeln!(self.output, "Unknown pattern '{name}', starting empty.")?,
                }
            }
            other => {
                if other != 1 {
                    writeln!(self.output, "Invalid option, loading from file.")?;
                }
                writeln!(
                    self.output,
                    "Reading initial state from '{}'...",
                    self.config.seed_path.display()
                )?;
                if let Err(err) = grid.seed_from_path(&self.config.seed_path) {
                    writeln!(self.output, "Warning: {err}")?;
                }
            }
        }

        writeln!(self.output, "Initial state:\n{grid}")?;

        let message = format!("How many generations? [{}]: ", self.config.iterations);
        let iterations = match self.prompt(&message)? {
            Some(raw) if !raw.is_empty() => match raw.parse::<u32>() {
                Ok(iterations) => iterations,
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid input, using {} generations.",
                        self.config.iterations
                    )?;
                    self.config.iterations
                }
            },
            _ => self.config.iterations,
        };

        let output = &mut self.output;
        let mut written = Ok(());
        let mut simulation = Simulation::from_grid(grid);
        simulation.run(iterations, self.config.step_delay, |generation, grid| {
            if written.is_ok() {
                written = writeln!(output, "Generation {generation}:\n{grid}");
            }
        });
        written?;
        writeln!(self.output, "{RULE}")
    }

    fn graph_exercise(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Graph path search ===")?;
        let mut graph = Graph::new();
        for (a, b) in DEMO_EDGES {
            graph.add_edge(a, b);
        }

        writeln!(self.output, "Undirected graph, adjacency list:")?;
        write!(self.output, "{graph}")?;
        writeln!(self.output, "Searching a path from 1 to 4...")?;
        match graph.find_one_path(&1, &4) {
            Some(path) => writeln!(self.output, "Path found: {path:?}")?,
            None => writeln!(self.output, "No path found")?,
        }
        writeln!(self.output, "{RULE}")
    }
}
