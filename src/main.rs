use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use practicas::{
    Config, Graph, Grid, Menu, Simulation,
    application::DEMO_EDGES,
    domain::DEFAULT_ALIVE_PROBABILITY,
    estimate_pi, logging, presets,
};

#[derive(Parser)]
#[command(
    name = "practicas",
    version,
    about = "Monte Carlo pi, Conway's Game of Life and graph path search"
)]
struct Cli {
    #[command(flatten)]
    config: Config,

    /// Run one exercise directly instead of opening the menu.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Approximate pi with `--points` random samples.
    Pi,
    /// Seed a board and print the following generations.
    Life {
        /// Seed every cell alive with probability 0.5 instead of reading `--file`.
        #[arg(long, conflicts_with = "pattern")]
        random: bool,
        /// Start from a centered preset (block, blinker, toad, beacon, glider).
        #[arg(long)]
        pattern: Option<String>,
    },
    /// Build an undirected graph and print one path between two vertices.
    Path {
        #[arg(long)]
        from: i32,
        #[arg(long)]
        to: i32,
        /// Edge as `A-B`; repeat for more. Defaults to the demo graph.
        #[arg(long = "edge", value_parser = parse_edge)]
        edges: Vec<(i32, i32)>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => cmd_menu(cli.config),
        Some(Command::Pi) => cmd_pi(&cli.config),
        Some(Command::Life { random, pattern }) => cmd_life(&cli.config, random, pattern),
        Some(Command::Path { from, to, edges }) => cmd_path(from, to, edges),
    }
}

fn cmd_menu(config: Config) -> Result<()> {
    let stdin = io::stdin();
    let mut menu = Menu::new(config, stdin.lock(), io::stdout(), rand::rng());
    menu.run().context("console menu")
}

fn cmd_pi(config: &Config) -> Result<()> {
    let estimate = estimate_pi(&mut rand::rng(), config.default_points)?;
    println!("{estimate}");
    Ok(())
}

fn cmd_life(config: &Config, random: bool, pattern: Option<String>) -> Result<()> {
    let mut grid = Grid::new(config.grid_size);
    if random {
        grid.seed_random(&mut rand::rng(), DEFAULT_ALIVE_PROBABILITY)?;
    } else if let Some(name) = pattern {
        let Some(pattern) = presets::by_name(&name) else {
            bail!("unknown pattern `{name}`");
        };
        pattern.place_centered(&mut grid);
    } else if let Err(err) = grid.seed_from_path(&config.seed_path) {
        // Partial seeds are still simulated; the caller only gets told.
        eprintln!("warning: {err}");
    }

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Initial state:\n{grid}")?;

    let mut written = Ok(());
    let mut simulation = Simulation::from_grid(grid);
    simulation.run(config.iterations, config.step_delay, |generation, grid| {
        if written.is_ok() {
            written = writeln!(stdout, "Generation {generation}:\n{grid}");
        }
    });
    written.context("write generation")
}

fn cmd_path(from: i32, to: i32, edges: Vec<(i32, i32)>) -> Result<()> {
    let edges = if edges.is_empty() { DEMO_EDGES.to_vec() } else { edges };

    let mut graph = Graph::new();
    for (a, b) in edges {
        graph.add_edge(a, b);
    }

    print!("{graph}");
    match graph.find_one_path(&from, &to) {
        Some(path) => println!("Path found: {path:?}"),
        None => println!("No path from {from} to {to}"),
    }
    Ok(())
}

fn parse_edge(raw: &str) -> Result<(i32, i32), String> {
    let (a, b) = raw
        .split_once('-')
        .ok_or_else(|| format!("edge `{raw}` must look like A-B"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|err| format!("invalid vertex `{v}` in `{raw}`: {err}"))
    };
    Ok((parse(a)?, parse(b)?))
}
