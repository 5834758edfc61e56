use super::{Cell, Grid};

/// A named shape that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // (row, col) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at (row, col).
    /// Cells falling outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }

    /// Stamp the pattern roughly in the middle of the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let row = grid.size().saturating_sub(self.height) / 2;
        let col = grid.size().saturating_sub(self.width) / 2;
        self.place_on(grid, row, col);
    }
}

/// Small classic patterns used for seeding and checks
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(1, 0), (1, 1), (1, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }

    /// Look a preset up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}
