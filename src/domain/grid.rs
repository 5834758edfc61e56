use std::fmt;
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::distr::{Bernoulli, Distribution};

use super::Cell;
use crate::error::GridError;

/// Side length of the board used by the console demo.
pub const DEFAULT_SIZE: usize = 30;

/// Probability of a cell starting alive when seeding at random.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.5;

/// Grid holds a square Game of Life board with bounded edges.
///
/// Two buffers are kept: `current` is the generation that is read while
/// `next` is written during [`Grid::step`], after which they are swapped.
/// Cells outside the board never count as neighbors (no wrapping).
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            current: vec![Cell::Dead; size * size],
            next: vec![Cell::Dead; size * size],
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.current[self.index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            self.current[idx] = cell;
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.current.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.size)
            .flat_map(move |row| (0..self.size).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.current[self.index(row, col)]))
    }

    /// Populate the grid from `size` lines of `'0'`/`'1'` characters.
    ///
    /// Character `j` of line `i` becomes cell `(i, j)`. Extra lines and
    /// characters are ignored. The grid is cleared first, so anything a
    /// short or missing line fails to cover stays dead; the first such
    /// defect is returned after every available row has been read.
    pub fn seed_from_text<I, S>(&mut self, lines: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clear();

        let mut defect = None;
        let mut rows_read = 0;
        for (row, line) in lines.into_iter().take(self.size).enumerate() {
            let mut found = 0;
            for (col, symbol) in line.as_ref().chars().take(self.size).enumerate() {
                self.set(row, col, Cell::from_symbol(symbol));
                found = col + 1;
            }
            if found < self.size && defect.is_none() {
                defect = Some(GridError::ShortRow {
                    row,
                    expected: self.size,
                    found,
                });
            }
            rows_read += 1;
        }

        if rows_read < self.size && defect.is_none() {
            defect = Some(GridError::MissingRows {
                expected: self.size,
                found: rows_read,
            });
        }

        match defect {
            Some(err) => {
                tracing::warn!(%err, alive = self.count_alive(), "grid seeded partially");
                Err(err)
            }
            None => {
                tracing::debug!(alive = self.count_alive(), "grid seeded from text");
                Ok(())
            }
        }
    }

    /// Read a seed file and populate the grid from its lines.
    ///
    /// An unreadable file leaves the grid all dead.
    pub fn seed_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), GridError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| {
            self.clear();
            GridError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), "reading grid seed");
        self.seed_from_text(contents.lines())
    }

    /// Set every cell alive independently with the given probability.
    pub fn seed_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        probability: f64,
    ) -> Result<(), GridError> {
        let alive =
            Bernoulli::new(probability).map_err(|_| GridError::InvalidProbability(probability))?;

        for cell in &mut self.current {
            *cell = Cell::from(alive.sample(rng));
        }

        tracing::debug!(probability, alive = self.count_alive(), "grid seeded at random");
        Ok(())
    }

    /// Count live neighbors in the bounded Moore neighborhood
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let last = self.size - 1;
        let rows = row.saturating_sub(1)..=(row + 1).min(last);
        let cols = col.saturating_sub(1)..=(col + 1).min(last);

        rows.flat_map(|r| cols.clone().map(move |c| (r, c)))
            .filter(|&pos| pos != (row, col))
            .filter(|&(r, c)| self.current[self.index(r, c)].is_alive())
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// Every cell of `next` is computed from `current` only, then the
    /// buffers are swapped.
    pub fn step(&mut self) {
        for row in 0..self.size {
            for col in 0..self.size {
                let idx = self.index(row, col);
                let evolved = self.current[idx].evolve(self.count_live_neighbors(row, col));
                self.next[idx] = evolved;
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Text rendering: one line per row, `'1'` alive / `'0'` dead.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.current.chunks(self.size.max(1)) {
            out.extend(row.iter().map(|cell| cell.symbol()));
            out.push('\n');
        }
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.current == other.current
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn grid_with(size: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::default();
        assert_eq!(grid.size(), DEFAULT_SIZE);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(5);
        assert_eq!(grid.get(0, 0), Some(Cell::Dead));
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 5), None);
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(5);
        grid.set(7, 7, Cell::Alive);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_every_neighborhood_follows_rule_table() {
        // Interior cell (2, 2) of a 5x5 grid, all 2^9 configurations of
        // itself plus its eight neighbors.
        let offsets: Vec<(usize, usize)> = (1..=3)
            .flat_map(|r| (1..=3).map(move |c| (r, c)))
            .collect();

        for mask in 0u32..512 {
            let alive: Vec<_> = offsets
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << *bit) != 0)
                .map(|(_, &pos)| pos)
                .collect();
            let mut grid = grid_with(5, &alive);

            let center = grid.get(2, 2).unwrap();
            let neighbors = alive.iter().filter(|&&pos| pos != (2, 2)).count() as u8;
            assert_eq!(grid.count_live_neighbors(2, 2), neighbors);

            let expected = match (center, neighbors) {
                (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
                _ => Cell::Dead,
            };
            grid.step();
            assert_eq!(grid.get(2, 2), Some(expected), "mask {mask:09b}");
        }
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut grid = Grid::default();
        for _ in 0..10 {
            grid.step();
        }
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_lonely_cell_dies_anywhere() {
        let size = 6;
        for &(row, col) in &[(0, 0), (0, 5), (5, 0), (5, 5), (0, 3), (3, 0), (2, 3)] {
            let mut grid = grid_with(size, &[(row, col)]);
            grid.step();
            assert_eq!(grid.count_alive(), 0, "cell at ({row}, {col}) survived");
        }
    }

    #[test]
    fn test_block_still_life() {
        let mut grid = grid_with(10, &[(4, 4), (4, 5), (5, 4), (5, 5)]);
        let before = grid.clone();
        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_block_in_corner_still_life() {
        let mut grid = grid_with(10, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        let before = grid.clone();
        grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_blinker_evolution() {
        let mut grid = grid_with(10, &[(5, 4), (5, 5), (5, 6)]);

        grid.step();
        assert_eq!(grid.get(4, 5), Some(Cell::Alive));
        assert_eq!(grid.get(5, 5), Some(Cell::Alive));
        assert_eq!(grid.get(6, 5), Some(Cell::Alive));
        assert_eq!(grid.get(5, 4), Some(Cell::Dead));
        assert_eq!(grid.count_alive(), 3);

        grid.step();
        assert_eq!(grid, grid_with(10, &[(5, 4), (5, 5), (5, 6)]));
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // On a torus these four corners would form a stable block.
        let mut grid = grid_with(8, &[(0, 0), (0, 7), (7, 0), (7, 7)]);
        grid.step();
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_blinker_on_top_edge_loses_half() {
        let mut grid = grid_with(6, &[(0, 1), (0, 2), (0, 3)]);
        grid.step();
        // The row above the edge does not exist, so only the lower arm is born.
        assert_eq!(grid, grid_with(6, &[(0, 2), (1, 2)]));
    }

    #[test]
    fn test_render_format() {
        let grid = grid_with(3, &[(0, 0), (1, 2)]);
        assert_eq!(grid.render(), "100\n001\n000\n");
        assert_eq!(grid.to_string(), grid.render());
    }

    #[test]
    fn test_render_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::default();
        grid.seed_random(&mut rng, DEFAULT_ALIVE_PROBABILITY).unwrap();

        let mut copy = Grid::default();
        copy.seed_from_text(grid.render().lines()).unwrap();
        assert_eq!(copy, grid);
    }

    #[test]
    fn test_seed_ignores_extra_input() {
        let mut grid = Grid::new(2);
        grid.seed_from_text(["10xx", "0111", "1111"]).unwrap();
        assert_eq!(grid.render(), "10\n01\n");
    }

    #[test]
    fn test_seed_non_one_characters_are_dead() {
        let mut grid = Grid::new(3);
        grid.seed_from_text(["1a1", "2 1", "#1."]).unwrap();
        assert_eq!(grid.render(), "101\n001\n010\n");
    }

    #[test]
    fn test_seed_missing_rows_keeps_read_rows() {
        let mut grid = Grid::new(3);
        grid.set(2, 2, Cell::Alive);

        let err = grid.seed_from_text(["111"]).unwrap_err();
        assert!(matches!(err, GridError::MissingRows { expected: 3, found: 1 }));
        assert_eq!(grid.render(), "111\n000\n000\n");
    }

    #[test]
    fn test_seed_short_row_reported_and_rest_read() {
        let mut grid = Grid::new(3);
        let err = grid.seed_from_text(["11", "111", "101"]).unwrap_err();
        assert!(matches!(
            err,
            GridError::ShortRow {
                row: 0,
                expected: 3,
                found: 2
            }
        ));
        assert_eq!(grid.render(), "110\n111\n101\n");
    }

    #[test]
    fn test_seed_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "010").unwrap();
        writeln!(file, "010").unwrap();
        writeln!(file, "010").unwrap();

        let mut grid = Grid::new(3);
        grid.seed_from_path(file.path()).unwrap();
        assert_eq!(grid.render(), "010\n010\n010\n");
    }

    #[test]
    fn test_seed_from_path_handles_crlf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "11\r\n01\r\n").unwrap();

        let mut grid = Grid::new(2);
        grid.seed_from_path(file.path()).unwrap();
        assert_eq!(grid.render(), "11\n01\n");
    }

    #[test]
    fn test_seed_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut grid = Grid::new(3);
        grid.set(1, 1, Cell::Alive);

        let err = grid.seed_from_path(dir.path().join("matriz")).unwrap_err();
        assert!(matches!(err, GridError::Io { .. }));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_seed_random_is_reproducible() {
        let mut a = Grid::default();
        let mut b = Grid::default();
        a.seed_random(&mut StdRng::seed_from_u64(42), 0.5).unwrap();
        b.seed_random(&mut StdRng::seed_from_u64(42), 0.5).unwrap();
        assert_eq!(a, b);

        // Roughly half of 900 cells
        let alive = a.count_alive();
        assert!((300..600).contains(&alive), "alive = {alive}");
    }

    #[test]
    fn test_seed_random_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(10);

        grid.seed_random(&mut rng, 1.0).unwrap();
        assert_eq!(grid.count_alive(), 100);

        grid.seed_random(&mut rng, 0.0).unwrap();
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_seed_random_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(4);
        assert!(matches!(
            grid.seed_random(&mut rng, 1.5),
            Err(GridError::InvalidProbability(_))
        ));
        assert!(grid.seed_random(&mut rng, -0.1).is_err());
        assert!(grid.seed_random(&mut rng, f64::NAN).is_err());
    }

    #[test]
    fn test_step_keeps_dimensions() {
        let mut grid = Grid::new(12);
        grid.seed_random(&mut StdRng::seed_from_u64(3), 0.5).unwrap();
        grid.step();
        assert_eq!(grid.size(), 12);
        assert_eq!(grid.iter_cells().count(), 144);
    }
}
