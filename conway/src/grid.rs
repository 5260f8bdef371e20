// grid.rs - Bounded grid for Conway's Game of Life

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::{debug, info};

use crate::error::{LifeError, Result};

// Default grid size when none is given
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 20;

pub const LIVE_CHAR: char = '*';
pub const DEAD_CHAR: char = '-';

/// A fixed-size, row-major matrix of live/dead cells.
///
/// Cells outside the grid are always treated as dead; there is no
/// wraparound at the edges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Grid {
    /// Creates a `rows` x `cols` grid with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Builds a grid from in-memory text. `'*'` marks a live cell, any
    /// other character (or a missing one) is dead, and anything past
    /// the grid bounds is ignored.
    pub fn parse(rows: usize, cols: usize, text: &str) -> Self {
        let mut grid = Self::new(rows, cols);
        for (row, line) in text.lines().take(rows).enumerate() {
            grid.load_line(row, line);
        }
        grid
    }

    /// Same as [`Grid::parse`] but pulls lines from a reader.
    pub fn from_reader<R: BufRead>(rows: usize, cols: usize, reader: R) -> io::Result<Self> {
        let mut grid = Self::new(rows, cols);
        // Every line is read even past the last row so a broken source
        // is reported instead of silently truncated.
        for (row, line) in reader.lines().enumerate() {
            let line = line?;
            if row < rows {
                grid.load_line(row, &line);
            }
        }
        Ok(grid)
    }

    /// Loads a grid from a text file on disk.
    pub fn from_file(rows: usize, cols: usize, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LifeError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LifeError::Read {
                path: path.to_path_buf(),
                source: err,
            },
        })?;

        let grid = Self::from_reader(rows, cols, BufReader::new(file)).map_err(|source| {
            LifeError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        info!(target: "conway", "Loaded {}x{} grid from {}", rows, cols, path.display());
        debug!(target: "conway", "Initial generation:\n{}", grid);
        Ok(grid)
    }

    fn load_line(&mut self, row: usize, line: &str) {
        for (col, ch) in line.chars().take(self.cols).enumerate() {
            if ch == LIVE_CHAR {
                let idx = self.index(row, col);
                self.cells[idx] = true;
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns the state of `(row, col)`, or `None` when it lies outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    /// Flips the cell at column `col`, row `row`.
    ///
    /// Note the argument order: the first coordinate is horizontal. Out of
    /// range coordinates are rejected and leave the grid untouched.
    pub fn toggle_cell(&mut self, col: usize, row: usize) -> Result<()> {
        if col >= self.cols || row >= self.rows {
            return Err(LifeError::IndexOutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
        debug!(target: "conway", "Toggled cell (col {}, row {}) -> {}", col, row, self.cells[idx]);
        Ok(())
    }

    fn live_neighbours(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        for nr in row.saturating_sub(1)..=(row + 1).min(self.rows - 1) {
            for nc in col.saturating_sub(1)..=(col + 1).min(self.cols - 1) {
                if (nr, nc) != (row, col) && self.cells[self.index(nr, nc)] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances the grid by one generation.
    ///
    /// Every neighbour count is taken from the current generation; the
    /// next one is built in a separate buffer and swapped in at the end.
    pub fn step(&mut self) {
        let mut next = vec![false; self.cells.len()];

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let alive = self.cells[idx];

                next[idx] = match (alive, self.live_neighbours(row, col)) {
                    (_, 3) => true,         // Birth or survival
                    (alive, 2) => alive,    // Unchanged
                    _ => false,             // Isolation or overcrowding
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut next);
    }

    /// Runs `n` generations. `step_n(0)` leaves the grid as is.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Renders the grid as text: one line per row, `'*'` for live and
    /// `'-'` for dead cells, each line newline-terminated.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let alive = self.cells[self.index(row, col)];
                write!(f, "{}", if alive { LIVE_CHAR } else { DEAD_CHAR })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
