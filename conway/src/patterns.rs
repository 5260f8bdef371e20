// patterns.rs - Preset starting patterns and random fills

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// A named pattern, stored as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Sets the pattern's cells alive with its top-left corner at `(row, col)`.
/// Cells falling outside the grid are dropped.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, row: usize, col: usize) {
    for &(dr, dc) in pattern.cells {
        let (r, c) = (row + dr, col + dc);
        if r < grid.rows() && c < grid.cols() {
            grid.set(r, c, true);
        }
    }
}

/// Clears the grid and places `pattern` in its centre.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();

    let (h, w) = pattern.extent();
    let row = grid.rows().saturating_sub(h) / 2;
    let col = grid.cols().saturating_sub(w) / 2;
    stamp(grid, pattern, row, col);
}

/// Refills the grid with roughly one live cell in three, derived from `seed_value`.
pub fn apply_random_pattern(grid: &mut Grid, seed_value: u64) {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            grid.set(row, col, (seed >> 16) % 3 == 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centred(name: &str, rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);
        apply_pattern(&mut grid, find(name).unwrap());
        grid
    }

    fn period(start: &Grid, max: usize) -> Option<usize> {
        let mut grid = start.clone();
        (1..=max).find(|_| {
            grid.step();
            grid == *start
        })
    }

    #[test]
    fn every_preset_fits_the_default_grid() {
        for pattern in PATTERNS {
            let (h, w) = pattern.extent();
            assert!(h <= 20 && w <= 20, "{} is {h}x{w}", pattern.name);

            let mut grid = Grid::default();
            apply_pattern(&mut grid, pattern);
            assert_eq!(grid.live_count(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn blinker_is_centred() {
        let grid = centred("blinker", 5, 5);
        assert_eq!(grid.to_text(), "-----\n-----\n-***-\n-----\n-----\n");
    }

    #[test]
    fn oscillators_have_expected_periods() {
        assert_eq!(period(&centred("Blinker", 20, 20), 5), Some(2));
        assert_eq!(period(&centred("Toad", 20, 20), 5), Some(2));
        assert_eq!(period(&centred("Beacon", 20, 20), 5), Some(2));
        assert_eq!(period(&centred("Pulsar", 20, 20), 5), Some(3));
    }

    #[test]
    fn glider_moves_one_cell_diagonally_every_four_generations() {
        let glider = find("Glider").unwrap();
        let mut grid = Grid::new(10, 10);
        stamp(&mut grid, glider, 1, 1);

        let mut expected = Grid::new(10, 10);
        stamp(&mut expected, glider, 2, 2);

        grid.step_n(4);
        assert_eq!(grid, expected);
    }

    #[test]
    fn apply_pattern_replaces_previous_contents() {
        let mut grid = Grid::parse(3, 3, "***\n***\n***\n");
        apply_pattern(&mut grid, find("Blinker").unwrap());
        assert_eq!(grid.to_text(), "---\n***\n---\n");
    }

    #[test]
    fn stamp_clips_at_the_edges() {
        let mut grid = Grid::new(3, 3);
        stamp(&mut grid, find("Beacon").unwrap(), 1, 1);
        assert_eq!(grid.to_text(), "---\n-**\n-**\n");
    }

    #[test]
    fn unknown_pattern_is_none() {
        assert!(find("Spaceship 9000").is_none());
    }

    #[test]
    fn random_fill_is_seeded() {
        let mut a = Grid::default();
        let mut b = Grid::default();
        apply_random_pattern(&mut a, 7);
        apply_random_pattern(&mut b, 7);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.live_count() < a.rows() * a.cols());
    }
}
