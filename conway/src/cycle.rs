// cycle.rs - Detects when a run has fallen into a repeating state

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

const HISTORY_LEN: usize = 10;

/// Remembers hashes of the last few generations.
#[derive(Debug, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` and returns true if it matches one of the last
    /// ten recorded generations. Still lifes and period <= 10
    /// oscillators are caught; an empty grid counts as a still life.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let seen = self.count.min(HISTORY_LEN);
        if self.history[..seen].contains(&hash) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.history = [0; HISTORY_LEN];
        self.count = 0;
    }
}
