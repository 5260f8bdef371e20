// lib.rs - Bounded Conway's Game of Life engine
//
// `grid` owns the cells and the step rule, `viewport` maps them to and
// from pixel space for whatever front end draws them.

pub mod cycle;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod viewport;

pub use cycle::CycleDetector;
pub use error::{LifeError, Result};
pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, Grid};
pub use viewport::{CellAddress, CellRect, Palette, Point, Rgb, Viewport};
