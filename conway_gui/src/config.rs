// config.rs - Viewer settings

use std::path::PathBuf;
use std::time::Duration;

use conway::{DEFAULT_COLS, DEFAULT_ROWS, Palette};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub rows: usize,
    pub cols: usize,
    pub window_size: [f32; 2],
    pub box_size: f32,        // Side of one drawn cell, in points
    pub spacing: f32,         // Gap between drawn cells
    pub update_interval: Duration,
    pub palette: Palette,
    pub source: Option<PathBuf>,  // Grid file loaded at startup
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            window_size: [720.0, 900.0],
            box_size: 28.0,
            spacing: 1.0,
            update_interval: Duration::from_millis(200),
            palette: Palette::default(),
            source: None,
        }
    }
}
