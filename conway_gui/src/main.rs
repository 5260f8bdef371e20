// main.rs - egui viewer for the bounded Game of Life engine

use eframe::egui;
use egui::Color32;
use log::{debug, info, warn};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use conway::{CellAddress, CycleDetector, Grid, Palette, patterns};

mod config;
mod ui;

use config::AppConfig;

fn main() -> Result<(), eframe::Error> {
    let config = AppConfig::default();
    info!("Starting viewer with a {}x{} grid", config.rows, config.cols);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(config))),
    )
}

fn to_color32([r, g, b]: conway::Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn to_rgb(color: Color32) -> conway::Rgb {
    [color.r(), color.g(), color.b()]
}

pub struct GameOfLife {
    pub grid: Grid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u64,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub source_path: String,
    pub load_error: Option<String>,
    pub box_size: f32,
    pub spacing: f32,

    cycles: CycleDetector,
}

impl GameOfLife {
    pub fn new(config: AppConfig) -> Self {
        let mut app = Self {
            grid: Grid::new(config.rows, config.cols),
            is_running: false,
            last_update: Instant::now(),
            update_interval: config.update_interval,
            generation: 0,
            live_color: to_color32(config.palette.live),
            dead_color: to_color32(config.palette.dead),
            selected_pattern: 0,
            source_path: String::new(),
            load_error: None,
            box_size: config.box_size,
            spacing: config.spacing,
            cycles: CycleDetector::new(),
        };

        if let Some(path) = &config.source {
            app.source_path = path.display().to_string();
            app.load_source(path);
        }
        app
    }

    pub fn palette(&self) -> Palette {
        Palette {
            live: to_rgb(self.live_color),
            dead: to_rgb(self.dead_color),
        }
    }

    // The starting generation counts as history for cycle detection
    fn reset_run(&mut self) {
        self.generation = 0;
        self.cycles.reset();
        self.cycles.observe(&self.grid);
    }
}

/// Actions the UI can trigger on the simulation.
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn load_source(&mut self, path: &Path);
    fn toggle_at(&mut self, cell: CellAddress);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        self.grid.step();
        self.generation += 1;
        debug!("Generation {} ({} live)", self.generation, self.grid.live_count());

        if self.cycles.observe(&self.grid) {
            info!("Grid repeats at generation {}, pausing", self.generation);
            self.is_running = false;
        }
    }

    fn clear_grid(&mut self) {
        self.grid.clear();
        self.reset_run();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::apply_pattern(&mut self.grid, pattern);
            self.reset_run();
        }
    }

    fn apply_random_pattern(&mut self) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        patterns::apply_random_pattern(&mut self.grid, seed);
        self.reset_run();
    }

    fn load_source(&mut self, path: &Path) {
        match Grid::from_file(self.grid.rows(), self.grid.cols(), path) {
            Ok(grid) => {
                self.grid = grid;
                self.load_error = None;
                self.reset_run();
            }
            Err(err) => {
                // Keep whatever is on screen
                warn!("{err}");
                self.load_error = Some(err.to_string());
            }
        }
    }

    fn toggle_at(&mut self, cell: CellAddress) {
        let Some((col, row)) = cell.in_grid(&self.grid) else {
            debug!("Click outside the grid: {cell:?}");
            return;
        };
        match self.grid.toggle_cell(col, row) {
            // An edited grid starts a fresh run for cycle purposes
            Ok(()) => {
                self.cycles.reset();
                self.cycles.observe(&self.grid);
            }
            Err(err) => warn!("{err}"),
        }
    }
}
