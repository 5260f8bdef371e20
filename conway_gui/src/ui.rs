// ui.rs - Controls and grid painting

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use conway::{Point, Viewport, patterns};

use crate::{GameOfLife, GameOfLifeInterface, to_color32};

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.horizontal(|ui| {
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }
            });

            // Loading from a text grid file
            ui.horizontal(|ui| {
                ui.label("File:");
                ui.text_edit_singleline(&mut self.source_path);
                if ui.button("Load").clicked() {
                    self.is_running = false;
                    let path = PathBuf::from(self.source_path.trim());
                    self.load_source(&path);
                }
            });
            if let Some(err) = &self.load_error {
                ui.colored_label(Color32::LIGHT_RED, err);
            }

            ui.separator();

            // Speed and colours
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=30.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them alive/dead while paused.");

            ui.separator();

            // Draw the grid
            let pitch = self.box_size + self.spacing;
            let total_size = Vec2::new(
                pitch * self.grid.cols() as f32,
                pitch * self.grid.rows() as f32,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let area = response.rect;

            painter.rect_filled(area, 0.0, Color32::BLACK);

            let viewport = Viewport::new(area.min.x, area.min.y, area.width(), area.height());
            for cell in viewport.render_hints(&self.grid, self.palette()) {
                let rect = Rect::from_min_size(
                    egui::pos2(cell.x, cell.y),
                    Vec2::new(cell.width, cell.height),
                )
                .shrink(self.spacing / 2.0);

                painter.rect_filled(rect, 1.0, to_color32(cell.color));
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }

            // Clicks are mapped in painter-local coordinates so the
            // bounds test and the cell index share the same origin.
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - area.min;
                    let local_view = Viewport::new(0.0, 0.0, area.width(), area.height());
                    if let Some(cell) = local_view.pixel_to_cell(&self.grid, Point::new(local.x, local.y)) {
                        self.toggle_at(cell);
                    }
                }
            }

            ui.separator();

            // Statistics
            let total = self.grid.rows() * self.grid.cols();
            let live_cells = self.grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total.max(1) as f32 * 100.0
                ));
            });

            egui::CollapsingHeader::new("Text view").show(ui, |ui| {
                ui.monospace(self.grid.to_text());
            });
        });

        // Keep animating while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
