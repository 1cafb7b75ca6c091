//! Sketchpad state driven by the UI: grid, paint controller and hover tracking.

use egui::Color32;
use log::warn;

use crate::canvas::HoverTracker;
use crate::config::SketchpadConfig;
use crate::grid::{CellId, Grid};
use crate::paint::{PaintController, PaintMode};
use crate::ui::ColorButton;

pub struct Sketchpad {
    grid: Grid,
    painter: PaintController,
    hover: HoverTracker,
    config: SketchpadConfig,
}

impl Sketchpad {
    pub fn new(config: SketchpadConfig, painter: PaintController) -> Self {
        let grid = config.grid_config().and_then(Grid::new).unwrap_or_else(|err| {
            warn!("{}; falling back to default grid", err);
            Grid::default()
        });
        Self {
            grid,
            painter,
            hover: HoverTracker::default(),
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn painter(&self) -> &PaintController {
        &self.painter
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    /// Rebuilds the grid from the size inputs, clamped into the configured bounds.
    pub fn resize(&mut self, rows: usize, columns: usize) {
        let rows = self.config.clamp_dimension(rows);
        let columns = self.config.clamp_dimension(columns);
        if let Err(err) = self.grid.build(rows, columns) {
            warn!("resize rejected: {}", err);
        }
        self.hover.reset();
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Applies a color button. Custom takes the picker value.
    pub fn select_color(&mut self, button: ColorButton, picked: Color32) {
        match button.mode(picked) {
            PaintMode::FixedColor(color) => self.painter.set_fixed_color(color),
            mode => self.painter.set_mode(mode),
        }
    }

    /// Feeds the cell under the pointer; paints it if the pointer just entered it.
    pub fn pointer_over(&mut self, cell: Option<CellId>) -> Option<CellId> {
        let entered = self.hover.enter(cell)?;
        self.painter.on_hover(&mut self.grid, entered);
        Some(entered)
    }
}
