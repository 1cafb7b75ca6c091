use egui::{Pos2, Rect, Vec2};

use crate::grid::{CellId, Grid};

/// Screen placement of the square sketchpad container.
pub struct Canvas {
    container_size: f32,
    border_width: f32,
}

impl Canvas {
    pub fn new(container_size: f32, border_width: f32) -> Self {
        Self {
            container_size,
            border_width,
        }
    }

    pub fn get_border_width(&self) -> f32 {
        self.border_width
    }

    /// Container rect, border included, centred in the view.
    pub fn get_screen_rect(&self, view_rect: Rect) -> Rect {
        Rect::from_center_size(view_rect.center(), Vec2::splat(self.container_size))
    }

    /// Area inside the border where cells are laid out.
    pub fn get_inner_rect(&self, view_rect: Rect) -> Rect {
        self.get_screen_rect(view_rect).shrink(self.border_width)
    }

    pub fn cell_rect(&self, grid: &Grid, id: CellId, view_rect: Rect) -> Rect {
        let inner = self.get_inner_rect(view_rect);
        let (width, height) = grid.cell_size();
        let min = inner.min + egui::vec2(id.column as f32 * width, id.row as f32 * height);
        Rect::from_min_size(min, egui::vec2(width, height))
    }

    /// Cell under a screen position. Border and outside map to `None`.
    pub fn cell_at(&self, grid: &Grid, screen_pos: Pos2, view_rect: Rect) -> Option<CellId> {
        let inner = self.get_inner_rect(view_rect);
        if !inner.contains(screen_pos) {
            return None;
        }

        let (width, height) = grid.cell_size();
        let local = screen_pos - inner.min;
        // The far edge is inclusive in `contains`, keep it on the last cell.
        let column = ((local.x / width) as usize).min(grid.columns() - 1);
        let row = ((local.y / height) as usize).min(grid.rows() - 1);
        Some(CellId::new(row, column))
    }
}

/// Turns per-frame pointer positions into pointer-enter events.
#[derive(Default)]
pub struct HoverTracker {
    current: Option<CellId>,
}

impl HoverTracker {
    /// Records the cell now under the pointer and returns it if it was just entered.
    pub fn enter(&mut self, cell: Option<CellId>) -> Option<CellId> {
        let entered = match cell {
            Some(id) if self.current != Some(id) => Some(id),
            _ => None,
        };
        self.current = cell;
        entered
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
