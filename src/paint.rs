//! Paint modes and the controller that colors cells on pointer-enter.

use std::collections::HashMap;

use egui::Color32;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{CellId, Grid};

/// Gray shades applied on successive grayscale hovers, lightest first.
pub const GRAYSCALE_RAMP: [Color32; 10] = [
    Color32::from_rgb(0xeb, 0xeb, 0xeb),
    Color32::from_rgb(0xd6, 0xd8, 0xdc),
    Color32::from_rgb(0xbd, 0xbd, 0xbd),
    Color32::from_rgb(0xab, 0xab, 0xab),
    Color32::from_rgb(0x8c, 0x8c, 0x8c),
    Color32::from_rgb(0x70, 0x70, 0x70),
    Color32::from_rgb(0x57, 0x57, 0x57),
    Color32::from_rgb(0x42, 0x42, 0x42),
    Color32::from_rgb(0x2e, 0x2e, 0x2e),
    Color32::from_rgb(0x12, 0x12, 0x12),
];

const DARKEST_LEVEL: usize = GRAYSCALE_RAMP.len() - 1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintMode {
    /// Paint every entered cell with one color.
    FixedColor(Color32),
    /// Fresh random color on every entered cell.
    Random,
    /// Same per-hover random color as `Random`.
    Rainbow,
    /// Darken a cell one ramp step per hover.
    Grayscale,
    /// Make entered cells transparent.
    Eraser,
}

impl Default for PaintMode {
    fn default() -> Self {
        PaintMode::FixedColor(Color32::BLACK)
    }
}

impl std::fmt::Display for PaintMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaintMode::FixedColor(c) => write!(f, "Color #{:02x}{:02x}{:02x}", c.r(), c.g(), c.b()),
            PaintMode::Random => write!(f, "Random"),
            PaintMode::Rainbow => write!(f, "Rainbow"),
            PaintMode::Grayscale => write!(f, "Grayscale"),
            PaintMode::Eraser => write!(f, "Eraser"),
        }
    }
}

pub struct PaintController {
    mode: PaintMode,
    current_color: Option<Color32>,
    grayscale_levels: HashMap<CellId, usize>,
    // Grid generation the grayscale levels belong to
    levels_generation: u64,
    rng: StdRng,
}

impl Default for PaintController {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl PaintController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            mode: PaintMode::default(),
            current_color: Some(Color32::BLACK),
            grayscale_levels: HashMap::new(),
            levels_generation: 0,
            rng,
        }
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn current_color(&self) -> Option<Color32> {
        self.current_color
    }

    /// Selects the active mode, replacing whatever was active before.
    ///
    /// Leaving grayscale forgets every cell's ramp position.
    pub fn set_mode(&mut self, mode: PaintMode) {
        match mode {
            PaintMode::FixedColor(color) => self.current_color = Some(color),
            PaintMode::Eraser => self.current_color = None,
            PaintMode::Random | PaintMode::Rainbow | PaintMode::Grayscale => {}
        }
        if mode != PaintMode::Grayscale {
            self.grayscale_levels.clear();
        }
        debug!("paint mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    pub fn set_fixed_color(&mut self, color: Color32) {
        self.set_mode(PaintMode::FixedColor(color));
    }

    pub fn is_fixed_color(&self) -> bool {
        matches!(self.mode, PaintMode::FixedColor(_))
    }

    pub fn is_random(&self) -> bool {
        self.mode == PaintMode::Random
    }

    pub fn is_rainbow(&self) -> bool {
        self.mode == PaintMode::Rainbow
    }

    pub fn is_grayscale(&self) -> bool {
        self.mode == PaintMode::Grayscale
    }

    pub fn is_eraser(&self) -> bool {
        self.mode == PaintMode::Eraser
    }

    /// Ramp position of a cell, if grayscale has touched it.
    #[cfg(test)]
    pub fn grayscale_level(&self, id: CellId) -> Option<usize> {
        self.grayscale_levels.get(&id).copied()
    }

    /// Colors `id` according to the active mode. Returns the applied color.
    pub fn on_hover(&mut self, grid: &mut Grid, id: CellId) -> Option<Color32> {
        if !grid.contains(id) {
            return None;
        }
        if grid.generation() != self.levels_generation {
            self.grayscale_levels.clear();
            self.levels_generation = grid.generation();
        }

        let color = match self.mode {
            PaintMode::Random | PaintMode::Rainbow => {
                let color = self.random_color();
                self.current_color = Some(color);
                Some(color)
            }
            PaintMode::Grayscale => {
                let level = self
                    .grayscale_levels
                    .entry(id)
                    .and_modify(|level| *level = (*level + 1).min(DARKEST_LEVEL))
                    .or_insert(0);
                Some(GRAYSCALE_RAMP[*level])
            }
            PaintMode::FixedColor(_) | PaintMode::Eraser => self.current_color,
        };

        trace!("hover ({}, {}) -> {:?}", id.row, id.column, color);
        grid.paint(id, color);
        color
    }

    fn random_color(&mut self) -> Color32 {
        Color32::from_rgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}
