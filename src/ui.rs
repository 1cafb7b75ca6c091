use egui::Color32;

use crate::config::SketchpadConfig;
use crate::paint::PaintMode;

/// Which color button was pressed last.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorButton {
    Custom,
    Black,
    Random,
    Rainbow,
    Grayscale,
    Eraser,
}

impl ColorButton {
    pub const ALL: [ColorButton; 6] = [
        ColorButton::Custom,
        ColorButton::Black,
        ColorButton::Random,
        ColorButton::Rainbow,
        ColorButton::Grayscale,
        ColorButton::Eraser,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorButton::Custom => "Custom",
            ColorButton::Black => "Black",
            ColorButton::Random => "Random",
            ColorButton::Rainbow => "Rainbow",
            ColorButton::Grayscale => "Grayscale",
            ColorButton::Eraser => "Eraser",
        }
    }

    /// Mode this button selects; Custom reads the color picker.
    pub fn mode(self, picked: Color32) -> PaintMode {
        match self {
            ColorButton::Custom => PaintMode::FixedColor(picked),
            ColorButton::Black => PaintMode::FixedColor(Color32::BLACK),
            ColorButton::Random => PaintMode::Random,
            ColorButton::Rainbow => PaintMode::Rainbow,
            ColorButton::Grayscale => PaintMode::Grayscale,
            ColorButton::Eraser => PaintMode::Eraser,
        }
    }
}

pub struct UiState {
    // Pending size inputs, applied by the Resize button
    pub rows_input: usize,
    pub columns_input: usize,

    // Color picker value used by the Custom button
    pub picked_color: Color32,
    pub selected_button: ColorButton,

    pub dark_mode: bool,
}

impl UiState {
    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self {
            rows_input: config.rows,
            columns_input: config.columns,
            dark_mode: config.dark_mode,
            ..Self::default()
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            rows_input: 16,
            columns_input: 16,
            picked_color: Color32::from_rgb(0, 120, 255),
            selected_button: ColorButton::Black,
            dark_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_modes() {
        let picked = Color32::from_rgb(1, 2, 3);
        assert_eq!(ColorButton::Custom.mode(picked), PaintMode::FixedColor(picked));
        assert_eq!(
            ColorButton::Black.mode(picked),
            PaintMode::FixedColor(Color32::BLACK)
        );
        assert_eq!(ColorButton::Random.mode(picked), PaintMode::Random);
        assert_eq!(ColorButton::Rainbow.mode(picked), PaintMode::Rainbow);
        assert_eq!(ColorButton::Grayscale.mode(picked), PaintMode::Grayscale);
        assert_eq!(ColorButton::Eraser.mode(picked), PaintMode::Eraser);
    }

    #[test]
    fn every_button_has_a_distinct_mode() {
        let picked = Color32::from_rgb(1, 2, 3);
        let modes: Vec<PaintMode> = ColorButton::ALL.iter().map(|b| b.mode(picked)).collect();
        for (i, a) in modes.iter().enumerate() {
            for b in &modes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn from_config_copies_dimensions() {
        let config = SketchpadConfig {
            rows: 8,
            columns: 12,
            dark_mode: true,
            ..SketchpadConfig::default()
        };
        let state = UiState::from_config(&config);
        assert_eq!((state.rows_input, state.columns_input), (8, 12));
        assert!(state.dark_mode);
        assert_eq!(state.selected_button, ColorButton::Black);
    }
}
