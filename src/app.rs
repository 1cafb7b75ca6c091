use crate::canvas::Canvas;
use crate::config::SketchpadConfig;
use crate::paint::PaintController;
use crate::sketchpad::Sketchpad;
use crate::ui::{ColorButton, UiState};
use egui::{Color32, Context, Stroke, Ui};
use log::info;

pub struct SketchpadApp {
    canvas: Canvas,
    sketchpad: Sketchpad,
    ui_state: UiState,
}

impl SketchpadApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchpadConfig) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
        cc.egui_ctx.set_style(style);

        let ui_state = UiState::from_config(&config);
        let sketchpad = Sketchpad::new(config, PaintController::new());
        let geometry = sketchpad.grid().get_config();
        info!(
            "sketchpad {}x{} in {}px container",
            geometry.rows, geometry.columns, geometry.container_size
        );

        Self {
            canvas: Canvas::new(geometry.container_size, geometry.border_width),
            sketchpad,
            ui_state,
        }
    }

    // Turn pointer movement over the sketchpad into cell hovers
    fn handle_canvas_interactions(&mut self, response: egui::Response) {
        let view_rect = response.rect;
        let under_pointer = response
            .hover_pos()
            .and_then(|pos| self.canvas.cell_at(self.sketchpad.grid(), pos, view_rect));
        self.sketchpad.pointer_over(under_pointer);
    }

    fn draw_canvas(&self, ui: &mut Ui) -> egui::Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let view_rect = response.rect;
        let bg_color = if self.ui_state.dark_mode {
            Color32::from_rgb(20, 20, 20)
        } else {
            Color32::from_rgb(240, 240, 240)
        };
        painter.rect_filled(view_rect, 0.0, bg_color);

        let border_rect = self.canvas.get_screen_rect(view_rect);
        let inner_rect = self.canvas.get_inner_rect(view_rect);
        painter.rect_filled(inner_rect, 0.0, Color32::WHITE);

        let grid = self.sketchpad.grid();
        for (id, cell) in grid.cells() {
            if let Some(color) = cell.color {
                painter.rect_filled(self.canvas.cell_rect(grid, id, view_rect), 0.0, color);
            }
        }

        let border_color = if self.ui_state.dark_mode {
            Color32::from_rgb(150, 150, 150)
        } else {
            Color32::from_rgb(100, 100, 100)
        };
        let border_width = self.canvas.get_border_width();
        painter.rect_stroke(
            border_rect.shrink(border_width / 2.0),
            0.0,
            Stroke::new(border_width, border_color),
        );

        response
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        let config = self.sketchpad.config();
        let bounds = config.min_dimension..=config.max_dimension;

        ui.collapsing("Grid Size", |ui| {
            ui.horizontal(|ui| {
                ui.label("Rows:");
                ui.add(
                    egui::DragValue::new(&mut self.ui_state.rows_input)
                        .speed(1.0)
                        .clamp_range(bounds.clone()),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Columns:");
                ui.add(
                    egui::DragValue::new(&mut self.ui_state.columns_input)
                        .speed(1.0)
                        .clamp_range(bounds.clone()),
                );
            });
            if ui.button("Resize").clicked() {
                self.sketchpad
                    .resize(self.ui_state.rows_input, self.ui_state.columns_input);
            }
            let grid = self.sketchpad.grid();
            let (width, height) = grid.cell_size();
            ui.label(format!(
                "{} x {} cells, {:.2} x {:.2}px",
                grid.rows(),
                grid.columns(),
                width,
                height
            ));
        });

        ui.collapsing("Color", |ui| {
            ui.horizontal(|ui| {
                ui.label("Custom color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut self.ui_state.picked_color,
                    egui::color_picker::Alpha::Opaque,
                );
            });

            let mut pressed = None;
            for button in ColorButton::ALL {
                let selected = self.ui_state.selected_button == button;
                if ui.selectable_label(selected, button.label()).clicked() {
                    pressed = Some(button);
                }
            }
            if let Some(button) = pressed {
                self.ui_state.selected_button = button;
                self.sketchpad.select_color(button, self.ui_state.picked_color);
            }

            let painter = self.sketchpad.painter();
            ui.horizontal(|ui| {
                ui.label(format!("Mode: {}", painter.mode()));
                let swatch = if painter.is_fixed_color() || painter.is_random() || painter.is_rainbow() {
                    painter.current_color()
                } else {
                    None
                };
                if let Some(color) = swatch {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, color);
                }
            });
            if painter.is_eraser() {
                ui.label("Cells become transparent");
            } else if painter.is_grayscale() {
                ui.label("Each pass darkens a cell one shade");
            }
        });

        ui.separator();

        ui.collapsing("Appearance", |ui| {
            ui.checkbox(&mut self.ui_state.dark_mode, "Dark Mode");
        });

        ui.collapsing("Help", |ui| {
            ui.label("• Move the pointer over the sketchpad to paint");
            ui.label("• Set rows and columns, then press 'Resize' to rebuild the grid");
            ui.label("• 'Clear' wipes every cell but keeps the grid");
            ui.label("• 'Custom' paints with the color picker value");
            ui.label("• 'Random' and 'Rainbow' pick a new color for every cell");
            ui.label("• 'Grayscale' darkens a cell a little more on each pass");
            ui.label("• 'Eraser' makes cells transparent again");
        });
    }
}

impl eframe::App for SketchpadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut style = (*ctx.style()).clone();
        if self.ui_state.dark_mode {
            style.visuals = egui::Visuals::dark();
        } else {
            style.visuals = egui::Visuals::light();
        }
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Pixel Sketchpad");
                ui.separator();
                if ui.button("Clear").clicked() {
                    self.sketchpad.clear();
                }
            });
        });

        egui::SidePanel::right("settings_panel")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Settings");
                    ui.separator();
                    self.draw_controls(ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let response = self.draw_canvas(ui);
            self.handle_canvas_interactions(response);
        });
    }
}
