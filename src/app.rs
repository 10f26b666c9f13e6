use eframe::egui;
use egui::{Color32, Key, Modifiers, Slider};

use crate::editor::Editor;
use crate::file_handler::FileHandler;
use crate::frame_cache::FrameCache;
use crate::input::InputHandler;
use crate::segment::{MAX_LINE_WIDTH, MIN_LINE_WIDTH};
use crate::session::{ControlIntent, MAX_ZOOM, MIN_ZOOM};

/// Tool settings persisted across launches. The image and history are
/// session-scoped and never saved.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
struct ToolSettings {
    line_width: f32,
    line_color: Color32,
    zoom: u32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            line_width: 10.0,
            line_color: Color32::BLACK,
            zoom: 100,
        }
    }
}

pub struct RedactApp {
    editor: Editor,
    file_handler: FileHandler,
    frame_cache: FrameCache,
    input: InputHandler,
    /// Feedback line for the status bar (load errors, export results).
    status: Option<String>,
}

impl RedactApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: ToolSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self {
            editor: Editor::with_settings(settings.line_width, settings.line_color, settings.zoom),
            file_handler: FileHandler::new(),
            frame_cache: FrameCache::new(),
            input: InputHandler::new(),
            status: None,
        }
    }

    fn load_result(&mut self, result: Result<image::RgbaImage, crate::error::LoadError>) {
        match result {
            Ok(image) => {
                self.editor.load_image(image);
                self.status = None;
            }
            Err(err) => {
                self.status = Some(err.to_string());
            }
        }
    }

    fn open_file_dialog(&mut self) {
        if let Some(result) = self.file_handler.pick_image() {
            self.load_result(result);
        }
    }

    fn export(&mut self) {
        let Some(flattened) = self.editor.flatten() else {
            return;
        };
        match self.file_handler.save_flattened(&flattened) {
            Ok(Some(path)) => self.status = Some(format!("Saved {}", path.display())),
            Ok(None) => {} // dialog cancelled
            Err(err) => self.status = Some(format!("Export failed: {err}")),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (undo, redo, save, open) = ctx.input_mut(|i| {
            (
                i.consume_key(Modifiers::CTRL, Key::Z),
                i.consume_key(Modifiers::CTRL, Key::Y),
                i.consume_key(Modifiers::CTRL, Key::S),
                i.consume_key(Modifiers::CTRL, Key::O),
            )
        });
        if undo {
            self.editor.undo();
        }
        if redo {
            self.editor.redo();
        }
        if save && self.editor.has_image() {
            self.export();
        }
        if open {
            self.open_file_dialog();
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Censor");
        ui.separator();

        let has_image = self.editor.has_image();

        ui.horizontal(|ui| {
            ui.label("Zoom:");
            let mut zoom = self.editor.zoom();
            let response = ui.add_enabled(
                has_image,
                Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
                    .logarithmic(true)
                    .suffix("%"),
            );
            if response.changed() {
                self.editor.set_zoom(zoom);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Width:");
            let mut width = self.editor.line_width();
            let response = ui.add_enabled(
                has_image,
                Slider::new(&mut width, MIN_LINE_WIDTH..=MAX_LINE_WIDTH),
            );
            if response.changed() {
                self.editor.set_line_width(width);
            }
        });

        ui.horizontal(|ui| {
            ui.label("Color:");
            let mut color = self.editor.line_color();
            let response = egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            );
            if response.changed() {
                self.editor.on_color_change(color);
            }
        });

        ui.separator();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.editor.can_undo(), egui::Button::new("⟲ Undo"))
                .clicked()
            {
                self.editor.undo();
            }
            if ui
                .add_enabled(self.editor.can_redo(), egui::Button::new("⟳ Redo"))
                .clicked()
            {
                self.editor.redo();
            }
        });

        ui.separator();

        if ui.button("Open…").clicked() {
            self.open_file_dialog();
        }
        if ui.add_enabled(has_image, egui::Button::new("Save…")).clicked() {
            self.export();
        }

        ui.separator();
        ui.label(self.mode_hint());
    }

    fn mode_hint(&self) -> &'static str {
        if !self.editor.has_image() {
            "Drop an image here, or press Ctrl+O"
        } else {
            match self.editor.control_intent() {
                ControlIntent::Zoom => "Click the start point. Ctrl+wheel: zoom",
                ControlIntent::Width => "Click the end point. Ctrl+wheel: line width",
            }
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(pos) = self.input.hover_pos() {
                ui.label(format!("X: {}, Y: {}", pos.x.round(), pos.y.round()));
            }
            if let Some(status) = &self.status {
                ui.separator();
                ui.label(status);
            }
        });
    }
}

impl eframe::App for RedactApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = ToolSettings {
            line_width: self.editor.line_width(),
            line_color: self.editor.line_color(),
            zoom: self.editor.zoom(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &settings);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Dropped files replace the whole session.
        if self.file_handler.check_for_dropped_files(ctx) {
            if let Some(result) = self.file_handler.take_dropped_image() {
                self.load_result(result);
            }
        }

        self.handle_shortcuts(ctx);

        // Canvas events against the canvas rect from the previous
        // frame; at one event per update turn the lag is invisible.
        for event in self.input.process_input(ctx) {
            self.editor.handle_event(event);
        }

        egui::SidePanel::left("controls").show(ctx, |ui| {
            self.controls_panel(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.editor.has_image() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Drop an image file here");
                });
                return;
            }

            egui::ScrollArea::both().show(ui, |ui| {
                if let Some(texture) = self.frame_cache.texture(&self.editor, ctx) {
                    let response = ui.image(texture);
                    self.input.set_canvas_rect(response.rect);
                }
            });
        });
    }
}
