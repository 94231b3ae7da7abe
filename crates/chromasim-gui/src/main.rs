//! Chromasim GUI Application
//!
//! Interactive simulator: pick a photo, toggle deficiencies and drag
//! intensity sliders, and compare the original against the filtered result
//! side by side.

use eframe::egui;
use chromasim_core::{
    config,
    decoders::{decode_image, DecodedImage},
    models::SelectedImage,
    render::{apply_color_matrix, downsample, fit_rect},
    vision::{Deficiency, VisionState},
};
use std::path::PathBuf;

/// Largest preview dimension; keeps per-slider-tick reprocessing instant.
const PREVIEW_MAX_DIM: u32 = 1024;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_title("Chromasim - Color Vision Simulator"),
        ..Default::default()
    };

    eframe::run_native(
        "Chromasim",
        options,
        Box::new(|_cc| Ok(Box::new(ChromasimApp::default()))),
    )
}

struct ChromasimApp {
    // Image data
    selected: Option<SelectedImage>,
    preview: Option<DecodedImage>,

    // One Vision State per editing session, replaced wholesale on change
    vision: VisionState,

    // Display state
    original_texture: Option<egui::TextureHandle>,
    filtered_texture: Option<egui::TextureHandle>,
    filtered_label: String,
    processing_needed: bool,
    error_message: Option<String>,
}

impl Default for ChromasimApp {
    fn default() -> Self {
        Self {
            selected: None,
            preview: None,
            vision: config::config_handle().config.default_vision_state(),
            original_texture: None,
            filtered_texture: None,
            filtered_label: "Original".to_string(),
            processing_needed: false,
            error_message: None,
        }
    }
}

impl eframe::App for ChromasimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &["png", "tif", "tiff"])
                            .pick_file()
                        {
                            self.load_image(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Bottom panel: deficiency controls
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            self.show_controls(ui);
        });

        // Central panel: side-by-side comparison
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_comparison(ui);
        });

        // Rebuild the filtered preview if the state changed
        if self.processing_needed && self.preview.is_some() {
            self.refresh_filtered(ctx);
            self.processing_needed = false;
        }

        // Show error message if any
        if self.error_message.is_some() {
            let error = self.error_message.clone().unwrap();
            let mut should_close = false;
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            if should_close {
                self.error_message = None;
            }
        }
    }
}

impl ChromasimApp {
    fn load_image(&mut self, path: PathBuf) {
        match decode_image(&path) {
            Ok(image) => {
                let preview = downsample(&image, PREVIEW_MAX_DIM);

                self.selected = Some(SelectedImage {
                    uri: path.display().to_string(),
                    width: image.width,
                    height: image.height,
                });

                // New editing session: start from the configured defaults
                self.vision = config::config_handle().config.default_vision_state();

                self.preview = Some(preview);
                self.original_texture = None;
                self.filtered_texture = None;
                self.processing_needed = true;
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to load image: {}", e));
            }
        }
    }

    fn refresh_filtered(&mut self, ctx: &egui::Context) {
        let Some(ref preview) = self.preview else {
            return;
        };

        if self.original_texture.is_none() {
            let image = rgba_texture(preview);
            self.original_texture = Some(ctx.load_texture("original", image, Default::default()));
        }

        let effective = self.vision.effective();
        self.filtered_label = effective.label;

        let mut data = preview.data.clone();
        if self.vision.any_enabled() {
            apply_color_matrix(&mut data, &effective.coefficients);
        }

        let filtered = DecodedImage {
            width: preview.width,
            height: preview.height,
            data,
        };
        let image = rgba_texture(&filtered);
        self.filtered_texture = Some(ctx.load_texture("filtered", image, Default::default()));
    }

    fn show_comparison(&mut self, ui: &mut egui::Ui) {
        let Some(ref selected) = self.selected else {
            ui.centered_and_justified(|ui| {
                ui.label("No image loaded. Use File > Open Image to pick a photo.");
            });
            return;
        };

        let available = ui.available_size();
        let pane_width = (available.x - 20.0) / 2.0;
        let pane_height = available.y - 30.0;

        ui.horizontal(|ui| {
            if let Some(ref texture) = self.original_texture {
                show_pane(ui, texture, "Original", selected, pane_width, pane_height);
            }
            ui.add_space(20.0);
            if let Some(ref texture) = self.filtered_texture {
                show_pane(
                    ui,
                    texture,
                    &self.filtered_label,
                    selected,
                    pane_width,
                    pane_height,
                );
            }
        });
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        if self.selected.is_none() {
            ui.label("Load an image to adjust the simulation");
            return;
        }

        for deficiency in Deficiency::ALL {
            ui.horizontal(|ui| {
                let profile = self.vision.profile_mut(deficiency);

                if ui.checkbox(&mut profile.enabled, deficiency.as_str()).changed() {
                    self.processing_needed = true;
                }

                if ui
                    .add_enabled(
                        profile.enabled,
                        egui::Slider::new(&mut profile.intensity, 0.0..=1.0).text("Intensity"),
                    )
                    .changed()
                {
                    self.processing_needed = true;
                }
            });
        }

        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                self.vision = config::config_handle().config.default_vision_state();
                self.processing_needed = true;
            }
            ui.label(format!("Current: {}", self.filtered_label));
        });
    }
}

/// Draw one comparison pane: the texture scaled to fit and centered, with a
/// caption underneath.
fn show_pane(
    ui: &mut egui::Ui,
    texture: &egui::TextureHandle,
    caption: &str,
    selected: &SelectedImage,
    width: f32,
    height: f32,
) {
    ui.vertical(|ui| {
        let rect = fit_rect(selected.width, selected.height, width, height);
        ui.add_space(rect.y);
        ui.horizontal(|ui| {
            ui.add_space(rect.x);
            ui.add(egui::Image::new((
                texture.id(),
                egui::vec2(rect.width, rect.height),
            )));
        });
        ui.label(caption);
    });
}

fn rgba_texture(image: &DecodedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [image.width as usize, image.height as usize],
        &image.data,
    )
}
