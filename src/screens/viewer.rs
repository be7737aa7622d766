use eframe::egui;
use std::collections::HashMap;
use std::sync::Arc;

use crate::theme;
use crate::ui_components::stop_list;
use crate::utils::{
    export, format_shader_error, preset, Configuration, Gradient, GradientCallback,
    GradientKind, GradientPipeline, GradientPreset, NotificationManager,
};

pub struct ViewerApp {
    gradient: Gradient,
    configuration: Configuration,
    preset_name: String,

    // One pipeline per gradient kind, built on first use
    pipelines: HashMap<GradientKind, Arc<GradientPipeline>>,

    export_width: u32,
    export_height: u32,

    notifications: NotificationManager,
    show_error_window: bool,
    error_message: String,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("Initializing gradient viewer");

        let mut app = Self {
            gradient: Gradient::rainbow(),
            configuration: Configuration::default(),
            preset_name: "rainbow".to_string(),

            pipelines: HashMap::new(),

            export_width: 1024,
            export_height: 1024,

            notifications: NotificationManager::default(),
            show_error_window: false,
            error_message: String::new(),
        };

        if let Some(render_state) = cc.wgpu_render_state.as_ref() {
            let kind = app.configuration.kind();
            match GradientPipeline::new(&render_state.device, render_state.target_format, kind) {
                Ok(pipeline) => {
                    app.pipelines.insert(kind, Arc::new(pipeline));
                }
                Err(err) => {
                    app.error_message = format_shader_error(&err);
                    app.show_error_window = true;
                    log::error!("Initial pipeline failed: {}", err);
                }
            }
        }

        app
    }

    /// Pipeline for the current kind, building and caching it on demand.
    /// Only a kind switch ever needs a new pipeline; parameter and stop
    /// edits go through the per-frame buffer writes.
    fn ensure_pipeline(
        &mut self,
        render_state: &egui_wgpu::RenderState,
    ) -> Option<Arc<GradientPipeline>> {
        let kind = self.configuration.kind();
        if let Some(pipeline) = self.pipelines.get(&kind) {
            return Some(pipeline.clone());
        }

        match GradientPipeline::new(&render_state.device, render_state.target_format, kind) {
            Ok(pipeline) => {
                let pipeline = Arc::new(pipeline);
                self.pipelines.insert(kind, pipeline.clone());
                Some(pipeline)
            }
            Err(err) => {
                self.error_message = format_shader_error(&err);
                self.show_error_window = true;
                log::error!("Pipeline creation failed: {}", err);
                None
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .exact_width(310.0)
            .show(ctx, |ui| {
                self.render_controls(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::from_rgb(10, 10, 12)))
            .show(ctx, |ui| {
                self.render_preview(ui, frame);
            });

        if self.notifications.has_notifications() {
            egui::Window::new("notifications")
                .title_bar(false)
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                .frame(egui::Frame::NONE)
                .show(ctx, |ui| {
                    self.notifications.render(ui);
                });
        }

        if self.show_error_window {
            egui::Window::new("Shader Error")
                .collapsible(false)
                .resizable(true)
                .default_width(600.0)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&self.error_message)
                                .color(egui::Color32::from_rgb(255, 120, 120))
                                .family(egui::FontFamily::Monospace)
                                .size(13.0),
                        );
                    });
                    ui.separator();
                    if ui.button("Close").clicked() {
                        self.show_error_window = false;
                    }
                });
        }
    }
}

impl ViewerApp {
    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.heading("Gradient");
        ui.add_space(6.0);

        let mut kind = self.configuration.kind();
        egui::ComboBox::from_label("Kind")
            .selected_text(kind.label())
            .show_ui(ui, |ui| {
                for candidate in GradientKind::ALL {
                    ui.selectable_value(&mut kind, candidate, candidate.label());
                }
            });
        if kind != self.configuration.kind() {
            log::info!("Switching gradient kind to {}", kind.label());
            self.configuration = Configuration::default_for(kind);
        }

        ui.add_space(6.0);
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            self.render_parameters(ui);
        });

        ui.add_space(10.0);
        ui.label("Stops");
        stop_list::ramp_preview(ui, &self.gradient, 24.0);
        ui.add_space(4.0);
        stop_list::stop_list(ui, &mut self.gradient);

        ui.add_space(10.0);
        ui.separator();
        ui.label("Preset");
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.preset_name);
        });
        ui.horizontal(|ui| {
            if ui.button("Save…").on_hover_text("Save preset (Ctrl+S)").clicked() {
                self.save_preset();
            }
            if ui.button("Load…").on_hover_text("Load preset (Ctrl+O)").clicked() {
                self.load_preset();
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.label("Export PNG");
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut self.export_width).range(16..=8192));
            ui.label("×");
            ui.add(egui::DragValue::new(&mut self.export_height).range(16..=8192));
        });
        if ui.button("Export…").on_hover_text("Export PNG (Ctrl+E)").clicked() {
            self.export_image();
        }
    }

    fn render_parameters(&mut self, ui: &mut egui::Ui) {
        use std::f32::consts::TAU;

        match &mut self.configuration {
            Configuration::Axial { start, end } => {
                point_editor(ui, "Start", start);
                point_editor(ui, "End", end);
            }
            Configuration::Radial { center, radius } => {
                point_editor(ui, "Center", center);
                ui.add(egui::Slider::new(radius, 0.0..=2.0).text("Radius"));
            }
            Configuration::Sweep { center, angle } => {
                point_editor(ui, "Center", center);
                ui.add(egui::Slider::new(angle, -TAU..=TAU).text("Angle"));
            }
            Configuration::Spiral {
                center,
                angle,
                scale,
            } => {
                point_editor(ui, "Center", center);
                ui.add(egui::Slider::new(angle, -TAU..=TAU).text("Angle"));
                ui.add(egui::Slider::new(scale, 0.0..=2.0).text("Scale"));
            }
        }
    }

    fn render_preview(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        let size = ui.available_size();
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());

        let Some(render_state) = frame.wgpu_render_state() else {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "wgpu render state unavailable",
                egui::FontId::default(),
                egui::Color32::GRAY,
            );
            return;
        };
        let render_state = render_state.clone();

        if let Some(pipeline) = self.ensure_pipeline(&render_state) {
            let pixels_per_point = ui.ctx().pixels_per_point();
            let callback = GradientCallback {
                pipeline,
                gradient: self.gradient.clone(),
                configuration: self.configuration.clone(),
                resolution: [
                    rect.width() * pixels_per_point,
                    rect.height() * pixels_per_point,
                ],
            };
            ui.painter()
                .add(egui_wgpu::Callback::new_paint_callback(rect, callback));
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (save, load, export) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::S),
                i.modifiers.command && i.key_pressed(egui::Key::O),
                i.modifiers.command && i.key_pressed(egui::Key::E),
            )
        });
        if save {
            self.save_preset();
        }
        if load {
            self.load_preset();
        }
        if export {
            self.export_image();
        }
    }

    fn save_preset(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("Gradient preset", &["json"])
            .set_file_name(format!("{}.json", self.preset_name.trim()));
        if let Some(dir) = preset::preset_dir() {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return; // user cancelled
        };

        let preset =
            GradientPreset::from_parts(self.preset_name.trim(), &self.gradient, &self.configuration);
        match preset.save_to(&path) {
            Ok(()) => self
                .notifications
                .success(format!("Saved preset: {}", preset.name)),
            Err(err) => {
                self.notifications.error(err.to_string());
                log::error!("Preset save failed: {}", err);
            }
        }
    }

    fn load_preset(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("Gradient preset", &["json"]);
        if let Some(dir) = preset::preset_dir() {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.pick_file() else {
            return;
        };

        match GradientPreset::load_from(&path).and_then(|p| p.to_parts().map(|parts| (p, parts))) {
            Ok((preset, (gradient, configuration))) => {
                self.preset_name = preset.name.clone();
                self.gradient = gradient;
                self.configuration = configuration;
                self.notifications
                    .success(format!("Loaded preset: {}", preset.name));
            }
            Err(err) => {
                self.notifications.error(err.to_string());
                log::error!("Preset load failed: {}", err);
            }
        }
    }

    fn export_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(export::default_export_name())
            .save_file()
        else {
            return;
        };

        match export::export_png(
            &self.gradient,
            &self.configuration,
            self.export_width,
            self.export_height,
            &path,
        ) {
            Ok(()) => self
                .notifications
                .success(format!("Exported {}", path.display())),
            Err(err) => {
                self.notifications.error(err.to_string());
                log::error!("Export failed: {}", err);
            }
        }
    }
}

fn point_editor(ui: &mut egui::Ui, label: &str, point: &mut [f32; 2]) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(
            egui::DragValue::new(&mut point[0])
                .speed(0.01)
                .fixed_decimals(2)
                .prefix("x "),
        );
        ui.add(
            egui::DragValue::new(&mut point[1])
                .speed(0.01)
                .fixed_decimals(2)
                .prefix("y "),
        );
    });
}
