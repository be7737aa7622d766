//! Stop list editor and CPU ramp preview strip

use eframe::egui::{self, Color32};

use crate::utils::gradient::Gradient;
use crate::utils::ramp::interpolate_color;
use crate::utils::MAX_STOPS;

/// Edit the gradient's stops in place; returns true when anything changed
pub fn stop_list(ui: &mut egui::Ui, gradient: &mut Gradient) -> bool {
    let mut changed = false;
    let mut remove_index: Option<usize> = None;

    for index in 0..gradient.colors().len() {
        ui.horizontal(|ui| {
            let mut color = gradient.colors()[index];
            if ui.color_edit_button_rgba_unmultiplied(&mut color).changed() {
                gradient.set_color(index, color);
                changed = true;
            }

            let mut location = gradient.locations()[index];
            let response = ui.add(
                egui::DragValue::new(&mut location)
                    .speed(0.01)
                    .range(0.0..=1.0)
                    .fixed_decimals(2),
            );
            if response.changed() {
                gradient.set_location(index, location);
                changed = true;
            }

            if gradient.colors().len() > 1 && ui.small_button("✕").clicked() {
                remove_index = Some(index);
            }
        });
    }

    if let Some(index) = remove_index {
        if gradient.remove_stop(index).is_ok() {
            changed = true;
        }
    }

    ui.add_space(4.0);
    let at_cap = gradient.colors().len() >= MAX_STOPS;
    if ui
        .add_enabled(!at_cap, egui::Button::new("+ Add stop"))
        .on_hover_text(format!("Up to {} stops", MAX_STOPS))
        .clicked()
        && gradient.push_stop().is_ok()
    {
        changed = true;
    }

    changed
}

/// Horizontal ramp strip rendered with the CPU interpolation, so the
/// controls show the ramp even before the GPU pipeline exists
pub fn ramp_preview(ui: &mut egui::Ui, gradient: &Gradient, height: f32) {
    let width = ui.available_width();
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let slices = 128usize;
    let slice_width = rect.width() / slices as f32;
    let painter = ui.painter();
    for i in 0..slices {
        let location = (i as f32 + 0.5) / slices as f32;
        let color = interpolate_color(gradient.colors(), gradient.locations(), location);
        let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        let slice = egui::Rect::from_min_size(
            egui::pos2(rect.left() + i as f32 * slice_width, rect.top()),
            egui::vec2(slice_width + 0.5, rect.height()),
        );
        painter.rect_filled(
            slice,
            egui::CornerRadius::ZERO,
            Color32::from_rgba_unmultiplied(r, g, b, a),
        );
    }
}
