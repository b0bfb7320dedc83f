// src/ui/helpers.rs
use egui::{Button, Ui};

/// Draws equally sized buttons in one row, centered in `panel_width`.
/// Returns the index of the clicked button, if any.
pub fn button_row(ui: &mut Ui, panel_width: f32, labels: &[&str]) -> Option<usize> {
    if labels.is_empty() {
        return None;
    }
    let gap = 8.0;
    let btn_w = (panel_width - gap * (labels.len() - 1) as f32) / labels.len() as f32;
    let mut clicked = None;
    ui.horizontal(|ui| {
        // leading space centers the row
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        for (i, label) in labels.iter().enumerate() {
            if ui.add_sized([btn_w, 36.0], Button::new(*label)).clicked() {
                clicked = Some(i);
            }
        }
    });
    clicked
}
