use crate::app::CardsApp;
use egui::{Align2, Context, RichText};

pub fn ui_about(app: &mut CardsApp, ctx: &Context) {
    let Some(about) = app.catalog().about.clone() else {
        app.close_about();
        return;
    };

    let mut open = true;
    let mut close_clicked = false;
    egui::Window::new(RichText::new(&about.title).strong())
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(480.0)
        .show(ctx, |ui| {
            for paragraph in &about.paragraphs {
                ui.label(paragraph);
                ui.add_space(6.0);
            }
            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    if !open || close_clicked {
        app.close_about();
    }
}
