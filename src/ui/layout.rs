use crate::app::CardsApp;
use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

pub fn top_panel(app: &mut CardsApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let menu_label = if app.sidebar_open { "✖ Chapters" } else { "☰ Chapters" };
            if ui.button(menu_label).clicked() {
                app.toggle_sidebar();
            }

            if app.catalog().about.is_some() && ui.button("ℹ About").clicked() {
                app.open_about();
            }

            ui.separator();
            let title = app.catalog().title.clone();
            ui.label(RichText::new(title).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let filter = match app.navigator.active_chapter() {
                    Some(id) => app
                        .catalog()
                        .chapter(id)
                        .map(|c| c.title.clone())
                        .unwrap_or_default(),
                    None => "All chapters".to_string(),
                };
                ui.label(RichText::new(filter).weak());
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- THEME BUTTONS -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centered both ways, with a maximum content width and an `inner` block.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
