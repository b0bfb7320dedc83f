use crate::app::CardsApp;
use egui::{Context, RichText, ScrollArea};

enum SidebarAction {
    Toggle(String),
    SelectChapter(String),
    JumpTo(String, String),
}

pub fn ui_sidebar(app: &mut CardsApp, ctx: &Context) {
    // Precompute rows so the app is free to mutate once drawing is done
    let rows = app.chapter_rows();
    let mut action = None;

    egui::SidePanel::left("chapter_sidebar")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⬅ Back").clicked() {
                    app.close_sidebar();
                }
                ui.heading("Chapters");
            });
            ui.separator();

            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                for row in &rows {
                    ui.horizontal(|ui| {
                        if ui.small_button(row.toggle_icon()).clicked() {
                            action = Some(SidebarAction::Toggle(row.id.clone()));
                        }
                        let title = RichText::new(&row.title).strong();
                        if ui.selectable_label(row.highlighted, title).clicked() {
                            action = Some(SidebarAction::SelectChapter(row.id.clone()));
                        }
                    });
                    if !row.subtitle.is_empty() {
                        ui.label(RichText::new(&row.subtitle).small().weak());
                    }

                    if row.expanded {
                        ui.indent(("quotes", &row.id), |ui| {
                            for quote in &row.quotes {
                                if ui.selectable_label(quote.current, quote.label()).clicked() {
                                    action = Some(SidebarAction::JumpTo(
                                        quote.chapter_id.clone(),
                                        quote.quote_id.clone(),
                                    ));
                                }
                            }
                        });
                    }
                    ui.add_space(6.0);
                }
            });
        });

    match action {
        Some(SidebarAction::Toggle(id)) => app.toggle_chapter(&id),
        Some(SidebarAction::SelectChapter(id)) => app.select_chapter(&id),
        Some(SidebarAction::JumpTo(chapter, quote)) => app.jump_to(&chapter, &quote),
        None => {}
    }
}
