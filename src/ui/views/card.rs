use crate::app::CardsApp;
use crate::ui::helpers::button_row;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, ScrollArea};

const EMPTY_QUESTION: &str = "No matching quotes";
const EMPTY_ANSWER: &str = "Please pick another chapter.";

/// Text shown on the card: (chapter title, chapter subtitle, question, answer).
pub fn card_text(app: &CardsApp) -> (String, String, String, String) {
    let nav = &app.navigator;
    match nav.current() {
        Some(q) => (
            q.chapter_title.clone(),
            q.chapter_subtitle.clone(),
            q.question.clone(),
            q.answer.clone(),
        ),
        None => (
            String::new(),
            String::new(),
            EMPTY_QUESTION.to_string(),
            EMPTY_ANSWER.to_string(),
        ),
    }
}

pub fn ui_card(app: &mut CardsApp, ctx: &Context) {
    let (chapter, subtitle, question, answer) = card_text(app);
    let position = app.navigator.position();

    centered_panel(ctx, 360.0, 640.0, |ui| {
        let panel_width = ui.available_width();
        ui.vertical_centered(|ui| {
            if !chapter.is_empty() {
                ui.label(RichText::new(&chapter).heading().strong());
                if !subtitle.is_empty() {
                    ui.label(RichText::new(&subtitle).italics().weak());
                }
            }
            if let Some((n, total)) = position {
                ui.label(RichText::new(format!("{n} / {total}")).small().weak());
            }
            ui.add_space(16.0);

            ScrollArea::vertical()
                .max_height(220.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    ui.label(RichText::new(&question).size(20.0).strong());
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(12.0);
                    ui.label(RichText::new(&answer).size(17.0));
                });

            ui.add_space(20.0);
            match button_row(ui, panel_width, &["◀ Previous", "🎲 Random", "Next ▶"]) {
                Some(0) => app.prev_card(),
                Some(1) => app.random_card(),
                Some(2) => app.next_card(),
                _ => {}
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::app;

    #[test]
    fn card_shows_current_quote() {
        let mut app = app();
        app.jump_to("B", "b1");
        let (chapter, subtitle, question, answer) = card_text(&app);
        assert_eq!(chapter, "Title B");
        assert_eq!(subtitle, "Subtitle B");
        assert_eq!(question, "question b1");
        assert_eq!(answer, "answer b1");
    }

    #[test]
    fn empty_view_shows_placeholder_without_chapter() {
        let app = CardsApp::new(Default::default(), &Default::default());
        let (chapter, _, question, answer) = card_text(&app);
        assert!(chapter.is_empty());
        assert_eq!(question, EMPTY_QUESTION);
        assert_eq!(answer, EMPTY_ANSWER);
    }
}
