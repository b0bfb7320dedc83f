mod helpers;
pub mod input;
pub mod layout;
pub mod views;

use crate::app::CardsApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for CardsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Input first, so everything drawn below reflects the finished operation
        input::handle_keyboard(self, ctx);

        top_panel(self, ctx);

        // BOTTOM PANEL: dark / light theme
        bottom_panel(ctx);

        if self.sidebar_open {
            views::sidebar::ui_sidebar(self, ctx);
        }

        views::card::ui_card(self, ctx);

        if self.show_about {
            views::about::ui_about(self, ctx);
        }

        views::toast::ui_toast(self, ctx);
    }
}
