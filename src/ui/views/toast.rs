use crate::app::{CardsApp, ToastKind};
use egui::{Align2, Color32, Context, Frame, Id, Order, RichText};
use std::time::Duration;

fn kind_color(kind: ToastKind) -> Color32 {
    match kind {
        ToastKind::Success => Color32::from_rgb(46, 125, 50),
        ToastKind::Info => Color32::from_rgb(25, 118, 210),
        ToastKind::Warning => Color32::from_rgb(237, 108, 2),
        ToastKind::Error => Color32::from_rgb(198, 40, 40),
    }
}

pub fn ui_toast(app: &mut CardsApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    let Some(toast) = app.toast.as_mut() else {
        return;
    };
    if !toast.visible_at(now) {
        app.toast = None;
        return;
    }

    egui::Area::new(Id::new("toast"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_BOTTOM, [0.0, -56.0])
        .interactable(false)
        .show(ctx, |ui| {
            Frame::popup(ui.style())
                .fill(kind_color(toast.kind))
                .show(ui, |ui| {
                    ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                });
        });

    // Wake up again to hide it once it expires
    let remaining = toast.expires_at.map_or(0.0, |t| (t - now).max(0.0));
    ctx.request_repaint_after(Duration::from_secs_f64(remaining));
}
