use crate::app::CardsApp;
use egui::{Context, Key};

/// What a keyboard shortcut asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Prev,
    Next,
    Random,
    ClosePanels,
}

const SHORTCUTS: [Key; 5] = [Key::ArrowLeft, Key::ArrowRight, Key::Space, Key::Enter, Key::Escape];

pub fn action_for_key(key: Key) -> Option<KeyAction> {
    match key {
        Key::ArrowLeft => Some(KeyAction::Prev),
        Key::ArrowRight => Some(KeyAction::Next),
        Key::Space | Key::Enter => Some(KeyAction::Random),
        Key::Escape => Some(KeyAction::ClosePanels),
        _ => None,
    }
}

pub fn apply(app: &mut CardsApp, action: KeyAction) {
    match action {
        KeyAction::Prev => app.prev_card(),
        KeyAction::Next => app.next_card(),
        KeyAction::Random => app.random_card(),
        KeyAction::ClosePanels => app.close_panels(),
    }
}

/// Runs the shortcuts pressed this frame. Skipped while a text field has focus.
pub fn handle_keyboard(app: &mut CardsApp, ctx: &Context) {
    if ctx.wants_keyboard_input() {
        return;
    }
    let pressed: Vec<Key> = ctx.input(|i| {
        SHORTCUTS
            .iter()
            .copied()
            .filter(|k| i.key_pressed(*k))
            .collect()
    });
    for action in pressed.into_iter().filter_map(action_for_key) {
        apply(app, action);
    }
}
