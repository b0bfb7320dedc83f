use super::*;

impl CardsApp {
    pub fn next_card(&mut self) {
        let outcome = self.navigator.next();
        self.notify(Command::Next, outcome);
    }

    pub fn prev_card(&mut self) {
        let outcome = self.navigator.prev();
        self.notify(Command::Prev, outcome);
    }

    pub fn random_card(&mut self) {
        let outcome = self.navigator.random_card(&mut self.rng);
        self.notify(Command::Random, outcome);
    }

    /// Chapter header click: expands the group and filters to it. The sidebar stays open.
    pub fn select_chapter(&mut self, chapter_id: &str) {
        self.expanded_chapters.insert(chapter_id.to_string());
        let outcome = self.navigator.select_chapter(chapter_id);
        self.notify(Command::SelectChapter, outcome);
    }

    /// Quote row click: shows that quote and closes the sidebar.
    pub fn jump_to(&mut self, chapter_id: &str, quote_id: &str) {
        let outcome = self.navigator.jump_to(chapter_id, quote_id);
        self.notify(Command::JumpTo, outcome);
        self.close_sidebar();
    }

    pub fn toggle_chapter(&mut self, chapter_id: &str) {
        if !self.expanded_chapters.remove(chapter_id) {
            self.expanded_chapters.insert(chapter_id.to_string());
        }
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn open_about(&mut self) {
        self.show_about = true;
    }

    pub fn close_about(&mut self) {
        self.show_about = false;
    }

    /// Escape closes whatever overlay is open.
    pub fn close_panels(&mut self) {
        self.close_sidebar();
        self.close_about();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;
    use crate::app::ToastKind;

    #[test]
    fn select_chapter_expands_and_keeps_sidebar_open() {
        let mut app = app();
        app.open_sidebar();
        app.select_chapter("B");
        assert!(app.expanded_chapters.contains("B"));
        assert!(app.sidebar_open);
        assert_eq!(app.navigator.active_chapter(), Some("B"));
    }

    #[test]
    fn jump_closes_sidebar_and_toasts() {
        let mut app = app();
        app.open_sidebar();
        app.jump_to("B", "b2");
        assert!(!app.sidebar_open);
        assert!(app.navigator.is_current("B", "b2"));
        assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[test]
    fn toggle_chapter_flips_expansion_only() {
        let mut app = app();
        app.toggle_chapter("A");
        assert!(!app.expanded_chapters.contains("A"));
        app.toggle_chapter("A");
        assert!(app.expanded_chapters.contains("A"));
        assert_eq!(app.navigator.active_chapter(), None);
    }

    #[test]
    fn moving_inside_a_view_keeps_previous_toast() {
        let mut app = app();
        app.toast = None;
        app.next_card();
        assert!(app.toast.is_none());
        assert!(app.navigator.is_current("A", "a2"));
    }

    #[test]
    fn random_card_always_toasts() {
        let mut app = app();
        app.toast = None;
        app.random_card();
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Drew a random quote")
        );
        assert!(app.navigator.current().is_some());
    }

    #[test]
    fn escape_closes_sidebar_and_about() {
        let mut app = app();
        app.open_sidebar();
        app.open_about();
        app.close_panels();
        assert!(!app.sidebar_open);
        assert!(!app.show_about);
    }
}
