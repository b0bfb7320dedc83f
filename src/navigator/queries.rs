use super::*;

impl Navigator {
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Chapter filter, `None` when every chapter is visible.
    pub fn active_chapter(&self) -> Option<&str> {
        self.active_chapter.as_deref()
    }

    pub fn view(&self) -> &[FlatQuote] {
        &self.view
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn current(&self) -> Option<&FlatQuote> {
        self.view.get(self.index)
    }

    /// Chapter of the card on screen. Differs from [`Self::active_chapter`] when unfiltered.
    pub fn current_chapter_id(&self) -> Option<&str> {
        self.current().map(|q| q.chapter_id.as_str())
    }

    pub fn current_chapter_title(&self) -> Option<&str> {
        self.current().map(|q| q.chapter_title.as_str())
    }

    pub fn current_chapter_subtitle(&self) -> Option<&str> {
        self.current().map(|q| q.chapter_subtitle.as_str())
    }

    pub fn current_question(&self) -> Option<&str> {
        self.current().map(|q| q.question.as_str())
    }

    pub fn current_answer(&self) -> Option<&str> {
        self.current().map(|q| q.answer.as_str())
    }

    /// 1-based position and view length, e.g. `(2, 4)`.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current().map(|_| (self.index + 1, self.view.len()))
    }

    pub fn is_current(&self, chapter_id: &str, quote_id: &str) -> bool {
        self.current()
            .is_some_and(|q| q.chapter_id == chapter_id && q.id == quote_id)
    }
}
