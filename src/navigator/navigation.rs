use super::*;

impl Navigator {
    /// Advances one card, crossing into the next chapter at the end of a filtered view.
    pub fn next(&mut self) -> NavOutcome {
        let outcome = if self.view.is_empty() {
            NavOutcome::Empty
        } else if self.index + 1 < self.view.len() {
            self.index += 1;
            NavOutcome::Moved
        } else {
            match self.neighbour_chapter(1) {
                Some(chapter_id) => {
                    self.set_filter(Some(chapter_id));
                    self.index = 0;
                    NavOutcome::EnteredNextChapter
                }
                None => NavOutcome::NoNextChapter,
            }
        };
        self.trace("next", outcome);
        outcome
    }

    /// Steps back one card. Crossing into the previous chapter lands on its last card.
    pub fn prev(&mut self) -> NavOutcome {
        let outcome = if self.view.is_empty() {
            NavOutcome::Empty
        } else if self.index > 0 {
            self.index -= 1;
            NavOutcome::Moved
        } else {
            match self.neighbour_chapter(-1) {
                Some(chapter_id) => {
                    self.set_filter(Some(chapter_id));
                    self.index = self.view.len().saturating_sub(1);
                    NavOutcome::EnteredPreviousChapter
                }
                None => NavOutcome::NoPreviousChapter,
            }
        };
        self.trace("prev", outcome);
        outcome
    }

    /// Id of the chapter `step` places away from the filtered one.
    /// Unfiltered views span every chapter, so there is nothing to cross into.
    fn neighbour_chapter(&self, step: isize) -> Option<String> {
        let active = self.active_chapter.as_deref()?;
        let position = self.catalog.chapter_position(active)?;
        let target = position.checked_add_signed(step)?;
        self.catalog.chapters.get(target).map(|c| c.id.clone())
    }
}
