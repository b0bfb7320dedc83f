//! Navigation and filtering state over a read-only [`Catalog`].
//!
//! The navigator keeps an optional chapter filter, the filtered view derived
//! from it and a cursor into that view. Every operation runs to completion and
//! returns a [`NavOutcome`] the UI can turn into feedback; none of them fail.

use crate::model::{Catalog, FlatQuote};
use log::debug;

// Operations, split by concern
pub mod navigation;
pub mod queries;
pub mod selection;

/// What a random draw did to the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Draw {
    /// The drawn card was already the current one.
    SameCard,
    /// The drawn card was inside the filtered view; the filter stays.
    WithinView,
    /// The drawn card was outside the filter, so the filter was cleared.
    FilterCleared,
}

/// Status reported by every navigator command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Cursor moved inside the current view.
    Moved,
    /// `next` crossed into the following chapter.
    EnteredNextChapter,
    /// `prev` crossed into the preceding chapter.
    EnteredPreviousChapter,
    ChapterSelected,
    Jumped,
    Drew(Draw),
    /// Nothing to navigate: the view (or the catalog, for random) is empty.
    Empty,
    /// Unknown chapter id; nothing changed.
    NotFound,
    /// Already at the last card with no chapter after it.
    NoNextChapter,
    /// Already at the first card with no chapter before it.
    NoPreviousChapter,
}

impl NavOutcome {
    /// `true` when the command left the selection untouched.
    pub fn is_no_op(self) -> bool {
        matches!(
            self,
            NavOutcome::Drew(Draw::SameCard)
                | NavOutcome::Empty
                | NavOutcome::NotFound
                | NavOutcome::NoNextChapter
                | NavOutcome::NoPreviousChapter
        )
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    active_chapter: Option<String>,
    view: Vec<FlatQuote>,
    index: usize,
}

impl Navigator {
    /// Starts unfiltered, on the first card of the catalog.
    pub fn new(catalog: Catalog) -> Self {
        let view = catalog.flatten();
        Self {
            catalog,
            active_chapter: None,
            view,
            index: 0,
        }
    }

    /// Re-derives the view from the catalog and the filter, then clamps the cursor.
    fn rebuild_view(&mut self) {
        self.view = self.catalog.flatten_filtered(self.active_chapter.as_deref());
        if self.index >= self.view.len() {
            self.index = self.view.len().saturating_sub(1);
        }
    }

    fn set_filter(&mut self, chapter_id: Option<String>) {
        self.active_chapter = chapter_id;
        self.rebuild_view();
    }

    fn position_in_view(&self, quote: &FlatQuote) -> Option<usize> {
        self.view.iter().position(|q| q.same_card(quote))
    }

    fn trace(&self, op: &str, outcome: NavOutcome) {
        debug!(
            "{op} -> {outcome:?} (filter: {:?}, index {} of {})",
            self.active_chapter,
            self.index,
            self.view.len()
        );
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::model::fixtures::{catalog, chapter};
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_unfiltered_on_first_card() {
        let nav = two_chapters();
        assert_eq!(nav.active_chapter(), None);
        assert_eq!(nav.index(), 0);
        assert_eq!(nav.view().len(), 4);
        assert_eq!(current_id(&nav), card("A", "a1"));
        assert_consistent(&nav);
    }

    #[test]
    fn empty_catalog_has_no_current_quote() {
        let nav = Navigator::new(Catalog::default());
        assert!(nav.is_empty());
        assert!(nav.current().is_none());
        assert_eq!(nav.index(), 0);
        assert_consistent(&nav);
    }

    #[test]
    fn rebuild_clamps_cursor_to_new_view() {
        let mut nav = Navigator::new(catalog(vec![
            chapter("A", &["a1"]),
            chapter("B", &["b1", "b2", "b3"]),
            chapter("C", &[]),
        ]));
        nav.index = 3;
        nav.set_filter(Some("A".into()));
        assert_eq!(nav.index(), 0);

        nav.set_filter(None);
        nav.index = 3;
        nav.set_filter(Some("B".into()));
        assert_eq!(nav.index(), 2);

        nav.set_filter(Some("C".into()));
        assert_eq!(nav.index(), 0);
        assert!(nav.is_empty());
        assert_consistent(&nav);
    }

    #[test]
    fn no_op_outcomes() {
        assert!(NavOutcome::NoNextChapter.is_no_op());
        assert!(NavOutcome::Drew(Draw::SameCard).is_no_op());
        assert!(!NavOutcome::Drew(Draw::FilterCleared).is_no_op());
        assert!(!NavOutcome::Moved.is_no_op());
    }
}
