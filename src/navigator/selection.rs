use super::*;
use log::warn;
use rand::Rng;

impl Navigator {
    /// Restricts the view to one chapter and shows its first card.
    pub fn select_chapter(&mut self, chapter_id: &str) -> NavOutcome {
        let outcome = if self.catalog.chapter(chapter_id).is_none() {
            warn!("select_chapter: unknown chapter `{chapter_id}`");
            NavOutcome::NotFound
        } else {
            self.set_filter(Some(chapter_id.to_string()));
            self.index = 0;
            NavOutcome::ChapterSelected
        };
        self.trace("select_chapter", outcome);
        outcome
    }

    /// Narrows the view to `chapter_id` and shows `quote_id`, or the chapter's
    /// first card when the quote is not in it.
    pub fn jump_to(&mut self, chapter_id: &str, quote_id: &str) -> NavOutcome {
        if self.catalog.chapter(chapter_id).is_none() {
            warn!("jump_to: unknown chapter `{chapter_id}`");
            self.trace("jump_to", NavOutcome::NotFound);
            return NavOutcome::NotFound;
        }

        self.set_filter(Some(chapter_id.to_string()));
        self.index = match self.view.iter().position(|q| q.id == quote_id) {
            Some(pos) => pos,
            None => {
                warn!("jump_to: quote `{quote_id}` not in chapter `{chapter_id}`, showing first card");
                0
            }
        };
        self.trace("jump_to", NavOutcome::Jumped);
        NavOutcome::Jumped
    }

    /// Draws uniformly from the whole catalog, ignoring the chapter filter.
    pub fn random_card<R: Rng>(&mut self, rng: &mut R) -> NavOutcome {
        let all = self.catalog.flatten();
        let outcome = if all.is_empty() {
            NavOutcome::Empty
        } else {
            let drawn = &all[rng.gen_range(0..all.len())];
            NavOutcome::Drew(self.land_on(drawn))
        };
        self.trace("random_card", outcome);
        outcome
    }

    /// Moves the cursor to `drawn`, keeping the filter when the card is inside it.
    pub(crate) fn land_on(&mut self, drawn: &FlatQuote) -> Draw {
        if self.current().is_some_and(|q| q.same_card(drawn)) {
            return Draw::SameCard;
        }
        if let Some(pos) = self.position_in_view(drawn) {
            self.index = pos;
            return Draw::WithinView;
        }
        self.set_filter(None);
        self.index = self.position_in_view(drawn).unwrap_or(0);
        Draw::FilterCleared
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::model::fixtures::{catalog, chapter};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn flat(nav: &Navigator, chapter_id: &str, quote_id: &str) -> FlatQuote {
        nav.catalog()
            .flatten()
            .into_iter()
            .find(|q| q.chapter_id == chapter_id && q.id == quote_id)
            .expect("fixture card")
    }

    #[test]
    fn select_chapter_filters_and_resets_cursor() {
        let mut nav = two_chapters();
        nav.next();
        assert_eq!(nav.select_chapter("B"), NavOutcome::ChapterSelected);
        assert_eq!(nav.active_chapter(), Some("B"));
        assert_eq!(nav.index(), 0);
        assert_eq!(current_id(&nav), card("B", "b1"));
        assert_consistent(&nav);
    }

    #[test]
    fn select_unknown_chapter_is_a_no_op() {
        let mut nav = two_chapters();
        nav.jump_to("A", "a2");
        assert_eq!(nav.select_chapter("Z"), NavOutcome::NotFound);
        assert_eq!(nav.active_chapter(), Some("A"));
        assert_eq!(current_id(&nav), card("A", "a2"));
    }

    #[test]
    fn jump_to_lands_precisely() {
        let mut nav = two_chapters();
        assert_eq!(nav.jump_to("A", "a2"), NavOutcome::Jumped);
        assert_eq!(nav.active_chapter(), Some("A"));
        let ids: Vec<_> = nav.view().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn jump_to_unknown_quote_falls_back_to_first_card() {
        let mut nav = two_chapters();
        nav.next();
        assert_eq!(nav.jump_to("B", "nope"), NavOutcome::Jumped);
        assert_eq!(nav.active_chapter(), Some("B"));
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn jump_to_unknown_chapter_is_a_no_op() {
        let mut nav = two_chapters();
        nav.next();
        assert_eq!(nav.jump_to("Z", "a1"), NavOutcome::NotFound);
        assert_eq!(nav.active_chapter(), None);
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn jump_to_uses_chapter_local_quote_ids() {
        let mut nav = Navigator::new(catalog(vec![
            chapter("A", &["1", "2"]),
            chapter("B", &["2", "1"]),
        ]));
        nav.jump_to("B", "1");
        assert_eq!(current_id(&nav), card("B", "1"));
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn landing_on_current_card_changes_nothing() {
        let mut nav = two_chapters();
        nav.jump_to("A", "a2");
        let drawn = flat(&nav, "A", "a2");
        assert_eq!(nav.land_on(&drawn), Draw::SameCard);
        assert_eq!(nav.active_chapter(), Some("A"));
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn landing_inside_the_filter_keeps_it() {
        let mut nav = two_chapters();
        nav.select_chapter("B");
        let drawn = flat(&nav, "B", "b2");
        assert_eq!(nav.land_on(&drawn), Draw::WithinView);
        assert_eq!(nav.active_chapter(), Some("B"));
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn landing_outside_the_filter_clears_it() {
        let mut nav = two_chapters();
        nav.select_chapter("B");
        let drawn = flat(&nav, "A", "a2");
        assert_eq!(nav.land_on(&drawn), Draw::FilterCleared);
        assert_eq!(nav.active_chapter(), None);
        assert_eq!(nav.index(), 1);
        assert_eq!(current_id(&nav), card("A", "a2"));
        assert_consistent(&nav);
    }

    #[test]
    fn landing_matches_on_chapter_and_quote_id() {
        let mut nav = Navigator::new(catalog(vec![chapter("A", &["1"]), chapter("B", &["1"])]));
        nav.select_chapter("A");
        let drawn = flat(&nav, "B", "1");
        assert_eq!(nav.land_on(&drawn), Draw::FilterCleared);
        assert_eq!(current_id(&nav), card("B", "1"));
    }

    #[test]
    fn landing_from_an_empty_chapter_clears_the_filter() {
        let mut nav = Navigator::new(catalog(vec![chapter("A", &["a1"]), chapter("E", &[])]));
        nav.select_chapter("E");
        let drawn = flat(&nav, "A", "a1");
        assert_eq!(nav.land_on(&drawn), Draw::FilterCleared);
        assert_eq!(current_id(&nav), card("A", "a1"));
    }

    #[test]
    fn random_on_empty_catalog_reports_empty() {
        let mut nav = Navigator::new(catalog(vec![chapter("E", &[])]));
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(nav.random_card(&mut rng), NavOutcome::Empty);
        assert!(nav.current().is_none());
    }

    #[test]
    fn random_reaches_cards_outside_the_active_chapter() {
        let mut rng = SmallRng::seed_from_u64(2024);
        let mut left_chapter = false;
        for _ in 0..200 {
            let mut nav = two_chapters();
            nav.select_chapter("A");
            if let NavOutcome::Drew(Draw::FilterCleared) = nav.random_card(&mut rng) {
                assert_eq!(nav.current_chapter_id(), Some("B"));
                assert_eq!(nav.active_chapter(), None);
                left_chapter = true;
            }
            assert_consistent(&nav);
        }
        assert!(left_chapter);
    }
}
