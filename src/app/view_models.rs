use super::*;
use crate::view_models::{ChapterRow, QuoteRow, preview};

impl CardsApp {
    /// Chapter to highlight: the current card's, or the filter when the view is empty.
    pub fn highlighted_chapter(&self) -> Option<&str> {
        self.navigator
            .current_chapter_id()
            .or_else(|| self.navigator.active_chapter())
    }

    pub fn chapter_rows(&self) -> Vec<ChapterRow> {
        let highlighted = self.highlighted_chapter();
        self.catalog()
            .chapters
            .iter()
            .map(|chapter| ChapterRow {
                id: chapter.id.clone(),
                title: chapter.title.clone(),
                subtitle: chapter.subtitle.clone(),
                expanded: self.expanded_chapters.contains(&chapter.id),
                highlighted: highlighted == Some(chapter.id.as_str()),
                quotes: chapter
                    .quotes
                    .iter()
                    .enumerate()
                    .map(|(i, q)| QuoteRow {
                        chapter_id: chapter.id.clone(),
                        quote_id: q.id.clone(),
                        number: i + 1,
                        preview: preview(&q.question),
                        current: self.navigator.is_current(&chapter.id, &q.id),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use crate::config::Config;
    use crate::model::fixtures::{catalog, chapter};
    use crate::app::CardsApp;

    #[test]
    fn rows_follow_catalog_and_mark_current_card() {
        let mut app = app();
        app.next_card();
        let rows = app.chapter_rows();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].highlighted);
        assert!(rows[0].expanded);
        assert!(!rows[1].expanded);
        let current: Vec<_> = rows
            .iter()
            .flat_map(|r| &r.quotes)
            .filter(|q| q.current)
            .map(|q| (q.chapter_id.as_str(), q.quote_id.as_str(), q.number))
            .collect();
        assert_eq!(current, vec![("A", "a2", 2)]);
    }

    #[test]
    fn highlight_moves_with_the_card_when_unfiltered() {
        let mut app = app();
        app.next_card();
        app.next_card();
        let rows = app.chapter_rows();
        assert!(!rows[0].highlighted);
        assert!(rows[1].highlighted);
    }

    #[test]
    fn empty_chapter_is_still_highlighted_when_filtered() {
        let mut app = CardsApp::new(
            catalog(vec![chapter("A", &["a1"]), chapter("E", &[])]),
            &Config::default(),
        );
        app.select_chapter("E");
        let rows = app.chapter_rows();
        assert!(rows[1].highlighted);
        assert!(rows[1].quotes.is_empty());
        assert!(rows.iter().flat_map(|r| &r.quotes).all(|q| !q.current));
    }
}
