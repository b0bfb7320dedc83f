// src/view_models.rs

/// Questions longer than this are cut in the sidebar preview.
pub const PREVIEW_CHARS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterRow {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub expanded: bool,
    pub highlighted: bool, // chapter of the card on screen
    pub quotes: Vec<QuoteRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRow {
    pub chapter_id: String,
    pub quote_id: String,
    pub number: usize, // 1-based inside its chapter
    pub preview: String,
    pub current: bool,
}

impl ChapterRow {
    pub fn toggle_icon(&self) -> &'static str {
        if self.expanded { "▼" } else { "▶" }
    }
}

impl QuoteRow {
    pub fn label(&self) -> String {
        format!("{}  {}", self.number, self.preview)
    }
}

/// First [`PREVIEW_CHARS`] characters of `question`, with "..." when cut.
pub fn preview(question: &str) -> String {
    if question.chars().count() > PREVIEW_CHARS {
        let cut: String = question.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        question.to_string()
    }
}
