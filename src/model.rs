// src/model.rs

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

/// Text for the "about" modal.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct About {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// The whole, read-only collection of chapters.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub about: Option<About>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

/// A quote annotated with the chapter it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatQuote {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub chapter_id: String,
    pub chapter_title: String,
    pub chapter_subtitle: String,
}

impl FlatQuote {
    fn new(chapter: &Chapter, quote: &Quote) -> Self {
        Self {
            id: quote.id.clone(),
            question: quote.question.clone(),
            answer: quote.answer.clone(),
            chapter_id: chapter.id.clone(),
            chapter_title: chapter.title.clone(),
            chapter_subtitle: chapter.subtitle.clone(),
        }
    }

    /// Quote ids are only unique inside a chapter, so identity is the pair.
    pub fn same_card(&self, other: &FlatQuote) -> bool {
        self.chapter_id == other.chapter_id && self.id == other.id
    }
}

impl Catalog {
    /// Parses and validates a YAML catalog.
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that chapter ids are unique and quote ids are unique per chapter.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut chapter_ids = HashSet::new();
        for (position, chapter) in self.chapters.iter().enumerate() {
            if chapter.id.trim().is_empty() {
                return Err(CatalogError::EmptyChapterId { position });
            }
            if !chapter_ids.insert(chapter.id.as_str()) {
                return Err(CatalogError::DuplicateChapterId(chapter.id.clone()));
            }

            let mut quote_ids = HashSet::new();
            for (position, quote) in chapter.quotes.iter().enumerate() {
                if quote.id.trim().is_empty() {
                    return Err(CatalogError::EmptyQuoteId {
                        chapter: chapter.id.clone(),
                        position,
                    });
                }
                if !quote_ids.insert(quote.id.as_str()) {
                    return Err(CatalogError::DuplicateQuoteId {
                        chapter: chapter.id.clone(),
                        quote: quote.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == chapter_id)
    }

    pub fn chapter_position(&self, chapter_id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == chapter_id)
    }

    pub fn quote_count(&self) -> usize {
        self.chapters.iter().map(|c| c.quotes.len()).sum()
    }

    /// Every quote of every chapter, in catalog order.
    pub fn flatten(&self) -> Vec<FlatQuote> {
        self.chapters
            .iter()
            .flat_map(|chapter| chapter.quotes.iter().map(move |q| FlatQuote::new(chapter, q)))
            .collect()
    }

    /// Flattened quotes restricted to one chapter, or all of them when `chapter_id` is `None`.
    pub fn flatten_filtered(&self, chapter_id: Option<&str>) -> Vec<FlatQuote> {
        match chapter_id {
            None => self.flatten(),
            Some(id) => self
                .chapters
                .iter()
                .filter(|c| c.id == id)
                .flat_map(|chapter| chapter.quotes.iter().map(move |q| FlatQuote::new(chapter, q)))
                .collect(),
        }
    }
}
