// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog YAML could not be parsed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("could not read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chapter #{position} has an empty id")]
    EmptyChapterId { position: usize },

    #[error("chapter id `{0}` appears more than once")]
    DuplicateChapterId(String),

    #[error("quote #{position} in chapter `{chapter}` has an empty id")]
    EmptyQuoteId { chapter: String, position: usize },

    #[error("quote id `{quote}` appears more than once in chapter `{chapter}`")]
    DuplicateQuoteId { chapter: String, quote: String },
}
