use crate::config::Config;
use crate::data::read_catalog;
use crate::model::Catalog;
use crate::navigator::{NavOutcome, Navigator};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashSet;

// Submodules
pub mod actions;
pub mod feedback;
pub mod view_models;

pub use feedback::{Command, Toast, ToastKind};

/// Application state: the navigator plus everything the panels need.
pub struct CardsApp {
    pub navigator: Navigator,
    pub rng: SmallRng,
    pub sidebar_open: bool,
    pub expanded_chapters: HashSet<String>,
    pub show_about: bool,
    pub toast: Option<Toast>,
}

impl CardsApp {
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        // First chapter starts expanded in the sidebar
        let expanded_chapters = catalog
            .chapters
            .first()
            .map(|c| HashSet::from([c.id.clone()]))
            .unwrap_or_default();

        let welcome = if catalog.title.is_empty() {
            "Welcome!".to_string()
        } else {
            format!("Welcome to {}!", catalog.title)
        };

        info!(
            "starting with {} chapters, {} quotes",
            catalog.chapters.len(),
            catalog.quote_count()
        );

        Self {
            navigator: Navigator::new(catalog),
            rng,
            sidebar_open: false,
            expanded_chapters,
            show_about: false,
            toast: Some(Toast::new(welcome, ToastKind::Success)),
        }
    }

    /// Loads the configured catalog. On failure the app starts empty and says why.
    pub fn load(config: &Config) -> Self {
        match read_catalog(config.catalog_path.as_deref()) {
            Ok(catalog) => Self::new(catalog, config),
            Err(e) => {
                error!("catalog could not be loaded: {e}");
                let mut app = Self::new(Catalog::default(), config);
                app.toast = Some(Toast::new(
                    "Failed to load the quotes, please reload and try again".to_string(),
                    ToastKind::Error,
                ));
                app
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.navigator.catalog()
    }

    /// Shows the feedback for `outcome`, if the command has any.
    fn notify(&mut self, command: Command, outcome: NavOutcome) {
        if let Some(toast) = feedback::toast_for(command, outcome, &self.navigator) {
            self.toast = Some(toast);
        }
    }
}
