// src/config.rs

use std::path::PathBuf;
use std::time::Duration;

pub const CATALOG_ENV: &str = "QUOTE_CARDS_CATALOG";
pub const SEED_ENV: &str = "QUOTE_CARDS_SEED";

/// How long a random-draw toast stays on screen.
pub const RANDOM_TOAST_DURATION: Duration = Duration::from_millis(1500);
/// How long every other toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Startup settings. Native builds read them from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// YAML catalog to use instead of the embedded one.
    pub catalog_path: Option<PathBuf>,
    /// Fixed seed for the random-draw generator.
    pub seed: Option<u64>,
}

impl Config {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_path = lookup(CATALOG_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let seed = lookup(SEED_ENV).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("{SEED_ENV}={raw:?} is not a valid u64, ignoring it");
                None
            }
        });

        Self { catalog_path, seed }
    }
}
