// src/data.rs

use crate::error::CatalogError;
use crate::model::Catalog;
use log::info;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("data/catalog.yaml");

/// Loads the catalog shipped inside the binary.
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    let catalog = Catalog::from_yaml_str(EMBEDDED_CATALOG)?;
    info!(
        "embedded catalog loaded: {} chapters, {} quotes",
        catalog.chapters.len(),
        catalog.quote_count()
    );
    Ok(catalog)
}

/// Loads a catalog from a YAML file on disk.
pub fn read_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_yaml_str(&source)?;
    info!(
        "catalog {} loaded: {} chapters, {} quotes",
        path.display(),
        catalog.chapters.len(),
        catalog.quote_count()
    );
    Ok(catalog)
}

/// Picks the file given by the config when present, the embedded one otherwise.
pub fn read_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => read_catalog_file(path),
        None => read_catalog_embedded(),
    }
}
