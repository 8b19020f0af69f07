use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::creation::Creation;
use crate::error::CatalogError;

/// The seed catalog file: the static fallback dataset used when no
/// external data source is configured.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub creations: Vec<Creation>,
}

/// Load and validate a seed catalog from a YAML file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_catalog(path: &Path) -> Result<CatalogFile, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let catalog: CatalogFile = serde_yaml::from_str(&content)?;

    validate_catalog(&catalog)?;

    Ok(catalog)
}

fn validate_catalog(catalog: &CatalogFile) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for creation in &catalog.creations {
        if creation.id.trim().is_empty() {
            return Err(CatalogError::Validation(
                "creation id must be non-empty".to_string(),
            ));
        }

        if !seen_ids.insert(creation.id.clone()) {
            return Err(CatalogError::Validation(format!(
                "duplicate creation id: '{}'",
                creation.id
            )));
        }
    }

    Ok(())
}
