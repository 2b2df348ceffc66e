use std::{fs, path::Path};

use crate::{CatalogError, Result};

use super::CatalogConfig;

/// Load a build config from a json/yml/yaml file.
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    log::info!("Loading config file: {:?}", path);
    let content = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();
    parse_config(&content, &ext).map_err(|message| {
        CatalogError::Config(format!("{}: {}", path.display(), message))
    })
}

/// Parse config text; an unknown extension tries JSON, then YAML.
pub fn parse_config(content: &str, ext: &str) -> std::result::Result<CatalogConfig, String> {
    if content.trim().is_empty() {
        return Ok(CatalogConfig::default());
    }

    match ext {
        "json" => serde_json::from_str::<CatalogConfig>(content)
            .map_err(|e| format!("failed to parse JSON config: {e}")),
        "yml" | "yaml" => serde_yml::from_str::<CatalogConfig>(content)
            .map_err(|e| format!("failed to parse YAML config: {e}")),
        _ => match serde_json::from_str::<CatalogConfig>(content) {
            Ok(config) => Ok(config),
            Err(_) => serde_yml::from_str::<CatalogConfig>(content)
                .map_err(|e| format!("unknown extension, failed as both JSON and YAML: {e}")),
        },
    }
}
