mod config_loader;

use std::path::PathBuf;

pub use config_loader::{load_config, parse_config};
use serde::{Deserialize, Serialize};

use crate::placeholder::{PlaceholderReindexer, TypeSpecRule};

/// Name of the secondary directory picked up under the input directory when no
/// secondary directory is configured.
pub const DEFAULT_EXTRA_DIR: &str = "air";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Directory holding `<locale>.json|yaml|yml` files.
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    /// Directories merged after `input_dir`, in order.
    #[serde(default)]
    pub extra_dirs: Vec<PathBuf>,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Removed once from the start of a file name to get its locale.
    #[serde(default = "default_locale_prefix")]
    pub locale_prefix: String,
    /// Checked after the built-in type spec rules.
    #[serde(default)]
    pub type_spec_rules: Vec<TypeSpecRule>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            extra_dirs: Vec::new(),
            source_locale: default_source_locale(),
            output: default_output(),
            locale_prefix: default_locale_prefix(),
            type_spec_rules: Vec::new(),
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("src/i18n")
}

fn default_source_locale() -> String {
    "en".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("Localizable.xcstrings")
}

fn default_locale_prefix() -> String {
    "air_".to_string()
}

impl CatalogConfig {
    /// Input directories in merge order.
    pub fn locale_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.input_dir.clone()];
        if self.extra_dirs.is_empty() {
            let fallback = self.input_dir.join(DEFAULT_EXTRA_DIR);
            if fallback.is_dir() {
                dirs.push(fallback);
            }
        } else {
            dirs.extend(self.extra_dirs.iter().cloned());
        }
        dirs
    }

    pub fn reindexer(&self) -> PlaceholderReindexer {
        PlaceholderReindexer::with_extra_rules(&self.type_spec_rules)
    }
}
