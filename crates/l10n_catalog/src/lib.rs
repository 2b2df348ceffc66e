mod build;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod cmd_args;
mod completeness;
pub mod config;
mod error;
mod flatten;
mod init;
pub mod loader;
pub mod merger;
pub mod placeholder;
pub mod plural;
pub mod strings_file;
#[cfg(test)]
mod test;
pub mod value;
pub mod yaml_writer;

pub use build::{BuildReport, build_catalog, run_build, write_catalog};
pub use catalog::{CatalogAssembler, StringCatalog};
pub use completeness::{CompletenessReport, check_completeness};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use flatten::flatten_keys;
pub use init::{LogVerbosity, setup_logger};
pub use merger::{MergedLocales, merge_locales};
pub use placeholder::{PlaceholderMap, PlaceholderReindexer, TypeSpec, TypeSpecRule};
pub use strings_file::{parse_strings, read_strings_file, strings_to_json};
pub use value::{LocaleMap, LocaleValue, normalize_value};
pub use yaml_writer::{convert_json_to_yaml, default_yaml_output, locale_map_to_yaml};
