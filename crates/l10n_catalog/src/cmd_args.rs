use std::path::PathBuf;

use clap::Parser;

use crate::{
    LogVerbosity, Result,
    config::{CatalogConfig, load_config},
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "l10n_catalog",
    version,
    about = "Build a .xcstrings catalog from JSON or YAML locale files",
    disable_help_subcommand = true
)]
pub struct BuildArgs {
    /// Load build settings from a file (json/yml/yaml)
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory with *.json, *.yaml, or *.yml locale files
    #[arg(short, long, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub input_dir: Option<PathBuf>,

    /// Additional locale directory merged after the input directory (repeatable)
    #[arg(long = "extra-dir", value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub extra_dirs: Vec<PathBuf>,

    /// Source language code
    #[arg(short, long, value_name = "LOCALE")]
    pub source_locale: Option<String>,

    /// Output .xcstrings path
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// File name prefix stripped before reading the locale, e.g. `air_`
    #[arg(long, value_name = "PREFIX")]
    pub locale_prefix: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl BuildArgs {
    pub fn verbosity(&self) -> LogVerbosity {
        LogVerbosity::from_flags(self.verbose, self.quiet)
    }

    /// Config file values, overridden by whatever was given on the command line.
    pub fn resolve_config(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => CatalogConfig::default(),
        };

        if let Some(input_dir) = &self.input_dir {
            config.input_dir = input_dir.clone();
        }
        if !self.extra_dirs.is_empty() {
            config.extra_dirs = self.extra_dirs.clone();
        }
        if let Some(source_locale) = &self.source_locale {
            config.source_locale = source_locale.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(prefix) = &self.locale_prefix {
            config.locale_prefix = prefix.clone();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "l10n_check",
    version,
    about = "Check a localization file for keys missing from or extraneous to a base file",
    disable_help_subcommand = true
)]
pub struct CheckArgs {
    /// Path to the base localization file
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub base: PathBuf,

    /// Path to the localization file to compare against the base
    #[arg(long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub compare: PathBuf,

    /// Show key counts for both files
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "l10n_strings_to_json",
    version,
    about = "Convert an Apple .strings file to a JSON dict, with dots in keys replaced by underscores",
    disable_help_subcommand = true
)]
pub struct StringsToJsonArgs {
    /// Path to Localizable.strings
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Path to the output JSON (default: stdout)
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "l10n_json_to_yaml",
    version,
    about = "Convert a JSON localization file to YAML",
    disable_help_subcommand = true
)]
pub struct JsonToYamlArgs {
    /// Path to the JSON localization file
    #[arg(value_name = "INPUT", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output path; defaults to `<stem>.yaml` in the working directory, with a
    /// trailing `_en` dropped from the stem
    #[arg(value_name = "OUTPUT", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
