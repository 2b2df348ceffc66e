use std::{fmt, path::PathBuf};

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that abort a catalog build.
///
/// Per-file read or parse failures of a locale are not fatal on their own; the
/// merger logs them and skips the file. They surface through this type only
/// when a single file is loaded directly.
#[derive(Debug)]
pub enum CatalogError {
    /// None of the input directories contained a json/yaml/yml file.
    NoInputFiles(Vec<PathBuf>),
    /// No locale group matched the source locale.
    MissingSourceLocale(String),
    /// The source locale had files, but nothing could be merged from them.
    EmptySourceLocale(String),
    UnsupportedExtension(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        message: String,
    },
    Config(String),
    Serialize(String),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NoInputFiles(dirs) => {
                write!(f, "No JSON or YAML files found in")?;
                for (i, dir) in dirs.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{}'{}'", sep, dir.display())?;
                }
                Ok(())
            }
            CatalogError::MissingSourceLocale(locale) => {
                write!(f, "No files found for source locale '{}'", locale)
            }
            CatalogError::EmptySourceLocale(locale) => {
                write!(f, "No data loaded for source locale '{}'", locale)
            }
            CatalogError::UnsupportedExtension(path) => write!(
                f,
                "Unsupported file extension: {}. Only .json, .yaml, and .yml are supported.",
                path.display()
            ),
            CatalogError::Io { path, source } => {
                write!(f, "Failed to access '{}': {}", path.display(), source)
            }
            CatalogError::Parse { path, message } => {
                write!(f, "Failed to parse '{}': {}", path.display(), message)
            }
            CatalogError::Config(message) => write!(f, "Invalid configuration: {}", message),
            CatalogError::Serialize(message) => {
                write!(f, "Failed to serialize output: {}", message)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
