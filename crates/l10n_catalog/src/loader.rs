use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Number, Value};
use walkdir::WalkDir;

use crate::{CatalogError, Result, value::LocaleMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleFileFormat {
    Json,
    Yaml,
}

impl LocaleFileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(LocaleFileFormat::Json),
            Some("yaml") | Some("yml") => Some(LocaleFileFormat::Yaml),
            _ => None,
        }
    }
}

/// A locale file and the directory layer it was found in.
///
/// Layer 0 is the primary input directory; secondary directories follow in
/// the order they were given and are merged after it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocaleSource {
    pub layer: usize,
    pub path: PathBuf,
}

impl LocaleSource {
    pub fn new(path: impl Into<PathBuf>, layer: usize) -> Self {
        Self {
            layer,
            path: path.into(),
        }
    }
}

/// List the json/yaml/yml files directly inside each directory.
///
/// Missing directories contribute nothing. Files come back ordered by layer,
/// then by path.
pub fn discover_locale_files(dirs: &[PathBuf]) -> Vec<LocaleSource> {
    let mut sources = Vec::new();
    for (layer, dir) in dirs.iter().enumerate() {
        if !dir.is_dir() {
            log::info!("Skipping missing locale directory: {:?}", dir);
            continue;
        }

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| LocaleFileFormat::from_path(p).is_some())
            .collect();
        files.sort();

        log::info!("Found {} locale files in {:?}", files.len(), dir);
        sources.extend(files.into_iter().map(|path| LocaleSource::new(path, layer)));
    }
    sources
}

/// Locale token of a file: its stem with `prefix` removed once.
pub fn locale_name_from_path(path: &Path, prefix: &str) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let name = if prefix.is_empty() {
        stem
    } else {
        stem.strip_prefix(prefix).unwrap_or(stem)
    };
    Some(name.to_string())
}

/// Load one locale file as a key/value object.
///
/// An empty file is an empty map; a document that is not an object is a parse
/// error.
pub fn load_locale_file(path: &Path) -> Result<LocaleMap> {
    let format = LocaleFileFormat::from_path(path)
        .ok_or_else(|| CatalogError::UnsupportedExtension(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(LocaleMap::new());
    }

    let document = match format {
        LocaleFileFormat::Json => {
            serde_json::from_str::<Value>(&content).map_err(|e| CatalogError::parse(path, e))?
        }
        LocaleFileFormat::Yaml => {
            let yaml = serde_yml::from_str::<serde_yml::Value>(&content)
                .map_err(|e| CatalogError::parse(path, e))?;
            yaml_to_json(yaml)
        }
    };

    match document {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(LocaleMap::new()),
        other => Err(CatalogError::parse(
            path,
            format!("expected a key/value object, found {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// YAML allows non-string mapping keys (`404: ...`); they become their text.
fn yaml_to_json(value: serde_yml::Value) -> Value {
    match value {
        serde_yml::Value::Null => Value::Null,
        serde_yml::Value::Bool(b) => Value::Bool(b),
        serde_yml::Value::Number(n) => yaml_number_to_json(&n),
        serde_yml::Value::String(s) => Value::String(s),
        serde_yml::Value::Sequence(items) => {
            Value::Array(items.into_iter().map(yaml_to_json).collect())
        }
        serde_yml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                map.insert(yaml_key_to_string(key), yaml_to_json(value));
            }
            Value::Object(map)
        }
        serde_yml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_number_to_json(n: &serde_yml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Value::Number(u.into())
    } else {
        match n.as_f64() {
            Some(f) if f.is_finite() => Number::from_f64(f).map_or(Value::Null, Value::Number),
            Some(f) => {
                let text = if f.is_nan() {
                    "nan"
                } else if f.is_sign_negative() {
                    "-inf"
                } else {
                    "inf"
                };
                log::warn!("Non-finite YAML number kept as the text '{}'", text);
                Value::String(text.to_string())
            }
            None => Value::Null,
        }
    }
}

fn yaml_key_to_string(key: serde_yml::Value) -> String {
    match key {
        serde_yml::Value::String(s) => s,
        serde_yml::Value::Null => "null".to_string(),
        serde_yml::Value::Bool(b) => b.to_string(),
        serde_yml::Value::Number(n) => n.to_string(),
        other => yaml_to_json(other).to_string(),
    }
}
