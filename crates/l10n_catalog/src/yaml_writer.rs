use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::{CatalogError, Result, value::LocaleMap};

const INDENT: usize = 2;

/// Render a locale map as block-style YAML, keeping key order.
///
/// Multi-line strings become literal block scalars; strings that would not
/// read back as the same plain scalar are double-quoted.
pub fn locale_map_to_yaml(map: &LocaleMap) -> String {
    let mut out = String::new();
    write_mapping(&mut out, map, 0);
    out
}

/// Where `json_to_yaml` writes when no output is given: the input's stem with
/// a trailing `_en` removed, as `.yaml` in the working directory.
pub fn default_yaml_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let base = stem.strip_suffix("_en").unwrap_or(&stem);
    PathBuf::from(format!("{base}.yaml"))
}

/// Convert a JSON locale file into a YAML one.
pub fn convert_json_to_yaml(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input).map_err(|e| CatalogError::io(input, e))?;
    let map = match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(CatalogError::parse(input, "expected a key/value object")),
        Err(e) => return Err(CatalogError::parse(input, e)),
    };

    fs::write(output, locale_map_to_yaml(&map)).map_err(|e| CatalogError::io(output, e))?;
    log::info!("Converted {:?} to {:?}", input, output);
    Ok(())
}

fn write_mapping(out: &mut String, map: &Map<String, Value>, indent: usize) {
    for (key, value) in map {
        write_entry(out, key, value, indent);
    }
}

fn write_entry(out: &mut String, key: &str, value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    let key = scalar_text(key);
    match value {
        Value::Object(fields) if !fields.is_empty() => {
            out.push_str(&format!("{pad}{key}:\n"));
            write_mapping(out, fields, indent + INDENT);
        }
        Value::String(text) if fits_literal_block(text) => {
            let body = text.trim_end_matches('\n');
            let trailing = text.len() - body.len();
            let chomp = match trailing {
                0 => "-",
                1 => "",
                _ => "+",
            };
            out.push_str(&format!("{pad}{key}: |{chomp}\n"));
            let inner = " ".repeat(indent + INDENT);
            for line in body.split('\n') {
                if line.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(&format!("{inner}{line}\n"));
                }
            }
            for _ in 1..trailing {
                out.push('\n');
            }
        }
        Value::String(text) => out.push_str(&format!("{pad}{key}: {}\n", scalar_text(text))),
        // null, bool, number, arrays and `{}` read the same as JSON flow text
        other => out.push_str(&format!("{pad}{key}: {other}\n")),
    }
}

/// A multi-line string that a `|` block reproduces exactly.
fn fits_literal_block(text: &str) -> bool {
    let body = text.trim_end_matches('\n');
    if !body.contains('\n') {
        return false;
    }
    if body.chars().any(|c| c.is_control() && c != '\n' && c != '\t') {
        return false;
    }
    let mut lines = body.split('\n');
    let first_content = lines.clone().find(|line| !line.is_empty());
    if first_content.is_none_or(|line| line.starts_with([' ', '\t'])) {
        return false;
    }
    // whitespace-only lines would be read back as empty
    !lines.any(|line| !line.is_empty() && line.trim().is_empty())
}

fn scalar_text(text: &str) -> String {
    if is_plain_safe(text) {
        text.to_string()
    } else {
        Value::String(text.to_string()).to_string()
    }
}

/// Whether `text` can be written unquoted and still load as the same string.
fn is_plain_safe(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };
    if text.trim() != text || text.chars().any(|c| c.is_control() || c == '\u{FEFF}') {
        return false;
    }
    if "-?:,[]{}#&*!|>'\"%@`+.~".contains(first) || first.is_ascii_digit() {
        return false;
    }
    if text.contains(": ") || text.contains(" #") || text.ends_with(':') {
        return false;
    }
    let lower = text.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "null" | "true" | "false" | "yes" | "no" | "on" | "off" | "y" | "n"
    ) {
        return false;
    }
    text.parse::<f64>().is_err()
}
