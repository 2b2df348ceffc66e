use std::{fs, path::Path, sync::LazyLock};

use encoding_rs::{Encoding, UTF_8, UTF_16LE};
use regex::Regex;
use serde_json::Value;

use crate::{CatalogError, Result, value::LocaleMap};

/// Either a comment (no captures) or a `"key" = "value";` pair.
static STRINGS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)/\*.*?\*/|//[^\n]*|"((?:\\.|[^"\\])*)"\s*=\s*"((?:\\.|[^"\\])*)"\s*;"#)
        .expect("strings token pattern is valid")
});

/// Parse the text of an Apple `.strings` file into a flat locale map.
///
/// Dots in keys become underscores. A repeated key keeps its first position
/// and its last value.
pub fn parse_strings(text: &str) -> LocaleMap {
    let mut map = LocaleMap::new();
    for caps in STRINGS_TOKEN.captures_iter(text) {
        let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let key = unescape(key.as_str()).replace('.', "_");
        map.insert(key, Value::String(unescape(value.as_str())));
    }
    map
}

/// Read a `.strings` file. A BOM picks the encoding; without one, text with
/// NUL bytes is read as UTF-16LE and anything else as UTF-8.
pub fn read_strings_file(path: &Path) -> Result<LocaleMap> {
    let bytes = fs::read(path).map_err(|e| CatalogError::io(path, e))?;
    let text = decode_strings_text(&bytes)
        .ok_or_else(|| CatalogError::parse(path, "not valid UTF-8 or UTF-16 text"))?;
    let map = parse_strings(&text);
    log::info!("Read {} strings from {:?}", map.len(), path);
    Ok(map)
}

/// Pretty JSON for a converted `.strings` file.
pub fn strings_to_json(map: &LocaleMap) -> Result<String> {
    serde_json::to_string_pretty(map).map_err(|e| CatalogError::Serialize(e.to_string()))
}

fn decode_strings_text(bytes: &[u8]) -> Option<String> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None if bytes.contains(&0) => (UTF_16LE, bytes),
        None => (UTF_8, bytes),
    };
    let (text, has_error) = encoding.decode_without_bom_handling(body);
    if has_error {
        log::error!("Invalid {} text", encoding.name());
        return None;
    }
    Some(text.into_owned())
}

/// Decode the C-style escapes of a quoted `.strings` token. Unknown escapes
/// are kept as written.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('f') => out.push('\u{000C}'),
            Some('b') => out.push('\u{0008}'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                let decoded = (hex.len() == 4 && hex.chars().all(|h| h.is_ascii_hexdigit()))
                    .then(|| u32::from_str_radix(&hex, 16).ok())
                    .flatten()
                    .and_then(char::from_u32);
                match decoded {
                    Some(ch) => {
                        out.push(ch);
                        chars.nth(3);
                    }
                    None => out.push_str("\\u"),
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
