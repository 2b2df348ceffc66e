use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::value::is_plural_block;

/// Collect the dot-separated key paths of a locale tree.
///
/// A plural block counts as one leaf: its own path is emitted, the category
/// fields inside it are not. Other objects emit their own path and are walked.
pub fn flatten_keys(tree: &Map<String, Value>, prefix: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect_keys(tree, prefix, &mut keys);
    keys
}

fn collect_keys(tree: &Map<String, Value>, prefix: &str, keys: &mut BTreeSet<String>) {
    for (key, value) in tree {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Object(fields) if !is_plural_block(fields) => {
                collect_keys(fields, &full_key, keys);
                keys.insert(full_key);
            }
            _ => {
                keys.insert(full_key);
            }
        }
    }
}

