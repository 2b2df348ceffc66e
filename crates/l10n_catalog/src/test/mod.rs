mod build_test;
mod cmd_args_test;
mod config_test;
mod flatten_test;
mod yaml_writer_test;

use std::{fs, path::Path};

use serde_json::{Map, Value};

/// Parse a JSON object literal used as locale content.
pub(crate) fn locale_map(json: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => map,
        other => panic!("fixture is not a JSON object: {:?}", other),
    }
}

pub(crate) fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
