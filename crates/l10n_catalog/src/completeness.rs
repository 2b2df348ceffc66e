use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::flatten::flatten_keys;

/// Key differences between a base locale and one translation of it.
///
/// Plural category fields are never compared; locales legitimately carry
/// different sets of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletenessReport {
    pub base_key_count: usize,
    pub compare_key_count: usize,
    pub common_key_count: usize,
    /// In the base, not in the translation.
    pub missing: BTreeSet<String>,
    /// In the translation, not in the base.
    pub extraneous: BTreeSet<String>,
}

impl CompletenessReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.extraneous.is_empty()
    }
}

pub fn check_completeness(
    base: &Map<String, Value>,
    compare: &Map<String, Value>,
) -> CompletenessReport {
    let base_keys = flatten_keys(base, "");
    let compare_keys = flatten_keys(compare, "");

    CompletenessReport {
        base_key_count: base_keys.len(),
        compare_key_count: compare_keys.len(),
        common_key_count: base_keys.intersection(&compare_keys).count(),
        missing: base_keys.difference(&compare_keys).cloned().collect(),
        extraneous: compare_keys.difference(&base_keys).cloned().collect(),
    }
}
