use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::plural::PluralCategory;

pub const CATALOG_VERSION: &str = "1.0";

/// String keyed entries that serialize as an object in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for OrderedMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> OrderedMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: T) {
        self.entries.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reorder by key, case-insensitively; exact byte order breaks ties.
    pub fn sort_keys_case_insensitive(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
    }
}

impl<T: Serialize> Serialize for OrderedMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The whole output document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringCatalog {
    pub source_language: String,
    pub version: String,
    pub strings: OrderedMap<CatalogEntry>,
}

impl StringCatalog {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtractionState {
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitState {
    Translated,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub extraction_state: ExtractionState,
    pub localizations: OrderedMap<Localization>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringUnit {
    pub state: UnitState,
    pub value: String,
}

impl StringUnit {
    pub fn translated(value: impl Into<String>) -> Self {
        Self {
            state: UnitState::Translated,
            value: value.into(),
        }
    }
}

/// One locale's translation of a key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    pub string_unit: StringUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Variations>,
}

impl Localization {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            string_unit: StringUnit::translated(value),
            variations: None,
        }
    }

    pub fn plural(forms: OrderedMap<PluralVariation>) -> Self {
        Self {
            string_unit: StringUnit::translated(""),
            variations: Some(Variations { plural: forms }),
        }
    }

    /// Text of a plural category, if this is a plural unit carrying it.
    pub fn plural_form(&self, category: PluralCategory) -> Option<&str> {
        self.variations
            .as_ref()?
            .plural
            .get(category.as_str())
            .map(|v| v.string_unit.value.as_str())
    }

    pub fn is_plural(&self) -> bool {
        self.variations.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variations {
    pub plural: OrderedMap<PluralVariation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluralVariation {
    pub string_unit: StringUnit,
}
