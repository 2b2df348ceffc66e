use itertools::Itertools;
use serde_json::Value;

use crate::{
    merger::MergedLocales,
    placeholder::{PlaceholderMap, PlaceholderReindexer, TypeSpec},
    value::{LocaleValue, PluralBlock, normalize_value},
};

use super::model::{
    CATALOG_VERSION, CatalogEntry, ExtractionState, Localization, OrderedMap, PluralVariation,
    StringCatalog, StringUnit,
};

/// Builds the string catalog from merged locale maps.
#[derive(Debug, Clone, Default)]
pub struct CatalogAssembler {
    reindexer: PlaceholderReindexer,
}

impl CatalogAssembler {
    pub fn new(reindexer: PlaceholderReindexer) -> Self {
        Self { reindexer }
    }

    /// One entry per source-locale key that at least one locale translates.
    ///
    /// `source_language` is written to the document header as given.
    pub fn assemble(&self, merged: &MergedLocales, source_language: &str) -> StringCatalog {
        let locales = merged.ordered();
        let mut strings = OrderedMap::new();

        for key in merged.source().map.keys() {
            let mut localizations = OrderedMap::new();
            for group in &locales {
                let Some(value) = group.map.get(key) else {
                    continue;
                };
                localizations.push(group.token.clone(), self.build_unit(key, value));
            }

            if !localizations.is_empty() {
                strings.push(
                    key.clone(),
                    CatalogEntry {
                        extraction_state: ExtractionState::Manual,
                        localizations,
                    },
                );
            }
        }
        strings.sort_keys_case_insensitive();

        log::info!(
            "Assembled {} entries across {} locales",
            strings.len(),
            locales.len()
        );

        StringCatalog {
            source_language: source_language.to_string(),
            version: CATALOG_VERSION.to_string(),
            strings,
        }
    }

    /// Unit for one (key, locale) value, shaped by that value alone.
    pub fn build_unit(&self, key: &str, value: &Value) -> Localization {
        match LocaleValue::classify(value) {
            LocaleValue::Plural(block) => self.build_plural_unit(key, block),
            LocaleValue::Scalar(value) | LocaleValue::Nested(value) => {
                self.build_plain_unit(key, value)
            }
        }
    }

    fn build_plain_unit(&self, key: &str, value: &Value) -> Localization {
        let text = normalize_value(value);
        let mut mapping = PlaceholderMap::new();
        let replaced = self
            .reindexer
            .reindex(key, &text, &mut mapping, TypeSpec::String);
        Localization::plain(replaced)
    }

    fn build_plural_unit(&self, key: &str, block: PluralBlock<'_>) -> Localization {
        let mut mapping = PlaceholderMap::new();
        let mut forms = OrderedMap::new();
        for (category, value) in block.forms() {
            let text = normalize_value(value);
            let replaced = self
                .reindexer
                .reindex(key, &text, &mut mapping, TypeSpec::Integer);
            forms.push(
                category.as_str(),
                PluralVariation {
                    string_unit: StringUnit::translated(replaced),
                },
            );
        }

        if forms.is_empty() {
            return Localization::plain("");
        }

        // No `other` form: keep the forms as tagged text in a plain unit.
        if forms.get("other").is_none() {
            log::debug!("Plural block '{}' has no 'other' form", key);
            let flat = forms
                .iter()
                .map(|(category, form)| format!("[{}] {}", category, form.string_unit.value))
                .join(" ");
            return Localization::plain(flat);
        }

        Localization::plural(forms)
    }
}
