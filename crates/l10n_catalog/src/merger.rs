use std::{collections::BTreeMap, path::PathBuf};

use itertools::Itertools;

use crate::{
    CatalogError, Result,
    loader::{LocaleFileFormat, LocaleSource, load_locale_file, locale_name_from_path},
    value::LocaleMap,
};

/// Every file of one locale merged into a single map.
#[derive(Debug, Clone)]
pub struct LocaleGroup {
    /// Locale token as written in the first loaded file name (prefix removed),
    /// or the configured token for the source locale.
    pub token: String,
    /// Files in the order they were merged, including ones that failed to load.
    pub files: Vec<PathBuf>,
    pub map: LocaleMap,
}

/// Locale groups keyed by lower-cased locale id.
#[derive(Debug, Clone)]
pub struct MergedLocales {
    source_id: String,
    groups: BTreeMap<String, LocaleGroup>,
}

impl MergedLocales {
    /// Build from already merged groups, checking the source locale the same
    /// way [`merge_locales`] does.
    pub fn new(groups: BTreeMap<String, LocaleGroup>, source_locale: &str) -> Result<Self> {
        let source_id = source_locale.to_lowercase();
        let groups: BTreeMap<String, LocaleGroup> = groups
            .into_iter()
            .map(|(id, group)| (id.to_lowercase(), group))
            .collect();

        match groups.get(&source_id) {
            None => {
                return Err(CatalogError::MissingSourceLocale(
                    source_locale.to_string(),
                ));
            }
            Some(group) if group.map.is_empty() => {
                return Err(CatalogError::EmptySourceLocale(source_locale.to_string()));
            }
            Some(_) => {}
        }

        Ok(Self { source_id, groups })
    }

    pub fn source(&self) -> &LocaleGroup {
        &self.groups[&self.source_id]
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleGroup> {
        self.groups.get(&locale.to_lowercase())
    }

    /// Source locale first, then the rest ordered case-insensitively.
    pub fn ordered(&self) -> Vec<&LocaleGroup> {
        let others = self
            .groups
            .iter()
            .filter(|(id, _)| **id != self.source_id)
            .map(|(_, group)| group)
            .sorted_by(|a, b| {
                a.token
                    .to_lowercase()
                    .cmp(&b.token.to_lowercase())
                    .then_with(|| a.token.cmp(&b.token))
            });
        std::iter::once(self.source()).chain(others).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group `sources` by locale and merge each group's files.
///
/// Files load by layer, then path; later files replace earlier ones key by key
/// at the top level only. A file that cannot be read or parsed is logged and
/// skipped. Unsupported extensions and a missing or empty source locale abort
/// the merge.
pub fn merge_locales(
    sources: &[LocaleSource],
    source_locale: &str,
    locale_prefix: &str,
) -> Result<MergedLocales> {
    let mut grouped: BTreeMap<String, Vec<&LocaleSource>> = BTreeMap::new();
    let mut tokens: BTreeMap<String, String> = BTreeMap::new();

    for source in sources.iter().sorted() {
        if LocaleFileFormat::from_path(&source.path).is_none() {
            return Err(CatalogError::UnsupportedExtension(source.path.clone()));
        }
        let Some(name) = locale_name_from_path(&source.path, locale_prefix) else {
            log::warn!("Skipping file without a locale name: {:?}", source.path);
            continue;
        };
        let id = name.to_lowercase();
        tokens.entry(id.clone()).or_insert(name);
        grouped.entry(id).or_default().push(source);
    }

    let source_id = source_locale.to_lowercase();
    if !grouped.contains_key(&source_id) {
        return Err(CatalogError::MissingSourceLocale(source_locale.to_string()));
    }
    // The source localization must be keyed exactly like `sourceLanguage`.
    tokens.insert(source_id, source_locale.to_string());

    let mut groups = BTreeMap::new();
    for (id, files) in grouped {
        let token = tokens.remove(&id).unwrap_or_else(|| id.clone());
        let group = merge_group(token, &files);
        groups.insert(id, group);
    }

    MergedLocales::new(groups, source_locale)
}

fn merge_group(token: String, files: &[&LocaleSource]) -> LocaleGroup {
    let mut map = LocaleMap::new();
    for source in files {
        match load_locale_file(&source.path) {
            Ok(file_map) => {
                log::info!(
                    "Loaded {} keys from {:?} for locale '{}'",
                    file_map.len(),
                    source.path.file_name().unwrap_or_default(),
                    token
                );
                map.extend(file_map);
            }
            Err(e) => {
                log::warn!("Failed to load {:?}: {}", source.path, e);
            }
        }
    }

    LocaleGroup {
        token,
        files: files.iter().map(|s| s.path.clone()).collect(),
        map,
    }
}
